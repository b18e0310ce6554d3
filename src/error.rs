use thiserror::Error as ThisError;

/// Faults raised at component boundaries.
///
/// Each variant is produced by the one component able to act on it and is
/// rendered as an inline message; none of them may terminate the session.
#[derive(Debug, ThisError)]
pub enum Error {
    /// The model artifact is missing, unreadable, or not a model.
    #[error("Error loading model: {0}")]
    Load(String),

    /// Uploaded bytes could not be interpreted as a supported image.
    #[error("Error processing image: {0}")]
    Decode(String),

    /// The model call failed during detection.
    #[error("Detection error: {0}")]
    Inference(String),
}
