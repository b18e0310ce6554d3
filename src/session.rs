use crate::models::{DetectionResult, UploadedImage};

/// Discrete stages of one user session.
#[derive(Debug, Clone, Default)]
pub enum Stage {
    #[default]
    Idle,
    ImageUploaded {
        image: UploadedImage,
    },
    Detecting {
        image: UploadedImage,
    },
    ResultsDisplayed {
        image: UploadedImage,
        result: DetectionResult,
    },
}

/// Session-scoped store driving the upload/detect/display cycle.
///
/// Errors never destroy the stage: they are notes attached to the session
/// that the next successful interaction clears, so the session stays open
/// for further uploads and detection attempts.
#[derive(Debug, Clone, Default)]
pub struct Session {
    stage: Stage,
    error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Accept a new upload, discarding any prior result and error note.
    ///
    /// Returns false while a detection is in flight; the upload surface is
    /// disabled during that window, so a rejection here only guards against
    /// a stray event.
    pub fn upload(&mut self, image: UploadedImage) -> bool {
        if self.is_detecting() {
            return false;
        }
        self.error = None;
        self.stage = Stage::ImageUploaded { image };
        true
    }

    /// Move to `Detecting`, handing back the image for the worker.
    ///
    /// Only an uploaded image (or a displayed result, for a re-run) can
    /// start a detection; any other stage yields `None`.
    pub fn begin_detection(&mut self) -> Option<UploadedImage> {
        match std::mem::take(&mut self.stage) {
            Stage::ImageUploaded { image } | Stage::ResultsDisplayed { image, .. } => {
                self.error = None;
                self.stage = Stage::Detecting {
                    image: image.clone(),
                };
                Some(image)
            }
            other => {
                self.stage = other;
                None
            }
        }
    }

    /// Record a finished detection. Ignored unless a detection was running.
    pub fn complete_detection(&mut self, result: DetectionResult) {
        self.stage = match std::mem::take(&mut self.stage) {
            Stage::Detecting { image } => Stage::ResultsDisplayed { image, result },
            other => other,
        };
    }

    /// Attach an error note. A failed detection keeps its image so the user
    /// can retry or re-upload.
    pub fn report_error(&mut self, message: impl Into<String>) {
        self.stage = match std::mem::take(&mut self.stage) {
            Stage::Detecting { image } => Stage::ImageUploaded { image },
            other => other,
        };
        self.error = Some(message.into());
    }

    pub fn uploaded_image(&self) -> Option<&UploadedImage> {
        match &self.stage {
            Stage::Idle => None,
            Stage::ImageUploaded { image }
            | Stage::Detecting { image }
            | Stage::ResultsDisplayed { image, .. } => Some(image),
        }
    }

    pub fn result(&self) -> Option<&DetectionResult> {
        match &self.stage {
            Stage::ResultsDisplayed { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn is_detecting(&self) -> bool {
        matches!(self.stage, Stage::Detecting { .. })
    }

    /// Whether the detect control should be offered.
    pub fn can_request_detection(&self) -> bool {
        matches!(
            self.stage,
            Stage::ImageUploaded { .. } | Stage::ResultsDisplayed { .. }
        )
    }
}
