use crate::context::AppContext;
use crate::models::DetectionResult;

/// Raw bytes handed back by the file dialog, together with the declared
/// file name and extension.
#[derive(Debug, Clone)]
pub struct PickedFile {
    pub file_name: String,
    pub extension: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub enum Message {
    ModelLoaded(AppContext),
    PickImage,
    ImagePicked(Option<PickedFile>),
    DetectRequested,
    DetectionFinished(Result<DetectionResult, String>),
}
