pub mod annotate;
pub mod ingest;
pub mod loader;
pub mod tensor;

use std::path::Path;

use image::RgbImage;
use rten::Model;
use rten_tensor::{AsView, NdTensor};
use tracing::{debug, info};

use crate::error::Error;
use crate::models::DetectionResult;

/// Class labels reported by the tumor model.
pub const TUMOR_LABELS: [&str; 1] = ["Brain Tumor"];

/// Orchestrates one detection call: preprocess the decoded image, run the
/// model, parse the reported regions and render the annotated image.
pub struct TumorDetector {
    model: Model,
    labels: Vec<String>,
}

impl TumorDetector {
    /// Load the model artifact and build a ready-to-use detector.
    pub fn load(model_path: &Path) -> Result<Self, Error> {
        let model = loader::load_model(model_path)?;
        Ok(Self {
            model,
            labels: TUMOR_LABELS.iter().map(|s| s.to_string()).collect(),
        })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Run the model against a decoded image.
    ///
    /// Every region the model reports is returned as-is; score filtering and
    /// suppression are the artifact's own responsibility, not this crate's.
    pub fn detect(&self, image: &RgbImage) -> Result<DetectionResult, Error> {
        let model_input = ingest::to_model_order(image);
        let (input, letterbox) = tensor::image_to_tensor(&model_input);
        debug!(
            width = image.width(),
            height = image.height(),
            "running inference"
        );

        let output = self
            .model
            .run_one(input.view().into(), None)
            .map_err(|e| Error::Inference(e.to_string()))?;
        let output: NdTensor<f32, 3> = output
            .try_into()
            .map_err(|_| Error::Inference("unexpected model output shape".to_string()))?;

        let regions = tensor::parse_detections(&output, &letterbox, &self.labels);
        info!(regions = regions.len(), "detection complete");

        let annotated = annotate::annotate(image, &regions);
        Ok(DetectionResult { regions, annotated })
    }
}
