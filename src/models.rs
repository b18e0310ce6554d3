use image::RgbImage;
use serde::Serialize;

/// Bounding box in original-image pixel coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

/// A single region reported by the model.
#[derive(Debug, Clone, Serialize)]
pub struct Region {
    pub bbox: BoundingBox,
    pub class_id: usize,
    pub label: String,
    pub confidence: f32,
}

impl Region {
    /// Confidence formatted for display, e.g. "87.00%".
    pub fn confidence_percent(&self) -> String {
        format!("{:.2}%", self.confidence * 100.0)
    }
}

/// A decoded user upload. Created per upload, replaced by the next one.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub image: RgbImage,
}

impl UploadedImage {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Outcome of one detection call: every region the model reported plus the
/// annotated copy of the display image.
#[derive(Debug, Clone)]
pub struct DetectionResult {
    pub regions: Vec<Region>,
    pub annotated: RgbImage,
}
