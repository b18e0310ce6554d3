mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from tumorscan for tests
pub use tumorscan::{BoundingBox, DetectionResult, Region, Session, Stage, UploadedImage};
