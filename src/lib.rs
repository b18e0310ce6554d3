pub mod context;
pub mod detection;
pub mod error;
pub mod models;
pub mod session;

pub use context::AppContext;
pub use detection::TumorDetector;
pub use error::Error;
pub use models::{BoundingBox, DetectionResult, Region, UploadedImage};
pub use session::{Session, Stage};

#[cfg(feature = "gui")]
pub mod gui;
