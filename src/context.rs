use std::fmt;
use std::path::Path;
use std::sync::Arc;

use tracing::warn;

use crate::detection::TumorDetector;

/// Application context constructed once at startup.
///
/// Holds the detector handle when the model loaded and the user-facing error
/// when it did not. The handle is read-only after construction and safe to
/// share; detection is only reachable through here, so an absent handle makes
/// detection unreachable by construction.
#[derive(Clone)]
pub struct AppContext {
    detector: Option<Arc<TumorDetector>>,
    model_error: Option<String>,
}

impl AppContext {
    /// Perform the one-time model load.
    pub fn initialize(model_path: &Path) -> Self {
        match TumorDetector::load(model_path) {
            Ok(detector) => Self {
                detector: Some(Arc::new(detector)),
                model_error: None,
            },
            Err(e) => {
                warn!("model load failed: {e}");
                Self {
                    detector: None,
                    model_error: Some(e.to_string()),
                }
            }
        }
    }

    /// Context for a load that could not even be attempted.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            detector: None,
            model_error: Some(message.into()),
        }
    }

    pub fn detector(&self) -> Option<Arc<TumorDetector>> {
        self.detector.clone()
    }

    pub fn model_error(&self) -> Option<&str> {
        self.model_error.as_deref()
    }

    pub fn can_detect(&self) -> bool {
        self.detector.is_some()
    }
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field("loaded", &self.detector.is_some())
            .field("model_error", &self.model_error)
            .finish()
    }
}
