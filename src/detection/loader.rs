use std::path::Path;

use rten::Model;
use tracing::{debug, info};

use crate::error::Error;

/// Load the detection model artifact from disk.
///
/// The artifact is opaque to the rest of the application: callers only ever
/// see a usable handle or a descriptive error. Loading happens once per
/// application lifetime; it is never repeated per detection request.
pub fn load_model(path: &Path) -> Result<Model, Error> {
    if !path.exists() {
        return Err(Error::Load(format!(
            "model file not found, expected location: {}",
            path.display()
        )));
    }

    info!("loading model from {}", path.display());
    let model = Model::load_file(path).map_err(|e| Error::Load(e.to_string()))?;
    debug!("model loaded");

    Ok(model)
}
