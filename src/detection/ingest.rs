use image::{ImageFormat, RgbImage};

use crate::error::Error;

/// File extensions the upload surface accepts.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

pub fn is_supported_extension(extension: &str) -> bool {
    let ext = extension.to_ascii_lowercase();
    SUPPORTED_EXTENSIONS.contains(&ext.as_str())
}

/// Decode uploaded bytes into an RGB pixel array.
///
/// The declared extension is checked before any decoding happens, so files
/// outside the supported set never reach the decoder.
pub fn decode_image(bytes: &[u8], extension: &str) -> Result<RgbImage, Error> {
    let ext = extension.to_ascii_lowercase();
    if !is_supported_extension(&ext) {
        return Err(Error::Decode(format!("unsupported file type: .{ext}")));
    }

    let format = ImageFormat::from_extension(&ext)
        .ok_or_else(|| Error::Decode(format!("unsupported file type: .{ext}")))?;

    let img = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| Error::Decode(e.to_string()))?;

    Ok(img.to_rgb8())
}

/// Reorder channels from display order (RGB) to the model's input order
/// (BGR). Applied exactly once, before the tensor is built.
pub fn to_model_order(img: &RgbImage) -> RgbImage {
    let mut out = img.clone();
    for pixel in out.pixels_mut() {
        pixel.0.reverse();
    }
    out
}
