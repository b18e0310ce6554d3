use image::{ImageBuffer, Rgb, RgbImage};
use tempfile::NamedTempFile;
use tumorscan::{BoundingBox, DetectionResult, Region, UploadedImage};

/// Creates a solid mid-gray test image of the given size.
pub fn make_test_image(width: u32, height: u32) -> RgbImage {
    ImageBuffer::from_fn(width, height, |_, _| Rgb([90u8, 90u8, 90u8]))
}

/// Encodes a test image into in-memory bytes of the given format.
pub fn encode_test_image(width: u32, height: u32, format: image::ImageFormat) -> Vec<u8> {
    let img = make_test_image(width, height);
    let mut bytes = std::io::Cursor::new(Vec::new());
    img.write_to(&mut bytes, format)
        .expect("Failed to encode test image");
    bytes.into_inner()
}

/// Writes a test image to a temp file with the given suffix.
/// The file is cleaned up when dropped.
pub fn create_test_image_file(
    width: u32,
    height: u32,
    format: image::ImageFormat,
    suffix: &str,
) -> NamedTempFile {
    let img = make_test_image(width, height);
    let file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp image file");
    img.save_with_format(file.path(), format)
        .expect("Failed to save test image");
    file
}

/// An uploaded image as ingestion would produce it.
pub fn make_uploaded(name: &str, width: u32, height: u32) -> UploadedImage {
    UploadedImage {
        file_name: name.to_string(),
        image: make_test_image(width, height),
    }
}

/// A region with the given confidence and a fixed box.
pub fn make_region(confidence: f32) -> Region {
    Region {
        bbox: BoundingBox {
            x: 10,
            y: 12,
            width: 40,
            height: 30,
        },
        class_id: 0,
        label: "Brain Tumor".to_string(),
        confidence,
    }
}

/// A detection result carrying the given regions over a blank image.
pub fn make_result(regions: Vec<Region>) -> DetectionResult {
    DetectionResult {
        regions,
        annotated: make_test_image(64, 64),
    }
}
