use image::RgbImage;
use image::imageops::FilterType;
use rten_tensor::{Layout, NdTensor};

use crate::models::{BoundingBox, Region};

/// Side length of the square model input.
pub const MODEL_INPUT_SIZE: u32 = 640;

/// How a source image was scaled and padded to fit the model input.
#[derive(Debug, Clone, Copy)]
pub struct Letterbox {
    pub scale: f32,
    pub pad_x: u32,
    pub pad_y: u32,
    pub source_width: u32,
    pub source_height: u32,
}

/// Resize with preserved aspect ratio onto a square canvas and normalize
/// into an NCHW float tensor.
pub fn image_to_tensor(img: &RgbImage) -> (NdTensor<f32, 4>, Letterbox) {
    let (width, height) = img.dimensions();
    let size = MODEL_INPUT_SIZE as f32;
    let scale = (size / width as f32).min(size / height as f32);
    let scaled_w = ((width as f32 * scale) as u32).clamp(1, MODEL_INPUT_SIZE);
    let scaled_h = ((height as f32 * scale) as u32).clamp(1, MODEL_INPUT_SIZE);
    let pad_x = (MODEL_INPUT_SIZE - scaled_w) / 2;
    let pad_y = (MODEL_INPUT_SIZE - scaled_h) / 2;

    let resized = image::imageops::resize(img, scaled_w, scaled_h, FilterType::Triangle);

    let side = MODEL_INPUT_SIZE as usize;
    let mut tensor = NdTensor::<f32, 4>::zeros([1, 3, side, side]);
    for (x, y, pixel) in resized.enumerate_pixels() {
        let tx = (x + pad_x) as usize;
        let ty = (y + pad_y) as usize;
        for c in 0..3 {
            tensor[[0, c, ty, tx]] = pixel.0[c] as f32 / 255.0;
        }
    }

    let letterbox = Letterbox {
        scale,
        pad_x,
        pad_y,
        source_width: width,
        source_height: height,
    };

    (tensor, letterbox)
}

/// Parse the model's output rows into regions in source-image coordinates.
///
/// Output layout is `[1, N, 6]`: four corner coordinates in input-canvas
/// pixels, a confidence score, and a class index per row. The artifact does
/// its own score filtering and suppression; every populated row is reported
/// as-is. Rows whose score slot is zero are unused slots of the fixed-size
/// output and carry no detection.
pub fn parse_detections(
    output: &NdTensor<f32, 3>,
    letterbox: &Letterbox,
    labels: &[String],
) -> Vec<Region> {
    let [_, rows, cols] = output.shape();
    let mut regions = Vec::new();
    if cols < 6 {
        return regions;
    }

    for row in 0..rows {
        let score = output[[0, row, 4]];
        if score <= 0.0 {
            continue;
        }

        let corners = [
            output[[0, row, 0]],
            output[[0, row, 1]],
            output[[0, row, 2]],
            output[[0, row, 3]],
        ];
        let Some(bbox) = to_source_bbox(corners, letterbox) else {
            continue;
        };

        let class_id = output[[0, row, 5]].max(0.0) as usize;
        let label = labels
            .get(class_id)
            .cloned()
            .unwrap_or_else(|| format!("class {class_id}"));

        regions.push(Region {
            bbox,
            class_id,
            label,
            confidence: score.clamp(0.0, 1.0),
        });
    }

    regions
}

/// Map corner coordinates from the letterboxed input canvas back onto the
/// source image, clamping to its bounds.
fn to_source_bbox(corners: [f32; 4], lb: &Letterbox) -> Option<BoundingBox> {
    let unpad_x = |v: f32| (v - lb.pad_x as f32) / lb.scale;
    let unpad_y = |v: f32| (v - lb.pad_y as f32) / lb.scale;

    let x1 = unpad_x(corners[0]).clamp(0.0, lb.source_width as f32);
    let y1 = unpad_y(corners[1]).clamp(0.0, lb.source_height as f32);
    let x2 = unpad_x(corners[2]).clamp(0.0, lb.source_width as f32);
    let y2 = unpad_y(corners[3]).clamp(0.0, lb.source_height as f32);

    if x2 <= x1 || y2 <= y1 {
        return None;
    }

    Some(BoundingBox {
        x: x1 as u32,
        y: y1 as u32,
        width: (x2 - x1) as u32,
        height: (y2 - y1) as u32,
    })
}
