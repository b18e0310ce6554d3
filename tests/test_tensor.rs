//! Integration tests for tensor preprocessing and output parsing.

mod common;

use common::*;
use rten_tensor::{Layout, NdTensor};
use tumorscan::detection::tensor::{self, Letterbox, MODEL_INPUT_SIZE};

fn identity_letterbox() -> Letterbox {
    Letterbox {
        scale: 1.0,
        pad_x: 0,
        pad_y: 0,
        source_width: MODEL_INPUT_SIZE,
        source_height: MODEL_INPUT_SIZE,
    }
}

/// Output rows are `[x1, y1, x2, y2, score, class]`.
fn output_tensor(rows: Vec<[f32; 6]>) -> NdTensor<f32, 3> {
    let n = rows.len();
    let data: Vec<f32> = rows.into_iter().flatten().collect();
    NdTensor::from_data([1, n, 6], data)
}

#[test]
fn square_image_fills_the_canvas_without_padding() {
    let img = make_test_image(320, 320);
    let (tensor, letterbox) = tensor::image_to_tensor(&img);

    let side = MODEL_INPUT_SIZE as usize;
    assert_eq!(tensor.shape(), [1, 3, side, side]);
    assert_eq!(letterbox.scale, 2.0);
    assert_eq!((letterbox.pad_x, letterbox.pad_y), (0, 0));

    // Solid gray input normalizes to 90/255 on every channel.
    let expected = 90.0 / 255.0;
    for c in 0..3 {
        assert!((tensor[[0, c, 0, 0]] - expected).abs() < 1e-4);
        assert!((tensor[[0, c, side - 1, side - 1]] - expected).abs() < 1e-4);
    }
}

#[test]
fn wide_image_is_letterboxed_vertically() {
    let img = make_test_image(640, 320);
    let (tensor, letterbox) = tensor::image_to_tensor(&img);

    assert_eq!(letterbox.scale, 1.0);
    assert_eq!(letterbox.pad_x, 0);
    assert_eq!(letterbox.pad_y, 160);

    // Rows above the padded band stay zero; the band itself carries pixels.
    assert_eq!(tensor[[0, 0, 0, 0]], 0.0);
    assert!(tensor[[0, 0, 320, 320]] > 0.0);
}

#[test]
fn parse_maps_rows_to_source_coordinates() {
    let output = output_tensor(vec![
        [100.0, 120.0, 300.0, 280.0, 0.87, 0.0],
        [0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    ]);
    let labels = vec!["Brain Tumor".to_string()];

    let regions = tensor::parse_detections(&output, &identity_letterbox(), &labels);
    assert_eq!(regions.len(), 1, "the zero row is an unused slot");

    let region = &regions[0];
    assert_eq!(region.label, "Brain Tumor");
    assert_eq!(region.class_id, 0);
    assert_eq!(region.confidence, 0.87);
    assert_eq!(region.confidence_percent(), "87.00%");
    assert_eq!((region.bbox.x, region.bbox.y), (100, 120));
    assert_eq!((region.bbox.width, region.bbox.height), (200, 160));
}

#[test]
fn parse_undoes_the_letterbox_transform() {
    // A 1280x640 source scales by 0.5 and pads 160 rows top and bottom.
    let letterbox = Letterbox {
        scale: 0.5,
        pad_x: 0,
        pad_y: 160,
        source_width: 1280,
        source_height: 640,
    };
    let output = output_tensor(vec![[100.0, 260.0, 300.0, 360.0, 0.5, 0.0]]);
    let labels = vec!["Brain Tumor".to_string()];

    let regions = tensor::parse_detections(&output, &letterbox, &labels);
    assert_eq!(regions.len(), 1);

    let bbox = &regions[0].bbox;
    assert_eq!((bbox.x, bbox.y), (200, 200));
    assert_eq!((bbox.width, bbox.height), (400, 200));
    assert_eq!((bbox.right(), bbox.bottom()), (600, 400));
}

#[test]
fn confidences_are_always_within_unit_range() {
    let output = output_tensor(vec![
        [10.0, 10.0, 50.0, 50.0, 1.5, 0.0],
        [60.0, 60.0, 90.0, 90.0, 0.002, 0.0],
    ]);
    let labels = vec!["Brain Tumor".to_string()];

    let regions = tensor::parse_detections(&output, &identity_letterbox(), &labels);
    assert_eq!(regions.len(), 2, "low scores are reported as-is");
    for region in &regions {
        assert!(
            (0.0..=1.0).contains(&region.confidence),
            "confidence {} out of range",
            region.confidence
        );
    }
}

#[test]
fn degenerate_and_out_of_range_boxes_are_dropped() {
    let output = output_tensor(vec![
        // Inverted corners.
        [300.0, 300.0, 100.0, 100.0, 0.9, 0.0],
        // Entirely outside the source image after clamping.
        [900.0, 900.0, 1000.0, 1000.0, 0.9, 0.0],
    ]);
    let labels = vec!["Brain Tumor".to_string()];

    let regions = tensor::parse_detections(&output, &identity_letterbox(), &labels);
    assert!(regions.is_empty());
}

#[test]
fn unknown_class_index_gets_a_fallback_label() {
    let output = output_tensor(vec![[10.0, 10.0, 50.0, 50.0, 0.7, 3.0]]);
    let labels = vec!["Brain Tumor".to_string()];

    let regions = tensor::parse_detections(&output, &identity_letterbox(), &labels);
    assert_eq!(regions[0].label, "class 3");
    assert_eq!(regions[0].class_id, 3);
}
