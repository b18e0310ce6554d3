use image::{Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

use crate::models::Region;

const BOX_COLOR: Rgb<u8> = Rgb([255, 60, 60]);
const BOX_THICKNESS: u32 = 2;

/// Draw every reported region onto a copy of the display image.
pub fn annotate(image: &RgbImage, regions: &[Region]) -> RgbImage {
    let mut out = image.clone();
    for region in regions {
        draw_region(&mut out, region);
    }
    out
}

fn draw_region(image: &mut RgbImage, region: &Region) {
    let bbox = &region.bbox;
    // Thicken the border by drawing nested rectangles inward.
    for inset in 0..BOX_THICKNESS {
        let width = bbox.width.saturating_sub(inset * 2);
        let height = bbox.height.saturating_sub(inset * 2);
        if width == 0 || height == 0 {
            break;
        }
        let rect = Rect::at((bbox.x + inset) as i32, (bbox.y + inset) as i32)
            .of_size(width, height);
        draw_hollow_rect_mut(image, rect, BOX_COLOR);
    }
}
