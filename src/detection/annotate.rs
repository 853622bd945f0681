use image::RgbImage;
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

use crate::config::{BOX_COLOR, BOX_THICKNESS};
use crate::models::Region;

/// Draw a padded outline around each region on the working copy.
///
/// Boxes whose padded extent runs past the image edge are clipped by the
/// canvas while drawing.
pub fn draw_region_boxes(img: &mut RgbImage, regions: &[Region]) {
    for region in regions {
        let pb = region.padded_box();
        let width = (pb.x1 - pb.x0) as u32;
        let height = (pb.y1 - pb.y0) as u32;

        // stroke thickness via nested one-pixel outlines
        for t in 0..BOX_THICKNESS {
            let w = width.saturating_sub(2 * t);
            let h = height.saturating_sub(2 * t);
            if w == 0 || h == 0 {
                break;
            }
            let rect = Rect::at(pb.x0 as i32 + t as i32, pb.y0 as i32 + t as i32).of_size(w, h);
            draw_hollow_rect_mut(img, rect, BOX_COLOR);
        }
    }
}
