use image::GrayImage;
use imageproc::contours::{find_contours, BorderType};
use imageproc::point::Point;

use crate::models::{BoundingBox, Region};

/// Extract candidate regions from a cleaned binary mask.
///
/// Only external boundaries are traced; holes and nested contours are not
/// tracked. Regions come back in contour discovery order.
pub fn extract_regions(mask: &GrayImage) -> Vec<Region> {
    // find_contours classifies blobs touching the image border as holes,
    // so trace on a copy with a one-pixel background margin and shift the
    // coordinates back.
    let padded = pad_with_background(mask);
    find_contours::<i32>(&padded)
        .into_iter()
        .filter(|c| c.border_type == BorderType::Outer)
        .filter_map(|c| {
            let points: Vec<Point<i32>> =
                c.points.iter().map(|p| Point::new(p.x - 1, p.y - 1)).collect();
            measure(&points)
        })
        .collect()
}

fn pad_with_background(mask: &GrayImage) -> GrayImage {
    let mut padded = GrayImage::new(mask.width() + 2, mask.height() + 2);
    for (x, y, pixel) in mask.enumerate_pixels() {
        padded.put_pixel(x + 1, y + 1, *pixel);
    }
    padded
}

/// Keep regions that are large enough and round enough.
pub fn filter_regions(regions: Vec<Region>, min_area: f64, circularity: f64) -> Vec<Region> {
    regions
        .into_iter()
        .filter(|r| r.area >= min_area && r.circularity() >= circularity)
        .collect()
}

/// Measure area, perimeter and bounding box of a traced boundary.
fn measure(points: &[Point<i32>]) -> Option<Region> {
    let first = points.first()?;
    let (mut min_x, mut min_y) = (first.x, first.y);
    let (mut max_x, mut max_y) = (first.x, first.y);

    // Shoelace area and closed polygon length over the boundary loop.
    let mut doubled_area = 0i64;
    let mut perimeter = 0.0f64;
    for (i, p) in points.iter().enumerate() {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);

        let q = points[(i + 1) % points.len()];
        doubled_area += i64::from(p.x) * i64::from(q.y) - i64::from(q.x) * i64::from(p.y);
        let (dx, dy) = (f64::from(q.x - p.x), f64::from(q.y - p.y));
        perimeter += (dx * dx + dy * dy).sqrt();
    }

    Some(Region {
        area: doubled_area.unsigned_abs() as f64 / 2.0,
        perimeter,
        bbox: BoundingBox {
            x: min_x as u32,
            y: min_y as u32,
            width: (max_x - min_x + 1) as u32,
            height: (max_y - min_y + 1) as u32,
        },
    })
}
