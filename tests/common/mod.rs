// Shared by several test binaries; not every binary uses every fixture.
#![allow(dead_code)]

use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

/// Reddish apple color: hue 0, well inside the low red band.
pub const APPLE_RED: Rgb<u8> = Rgb([220, 40, 40]);

/// Greenish apple color: hue ~62 on the 0-180 scale.
pub const APPLE_GREEN: Rgb<u8> = Rgb([60, 190, 70]);

/// Background too dark to match any color band.
pub const BACKGROUND: Rgb<u8> = Rgb([30, 30, 30]);

/// Image with a single solid filled disc on a dark background.
pub fn disc_image(
    width: u32,
    height: u32,
    cx: i64,
    cy: i64,
    radius: i64,
    color: Rgb<u8>,
) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let (dx, dy) = (i64::from(x) - cx, i64::from(y) - cy);
        if dx * dx + dy * dy <= radius * radius {
            color
        } else {
            BACKGROUND
        }
    })
}

/// Image with a single solid axis-aligned bar on a dark background.
pub fn bar_image(
    width: u32,
    height: u32,
    x0: u32,
    y0: u32,
    bar_w: u32,
    bar_h: u32,
    color: Rgb<u8>,
) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        if x >= x0 && x < x0 + bar_w && y >= y0 && y < y0 + bar_h {
            color
        } else {
            BACKGROUND
        }
    })
}

/// Encode a fixture losslessly so color thresholds see exact values.
pub fn png_bytes(img: &RgbImage) -> Vec<u8> {
    let mut cursor = Cursor::new(Vec::new());
    img.write_to(&mut cursor, ImageFormat::Png)
        .expect("failed to encode fixture");
    cursor.into_inner()
}
