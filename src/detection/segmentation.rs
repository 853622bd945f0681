use image::{GrayImage, Luma, RgbImage};

use crate::config::HsvBand;

/// Convert an 8-bit RGB pixel to HSV with hue on the 0-180 scale and
/// saturation/value on 0-255 (the scale the band constants are defined on).
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
    let (rf, gf, bf) = (f32::from(r), f32::from(g), f32::from(b));
    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    let v = max;
    let s = if max > 0.0 { 255.0 * delta / max } else { 0.0 };

    let h_deg = if delta == 0.0 {
        0.0
    } else if max == rf {
        60.0 * (gf - bf) / delta
    } else if max == gf {
        60.0 * (bf - rf) / delta + 120.0
    } else {
        60.0 * (rf - gf) / delta + 240.0
    };
    let h_deg = if h_deg < 0.0 { h_deg + 360.0 } else { h_deg };

    (
        (h_deg / 2.0).round().min(180.0) as u8,
        s.round() as u8,
        v.round() as u8,
    )
}

/// Mark every pixel that falls in any of the given HSV bands.
///
/// Returns a binary mask with the image's dimensions: 255 for candidate
/// object pixels, 0 for background.
pub fn color_mask(img: &RgbImage, bands: &[HsvBand]) -> GrayImage {
    let mut mask = GrayImage::new(img.width(), img.height());
    for (x, y, pixel) in img.enumerate_pixels() {
        let (h, s, v) = rgb_to_hsv(pixel[0], pixel[1], pixel[2]);
        if bands.iter().any(|band| band.contains(h, s, v)) {
            mask.put_pixel(x, y, Luma([255]));
        }
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{APPLE_BANDS, GREEN_BAND, RED_BAND_LOW};
    use image::Rgb;

    #[test]
    fn pure_red_is_hue_zero() {
        let (h, s, v) = rgb_to_hsv(255, 0, 0);
        assert_eq!((h, s, v), (0, 255, 255));
        assert!(RED_BAND_LOW.contains(h, s, v));
    }

    #[test]
    fn pure_green_is_hue_sixty() {
        let (h, s, v) = rgb_to_hsv(0, 255, 0);
        assert_eq!((h, s, v), (60, 255, 255));
        assert!(GREEN_BAND.contains(h, s, v));
    }

    #[test]
    fn dark_red_wraps_into_high_band() {
        // slightly blue-shifted red lands just below the wrap-around
        let (h, s, v) = rgb_to_hsv(220, 30, 40);
        assert!(h >= 160, "hue {h} should be in the high red band");
        assert!(s >= 50 && v >= 50);
    }

    #[test]
    fn gray_has_no_saturation() {
        let (h, s, _) = rgb_to_hsv(128, 128, 128);
        assert_eq!((h, s), (0, 0));
    }

    #[test]
    fn mask_marks_only_band_pixels() {
        let mut img = RgbImage::from_pixel(4, 1, Rgb([0, 0, 255]));
        img.put_pixel(2, 0, Rgb([255, 0, 0]));
        let mask = color_mask(&img, &APPLE_BANDS);
        assert_eq!(mask.get_pixel(2, 0)[0], 255);
        assert_eq!(mask.get_pixel(0, 0)[0], 0);
        assert_eq!(mask.get_pixel(3, 0)[0], 0);
    }
}
