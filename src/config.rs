//! Tuning constants for the detection pipeline.
//!
//! The color bands and the circularity cutoff are empirical values carried
//! over as fixed policy; they live here as named constants so they can be
//! adjusted without touching the algorithm.

use image::Rgb;

/// Inclusive HSV range test. Hue is on the 0-180 scale, saturation and
/// value on 0-255.
#[derive(Debug, Clone, Copy)]
pub struct HsvBand {
    pub h_min: u8,
    pub h_max: u8,
    pub s_min: u8,
    pub s_max: u8,
    pub v_min: u8,
    pub v_max: u8,
}

impl HsvBand {
    pub const fn new(h_min: u8, h_max: u8, s_min: u8, s_max: u8, v_min: u8, v_max: u8) -> Self {
        Self { h_min, h_max, s_min, s_max, v_min, v_max }
    }

    pub fn contains(&self, h: u8, s: u8, v: u8) -> bool {
        h >= self.h_min
            && h <= self.h_max
            && s >= self.s_min
            && s <= self.s_max
            && v >= self.v_min
            && v <= self.v_max
    }
}

/// Low red band. Hue is circular, so red needs two disjoint bands.
pub const RED_BAND_LOW: HsvBand = HsvBand::new(0, 10, 50, 255, 50, 255);

/// High red band, covering the hue wrap-around.
pub const RED_BAND_HIGH: HsvBand = HsvBand::new(160, 180, 50, 255, 50, 255);

/// Green band.
pub const GREEN_BAND: HsvBand = HsvBand::new(30, 90, 40, 255, 40, 255);

/// All bands a pixel may match to count as apple-colored.
pub const APPLE_BANDS: [HsvBand; 3] = [RED_BAND_LOW, RED_BAND_HIGH, GREEN_BAND];

/// Gaussian sigma for mask smoothing, equivalent to a 7x7 kernel.
pub const MASK_BLUR_SIGMA: f32 = 1.4;

/// Cutoff used to re-binarize the blurred mask.
pub const MASK_BINARIZE_THRESHOLD: u8 = 128;

/// L-inf radius of the morphological structuring element (5x5 square).
pub const MORPH_RADIUS: u8 = 2;

/// Minimum contour area for a candidate region, in pixels.
pub const DEFAULT_MIN_AREA: f64 = 500.0;

/// Regions rounder than this are accepted; 1.0 is a perfect circle.
pub const CIRCULARITY_THRESHOLD: f64 = 0.6;

/// Bounding-box padding as a fraction of the box's larger dimension.
pub const BOX_PADDING_FRACTION: f64 = 0.1;

/// Outline color for drawn boxes.
pub const BOX_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

/// Outline stroke width in pixels.
pub const BOX_THICKNESS: u32 = 2;

/// Quality used when re-encoding the output JPEG.
pub const JPEG_QUALITY: u8 = 95;
