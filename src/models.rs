use serde::Serialize;

use crate::config::BOX_PADDING_FRACTION;

/// Axis-aligned bounding box of a region, in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Draw rectangle for a region after padding.
///
/// The low corner is clamped to the image origin; the high corner is left
/// unclamped and may exceed the image bounds. Drawing clips at the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaddedBox {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

/// One connected candidate region extracted from the mask.
#[derive(Debug, Clone, Serialize)]
pub struct Region {
    /// Contour area (shoelace formula over the outer boundary).
    pub area: f64,
    /// Closed length of the traced outer boundary.
    pub perimeter: f64,
    pub bbox: BoundingBox,
}

impl Region {
    /// Roundness score `4*pi*area / perimeter^2`; 1.0 is a perfect circle,
    /// 0 for degenerate shapes with no measurable perimeter.
    pub fn circularity(&self) -> f64 {
        if self.perimeter <= 0.0 {
            return 0.0;
        }
        4.0 * std::f64::consts::PI * self.area / (self.perimeter * self.perimeter)
    }

    /// Padding margin: 10% of the larger bounding-box dimension, rounded.
    pub fn padding(&self) -> i64 {
        (BOX_PADDING_FRACTION * f64::from(self.bbox.width.max(self.bbox.height))).round() as i64
    }

    /// Bounding box grown by [`Self::padding`], clamped at the origin only.
    pub fn padded_box(&self) -> PaddedBox {
        let pad = self.padding();
        let x = i64::from(self.bbox.x);
        let y = i64::from(self.bbox.y);
        PaddedBox {
            x0: (x - pad).max(0),
            y0: (y - pad).max(0),
            x1: x + i64::from(self.bbox.width) + pad,
            y1: y + i64::from(self.bbox.height) + pad,
        }
    }
}

/// Result of one pipeline invocation.
#[derive(Debug, Clone)]
pub struct Detection {
    /// Re-encoded JPEG, annotated when boxes were requested.
    pub image: Vec<u8>,
    /// Accepted regions in contour discovery order.
    pub regions: Vec<Region>,
    /// Number of accepted regions; always `regions.len()`.
    pub count: usize,
}
