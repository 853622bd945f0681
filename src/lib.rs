pub mod cache;
pub mod config;
pub mod detection;
pub mod error;
pub mod models;

pub use cache::DetectionCache;
pub use detection::ApplePipeline;
pub use error::DetectError;
pub use models::{BoundingBox, Detection, PaddedBox, Region};

/// Detect red and green apples in an encoded image.
///
/// Convenience wrapper around [`ApplePipeline`] with default thresholds.
/// Returns the annotated JPEG bytes, the accepted regions and their count.
pub fn detect_apples(
    image_bytes: &[u8],
    draw_boxes: bool,
    min_area: f64,
) -> Result<Detection, DetectError> {
    ApplePipeline::new()
        .with_min_area(min_area)
        .detect(image_bytes, draw_boxes)
}
