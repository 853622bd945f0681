pub mod annotate;
pub mod codec;
pub mod mask;
pub mod regions;
pub mod segmentation;

use crate::config::{APPLE_BANDS, CIRCULARITY_THRESHOLD, DEFAULT_MIN_AREA};
use crate::error::DetectError;
use crate::models::Detection;

/// Main detection pipeline orchestrator
pub struct ApplePipeline {
    /// Minimum contour area for a candidate region.
    pub min_area: f64,
    /// Roundness cutoff for accepting a region.
    pub circularity_threshold: f64,
    pub verbose: bool,
}

impl ApplePipeline {
    pub fn new() -> Self {
        Self {
            min_area: DEFAULT_MIN_AREA,
            circularity_threshold: CIRCULARITY_THRESHOLD,
            verbose: false,
        }
    }

    pub fn with_min_area(mut self, min_area: f64) -> Self {
        self.min_area = min_area;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Run the full detection pipeline on encoded image bytes.
    ///
    /// Decodes, segments apple-colored pixels, cleans the mask, filters
    /// regions by size and roundness, optionally draws padded boxes, and
    /// re-encodes as JPEG. Pure per call: no state survives an invocation.
    pub fn detect(&self, image_bytes: &[u8], draw_boxes: bool) -> Result<Detection, DetectError> {
        if !self.min_area.is_finite() || self.min_area < 0.0 {
            return Err(DetectError::InvalidParameter(format!(
                "min_area must be a non-negative number, got {}",
                self.min_area
            )));
        }

        let img = codec::decode_image(image_bytes)?;
        if self.verbose {
            println!("Image decoded: {}x{}", img.width(), img.height());
            println!("Segmenting apple colors...");
        }

        let raw_mask = segmentation::color_mask(&img, &APPLE_BANDS);

        if self.verbose {
            println!("Cleaning mask...");
        }
        let cleaned = mask::clean_mask(&raw_mask);

        let candidates = regions::extract_regions(&cleaned);
        if self.verbose {
            println!("Found {} candidate regions", candidates.len());
            for (i, r) in candidates.iter().take(10).enumerate() {
                println!(
                    "  Region {}: area={:.0}, circ={:.3}, bbox=({}, {}, {}x{})",
                    i + 1,
                    r.area,
                    r.circularity(),
                    r.bbox.x,
                    r.bbox.y,
                    r.bbox.width,
                    r.bbox.height
                );
            }
        }

        let accepted =
            regions::filter_regions(candidates, self.min_area, self.circularity_threshold);
        if self.verbose {
            println!("Accepted {} apple-like regions", accepted.len());
        }

        let mut output = img;
        if draw_boxes {
            annotate::draw_region_boxes(&mut output, &accepted);
        }

        let encoded = codec::encode_jpeg(&output)?;
        Ok(Detection {
            image: encoded,
            count: accepted.len(),
            regions: accepted,
        })
    }
}

impl Default for ApplePipeline {
    fn default() -> Self {
        Self::new()
    }
}
