use image::{GrayImage, Luma};
use imageproc::distance_transform::Norm;
use imageproc::filter::gaussian_blur_f32;
use imageproc::morphology::{close, open};

use crate::config::{MASK_BINARIZE_THRESHOLD, MASK_BLUR_SIGMA, MORPH_RADIUS};

/// Suppress speckle noise and fill small gaps in a binary mask.
///
/// Blur softens single-pixel noise, the threshold restores a binary mask,
/// then a close fills small holes inside blobs and an open removes isolated
/// speckles. Close runs before open; filling precedes speckle removal.
pub fn clean_mask(mask: &GrayImage) -> GrayImage {
    let blurred = gaussian_blur_f32(mask, MASK_BLUR_SIGMA);
    let binary = binarize(&blurred, MASK_BINARIZE_THRESHOLD);
    let closed = close(&binary, Norm::LInf, MORPH_RADIUS);
    open(&closed, Norm::LInf, MORPH_RADIUS)
}

fn binarize(img: &GrayImage, cutoff: u8) -> GrayImage {
    GrayImage::from_fn(img.width(), img.height(), |x, y| {
        if img.get_pixel(x, y)[0] >= cutoff {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}
