use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;

use crate::config::JPEG_QUALITY;
use crate::error::DetectError;

/// Decode an encoded image (JPEG, PNG, ...) into an RGB pixel buffer.
pub fn decode_image(bytes: &[u8]) -> Result<RgbImage, DetectError> {
    let img = image::load_from_memory(bytes).map_err(DetectError::InvalidImageFormat)?;
    Ok(img.to_rgb8())
}

/// Serialize an RGB image as JPEG bytes.
pub fn encode_jpeg(img: &RgbImage) -> Result<Vec<u8>, DetectError> {
    let mut buf = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY);
    encoder.encode_image(img).map_err(DetectError::Encode)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn rejects_empty_buffer() {
        assert!(matches!(
            decode_image(&[]),
            Err(DetectError::InvalidImageFormat(_))
        ));
    }

    #[test]
    fn rejects_garbage_bytes() {
        assert!(matches!(
            decode_image(b"not an image at all"),
            Err(DetectError::InvalidImageFormat(_))
        ));
    }

    #[test]
    fn encoded_jpeg_decodes_to_same_dimensions() -> anyhow::Result<()> {
        let img = RgbImage::from_pixel(32, 24, Rgb([200, 40, 40]));
        let bytes = encode_jpeg(&img)?;
        let decoded = decode_image(&bytes)?;
        assert_eq!(decoded.dimensions(), (32, 24));
        Ok(())
    }
}
