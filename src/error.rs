use thiserror::Error;

/// Errors the detection pipeline can surface to a caller.
#[derive(Debug, Error)]
pub enum DetectError {
    /// The input bytes could not be decoded as an image.
    #[error("invalid image format")]
    InvalidImageFormat(#[source] image::ImageError),

    /// A caller-supplied parameter was out of domain.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The output image could not be serialized.
    #[error("failed to encode output image")]
    Encode(#[source] image::ImageError),
}
