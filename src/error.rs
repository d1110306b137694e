use thiserror::Error;

/// Library error type for chromasampler operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The image decoded to zero pixels; there is nothing to average.
    #[error("image has no pixels")]
    EmptyImage,

    /// Fewer than three channels per pixel (grayscale or indexed input).
    #[error("unsupported pixel format: {0} channel(s) per pixel, need at least 3")]
    UnsupportedChannels(u8),

    /// The pixel buffer disagrees with `width * height * channels`.
    #[error("malformed pixel buffer: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Container-level decode failure from the image crate.
    #[error(transparent)]
    Decode(#[from] image::ImageError),

    /// Underlying IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
