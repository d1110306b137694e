//! Adapter between the image crate and the averager's flat-buffer model.

use std::path::Path;

use image::ImageReader;
use tracing::{info, warn};

use crate::error::Error;

/// A decoded raster image as one flat byte buffer, one byte per sample.
///
/// Invariant: `pixels.len() == width * height * channels`. The averager
/// re-checks this before indexing rather than trusting the producer.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub channels: u8,
}

/// Decode the image at `path`, preserving the container's native channel
/// count (1 = Luma, 2 = LumaA, 3 = Rgb, 4 = Rgba). Sixteen-bit sources are
/// narrowed to 8-bit but keep their channel count.
pub fn decode(path: &Path) -> Result<DecodedImage, Error> {
    if path.extension().is_none() {
        warn!(
            "'{}' has no file extension; it might not be an image",
            path.display()
        );
    }

    let img = ImageReader::open(path)?
        .with_guessed_format()? // sniff based on content/extension
        .decode()?;

    let (width, height) = (img.width(), img.height());
    let channels = img.color().channel_count();
    let pixels = match channels {
        1 => img.into_luma8().into_raw(),
        2 => img.into_luma_alpha8().into_raw(),
        3 => img.into_rgb8().into_raw(),
        _ => img.into_rgba8().into_raw(),
    };

    info!(
        "loaded image '{}' ({}x{}, {} channels)",
        path.display(),
        width,
        height,
        channels
    );

    Ok(DecodedImage {
        pixels,
        width,
        height,
        channels,
    })
}
