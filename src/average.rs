//! Pixel averaging over a decoded byte buffer.

use tracing::warn;

use crate::color::Rgb;
use crate::decode::DecodedImage;
use crate::error::Error;

/// Compute the per-channel mean color of `image` with truncating integer
/// division.
///
/// Only the first three samples of each pixel contribute. A fourth (alpha)
/// channel is ignored, as are any further channels beyond it; both cases are
/// logged. Sums accumulate in `u64`, which holds `u32::MAX` pixels of 255
/// without overflow.
///
/// # Errors
/// [`Error::SizeMismatch`] if the buffer disagrees with
/// `width * height * channels`, [`Error::EmptyImage`] if there are zero
/// pixels, [`Error::UnsupportedChannels`] for fewer than three channels.
pub fn average(image: DecodedImage) -> Result<Rgb, Error> {
    let expected = image.width as usize * image.height as usize * usize::from(image.channels);
    if image.pixels.len() != expected {
        return Err(Error::SizeMismatch {
            expected,
            actual: image.pixels.len(),
        });
    }
    if image.width == 0 || image.height == 0 {
        return Err(Error::EmptyImage);
    }
    if image.channels < 3 {
        return Err(Error::UnsupportedChannels(image.channels));
    }

    if image.channels == 4 {
        warn!("an alpha channel is present; it is ignored for averaging");
    } else if image.channels > 4 {
        warn!(
            "{} channels per pixel; only the first 3 are averaged",
            image.channels
        );
    }

    // Stride stays the true channel count so the RGB offsets remain aligned
    // for every pixel.
    let stride = usize::from(image.channels);
    let mut sums = [0u64; 3];
    for pixel in image.pixels.chunks_exact(stride) {
        sums[0] += u64::from(pixel[0]);
        sums[1] += u64::from(pixel[1]);
        sums[2] += u64::from(pixel[2]);
    }

    let total = u64::from(image.width) * u64::from(image.height);
    Ok(Rgb::new(sums[0] / total, sums[1] / total, sums[2] / total))
}
