//! Linear shade gradients of a base color.

use crate::color::Rgb;

/// Build `count + 1` shades of `base`: index 0 is black, the last entry is
/// `base` itself, and each step scales every channel by `i / count` with
/// truncating integer math. Pure and deterministic.
///
/// `count == 0` yields just the base color.
#[must_use]
pub fn shades(base: Rgb, count: u32) -> Vec<Rgb> {
    if count == 0 {
        return vec![base];
    }
    let n = u64::from(count);
    (0..=n)
        .map(|i| Rgb::new(base.red * i / n, base.green * i / n, base.blue * i / n))
        .collect()
}
