use std::fmt;

/// An RGB triple. Channels are `u64` so that per-channel byte sums for images
/// of up to `u32::MAX` pixels cannot overflow during averaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub red: u64,
    pub green: u64,
    pub blue: u64,
}

impl Rgb {
    #[must_use]
    pub const fn new(red: u64, green: u64, blue: u64) -> Self {
        Self { red, green, blue }
    }

    /// Render as `#rrggbb`: lowercase, zero-padded, always 7 characters.
    ///
    /// Channels are clamped to 0-255 first so the width stays fixed even for
    /// out-of-range input.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            self.red.min(255),
            self.green.min(255),
            self.blue.min(255)
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::Rgb;

    #[test]
    fn hex_is_lowercase_and_fixed_width() {
        assert_eq!(Rgb::new(20, 30, 40).to_hex(), "#141e28");
        assert_eq!(Rgb::new(0, 0, 0).to_hex(), "#000000");
        assert_eq!(Rgb::new(255, 255, 255).to_hex(), "#ffffff");
        assert_eq!(Rgb::new(9, 10, 11).to_hex(), "#090a0b");
    }

    #[test]
    fn hex_clamps_out_of_range_channels() {
        // Should not happen given the averaging domain, but the width must
        // stay fixed regardless.
        assert_eq!(Rgb::new(300, 0, 999).to_hex(), "#ff00ff");
    }

    #[test]
    fn hex_shape_holds_across_the_byte_range() {
        for v in 0..=255u64 {
            let hex = Rgb::new(v, 255 - v, v / 2).to_hex();
            assert_eq!(hex.len(), 7, "bad width for {hex}");
            assert!(hex.starts_with('#'));
            assert!(
                hex[1..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()),
                "bad digits in {hex}"
            );
        }
    }

    #[test]
    fn display_matches_css_rgb_notation() {
        assert_eq!(Rgb::new(20, 30, 40).to_string(), "rgb(20, 30, 40)");
    }
}
