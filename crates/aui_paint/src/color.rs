//! Color types and utilities

use thiserror::Error;

/// Errors produced when parsing a color string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color string must start with '#': {0:?}")]
    MissingHash(String),

    #[error("expected 6 or 8 hex digits, found {0}")]
    InvalidLength(usize),

    #[error("invalid hex digits in color: {0:?}")]
    InvalidDigit(String),
}

/// RGBA color with f32 components (0.0 to 1.0)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create from u8 components (0-255)
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create from hex value (0xRRGGBB or 0xRRGGBBAA)
    pub fn from_hex(hex: u32) -> Self {
        if hex > 0xFFFFFF {
            // 0xRRGGBBAA format
            Self::from_rgba8(
                ((hex >> 24) & 0xFF) as u8,
                ((hex >> 16) & 0xFF) as u8,
                ((hex >> 8) & 0xFF) as u8,
                (hex & 0xFF) as u8,
            )
        } else {
            // 0xRRGGBB format
            Self::from_rgba8(
                ((hex >> 16) & 0xFF) as u8,
                ((hex >> 8) & 0xFF) as u8,
                (hex & 0xFF) as u8,
                255,
            )
        }
    }

    /// Create from a packed Android-style color int (0xAARRGGBB)
    pub fn from_argb(argb: u32) -> Self {
        Self::from_rgba8(
            ((argb >> 16) & 0xFF) as u8,
            ((argb >> 8) & 0xFF) as u8,
            (argb & 0xFF) as u8,
            ((argb >> 24) & 0xFF) as u8,
        )
    }

    /// Parse `#RRGGBB` or `#AARRGGBB`
    ///
    /// The eight-digit form carries alpha first, matching packed color ints.
    pub fn parse_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;

        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::InvalidLength(digits.len()));
        }

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(s.to_string()));
        }

        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorParseError::InvalidDigit(s.to_string()))?;

        if digits.len() == 6 {
            Ok(Self::from_argb(0xFF00_0000 | value))
        } else {
            Ok(Self::from_argb(value))
        }
    }

    /// Set alpha and return new color
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Linear interpolation between two colors
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    /// Convert to u8 array [r, g, b, a]
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            channel_to_u8(self.a),
        ]
    }

    /// Pack into an Android-style color int (0xAARRGGBB)
    pub fn to_argb(&self) -> u32 {
        let [r, g, b, a] = self.to_rgba8();
        (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
    }
}

#[inline]
fn channel_to_u8(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Color::from_hex(hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digit_hex_is_opaque() {
        let color = Color::parse_hex("#181d27").unwrap();
        assert_eq!(color, Color::from_hex(0x181d27));
        assert_eq!(color.to_argb(), 0xFF18_1D27);
    }

    #[test]
    fn test_parse_eight_digit_hex_reads_alpha_first() {
        let color = Color::parse_hex("#803F51B5").unwrap();
        assert_eq!(color.to_rgba8(), [0x3F, 0x51, 0xB5, 0x80]);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert_eq!(
            Color::parse_hex("181d27"),
            Err(ColorParseError::MissingHash("181d27".to_string()))
        );
        assert_eq!(
            Color::parse_hex("#1234"),
            Err(ColorParseError::InvalidLength(4))
        );
        assert!(matches!(
            Color::parse_hex("#zzzzzz"),
            Err(ColorParseError::InvalidDigit(_))
        ));
        assert!(matches!(
            Color::parse_hex("#+1234567"),
            Err(ColorParseError::InvalidDigit(_))
        ));
        assert!(matches!(
            Color::parse_hex("#+12345"),
            Err(ColorParseError::InvalidDigit(_))
        ));
    }

    #[test]
    fn test_with_alpha_keeps_channels() {
        let color = Color::from_hex(0x3F51B5).with_alpha(0.5);
        assert_eq!(color.a, 0.5);
        assert_eq!(color.to_rgba8()[..3], Color::from_hex(0x3F51B5).to_rgba8()[..3]);
    }

    #[test]
    fn test_lerp_clamps_t() {
        let mid = Color::lerp(&Color::BLACK, &Color::WHITE, 0.5);
        assert_eq!(mid, Color::rgb(0.5, 0.5, 0.5));
        assert_eq!(Color::lerp(&Color::BLACK, &Color::WHITE, 2.0), Color::WHITE);
        assert_eq!(Color::lerp(&Color::BLACK, &Color::WHITE, -1.0), Color::BLACK);
    }

    #[test]
    fn test_argb_roundtrip_survives_float_conversion() {
        for argb in [0xFF00_0000, 0xFFFF_FFFF, 0xFF3F_51B5, 0xFF18_1D27, 0x00FF_FFFF] {
            assert_eq!(Color::from_argb(argb).to_argb(), argb, "argb={argb:#010x}");
        }
    }

    #[test]
    fn test_black_constant_matches_hex() {
        assert_eq!(Color::from_hex(0x000000), Color::BLACK);
    }
}
