//! Hex color values and HSL conversion.
//!
//! Colors travel through the application as `#RRGGBB` strings. Everything that
//! reads stored or user-provided hex text goes through the permissive helpers in
//! this module, which never fail: malformed input degrades to a zero value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An opaque RGB color. Displayed as `#RRGGBB` in uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color([u8; 3]);

/// Error returned by strict hex parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid hex color '{input}': expected 6 hex digits with optional leading '#'")]
pub struct ColorParseError {
    /// The rejected input
    pub input: String,
}

/// Derived hue/saturation/lightness triple.
///
/// Components are rounded to whole numbers: hue in `[0, 360)`, saturation and
/// lightness in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h: h % 360, s, l }
    }
}

/// Round half towards positive infinity.
///
/// Matches the rounding used by the stored color history; `f64::round` rounds
/// half away from zero, which differs for negative brightness shifts.
pub(crate) fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

impl Color {
    pub const BLACK: Color = Color([0, 0, 0]);
    pub const WHITE: Color = Color([255, 255, 255]);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Parse a hex string strictly. Returns `None` unless the input is exactly
    /// six hex digits, optionally preceded by a single `#`.
    pub fn parse_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self([channel(0)?, channel(2)?, channel(4)?]))
    }

    /// Parse a hex string, falling back to black for malformed input.
    pub fn parse_lossy(hex: &str) -> Self {
        Self::parse_hex(hex).unwrap_or_else(|| {
            log::warn!("Malformed color '{}', using #000000", hex);
            Self::BLACK
        })
    }

    pub const fn r(&self) -> u8 {
        self.0[0]
    }

    pub const fn g(&self) -> u8 {
        self.0[1]
    }

    pub const fn b(&self) -> u8 {
        self.0[2]
    }

    pub const fn to_array(&self) -> [u8; 3] {
        self.0
    }

    /// Channels as floats in `0.0..=1.0`.
    pub fn to_rgb_f32(&self) -> [f32; 3] {
        [
            f32::from(self.0[0]) / 255.0,
            f32::from(self.0[1]) / 255.0,
            f32::from(self.0[2]) / 255.0,
        ]
    }

    /// Convert to HSL using the max/min channel algorithm.
    ///
    /// Achromatic colors (all channels equal) have hue 0 and saturation 0.
    pub fn to_hsl(&self) -> Hsl {
        let r = f64::from(self.0[0]) / 255.0;
        let g = f64::from(self.0[1]) / 255.0;
        let b = f64::from(self.0[2]) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let (h, s) = if max == min {
            (0.0, 0.0)
        } else {
            let d = max - min;
            let s = if l > 0.5 {
                d / (2.0 - max - min)
            } else {
                d / (max + min)
            };

            let h = if max == r {
                ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
            } else if max == g {
                ((b - r) / d + 2.0) / 6.0
            } else {
                ((r - g) / d + 4.0) / 6.0
            };

            (h, s)
        };

        // A hue just below 360 rounds up to 360, which is the same angle as 0.
        let hue = round_half_up(h * 360.0) as u16 % 360;

        Hsl {
            h: hue,
            s: round_half_up(s * 100.0) as u8,
            l: round_half_up(l * 100.0) as u8,
        }
    }

    /// Shift every channel by `round(2.55 * percent)`, clamping to `0..=255`.
    pub fn adjust_brightness(&self, percent: f64) -> Color {
        let amount = round_half_up(2.55 * percent) as i32;
        let shift = |c: u8| (i32::from(c) + amount).clamp(0, 255) as u8;
        Color([shift(self.0[0]), shift(self.0[1]), shift(self.0[2])])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0[0], self.0[1], self.0[2])
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s).ok_or_else(|| ColorParseError {
            input: s.to_string(),
        })
    }
}

impl From<[u8; 3]> for Color {
    fn from(rgb: [u8; 3]) -> Self {
        Self(rgb)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Ok(Self::parse_lossy(&hex))
    }
}

/// Convert a hex string to HSL.
///
/// Input that is not exactly six hex digits (optional leading `#`, any case)
/// yields the degenerate value `{0, 0, 0}`.
pub fn hex_to_hsl(hex: &str) -> Hsl {
    match Color::parse_hex(hex) {
        Some(color) => color.to_hsl(),
        None => Hsl::default(),
    }
}

/// Shift the brightness of a hex color by `percent` (typically -50..=50).
///
/// Malformed input is treated as black before the shift.
pub fn adjust_brightness(hex: &str, percent: f64) -> Color {
    Color::parse_lossy(hex).adjust_brightness(percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_optional_hash_and_any_case() {
        assert_eq!(Color::parse_hex("#ff8800"), Some(Color::from_rgb(255, 136, 0)));
        assert_eq!(Color::parse_hex("Ff8800"), Some(Color::from_rgb(255, 136, 0)));
        assert_eq!(Color::from_rgb(255, 136, 0).to_string(), "#FF8800");
    }

    #[test]
    fn test_parse_rejects_wrong_shapes() {
        for bad in ["", "#", "#fff", "#12345", "#1234567", "##123456", "#12345g", "+12345"] {
            assert_eq!(Color::parse_hex(bad), None, "{bad} should be rejected");
        }
        assert!("#xyzxyz".parse::<Color>().is_err());
    }

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(hex_to_hsl("#FF0000"), Hsl::new(0, 100, 50));
        assert_eq!(hex_to_hsl("#00FF00"), Hsl::new(120, 100, 50));
        assert_eq!(hex_to_hsl("#0000FF"), Hsl::new(240, 100, 50));
    }

    #[test]
    fn test_hsl_achromatic() {
        assert_eq!(hex_to_hsl("#808080"), Hsl::new(0, 0, 50));
        assert_eq!(hex_to_hsl("#A0A0A0"), Hsl::new(0, 0, 63));
        assert_eq!(hex_to_hsl("#FFFFFF"), Hsl::new(0, 0, 100));
        assert_eq!(hex_to_hsl("#000000"), Hsl::new(0, 0, 0));
    }

    #[test]
    fn test_hsl_catalog_color() {
        // #0077B6: blue dominant, fully saturated, fairly dark
        let hsl = hex_to_hsl("#0077B6");
        assert_eq!(hsl.h, 201);
        assert_eq!(hsl.s, 100);
        assert_eq!(hsl.l, 36);
    }

    #[test]
    fn test_hue_wraps_to_zero() {
        // Hue of #FF0001 is 359.76 degrees and rounds to 360, i.e. 0.
        assert_eq!(hex_to_hsl("#FF0001").h, 0);
    }

    #[test]
    fn test_malformed_hex_is_degenerate() {
        assert_eq!(hex_to_hsl("not a color"), Hsl::default());
        assert_eq!(hex_to_hsl("#12345"), Hsl::new(0, 0, 0));
    }

    #[test]
    fn test_adjust_brightness_zero_is_identity() {
        for hex in ["#0077B6", "#ffd60a", "EDF2F4", "#000000", "#FFFFFF"] {
            let color = Color::parse_lossy(hex);
            assert_eq!(adjust_brightness(hex, 0.0), color);
        }
    }

    #[test]
    fn test_adjust_brightness_shifts_and_clamps() {
        // 2.55 * 10 evaluates to 25.5, which rounds to 26
        assert_eq!(adjust_brightness("#102030", 10.0).to_string(), "#2A3A4A");
        assert_eq!(adjust_brightness("#F0F0F0", 50.0), Color::WHITE);
        assert_eq!(adjust_brightness("#101010", -50.0), Color::BLACK);
    }

    #[test]
    fn test_adjust_brightness_negative_rounds_half_up() {
        // 2.55 * -15 = -38.25 -> -38
        assert_eq!(adjust_brightness("#808080", -15.0).to_string(), "#5A5A5A");
    }

    #[test]
    fn test_serde_uses_hex_string() {
        let json = serde_json::to_string(&Color::from_rgb(0, 0x77, 0xB6)).unwrap();
        assert_eq!(json, "\"#0077B6\"");
        let back: Color = serde_json::from_str("\"#0077b6\"").unwrap();
        assert_eq!(back, Color::from_rgb(0, 0x77, 0xB6));
        let lossy: Color = serde_json::from_str("\"oops\"").unwrap();
        assert_eq!(lossy, Color::BLACK);
    }
}
