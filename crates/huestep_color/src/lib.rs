//! HueStep color math.
//!
//! Hex/HSL conversion, the color-family similarity check that gates collected
//! colors, and the per-channel blend formulas used by the marble renderer.

pub mod blend;
pub mod color;
pub mod similarity;

pub use blend::{composite, BlendMode};
pub use color::{adjust_brightness, hex_to_hsl, Color, ColorParseError, Hsl};
pub use similarity::{hue_distance, is_similar, is_similar_color, is_similar_hsl};
