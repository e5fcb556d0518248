//! Perceptual "same color family" check used to gate collected colors.
//!
//! The relation is symmetric but not transitive: `a ~ b` and `b ~ c` do not
//! imply `a ~ c`.

use crate::color::{hex_to_hsl, Color, Hsl};

/// Colors with saturation at or below this value are treated as grayscale.
pub const GRAYSCALE_MAX_SATURATION: u8 = 20;

/// Maximum lightness difference when both colors are grayscale.
pub const GRAYSCALE_PAIR_MAX_LIGHTNESS_DIFF: u8 = 50;

/// Maximum lightness difference when exactly one color is grayscale.
pub const MIXED_PAIR_MAX_LIGHTNESS_DIFF: u8 = 40;

/// Maximum circular hue distance for two chromatic colors.
pub const MAX_HUE_DIFF: u16 = 90;

/// Maximum saturation difference for two chromatic colors.
pub const MAX_SATURATION_DIFF: u8 = 50;

/// Maximum lightness difference for two chromatic colors.
pub const MAX_LIGHTNESS_DIFF: u8 = 50;

/// Minimal angular distance between two hues, in `0..=180`.
pub fn hue_distance(a: u16, b: u16) -> u16 {
    let d = (a % 360).abs_diff(b % 360);
    if d > 180 { 360 - d } else { d }
}

fn is_grayscale(hsl: &Hsl) -> bool {
    hsl.s <= GRAYSCALE_MAX_SATURATION
}

/// Decide whether two HSL values belong to the same color family.
pub fn is_similar_hsl(a: Hsl, b: Hsl) -> bool {
    let lightness_diff = a.l.abs_diff(b.l);

    match (is_grayscale(&a), is_grayscale(&b)) {
        (true, true) => lightness_diff <= GRAYSCALE_PAIR_MAX_LIGHTNESS_DIFF,
        (true, false) | (false, true) => lightness_diff <= MIXED_PAIR_MAX_LIGHTNESS_DIFF,
        (false, false) => {
            hue_distance(a.h, b.h) <= MAX_HUE_DIFF
                && a.s.abs_diff(b.s) <= MAX_SATURATION_DIFF
                && lightness_diff <= MAX_LIGHTNESS_DIFF
        }
    }
}

/// Decide whether `candidate` is close enough to `target` to be collected.
pub fn is_similar(target: Color, candidate: Color) -> bool {
    is_similar_hsl(target.to_hsl(), candidate.to_hsl())
}

/// Hex-string form of [`is_similar`]. Malformed input converts to the
/// degenerate HSL value and is compared like black.
pub fn is_similar_color(target: &str, candidate: &str) -> bool {
    let similar = is_similar_hsl(hex_to_hsl(target), hex_to_hsl(candidate));
    if !similar {
        log::debug!("Rejected {} against target {}", candidate, target);
    }
    similar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflexive_for_concrete_colors() {
        for hex in ["#FF0000", "#0077B6", "#808080", "#EDF2F4", "#2B2D42", "#7209B7"] {
            assert!(is_similar_color(hex, hex), "{hex} should match itself");
        }
    }

    #[test]
    fn test_symmetric() {
        let samples = [
            "#FF0000", "#80FF00", "#7BFF00", "#00FF00", "#808080", "#A0A0A0", "#0077B6",
            "#FFD60A", "#2B2D42", "#EDF2F4", "#F72585", "#000000", "#FFFFFF",
        ];
        for a in samples {
            for b in samples {
                assert_eq!(
                    is_similar_color(a, b),
                    is_similar_color(b, a),
                    "asymmetric for {a} / {b}"
                );
            }
        }
    }

    #[test]
    fn test_not_transitive() {
        // Hues 0, 90 and 120 at identical saturation and lightness.
        let red = "#FF0000";
        let chartreuse = "#80FF00";
        let green = "#00FF00";
        assert!(is_similar_color(red, chartreuse));
        assert!(is_similar_color(chartreuse, green));
        assert!(!is_similar_color(red, green));
    }

    #[test]
    fn test_grayscale_pair() {
        // L = 50 vs L = 63
        assert!(is_similar_color("#808080", "#A0A0A0"));
        // L = 0 vs L = 100
        assert!(!is_similar_color("#000000", "#FFFFFF"));
    }

    #[test]
    fn test_mixed_pair_uses_lightness_only() {
        assert!(is_similar_color("#FF0000", "#808080"));
        // Red L = 50 vs white L = 100
        assert!(!is_similar_color("#FF0000", "#FFFFFF"));
    }

    #[test]
    fn test_hue_boundary() {
        // #80FF00 has hue 90, #7BFF00 has hue 91; both S = 100, L = 50.
        assert!(is_similar_color("#FF0000", "#80FF00"));
        assert!(!is_similar_color("#FF0000", "#7BFF00"));
    }

    #[test]
    fn test_hue_distance_is_circular() {
        assert_eq!(hue_distance(350, 10), 20);
        assert_eq!(hue_distance(10, 350), 20);
        assert_eq!(hue_distance(0, 180), 180);
        assert_eq!(hue_distance(90, 271), 179);
    }

    #[test]
    fn test_saturation_gap_rejects() {
        assert!(!is_similar_hsl(Hsl::new(200, 100, 50), Hsl::new(200, 40, 50)));
        assert!(is_similar_hsl(Hsl::new(200, 100, 50), Hsl::new(200, 50, 50)));
    }

    #[test]
    fn test_typed_and_hex_forms_agree() {
        let target = Color::from_rgb(0x00, 0x77, 0xB6);
        let candidate = Color::from_rgb(0x45, 0x7B, 0x9D);
        assert_eq!(
            is_similar(target, candidate),
            is_similar_color("#0077B6", "#457B9D")
        );
    }
}
