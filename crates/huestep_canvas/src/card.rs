//! Resolution-independent geometry of a palette card render.
//!
//! Everything is computed in preview space first and then multiplied by
//! `s = pixel_size / frame_size`, so a preview render and an export render
//! place every element at coordinates related by exactly `s`.

use huestep_color::Color;

use crate::geometry::{Point, Rectangle};
use crate::layout::{PaletteCardLayout, DEFAULT_CARD_SCALE};

/// Longest color name shown on the card before it is cut with an ellipsis.
pub const MAX_NAME_CHARS: usize = 16;

/// Corner radius of the card at card scale 1.0, in preview pixels.
pub const CARD_CORNER_RADIUS: f32 = 20.0;

/// Fraction of the card height covered by the sheen gradient. Text baselines
/// start below it.
pub const SHEEN_HEIGHT_RATIO: f32 = 0.55;

/// Left text inset at the default card scale, in preview pixels.
pub const TEXT_INSET: f32 = 16.0;

pub const NAME_COLOR: Color = Color::from_rgb(0x1F, 0x29, 0x37);
pub const HEX_COLOR: Color = Color::from_rgb(0x4B, 0x55, 0x63);
pub const DATE_COLOR: Color = Color::from_rgb(0x9C, 0xA3, 0xAF);

/// Font size at card scale 1.0 and baseline offset below the sheen at the
/// default card scale, both in preview pixels.
struct TextStyle {
    font_size: f32,
    baseline_offset: f32,
    color: Color,
    bold: bool,
}

const NAME_STYLE: TextStyle = TextStyle {
    font_size: 24.0,
    baseline_offset: 24.0,
    color: NAME_COLOR,
    bold: true,
};

const HEX_STYLE: TextStyle = TextStyle {
    font_size: 16.0,
    baseline_offset: 42.0,
    color: HEX_COLOR,
    bold: false,
};

const DATE_STYLE: TextStyle = TextStyle {
    font_size: 13.0,
    baseline_offset: 56.0,
    color: DATE_COLOR,
    bold: false,
};

/// One left-aligned text line in output pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub x: f32,
    /// Alphabetic baseline.
    pub baseline: f32,
    pub font_size: f32,
    pub color: Color,
    pub bold: bool,
}

/// Everything the rasterizer needs, in output pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct CardGeometry {
    pub pixel_size: u32,
    /// Preview to output scale factor.
    pub scale: f32,
    /// Where the cover-fitted photo lands. May extend past the frame.
    pub image_rect: Rectangle,
    pub card_rect: Rectangle,
    pub corner_radius: f32,
    /// Upper half filled with the collected color.
    pub color_rect: Rectangle,
    /// Lower half filled white.
    pub info_rect: Rectangle,
    pub sheen_rect: Rectangle,
    pub fill: Color,
    pub name: TextLine,
    pub hex: TextLine,
    pub date: TextLine,
}

impl CardGeometry {
    pub fn compute(
        layout: &PaletteCardLayout,
        image_size: (u32, u32),
        pixel_size: u32,
        color: Color,
        color_name: &str,
        date_label: &str,
    ) -> Self {
        let frame = layout.frame_size();
        let s = pixel_size as f32 / frame;
        let card_scale = layout.card_scale();

        let image_rect = cover_rect(layout, image_size).scale(s);
        let card_rect = layout.card_rect().scale(s);
        let Rectangle {
            x,
            y,
            width: w,
            height: h,
        } = card_rect;

        // Offsets inside the card follow the card scale so the three lines stay
        // inside the white half at small scales.
        let inset_scale = card_scale / DEFAULT_CARD_SCALE;
        let text_x = x + TEXT_INSET * inset_scale * s;
        let text_top = y + h * SHEEN_HEIGHT_RATIO;
        let line = |text: String, style: &TextStyle| TextLine {
            text,
            x: text_x,
            baseline: text_top + style.baseline_offset * inset_scale * s,
            font_size: (style.font_size * card_scale * s).round(),
            color: style.color,
            bold: style.bold,
        };

        Self {
            pixel_size,
            scale: s,
            image_rect,
            card_rect,
            corner_radius: CARD_CORNER_RADIUS * card_scale * s,
            color_rect: Rectangle::new(x, y, w, h / 2.0),
            info_rect: Rectangle::new(x, y + h / 2.0, w, h / 2.0),
            sheen_rect: Rectangle::new(x, y, w, h * SHEEN_HEIGHT_RATIO),
            fill: color,
            name: line(truncate_name(color_name, MAX_NAME_CHARS), &NAME_STYLE),
            hex: line(format!("Hex: {}", color), &HEX_STYLE),
            date: line(date_label.to_string(), &DATE_STYLE),
        }
    }

    pub fn text_lines(&self) -> [&TextLine; 3] {
        [&self.name, &self.hex, &self.date]
    }

    /// Start and end of the diagonal sheen gradient.
    pub fn sheen_axis(&self) -> (Point, Point) {
        let r = self.sheen_rect;
        (Point::new(r.x, r.y), Point::new(r.right(), r.bottom()))
    }
}

/// Cover-fit the photo into the square frame, then apply zoom and pan.
/// Returned in preview space.
pub fn cover_rect(layout: &PaletteCardLayout, image_size: (u32, u32)) -> Rectangle {
    let frame = layout.frame_size();
    let (iw, ih) = image_size;
    let ratio = if ih == 0 { 1.0 } else { iw as f32 / ih as f32 };
    let zoom = layout.image_zoom();

    let (draw_w, draw_h) = if ratio > 1.0 {
        let h = frame * zoom;
        (h * ratio, h)
    } else {
        let w = frame * zoom;
        (w, w / ratio)
    };

    let offset = layout.image_offset();
    Rectangle::new(
        frame / 2.0 - draw_w / 2.0 + offset.x,
        frame / 2.0 - draw_h / 2.0 + offset.y,
        draw_w,
        draw_h,
    )
}

/// Cut `name` to `max_chars - 1` characters plus an ellipsis when it is
/// longer than `max_chars`.
pub fn truncate_name(name: &str, max_chars: usize) -> String {
    if name.chars().count() > max_chars {
        let mut out: String = name.chars().take(max_chars.saturating_sub(1)).collect();
        out.push('…');
        out
    } else {
        name.to_string()
    }
}
