//! tiny-skia helpers shared by the card compositor.

use huestep_color::Color;
use image::RgbaImage;
use tiny_skia::{
    ColorU8, FillRule, GradientStop, LinearGradient, Mask, Paint, Path, PathBuilder, Pixmap,
    SpreadMode, Transform,
};

use crate::geometry::{Point, Rectangle};

/// Cubic bezier control distance for a quarter circle of radius 1.
const KAPPA: f32 = 0.552_284_8;

/// Per-corner radii, clockwise from top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Corners {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl Corners {
    pub fn all(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    pub fn top(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            ..Self::default()
        }
    }

    pub fn bottom(radius: f32) -> Self {
        Self {
            bottom_right: radius,
            bottom_left: radius,
            ..Self::default()
        }
    }

    fn clamped(self, max: f32) -> Self {
        let max = max.max(0.0);
        Self {
            top_left: self.top_left.clamp(0.0, max),
            top_right: self.top_right.clamp(0.0, max),
            bottom_right: self.bottom_right.clamp(0.0, max),
            bottom_left: self.bottom_left.clamp(0.0, max),
        }
    }
}

/// Build a rectangle path with circular corners. Radii are limited to half
/// the shorter side.
pub fn rounded_rect_path(rect: Rectangle, corners: Corners) -> Option<Path> {
    let Rectangle {
        x,
        y,
        width: w,
        height: h,
    } = rect;
    if !(w > 0.0 && h > 0.0) {
        return None;
    }
    let c = corners.clamped(w.min(h) / 2.0);
    let k = 1.0 - KAPPA;

    let mut pb = PathBuilder::new();
    pb.move_to(x + c.top_left, y);
    pb.line_to(x + w - c.top_right, y);
    if c.top_right > 0.0 {
        let r = c.top_right;
        pb.cubic_to(x + w - r * k, y, x + w, y + r * k, x + w, y + r);
    }
    pb.line_to(x + w, y + h - c.bottom_right);
    if c.bottom_right > 0.0 {
        let r = c.bottom_right;
        pb.cubic_to(x + w, y + h - r * k, x + w - r * k, y + h, x + w - r, y + h);
    }
    pb.line_to(x + c.bottom_left, y + h);
    if c.bottom_left > 0.0 {
        let r = c.bottom_left;
        pb.cubic_to(x + r * k, y + h, x, y + h - r * k, x, y + h - r);
    }
    pb.line_to(x, y + c.top_left);
    if c.top_left > 0.0 {
        let r = c.top_left;
        pb.cubic_to(x, y + r * k, x + r * k, y, x + r, y);
    }
    pb.close();
    pb.finish()
}

/// Convert a color plus alpha into a tiny-skia color.
pub fn skia_color(color: Color, alpha: f32) -> tiny_skia::Color {
    let [r, g, b] = color.to_rgb_f32();
    tiny_skia::Color::from_rgba(r, g, b, alpha.clamp(0.0, 1.0))
        .unwrap_or(tiny_skia::Color::TRANSPARENT)
}

/// Solid anti-aliased paint.
pub fn solid_paint(color: Color, alpha: f32) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(skia_color(color, alpha));
    paint.anti_alias = true;
    paint
}

/// Paint with a linear gradient between two points. `stops` are
/// `(position, color, alpha)` triples.
pub fn linear_gradient_paint(
    start: Point,
    end: Point,
    stops: &[(f32, Color, f32)],
) -> Option<Paint<'static>> {
    let stops = stops
        .iter()
        .map(|&(pos, color, alpha)| GradientStop::new(pos, skia_color(color, alpha)))
        .collect();
    let shader = LinearGradient::new(
        tiny_skia::Point::from_xy(start.x, start.y),
        tiny_skia::Point::from_xy(end.x, end.y),
        stops,
        SpreadMode::Pad,
        Transform::identity(),
    )?;
    let mut paint = Paint::default();
    paint.shader = shader;
    paint.anti_alias = true;
    Some(paint)
}

/// Coverage mask of `path` over a `width` x `height` canvas.
pub fn path_mask(width: u32, height: u32, path: &Path) -> Option<Mask> {
    let mut mask = Mask::new(width, height)?;
    mask.fill_path(path, FillRule::Winding, true, Transform::identity());
    Some(mask)
}

/// Copy an RGBA8 image into a premultiplied pixmap.
pub fn pixmap_from_rgba(img: &RgbaImage) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(img.width(), img.height())?;
    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(img.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
    }
    Some(pixmap)
}

/// Copy a premultiplied pixmap back into a straight-alpha RGBA8 image.
pub fn pixmap_to_rgba(pixmap: &Pixmap) -> Option<RgbaImage> {
    let mut data = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    RgbaImage::from_raw(pixmap.width(), pixmap.height(), data)
}
