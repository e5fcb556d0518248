//! Palette card compositor.
//!
//! Draws, in order: the cover-fitted photo, a darkening gradient for
//! legibility, the two-tone card, a diagonal sheen over the colored half, and
//! three text lines. The same code path produces the preview and the export;
//! only `pixel_size` changes.

use std::io::Cursor;

use huestep_color::Color;
use image::RgbaImage;
use tiny_skia::{FillRule, FilterQuality, Paint, Pattern, Pixmap, SpreadMode, Transform};

use crate::card::CardGeometry;
use crate::error::{ImageLoadError, RenderError, RenderResult};
use crate::geometry::{Point, Rectangle};
use crate::layout::PaletteCardLayout;
use crate::raster::{
    linear_gradient_paint, path_mask, pixmap_from_rgba, pixmap_to_rgba, rounded_rect_path,
    solid_paint, Corners,
};
use crate::source::ImageSource;
use crate::text::TextRasterizer;

/// Largest output side accepted by the compositor.
pub const MAX_PIXEL_SIZE: u32 = 8192;

/// Overlay stops: `(position, black alpha)`.
const OVERLAY_STOPS: [(f32, f32); 3] = [(0.0, 0.0), (0.3, 0.2), (1.0, 0.6)];

/// Sheen stops: `(position, color, alpha)`.
const SHEEN_STOPS: [(f32, Color, f32); 3] = [
    (0.0, Color::WHITE, 0.08),
    (0.5, Color::WHITE, 0.0),
    (1.0, Color::BLACK, 0.08),
];

/// Everything needed to draw one card.
#[derive(Debug, Clone, Copy)]
pub struct CardRequest<'a> {
    pub image: &'a ImageSource,
    pub color: Color,
    pub layout: &'a PaletteCardLayout,
    pub color_name: &'a str,
    pub date_label: &'a str,
}

/// Renders palette cards. Fonts are loaded on the first render and reused;
/// a host without fonts gets [`RenderError::NoFonts`] instead of a blank card.
#[derive(Default)]
pub struct PaletteCompositor {
    text: Option<TextRasterizer>,
}

impl PaletteCompositor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the photo, then draw the card at `pixel_size` x `pixel_size`.
    ///
    /// The photo is decoded before anything is drawn, so a load failure
    /// returns [`RenderError::ImageLoad`] without producing a partial image.
    pub fn render(&mut self, request: &CardRequest<'_>, pixel_size: u32) -> RenderResult<RgbaImage> {
        check_size(pixel_size)?;
        let photo = request.image.load().map_err(|e| {
            log::warn!("Failed to load card image {}: {}", request.image.describe(), e);
            e
        })?;
        self.render_loaded(&photo, request, pixel_size)
    }

    /// Draw the card with an already decoded photo. `request.image` is not
    /// read.
    pub fn render_loaded(
        &mut self,
        photo: &RgbaImage,
        request: &CardRequest<'_>,
        pixel_size: u32,
    ) -> RenderResult<RgbaImage> {
        check_size(pixel_size)?;
        let geometry = CardGeometry::compute(
            request.layout,
            photo.dimensions(),
            pixel_size,
            request.color,
            request.color_name,
            request.date_label,
        );
        log::debug!(
            "Rendering card {} at {}px (scale {:.3})",
            request.color,
            pixel_size,
            geometry.scale
        );

        let mut pixmap =
            Pixmap::new(pixel_size, pixel_size).ok_or(RenderError::InvalidSize(pixel_size))?;
        pixmap.fill(tiny_skia::Color::WHITE);

        let photo_pixmap = pixmap_from_rgba(photo).ok_or(ImageLoadError::Empty)?;
        draw_photo(&mut pixmap, &photo_pixmap, geometry.image_rect);
        draw_overlay(&mut pixmap);
        draw_card(&mut pixmap, &geometry);

        if self.text.is_none() {
            self.text = Some(TextRasterizer::new()?);
        }
        let Some(text) = self.text.as_mut() else {
            return Err(RenderError::NoFonts);
        };
        for line in geometry.text_lines() {
            text.draw_line(&mut pixmap, line);
        }

        pixmap_to_rgba(&pixmap).ok_or(RenderError::InvalidSize(pixel_size))
    }

    /// Render and encode as PNG.
    pub fn export_png(&mut self, request: &CardRequest<'_>, pixel_size: u32) -> RenderResult<Vec<u8>> {
        let img = self.render(request, pixel_size)?;
        let bytes = encode_png(&img)?;
        log::info!(
            "Exported {}x{} palette card ({} bytes)",
            pixel_size,
            pixel_size,
            bytes.len()
        );
        Ok(bytes)
    }
}

/// PNG-encode an RGBA image.
pub fn encode_png(img: &RgbaImage) -> RenderResult<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .map_err(RenderError::Encode)?;
    Ok(out.into_inner())
}

/// File name of an exported card, `palette-<date>.png`.
pub fn export_filename(date: &str) -> String {
    format!("palette-{}.png", date)
}

fn check_size(pixel_size: u32) -> RenderResult<()> {
    if pixel_size == 0 || pixel_size > MAX_PIXEL_SIZE {
        return Err(RenderError::InvalidSize(pixel_size));
    }
    Ok(())
}

fn draw_photo(pixmap: &mut Pixmap, photo: &Pixmap, rect: Rectangle) {
    let Some(dest) = rect.to_skia() else {
        log::debug!("Photo rectangle is degenerate, skipping");
        return;
    };
    let sx = rect.width / photo.width() as f32;
    let sy = rect.height / photo.height() as f32;
    let mut paint = Paint::default();
    paint.shader = Pattern::new(
        photo.as_ref(),
        SpreadMode::Pad,
        FilterQuality::Bilinear,
        1.0,
        Transform::from_row(sx, 0.0, 0.0, sy, rect.x, rect.y),
    );
    pixmap.fill_rect(dest, &paint, Transform::identity(), None);
}

fn draw_overlay(pixmap: &mut Pixmap) {
    let size = pixmap.height() as f32;
    let stops: Vec<_> = OVERLAY_STOPS
        .iter()
        .map(|&(pos, alpha)| (pos, Color::BLACK, alpha))
        .collect();
    let Some(paint) = linear_gradient_paint(Point::zero(), Point::new(0.0, size), &stops) else {
        return;
    };
    if let Some(rect) = Rectangle::new(0.0, 0.0, pixmap.width() as f32, size).to_skia() {
        pixmap.fill_rect(rect, &paint, Transform::identity(), None);
    }
}

fn draw_card(pixmap: &mut Pixmap, geometry: &CardGeometry) {
    let radius = geometry.corner_radius;

    if let Some(path) = rounded_rect_path(geometry.color_rect, Corners::top(radius)) {
        pixmap.fill_path(
            &path,
            &solid_paint(geometry.fill, 1.0),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }
    if let Some(path) = rounded_rect_path(geometry.info_rect, Corners::bottom(radius)) {
        pixmap.fill_path(
            &path,
            &solid_paint(Color::WHITE, 1.0),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    // Sheen is clipped to the card outline so it never tints the rounded
    // corners' background.
    let (start, end) = geometry.sheen_axis();
    let clip = rounded_rect_path(geometry.card_rect, Corners::all(radius))
        .and_then(|path| path_mask(pixmap.width(), pixmap.height(), &path));
    let paint = linear_gradient_paint(start, end, &SHEEN_STOPS);
    if let (Some(paint), Some(rect)) = (paint, geometry.sheen_rect.to_skia()) {
        pixmap.fill_rect(rect, &paint, Transform::identity(), clip.as_ref());
    }
}
