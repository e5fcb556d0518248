//! Text rasterization onto a pixmap with cosmic-text.

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, SwashCache, Weight};
use tiny_skia::{Pixmap, PremultipliedColorU8};

use crate::card::TextLine;
use crate::error::{RenderError, RenderResult};

/// Line height relative to font size.
const LINE_HEIGHT_RATIO: f32 = 1.2;

/// Shapes and draws single text lines. Owns the font database, which is
/// expensive to build, so one rasterizer should be reused across renders.
pub struct TextRasterizer {
    font_system: FontSystem,
    swash_cache: SwashCache,
}

impl TextRasterizer {
    /// Load the system fonts. Fails with [`RenderError::NoFonts`] when the
    /// host has none, since every card line would otherwise come out blank.
    pub fn new() -> RenderResult<Self> {
        log::debug!("Loading system fonts for text rasterization");
        Self::with_font_system(FontSystem::new())
    }

    pub fn with_font_system(font_system: FontSystem) -> RenderResult<Self> {
        if font_system.db().is_empty() {
            log::error!("No system fonts found, card text cannot be drawn");
            return Err(RenderError::NoFonts);
        }
        Ok(Self {
            font_system,
            swash_cache: SwashCache::new(),
        })
    }

    /// Draw `line` with its alphabetic baseline at `line.baseline`.
    pub fn draw_line(&mut self, pixmap: &mut Pixmap, line: &TextLine) {
        if line.text.is_empty() || line.font_size < 1.0 {
            return;
        }

        let metrics = Metrics::new(line.font_size, line.font_size * LINE_HEIGHT_RATIO);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_size(&mut self.font_system, None, None);
        let weight = if line.bold { Weight::BOLD } else { Weight::NORMAL };
        let attrs = Attrs::new().family(Family::SansSerif).weight(weight);
        buffer.set_text(&mut self.font_system, &line.text, &attrs, Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.font_system, false);

        // Buffer coordinates have the top of the first line at 0.
        let ascent = buffer
            .layout_runs()
            .next()
            .map(|run| run.line_y)
            .unwrap_or(line.font_size);
        let origin_x = line.x.round() as i32;
        let origin_y = (line.baseline - ascent).round() as i32;

        let width = pixmap.width() as i32;
        let height = pixmap.height() as i32;
        let pixels = pixmap.pixels_mut();
        let [r, g, b] = line.color.to_array();
        let text_color = cosmic_text::Color::rgb(r, g, b);

        buffer.draw(
            &mut self.font_system,
            &mut self.swash_cache,
            text_color,
            |x, y, w, h, color| {
                if color.a() == 0 {
                    return;
                }
                for dy in 0..h as i32 {
                    let py = origin_y + y + dy;
                    if py < 0 || py >= height {
                        continue;
                    }
                    for dx in 0..w as i32 {
                        let px = origin_x + x + dx;
                        if px < 0 || px >= width {
                            continue;
                        }
                        let idx = (py * width + px) as usize;
                        pixels[idx] = blend_over(pixels[idx], color);
                    }
                }
            },
        );
    }
}

/// Source-over of a straight-alpha glyph color onto a premultiplied pixel.
fn blend_over(dst: PremultipliedColorU8, src: cosmic_text::Color) -> PremultipliedColorU8 {
    let sa = src.a() as u32;
    let inv = 255 - sa;
    let channel = |s: u8, d: u8| ((s as u32 * sa + d as u32 * inv + 127) / 255) as u8;
    let a = (sa + (dst.alpha() as u32 * inv + 127) / 255).min(255) as u8;
    let r = channel(src.r(), dst.red()).min(a);
    let g = channel(src.g(), dst.green()).min(a);
    let b = channel(src.b(), dst.blue()).min(a);
    PremultipliedColorU8::from_rgba(r, g, b, a).unwrap_or(dst)
}
