//! Glass marble raster for calendar and report days.
//!
//! A marble is a stack of radial-gradient layers composited per pixel with
//! explicit blend formulas from [`huestep_color::blend`], then clipped to the
//! inscribed circle. Gradient geometry follows CSS
//! `radial-gradient(circle at cx cy, ...)`: the 100% stop sits at the farthest
//! corner of the layer box and stops interpolate in premultiplied space.

use huestep_color::{composite, BlendMode, Color};
use image::{Rgba, RgbaImage};

/// Distance of multi-color blobs from the center, in percent of the marble.
const BLOB_ORBIT: f32 = 42.0;
/// Angular split between the two blobs of one color, in degrees.
const BLOB_SPREAD: f32 = 10.0;
const BLOB_CENTER_ALPHA: f32 = 0.65;
const BLOB_SIZE: f32 = 0.58;
const BLOB_FADE: f32 = 0.12;
const BLOB_OPACITY: f32 = 0.95;

/// One gradient stop: position in `0..=1` of the gradient radius, color, alpha.
#[derive(Debug, Clone, Copy)]
struct Stop {
    pos: f32,
    color: Color,
    alpha: f32,
}

const fn stop(pos: f32, color: Color, alpha: f32) -> Stop {
    Stop { pos, color, alpha }
}

/// A radial gradient drawn inside a square sub-box of the marble.
#[derive(Debug, Clone)]
struct RadialLayer {
    /// Box origin and side, as fractions of the marble side.
    box_x: f32,
    box_y: f32,
    box_size: f32,
    /// Gradient center as fractions of the box.
    center_x: f32,
    center_y: f32,
    stops: Vec<Stop>,
    mode: BlendMode,
    opacity: f32,
    /// Clip to the circle inscribed in the box.
    round: bool,
}

impl RadialLayer {
    fn full(center_x: f32, center_y: f32, stops: Vec<Stop>, mode: BlendMode) -> Self {
        Self {
            box_x: 0.0,
            box_y: 0.0,
            box_size: 1.0,
            center_x,
            center_y,
            stops,
            mode,
            opacity: 1.0,
            round: true,
        }
    }

    fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Straight-alpha RGBA of this layer at a point given in marble fractions.
    fn sample(&self, u: f32, v: f32) -> [f32; 4] {
        let lx = (u - self.box_x) / self.box_size;
        let ly = (v - self.box_y) / self.box_size;
        if !(0.0..=1.0).contains(&lx) || !(0.0..=1.0).contains(&ly) {
            return [0.0; 4];
        }
        if self.round && ((lx - 0.5).powi(2) + (ly - 0.5).powi(2)) > 0.25 {
            return [0.0; 4];
        }

        let dx = lx - self.center_x;
        let dy = ly - self.center_y;
        let t = (dx * dx + dy * dy).sqrt() / farthest_corner(self.center_x, self.center_y);
        let mut rgba = gradient_at(&self.stops, t);
        rgba[3] *= self.opacity;
        rgba
    }
}

/// Distance from a point of the unit box to its farthest corner.
fn farthest_corner(cx: f32, cy: f32) -> f32 {
    let fx = cx.max(1.0 - cx);
    let fy = cy.max(1.0 - cy);
    (fx * fx + fy * fy).sqrt().max(f32::EPSILON)
}

/// Evaluate a stop list at `t`, interpolating premultiplied colors.
fn gradient_at(stops: &[Stop], t: f32) -> [f32; 4] {
    let Some(first) = stops.first() else {
        return [0.0; 4];
    };
    let Some(last) = stops.last() else {
        return [0.0; 4];
    };
    if t <= first.pos {
        return straight(first);
    }
    if t >= last.pos {
        return straight(last);
    }

    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.pos {
            let span = (b.pos - a.pos).max(f32::EPSILON);
            let f = (t - a.pos) / span;
            let pa = premultiplied(&a);
            let pb = premultiplied(&b);
            let mut p = [0.0; 4];
            for i in 0..4 {
                p[i] = pa[i] + (pb[i] - pa[i]) * f;
            }
            if p[3] <= f32::EPSILON {
                return [0.0; 4];
            }
            return [p[0] / p[3], p[1] / p[3], p[2] / p[3], p[3]];
        }
    }
    straight(last)
}

fn straight(s: &Stop) -> [f32; 4] {
    let [r, g, b] = s.color.to_rgb_f32();
    [r, g, b, s.alpha]
}

fn premultiplied(s: &Stop) -> [f32; 4] {
    let [r, g, b] = s.color.to_rgb_f32();
    [r * s.alpha, g * s.alpha, b * s.alpha, s.alpha]
}

fn single_color_layers(color: Color) -> Vec<RadialLayer> {
    vec![
        RadialLayer::full(
            0.5,
            0.45,
            vec![
                stop(0.0, color.adjust_brightness(8.0), 0.95),
                stop(0.28, color, 0.90),
                stop(0.55, color, 0.55),
                stop(0.78, color, 0.0),
            ],
            BlendMode::Normal,
        ),
        RadialLayer::full(
            0.5,
            0.6,
            vec![
                stop(0.0, color, 0.28),
                stop(0.45, color, 0.16),
                stop(0.85, color, 0.0),
            ],
            BlendMode::Screen,
        )
        .with_opacity(0.95),
    ]
}

fn multi_color_layers(colors: &[Color]) -> Vec<RadialLayer> {
    let mut layers = vec![RadialLayer::full(
        0.5,
        0.5,
        vec![stop(0.0, Color::WHITE, 0.05), stop(0.6, Color::WHITE, 0.0)],
        BlendMode::Screen,
    )];

    let n = colors.len() as f32;
    for (i, &color) in colors.iter().enumerate() {
        let base_angle = i as f32 / n * 360.0;
        for jitter in [-BLOB_SPREAD / 2.0, BLOB_SPREAD / 2.0] {
            let angle = (base_angle + jitter).to_radians();
            let cx = (50.0 + BLOB_ORBIT * angle.cos()) / 100.0;
            let cy = (50.0 + BLOB_ORBIT * angle.sin()) / 100.0;
            layers.push(
                RadialLayer::full(
                    cx,
                    cy,
                    vec![
                        stop(0.0, color.adjust_brightness(10.0), BLOB_CENTER_ALPHA),
                        stop(BLOB_SIZE, color, 0.10),
                        stop(BLOB_SIZE + BLOB_FADE, color, 0.0),
                    ],
                    BlendMode::Screen,
                )
                .with_opacity(BLOB_OPACITY),
            );
        }
    }
    layers
}

fn empty_layers() -> Vec<RadialLayer> {
    vec![RadialLayer::full(
        0.5,
        0.45,
        vec![
            stop(0.0, Color::from_rgb(0xF3, 0xF4, 0xF6), 0.95),
            stop(0.40, Color::from_rgb(0xE5, 0xE7, 0xEB), 0.90),
            stop(0.78, Color::from_rgb(0xD1, 0xD5, 0xDB), 0.0),
        ],
        BlendMode::Normal,
    )]
}

/// Lighting shared by every marble: inner glow, rim, two highlights and a
/// soft multiply shadow.
fn lighting_layers() -> Vec<RadialLayer> {
    let white = Color::WHITE;
    vec![
        RadialLayer::full(
            0.4,
            0.35,
            vec![
                stop(0.0, white, 0.55),
                stop(0.30, white, 0.22),
                stop(0.50, white, 0.10),
                stop(0.72, white, 0.0),
            ],
            BlendMode::Screen,
        ),
        RadialLayer::full(
            0.5,
            0.5,
            vec![
                stop(0.60, white, 0.0),
                stop(0.83, white, 0.38),
                stop(0.86, white, 0.0),
            ],
            BlendMode::Screen,
        ),
        highlight(0.56, 0.24, 0.18, 0.9),
        highlight(0.58, 0.34, 0.10, 0.85),
        RadialLayer::full(
            0.6,
            0.68,
            vec![stop(0.0, Color::BLACK, 0.07), stop(0.55, Color::BLACK, 0.0)],
            BlendMode::Multiply,
        ),
    ]
}

fn highlight(box_x: f32, box_y: f32, box_size: f32, alpha: f32) -> RadialLayer {
    RadialLayer {
        box_x,
        box_y,
        box_size,
        center_x: 0.5,
        center_y: 0.5,
        stops: vec![stop(0.0, Color::WHITE, alpha), stop(0.7, Color::WHITE, 0.0)],
        mode: BlendMode::Screen,
        opacity: 1.0,
        round: true,
    }
}

fn marble_layers(colors: &[Color]) -> Vec<RadialLayer> {
    let mut layers = match colors {
        [] => empty_layers(),
        [single] => single_color_layers(*single),
        many => multi_color_layers(many),
    };
    layers.extend(lighting_layers());
    layers
}

/// Render a `size` x `size` marble for a day's colors, in collection order.
/// Pixels outside the inscribed circle are transparent.
pub fn render_marble(colors: &[Color], size: u32) -> RgbaImage {
    let layers = marble_layers(colors);
    let side = size as f32;
    let radius = side / 2.0;

    RgbaImage::from_fn(size, size, |x, y| {
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;
        let dist = ((px - radius).powi(2) + (py - radius).powi(2)).sqrt();
        let coverage = (radius - dist + 0.5).clamp(0.0, 1.0);
        if coverage <= 0.0 {
            return Rgba([0, 0, 0, 0]);
        }

        let (u, v) = (px / side, py / side);
        let mut acc = [0.0f32; 4];
        for layer in &layers {
            let src = layer.sample(u, v);
            if src[3] > 0.0 {
                acc = composite(acc, src, layer.mode);
            }
        }

        let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgba([
            to_u8(acc[0]),
            to_u8(acc[1]),
            to_u8(acc[2]),
            to_u8(acc[3] * coverage),
        ])
    })
}
