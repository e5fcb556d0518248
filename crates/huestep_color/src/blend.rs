//! Per-channel blend modes and layer compositing.
//!
//! Inputs and outputs are non-premultiplied RGBA with channels in `0.0..=1.0`.
//! Compositing follows the W3C compositing model:
//!
//! ```text
//! cs' = (1 - ab) * cs + ab * B(cb, cs)
//! ao  = as + ab * (1 - as)
//! co  = (as * cs' + ab * cb * (1 - as)) / ao
//! ```

/// Separable blend function applied per color channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// `B(cb, cs) = cs`
    #[default]
    Normal,
    /// `B(cb, cs) = 1 - (1 - cb)(1 - cs)`
    Screen,
    /// `B(cb, cs) = cb * cs`
    Multiply,
}

impl BlendMode {
    /// Blend one backdrop channel with one source channel.
    pub fn apply(self, cb: f32, cs: f32) -> f32 {
        match self {
            BlendMode::Normal => cs,
            BlendMode::Screen => 1.0 - (1.0 - cb) * (1.0 - cs),
            BlendMode::Multiply => cb * cs,
        }
    }
}

/// Composite `source` over `backdrop` with the given blend mode.
pub fn composite(backdrop: [f32; 4], source: [f32; 4], mode: BlendMode) -> [f32; 4] {
    let ab = backdrop[3];
    let a_s = source[3];

    let ao = a_s + ab * (1.0 - a_s);
    if ao <= f32::EPSILON {
        return [0.0; 4];
    }

    let mut out = [0.0, 0.0, 0.0, ao];
    for i in 0..3 {
        let cb = backdrop[i];
        let cs = source[i];
        let mixed = (1.0 - ab) * cs + ab * mode.apply(cb, cs);
        out[i] = ((a_s * mixed + ab * cb * (1.0 - a_s)) / ao).clamp(0.0, 1.0);
    }
    out
}
