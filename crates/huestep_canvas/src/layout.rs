//! Palette card layout state: background pan/zoom and card placement.
//!
//! All positions are stored in preview space (a square frame of
//! [`PREVIEW_SIZE`] logical pixels). Rendering at any other pixel size scales
//! them by `pixel_size / PREVIEW_SIZE`.

use crate::geometry::{Point, Rectangle};

/// Side length of the interactive preview frame.
pub const PREVIEW_SIZE: f32 = 468.0;

/// Side length of the exported image in pixels.
pub const EXPORT_SIZE: u32 = 2048;

/// Unscaled card side as a fraction of the frame side.
pub const CARD_BASE_RATIO: f32 = 0.70;

/// Distance the card keeps from every frame edge.
pub const CARD_MARGIN: f32 = 12.0;

pub const MIN_IMAGE_ZOOM: f32 = 0.5;
pub const MAX_IMAGE_ZOOM: f32 = 4.0;

pub const MIN_CARD_SCALE: f32 = 0.35;
pub const MAX_CARD_SCALE: f32 = 0.9;
pub const DEFAULT_CARD_SCALE: f32 = 0.60;

/// Vertical resting position of the card center as a fraction of the frame.
pub const DEFAULT_CARD_Y_RATIO: f32 = 0.78;

/// Zoom factor applied per wheel notch towards the user.
pub const WHEEL_ZOOM_IN: f32 = 1.05;
/// Zoom factor applied per wheel notch away from the user.
pub const WHEEL_ZOOM_OUT: f32 = 0.95;

/// Card scale change of one button press.
pub const CARD_SCALE_STEP: f32 = 0.05;

/// Transform state of one share session.
///
/// Every mutator clamps its input and re-clamps the card position, so the card
/// rectangle always stays inside the frame minus [`CARD_MARGIN`].
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteCardLayout {
    frame_size: f32,
    image_offset: Point,
    image_zoom: f32,
    card_center: Point,
    card_scale: f32,
}

impl PaletteCardLayout {
    /// Create a layout for a square preview frame of `frame_size` pixels.
    pub fn new(frame_size: f32) -> Self {
        let mut layout = Self {
            frame_size,
            image_offset: Point::zero(),
            image_zoom: 1.0,
            card_center: Point::zero(),
            card_scale: DEFAULT_CARD_SCALE,
        };
        layout.reset();
        layout
    }

    /// Restore zoom, pan, card scale and card position to their defaults.
    pub fn reset(&mut self) {
        self.image_offset = Point::zero();
        self.image_zoom = 1.0;
        self.card_scale = DEFAULT_CARD_SCALE;
        self.card_center = Point::new(
            self.frame_size / 2.0,
            self.frame_size * DEFAULT_CARD_Y_RATIO,
        );
        self.clamp_card();
    }

    pub fn frame_size(&self) -> f32 {
        self.frame_size
    }

    pub fn image_offset(&self) -> Point {
        self.image_offset
    }

    pub fn image_zoom(&self) -> f32 {
        self.image_zoom
    }

    pub fn card_center(&self) -> Point {
        self.card_center
    }

    pub fn card_scale(&self) -> f32 {
        self.card_scale
    }

    /// Card side length in preview space.
    pub fn card_size(&self) -> f32 {
        self.frame_size * CARD_BASE_RATIO * self.card_scale
    }

    /// Card bounding box in preview space.
    pub fn card_rect(&self) -> Rectangle {
        let size = self.card_size();
        Rectangle::centered(self.card_center, size, size)
    }

    /// The region the card must stay inside.
    pub fn safe_area(&self) -> Rectangle {
        Rectangle::new(
            CARD_MARGIN,
            CARD_MARGIN,
            self.frame_size - 2.0 * CARD_MARGIN,
            self.frame_size - 2.0 * CARD_MARGIN,
        )
    }

    pub fn set_image_offset(&mut self, offset: Point) {
        if offset.x.is_finite() && offset.y.is_finite() {
            self.image_offset = offset;
        }
    }

    pub fn set_image_zoom(&mut self, zoom: f32) {
        if zoom.is_finite() {
            self.image_zoom = zoom.clamp(MIN_IMAGE_ZOOM, MAX_IMAGE_ZOOM);
        }
    }

    /// Apply one wheel event. Scrolling up (negative `delta_y`) zooms in.
    pub fn zoom_wheel(&mut self, delta_y: f32) {
        let factor = if -delta_y > 0.0 {
            WHEEL_ZOOM_IN
        } else {
            WHEEL_ZOOM_OUT
        };
        self.set_image_zoom(self.image_zoom * factor);
    }

    pub fn zoom_in(&mut self) {
        self.set_image_zoom(self.image_zoom * WHEEL_ZOOM_IN);
    }

    pub fn zoom_out(&mut self) {
        self.set_image_zoom(self.image_zoom * WHEEL_ZOOM_OUT);
    }

    /// Set the card scale and re-clamp the card position.
    pub fn set_card_scale(&mut self, scale: f32) {
        if scale.is_finite() {
            self.card_scale = scale.clamp(MIN_CARD_SCALE, MAX_CARD_SCALE);
            self.clamp_card();
        }
    }

    pub fn grow_card(&mut self) {
        self.set_card_scale(self.card_scale + CARD_SCALE_STEP);
    }

    pub fn shrink_card(&mut self) {
        self.set_card_scale(self.card_scale - CARD_SCALE_STEP);
    }

    /// Move the card center, clamped so the card stays inside the safe area.
    pub fn set_card_center(&mut self, center: Point) {
        if center.x.is_finite() && center.y.is_finite() {
            self.card_center = center;
            self.clamp_card();
        }
    }

    fn clamp_card(&mut self) {
        let half = self.card_size() / 2.0;
        let lo = CARD_MARGIN + half;
        let hi = self.frame_size - CARD_MARGIN - half;
        self.card_center = Point::new(
            self.card_center.x.max(lo).min(hi),
            self.card_center.y.max(lo).min(hi),
        );
    }
}

impl Default for PaletteCardLayout {
    fn default() -> Self {
        Self::new(PREVIEW_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn assert_card_inside(layout: &PaletteCardLayout) {
        let card = layout.card_rect();
        let safe = layout.safe_area();
        assert!(card.x >= safe.x - EPSILON, "left edge {} outside", card.x);
        assert!(card.y >= safe.y - EPSILON, "top edge {} outside", card.y);
        assert!(card.right() <= safe.right() + EPSILON, "right edge {} outside", card.right());
        assert!(card.bottom() <= safe.bottom() + EPSILON, "bottom edge {} outside", card.bottom());
    }

    #[test]
    fn test_defaults() {
        let layout = PaletteCardLayout::default();
        assert_eq!(layout.image_zoom(), 1.0);
        assert_eq!(layout.image_offset(), Point::zero());
        assert_eq!(layout.card_scale(), DEFAULT_CARD_SCALE);
        assert!(approx_eq(layout.card_center().x, 234.0));
        // 468 * 0.78 = 365.04 would leave the bottom edge inside the margin,
        // so the resting position is pulled up to 468 - 12 - 98.28.
        assert!(approx_eq(layout.card_center().y, 357.72));
        assert_card_inside(&layout);
    }

    #[test]
    fn test_max_card_scale_stays_inside_frame() {
        let mut layout = PaletteCardLayout::default();
        layout.set_card_scale(MAX_CARD_SCALE);
        assert_eq!(layout.card_scale(), MAX_CARD_SCALE);
        assert_card_inside(&layout);

        // Default center would push the bottom edge out; it must have moved up.
        let half = layout.card_size() / 2.0;
        assert!(approx_eq(layout.card_center().y, PREVIEW_SIZE - CARD_MARGIN - half));
    }

    #[test]
    fn test_card_scale_is_clamped() {
        let mut layout = PaletteCardLayout::default();
        layout.set_card_scale(5.0);
        assert_eq!(layout.card_scale(), MAX_CARD_SCALE);
        layout.set_card_scale(0.0);
        assert_eq!(layout.card_scale(), MIN_CARD_SCALE);
        layout.set_card_scale(f32::NAN);
        assert_eq!(layout.card_scale(), MIN_CARD_SCALE);
    }

    #[test]
    fn test_card_center_is_clamped_on_move() {
        let mut layout = PaletteCardLayout::default();
        layout.set_card_center(Point::new(-1000.0, 5000.0));
        assert_card_inside(&layout);
        let card = layout.card_rect();
        assert!(approx_eq(card.x, CARD_MARGIN));
        assert!(approx_eq(card.bottom(), PREVIEW_SIZE - CARD_MARGIN));
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut layout = PaletteCardLayout::default();
        layout.set_image_zoom(10.0);
        assert_eq!(layout.image_zoom(), MAX_IMAGE_ZOOM);
        layout.set_image_zoom(0.1);
        assert_eq!(layout.image_zoom(), MIN_IMAGE_ZOOM);
    }

    #[test]
    fn test_wheel_direction() {
        let mut layout = PaletteCardLayout::default();
        layout.zoom_wheel(-100.0);
        assert!(approx_eq(layout.image_zoom(), 1.05));
        layout.zoom_wheel(100.0);
        assert!(approx_eq(layout.image_zoom(), 1.05 * 0.95));
    }

    #[test]
    fn test_wheel_saturates_at_bounds() {
        let mut layout = PaletteCardLayout::default();
        for _ in 0..200 {
            layout.zoom_wheel(-1.0);
        }
        assert_eq!(layout.image_zoom(), MAX_IMAGE_ZOOM);
        for _ in 0..200 {
            layout.zoom_wheel(1.0);
        }
        assert_eq!(layout.image_zoom(), MIN_IMAGE_ZOOM);
    }

    #[test]
    fn test_card_steps() {
        let mut layout = PaletteCardLayout::default();
        layout.grow_card();
        assert!(approx_eq(layout.card_scale(), 0.65));
        layout.shrink_card();
        layout.shrink_card();
        assert!(approx_eq(layout.card_scale(), 0.55));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut layout = PaletteCardLayout::default();
        layout.set_image_zoom(3.0);
        layout.set_image_offset(Point::new(40.0, -12.0));
        layout.set_card_scale(0.4);
        layout.set_card_center(Point::new(100.0, 100.0));
        layout.reset();
        assert_eq!(layout, PaletteCardLayout::default());
    }
}
