//! Pointer drag state machine for the share preview.
//!
//! `Idle -> DraggingImage | DraggingCard -> Idle`. A pointer-down inside the
//! card bounding box drags the card, anywhere else drags the background image.
//! Wheel events zoom the image in every state.

use crate::geometry::Point;
use crate::layout::PaletteCardLayout;

/// Input events in preview coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up,
    Wheel { delta_y: f32 },
}

/// Which element a drag moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    Image,
    Card,
}

/// Current drag state. Each drag remembers where it started and the value it
/// started from, so moves are applied as absolute deltas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    DraggingImage { start: Point, start_offset: Point },
    DraggingCard { start: Point, start_center: Point },
}

impl DragState {
    pub fn target(&self) -> Option<DragTarget> {
        match self {
            DragState::Idle => None,
            DragState::DraggingImage { .. } => Some(DragTarget::Image),
            DragState::DraggingCard { .. } => Some(DragTarget::Card),
        }
    }
}

/// Drives a [`PaletteCardLayout`] from a stream of pointer events.
#[derive(Debug, Clone, Default)]
pub struct CardInteraction {
    state: DragState,
}

impl CardInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Feed one event. A pointer-down while a drag is active starts over with
    /// a freshly classified target.
    pub fn handle(&mut self, layout: &mut PaletteCardLayout, event: PointerEvent) {
        match event {
            PointerEvent::Down(position) => {
                self.state = if layout.card_rect().contains(position) {
                    DragState::DraggingCard {
                        start: position,
                        start_center: layout.card_center(),
                    }
                } else {
                    DragState::DraggingImage {
                        start: position,
                        start_offset: layout.image_offset(),
                    }
                };
                log::trace!("Drag started: {:?}", self.state.target());
            }
            PointerEvent::Move(position) => match self.state {
                DragState::Idle => {}
                DragState::DraggingImage {
                    start,
                    start_offset,
                } => {
                    layout.set_image_offset(
                        start_offset.offset(position.x - start.x, position.y - start.y),
                    );
                }
                DragState::DraggingCard {
                    start,
                    start_center,
                } => {
                    layout.set_card_center(
                        start_center.offset(position.x - start.x, position.y - start.y),
                    );
                }
            },
            PointerEvent::Up => {
                self.state = DragState::Idle;
            }
            PointerEvent::Wheel { delta_y } => {
                layout.zoom_wheel(delta_y);
            }
        }
    }

    /// Feed a sequence of events in order.
    pub fn replay(
        &mut self,
        layout: &mut PaletteCardLayout,
        events: impl IntoIterator<Item = PointerEvent>,
    ) {
        for event in events {
            self.handle(layout, event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{CARD_MARGIN, PREVIEW_SIZE};

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_drag_outside_card_pans_image() {
        let mut layout = PaletteCardLayout::default();
        let mut interaction = CardInteraction::new();
        let card_before = layout.card_center();

        interaction.handle(&mut layout, PointerEvent::Down(Point::new(20.0, 20.0)));
        assert_eq!(interaction.state().target(), Some(DragTarget::Image));

        interaction.handle(&mut layout, PointerEvent::Move(Point::new(50.0, 10.0)));
        interaction.handle(&mut layout, PointerEvent::Move(Point::new(60.0, 5.0)));
        assert_eq!(layout.image_offset(), Point::new(40.0, -15.0));
        assert_eq!(layout.card_center(), card_before);

        interaction.handle(&mut layout, PointerEvent::Up);
        assert_eq!(interaction.state(), DragState::Idle);
    }

    #[test]
    fn test_drag_inside_card_moves_card() {
        let mut layout = PaletteCardLayout::default();
        let mut interaction = CardInteraction::new();
        let start = layout.card_center();

        interaction.replay(
            &mut layout,
            [
                PointerEvent::Down(start),
                PointerEvent::Move(start.offset(-30.0, -40.0)),
                PointerEvent::Up,
            ],
        );

        assert!(approx_eq(layout.card_center().x, start.x - 30.0));
        assert!(approx_eq(layout.card_center().y, start.y - 40.0));
        assert_eq!(layout.image_offset(), Point::zero());
    }

    #[test]
    fn test_card_drag_is_clamped() {
        let mut layout = PaletteCardLayout::default();
        let mut interaction = CardInteraction::new();
        let start = layout.card_center();

        interaction.replay(
            &mut layout,
            [
                PointerEvent::Down(start),
                PointerEvent::Move(start.offset(-2000.0, -2000.0)),
            ],
        );

        let card = layout.card_rect();
        assert!(approx_eq(card.x, CARD_MARGIN));
        assert!(approx_eq(card.y, CARD_MARGIN));
        assert!(card.right() <= PREVIEW_SIZE - CARD_MARGIN);
    }

    #[test]
    fn test_move_while_idle_is_ignored() {
        let mut layout = PaletteCardLayout::default();
        let before = layout.clone();
        let mut interaction = CardInteraction::new();
        interaction.handle(&mut layout, PointerEvent::Move(Point::new(100.0, 100.0)));
        assert_eq!(layout, before);
    }

    #[test]
    fn test_moves_after_up_are_ignored() {
        let mut layout = PaletteCardLayout::default();
        let mut interaction = CardInteraction::new();
        interaction.replay(
            &mut layout,
            [
                PointerEvent::Down(Point::new(10.0, 10.0)),
                PointerEvent::Move(Point::new(20.0, 10.0)),
                PointerEvent::Up,
                PointerEvent::Move(Point::new(90.0, 90.0)),
            ],
        );
        assert_eq!(layout.image_offset(), Point::new(10.0, 0.0));
    }

    #[test]
    fn test_wheel_zooms_in_any_state() {
        let mut layout = PaletteCardLayout::default();
        let mut interaction = CardInteraction::new();
        let card_point = layout.card_center();

        interaction.handle(&mut layout, PointerEvent::Down(card_point));
        interaction.handle(&mut layout, PointerEvent::Wheel { delta_y: -1.0 });
        assert!(approx_eq(layout.image_zoom(), 1.05));
        assert_eq!(interaction.state().target(), Some(DragTarget::Card));

        interaction.handle(&mut layout, PointerEvent::Up);
        interaction.handle(&mut layout, PointerEvent::Wheel { delta_y: 1.0 });
        assert!(approx_eq(layout.image_zoom(), 1.05 * 0.95));
    }

    #[test]
    fn test_second_down_reclassifies() {
        let mut layout = PaletteCardLayout::default();
        let mut interaction = CardInteraction::new();
        interaction.handle(&mut layout, PointerEvent::Down(Point::new(5.0, 5.0)));
        let center = layout.card_center();
        interaction.handle(&mut layout, PointerEvent::Down(center));
        assert_eq!(interaction.state().target(), Some(DragTarget::Card));
    }
}
