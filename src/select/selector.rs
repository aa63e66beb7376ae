// SPDX-License-Identifier: GPL-3.0-or-later
// src/select/selector.rs
//
// Pointer-driven rectangle selector: drag to select, ratio lock, boundary
// clamping, and secondary-drag move.

use super::geometry::{clamp_axis, Rect, Vec2};
use super::ratio::RatioConstraint;

/// Pointer button, mapped from the host's mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Pointer event kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    ButtonDown,
    Drag,
    ButtonUp,
}

/// A pointer event in display coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub button: PointerButton,
    pub position: Vec2,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, button: PointerButton, position: Vec2) -> Self {
        Self {
            kind,
            button,
            position,
        }
    }
}

/// Interaction state. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    Selecting,
    Moving,
}

/// Interactive selection rectangle over a displayed image.
///
/// The host feeds pointer events and the current image display rect into
/// `handle_pointer_event` on every UI event; the selection rectangle is
/// always kept inside the display rect and, while the ratio lock is active,
/// at the locked aspect ratio.
#[derive(Debug, Clone, Default)]
pub struct RangeSelector {
    state: SelectionState,
    selection: Rect,
    ratio: RatioConstraint,
    initial_position: Vec2,
    last_position: Vec2,
    needs_redraw: bool,
}

impl RangeSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn selection(&self) -> Rect {
        self.selection
    }

    pub fn ratio(&self) -> RatioConstraint {
        self.ratio
    }

    pub fn set_ratio(&mut self, ratio: RatioConstraint) {
        self.ratio = ratio;
    }

    pub fn is_selecting(&self) -> bool {
        self.state == SelectionState::Selecting
    }

    pub fn is_moving(&self) -> bool {
        self.state == SelectionState::Moving
    }

    /// Whether there is a selection rectangle worth drawing.
    pub fn can_draw_selection(&self) -> bool {
        self.is_selecting() || self.selection.width > 0.0 || self.selection.height > 0.0
    }

    /// Repaint hint: true while a drag is actively changing the selection.
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Process one pointer event against the current image display rect.
    pub fn handle_pointer_event(&mut self, event: PointerEvent, display: Rect) {
        self.needs_redraw = self.state != SelectionState::Idle && event.kind == PointerKind::Drag;

        match self.state {
            SelectionState::Idle => {
                if event.kind != PointerKind::ButtonDown {
                    return;
                }
                match event.button {
                    PointerButton::Primary if display.contains(event.position) => {
                        self.state = SelectionState::Selecting;
                        self.initial_position = event.position;
                        self.selection = Rect::new(event.position.x, event.position.y, 0.0, 0.0);
                    }
                    PointerButton::Secondary if self.selection.contains(event.position) => {
                        self.state = SelectionState::Moving;
                        self.last_position = event.position;
                    }
                    _ => {}
                }
            }
            SelectionState::Selecting => match event.kind {
                PointerKind::Drag => self.update_selection(event.position, display),
                PointerKind::ButtonUp => self.state = SelectionState::Idle,
                PointerKind::ButtonDown => {}
            },
            SelectionState::Moving => match event.kind {
                PointerKind::Drag if event.button == PointerButton::Secondary => {
                    self.move_selection(event.position, display);
                }
                PointerKind::ButtonUp if event.button == PointerButton::Secondary => {
                    self.state = SelectionState::Idle;
                }
                _ => {}
            },
        }
    }

    /// Reset to idle with an empty selection.
    pub fn reset(&mut self) {
        self.state = SelectionState::Idle;
        self.selection = Rect::ZERO;
        self.needs_redraw = false;
    }

    /// Overwrite the selection rectangle. Interaction state is unchanged.
    pub fn set_selection(&mut self, rect: Rect) {
        self.selection = rect;
    }

    /// Reposition the selection rectangle. Interaction state is unchanged.
    pub fn set_selection_position(&mut self, x: f32, y: f32) {
        self.selection.x = x;
        self.selection.y = y;
    }

    fn update_selection(&mut self, position: Vec2, display: Rect) {
        let current = display.clamp_point(position);
        let initial = self.initial_position;

        let mut pos = Vec2::new(initial.x.min(current.x), initial.y.min(current.y));
        let mut width = (current.x - initial.x).abs();
        let mut height = (current.y - initial.y).abs();

        let ratio = self.ratio.target_ratio();
        if let Some(aspect) = ratio {
            if width / height > aspect {
                // Grow the height to match the width.
                height = width / aspect;
                if current.y < initial.y {
                    pos.y = initial.y - height;
                }
            } else {
                // Grow the width to match the height.
                width = height * aspect;
                if current.x < initial.x {
                    pos.x = initial.x - width;
                }
            }
        }

        // Boundary overflow correction. Only the first violated edge, in
        // top/left/right/bottom order, is corrected per update; the cross
        // dimension follows the ratio when locked. The single-edge order
        // is intentional and pinned by tests.
        if pos.y < display.y {
            height = initial.y - display.y;
            if let Some(aspect) = ratio {
                width = height * aspect;
            }
        } else if pos.x < display.x {
            width = initial.x - display.x;
            if let Some(aspect) = ratio {
                height = width / aspect;
            }
        } else if pos.x + width > display.right() {
            width = display.right() - pos.x;
            if let Some(aspect) = ratio {
                height = width / aspect;
            }
        } else if pos.y + height > display.bottom() {
            height = display.bottom() - pos.y;
            if let Some(aspect) = ratio {
                width = height * aspect;
            }
        }

        let pos = adjust_rect_position(initial, current, width, height);
        self.selection = Rect::new(pos.x, pos.y, width, height);
    }

    fn move_selection(&mut self, position: Vec2, display: Rect) {
        let delta = position - self.last_position;
        self.selection.x += delta.x;
        self.selection.y += delta.y;
        clamp_selection_to_display(&mut self.selection, display);
        self.last_position = position;
    }
}

/// Re-derive the rectangle corner from the drag anchor and the final size:
/// on each axis the corner sits at the initial position when dragging
/// forward, and at `initial - size` when dragging backward.
fn adjust_rect_position(initial: Vec2, current: Vec2, width: f32, height: f32) -> Vec2 {
    let x = if initial.x <= current.x {
        initial.x
    } else {
        initial.x - width
    };
    let y = if initial.y <= current.y {
        initial.y
    } else {
        initial.y - height
    };
    Vec2::new(x, y)
}

/// Clamp a selection's position so the whole rectangle stays inside the
/// display rect. Size is never changed here.
fn clamp_selection_to_display(selection: &mut Rect, display: Rect) {
    let x_max = display.right() - selection.width;
    let y_max = display.bottom() - selection.height;
    selection.x = clamp_axis(selection.x, display.x, x_max);
    selection.y = clamp_axis(selection.y, display.y, y_max);
}

#[cfg(test)]
mod tests {
    use super::*;

    const DISPLAY: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 800.0,
        height: 600.0,
    };

    fn down(x: f32, y: f32) -> PointerEvent {
        PointerEvent::new(PointerKind::ButtonDown, PointerButton::Primary, Vec2::new(x, y))
    }

    fn drag(x: f32, y: f32) -> PointerEvent {
        PointerEvent::new(PointerKind::Drag, PointerButton::Primary, Vec2::new(x, y))
    }

    fn up(x: f32, y: f32) -> PointerEvent {
        PointerEvent::new(PointerKind::ButtonUp, PointerButton::Primary, Vec2::new(x, y))
    }

    fn secondary(kind: PointerKind, x: f32, y: f32) -> PointerEvent {
        PointerEvent::new(kind, PointerButton::Secondary, Vec2::new(x, y))
    }

    fn drag_out(selector: &mut RangeSelector, from: (f32, f32), to: (f32, f32)) {
        selector.handle_pointer_event(down(from.0, from.1), DISPLAY);
        selector.handle_pointer_event(drag(to.0, to.1), DISPLAY);
        selector.handle_pointer_event(up(to.0, to.1), DISPLAY);
    }

    fn assert_rect(rect: Rect, expected: (f32, f32, f32, f32)) {
        assert!(
            (rect.x - expected.0).abs() < 1e-3
                && (rect.y - expected.1).abs() < 1e-3
                && (rect.width - expected.2).abs() < 1e-3
                && (rect.height - expected.3).abs() < 1e-3,
            "expected {expected:?}, got {rect:?}"
        );
    }

    #[test]
    fn press_inside_display_starts_selecting() {
        let mut selector = RangeSelector::new();
        selector.handle_pointer_event(down(100.0, 100.0), DISPLAY);
        assert_eq!(selector.state(), SelectionState::Selecting);
        assert_rect(selector.selection(), (100.0, 100.0, 0.0, 0.0));
    }

    #[test]
    fn press_outside_display_is_ignored() {
        let mut selector = RangeSelector::new();
        selector.handle_pointer_event(down(900.0, 100.0), DISPLAY);
        assert_eq!(selector.state(), SelectionState::Idle);
    }

    #[test]
    fn free_drag_spans_initial_to_current() {
        let mut selector = RangeSelector::new();
        drag_out(&mut selector, (100.0, 100.0), (300.0, 250.0));
        assert_eq!(selector.state(), SelectionState::Idle);
        assert_rect(selector.selection(), (100.0, 100.0, 200.0, 150.0));
    }

    #[test]
    fn backward_drag_anchors_at_current_corner() {
        let mut selector = RangeSelector::new();
        drag_out(&mut selector, (300.0, 250.0), (100.0, 100.0));
        assert_rect(selector.selection(), (100.0, 100.0, 200.0, 150.0));
    }

    #[test]
    fn pointer_is_clamped_into_display() {
        let mut selector = RangeSelector::new();
        drag_out(&mut selector, (700.0, 500.0), (900.0, 700.0));
        assert_rect(selector.selection(), (700.0, 500.0, 100.0, 100.0));
    }

    #[test]
    fn ratio_lock_width_dominant_grows_height() {
        // 1:1 lock, drag (100,100) -> (300,150): width 200 dominates
        // (200/50 > 1), so height grows to 200.
        let mut selector = RangeSelector::new();
        selector.set_ratio(RatioConstraint::new(true, 1.0, 1.0));
        drag_out(&mut selector, (100.0, 100.0), (300.0, 150.0));
        assert_rect(selector.selection(), (100.0, 100.0, 200.0, 200.0));
    }

    #[test]
    fn ratio_lock_height_dominant_grows_width() {
        let mut selector = RangeSelector::new();
        selector.set_ratio(RatioConstraint::new(true, 1.0, 1.0));
        drag_out(&mut selector, (100.0, 100.0), (150.0, 300.0));
        assert_rect(selector.selection(), (100.0, 100.0, 200.0, 200.0));
    }

    #[test]
    fn ratio_lock_upward_drag_anchors_bottom_edge() {
        let mut selector = RangeSelector::new();
        selector.set_ratio(RatioConstraint::new(true, 1.0, 1.0));
        drag_out(&mut selector, (300.0, 300.0), (500.0, 250.0));
        // Width 200 dominates; height grows upward from the initial corner.
        assert_rect(selector.selection(), (300.0, 100.0, 200.0, 200.0));
    }

    #[test]
    fn top_overflow_clamps_height_and_recomputes_width() {
        // 2:1 lock from (50,10); ratio growth pushes the top edge above
        // the display, so height clamps to 10 and width follows as 20.
        let mut selector = RangeSelector::new();
        selector.set_ratio(RatioConstraint::new(true, 2.0, 1.0));
        drag_out(&mut selector, (50.0, 10.0), (10.0, 5.0));
        let rect = selector.selection();
        assert!((rect.height - 10.0).abs() < 1e-3, "height: {}", rect.height);
        assert!((rect.width - 20.0).abs() < 1e-3, "width: {}", rect.width);
        assert_rect(rect, (30.0, 0.0, 20.0, 10.0));
    }

    #[test]
    fn left_overflow_clamps_width_and_recomputes_height() {
        let mut selector = RangeSelector::new();
        selector.set_ratio(RatioConstraint::new(true, 1.0, 1.0));
        drag_out(&mut selector, (100.0, 100.0), (99.0, 400.0));
        // Height 300 dominates, width grows to 300 leftward past the edge;
        // correction clamps width to the initial x distance.
        assert_rect(selector.selection(), (0.0, 100.0, 100.0, 100.0));
    }

    #[test]
    fn right_overflow_clamps_width() {
        let mut selector = RangeSelector::new();
        selector.set_ratio(RatioConstraint::new(true, 1.0, 1.0));
        drag_out(&mut selector, (700.0, 100.0), (701.0, 400.0));
        assert_rect(selector.selection(), (700.0, 100.0, 100.0, 100.0));
    }

    #[test]
    fn bottom_overflow_clamps_height() {
        let mut selector = RangeSelector::new();
        selector.set_ratio(RatioConstraint::new(true, 1.0, 2.0));
        drag_out(&mut selector, (50.0, 500.0), (150.0, 501.0));
        // Width 100 dominates (100/1 > 0.5): height grows to 200, overflows
        // the bottom, and is clamped to 100 with width following as 50.
        assert_rect(selector.selection(), (50.0, 500.0, 50.0, 100.0));
    }

    #[test]
    fn top_edge_takes_priority_over_other_corrections() {
        // Single-edge correction: when ratio growth sends the rectangle off
        // the top, only the top correction runs even if a later edge would
        // also need adjusting. Intentional quirk, preserved as-is.
        let mut selector = RangeSelector::new();
        selector.set_ratio(RatioConstraint::new(true, 2.0, 1.0));
        selector.handle_pointer_event(down(50.0, 10.0), DISPLAY);
        selector.handle_pointer_event(drag(90.0, 0.0), DISPLAY);
        let rect = selector.selection();
        assert!((rect.height - 10.0).abs() < 1e-3);
        assert!((rect.width - 20.0).abs() < 1e-3);
    }

    #[test]
    fn selection_stays_contained_through_arbitrary_drags() {
        let points = [
            (400.0, 300.0),
            (850.0, 650.0),
            (-100.0, -100.0),
            (820.0, -50.0),
            (-30.0, 610.0),
            (123.0, 456.0),
        ];
        for ratio in [
            RatioConstraint::default(),
            RatioConstraint::new(true, 16.0, 9.0),
            RatioConstraint::new(true, 9.0, 16.0),
        ] {
            let mut selector = RangeSelector::new();
            selector.set_ratio(ratio);
            selector.handle_pointer_event(down(200.0, 150.0), DISPLAY);
            for (x, y) in points {
                selector.handle_pointer_event(drag(x, y), DISPLAY);
                let rect = selector.selection();
                assert!(rect.x >= DISPLAY.x - 1e-3, "left: {rect:?}");
                assert!(rect.y >= DISPLAY.y - 1e-3, "top: {rect:?}");
                assert!(rect.right() <= DISPLAY.right() + 1e-3, "right: {rect:?}");
                assert!(rect.bottom() <= DISPLAY.bottom() + 1e-3, "bottom: {rect:?}");
            }
            selector.handle_pointer_event(up(123.0, 456.0), DISPLAY);
            assert_eq!(selector.state(), SelectionState::Idle);
        }
    }

    #[test]
    fn ratio_holds_after_unclamped_drags() {
        let mut selector = RangeSelector::new();
        selector.set_ratio(RatioConstraint::new(true, 16.0, 9.0));
        for (to_x, to_y) in [(500.0, 200.0), (420.0, 380.0), (160.0, 90.0)] {
            selector.reset();
            drag_out(&mut selector, (150.0, 120.0), (to_x, to_y));
            let rect = selector.selection();
            let ratio = rect.width / rect.height;
            assert!(
                (ratio - 16.0 / 9.0).abs() / (16.0 / 9.0) < 1e-4,
                "ratio drifted: {ratio}"
            );
        }
    }

    #[test]
    fn zero_ratio_terms_behave_as_unconstrained() {
        let mut selector = RangeSelector::new();
        selector.set_ratio(RatioConstraint::new(true, 1.0, 0.0));
        drag_out(&mut selector, (100.0, 100.0), (300.0, 250.0));
        assert_rect(selector.selection(), (100.0, 100.0, 200.0, 150.0));
    }

    #[test]
    fn zero_size_display_produces_degenerate_selection() {
        let mut selector = RangeSelector::new();
        let display = Rect::new(10.0, 10.0, 0.0, 0.0);
        selector.handle_pointer_event(down(10.0, 10.0), display);
        selector.handle_pointer_event(drag(50.0, 50.0), display);
        let rect = selector.selection();
        assert_eq!((rect.width, rect.height), (0.0, 0.0));
        assert!(rect.x.is_finite() && rect.y.is_finite());
    }

    #[test]
    fn secondary_press_inside_selection_starts_moving() {
        let mut selector = RangeSelector::new();
        drag_out(&mut selector, (100.0, 100.0), (300.0, 250.0));
        selector.handle_pointer_event(secondary(PointerKind::ButtonDown, 200.0, 200.0), DISPLAY);
        assert_eq!(selector.state(), SelectionState::Moving);
    }

    #[test]
    fn secondary_press_outside_selection_is_ignored() {
        let mut selector = RangeSelector::new();
        drag_out(&mut selector, (100.0, 100.0), (300.0, 250.0));
        selector.handle_pointer_event(secondary(PointerKind::ButtonDown, 500.0, 500.0), DISPLAY);
        assert_eq!(selector.state(), SelectionState::Idle);
    }

    #[test]
    fn moving_translates_without_resizing() {
        let mut selector = RangeSelector::new();
        drag_out(&mut selector, (100.0, 100.0), (300.0, 250.0));
        selector.handle_pointer_event(secondary(PointerKind::ButtonDown, 200.0, 200.0), DISPLAY);
        selector.handle_pointer_event(secondary(PointerKind::Drag, 250.0, 180.0), DISPLAY);
        selector.handle_pointer_event(secondary(PointerKind::ButtonUp, 250.0, 180.0), DISPLAY);
        assert_eq!(selector.state(), SelectionState::Idle);
        assert_rect(selector.selection(), (150.0, 80.0, 200.0, 150.0));
    }

    #[test]
    fn moving_clamps_to_display_bounds() {
        let mut selector = RangeSelector::new();
        drag_out(&mut selector, (100.0, 100.0), (300.0, 250.0));
        selector.handle_pointer_event(secondary(PointerKind::ButtonDown, 200.0, 200.0), DISPLAY);
        selector.handle_pointer_event(secondary(PointerKind::Drag, 2000.0, 2000.0), DISPLAY);
        assert_rect(selector.selection(), (600.0, 450.0, 200.0, 150.0));
        selector.handle_pointer_event(secondary(PointerKind::Drag, -2000.0, -2000.0), DISPLAY);
        assert_rect(selector.selection(), (0.0, 0.0, 200.0, 150.0));
    }

    #[test]
    fn reset_returns_to_idle_with_zero_rect() {
        let mut selector = RangeSelector::new();
        selector.handle_pointer_event(down(100.0, 100.0), DISPLAY);
        selector.handle_pointer_event(drag(300.0, 250.0), DISPLAY);
        selector.reset();
        assert_eq!(selector.state(), SelectionState::Idle);
        assert_eq!(selector.selection(), Rect::ZERO);
        assert!(!selector.needs_redraw());
    }

    #[test]
    fn set_selection_keeps_interaction_state() {
        let mut selector = RangeSelector::new();
        selector.handle_pointer_event(down(100.0, 100.0), DISPLAY);
        selector.set_selection(Rect::new(10.0, 10.0, 50.0, 50.0));
        assert_eq!(selector.state(), SelectionState::Selecting);
        assert_rect(selector.selection(), (10.0, 10.0, 50.0, 50.0));
        selector.set_selection_position(20.0, 30.0);
        assert_rect(selector.selection(), (20.0, 30.0, 50.0, 50.0));
    }

    #[test]
    fn redraw_hint_tracks_active_drags() {
        let mut selector = RangeSelector::new();
        assert!(!selector.needs_redraw());
        selector.handle_pointer_event(down(100.0, 100.0), DISPLAY);
        assert!(!selector.needs_redraw());
        selector.handle_pointer_event(drag(200.0, 200.0), DISPLAY);
        assert!(selector.needs_redraw());
        selector.handle_pointer_event(up(200.0, 200.0), DISPLAY);
        assert!(!selector.needs_redraw());
    }

    #[test]
    fn can_draw_while_selecting_or_with_area() {
        let mut selector = RangeSelector::new();
        assert!(!selector.can_draw_selection());
        selector.handle_pointer_event(down(100.0, 100.0), DISPLAY);
        assert!(selector.can_draw_selection());
        drag_out(&mut selector, (100.0, 100.0), (300.0, 250.0));
        assert!(selector.can_draw_selection());
        selector.reset();
        assert!(!selector.can_draw_selection());
    }
}
