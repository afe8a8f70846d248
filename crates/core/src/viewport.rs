//! Viewport controller: owns the pan/zoom transform and turns raw pointer,
//! wheel, and two-finger input into transform updates.

use hexplay_protocol::{Point, ViewTransform};

/// Multiplier applied per wheel tick.
pub const ZOOM_STEP: f64 = 1.05;
/// Zoom clamp range. Unbounded zoom lets one runaway gesture make the
/// scene unrecoverable; these bounds keep every gesture reversible.
pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 10.0;

/// A drag under this many pixels of cumulative movement still counts as a
/// click, which keeps click-to-select viable alongside panning.
const CLICK_SLOP_PX: f64 = 2.0;

/// Pan/zoom state machine. One instance lives for the whole session; the
/// transform deliberately persists across snapshot navigation and replay
/// reloads.
#[derive(Debug, Clone)]
pub struct ViewportController {
    transform: ViewTransform,
    dragging: bool,
    moved: bool,
    last_pos: Point,
    pinch_reference: Option<f64>,
}

impl ViewportController {
    pub fn new() -> Self {
        Self {
            transform: ViewTransform::identity(),
            dragging: false,
            moved: false,
            last_pos: Point::new(0.0, 0.0),
            pinch_reference: None,
        }
    }

    pub fn transform(&self) -> &ViewTransform {
        &self.transform
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Reset pan and zoom to the identity view.
    pub fn reset(&mut self) {
        self.transform = ViewTransform::identity();
    }

    // --- Pan ---

    pub fn begin_drag(&mut self, pos: Point) {
        self.dragging = true;
        self.moved = false;
        self.last_pos = pos;
    }

    /// Apply a pointer move. Returns whether the transform changed (i.e.
    /// the caller should re-render).
    pub fn drag_to(&mut self, pos: Point) -> bool {
        if !self.dragging {
            return false;
        }
        let dx = pos.x - self.last_pos.x;
        let dy = pos.y - self.last_pos.y;
        if dx.abs() > CLICK_SLOP_PX || dy.abs() > CLICK_SLOP_PX {
            self.moved = true;
        }
        self.transform.offset_x += dx;
        self.transform.offset_y += dy;
        self.last_pos = pos;
        true
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Direct pan, for keyboard-driven frontends.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.transform.offset_x += dx;
        self.transform.offset_y += dy;
    }

    /// Whether the gesture that just ended never left the click slop —
    /// i.e. it should be treated as a click, not a pan.
    pub fn drag_was_click(&self) -> bool {
        !self.moved
    }

    // --- Zoom ---

    pub fn zoom_in(&mut self) {
        self.apply_zoom_factor(ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.apply_zoom_factor(1.0 / ZOOM_STEP);
    }

    /// Multiply the scale by `factor`, clamped to the zoom bounds.
    /// Non-finite or non-positive factors are discarded.
    pub fn apply_zoom_factor(&mut self, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        self.transform.scale = (self.transform.scale * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    // --- Pinch ---

    /// Two fingers down: record the reference distance.
    pub fn pinch_begin(&mut self, distance: f64) {
        if distance > 0.0 {
            self.pinch_reference = Some(distance);
        }
    }

    /// Two-finger move: scale by the incremental distance ratio and reset
    /// the reference, so successive moves compose multiplicatively instead
    /// of re-scaling from the gesture start. Returns whether the transform
    /// changed.
    pub fn pinch_update(&mut self, distance: f64) -> bool {
        let Some(reference) = self.pinch_reference else {
            return false;
        };
        if distance <= 0.0 {
            return false;
        }
        self.apply_zoom_factor(distance / reference);
        self.pinch_reference = Some(distance);
        true
    }

    /// Fewer than two fingers remain: the gesture is over.
    pub fn pinch_end(&mut self) {
        self.pinch_reference = None;
    }
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_accumulates_offset() {
        let mut vc = ViewportController::new();
        vc.begin_drag(Point::new(100.0, 100.0));
        assert!(vc.drag_to(Point::new(110.0, 95.0)));
        assert!(vc.drag_to(Point::new(120.0, 90.0)));
        vc.end_drag();
        assert!((vc.transform().offset_x - 20.0).abs() < 1e-9);
        assert!((vc.transform().offset_y + 10.0).abs() < 1e-9);
    }

    #[test]
    fn pan_by_shifts_the_offset() {
        let mut vc = ViewportController::new();
        vc.pan_by(-30.0, 15.0);
        vc.pan_by(-30.0, 15.0);
        assert!((vc.transform().offset_x + 60.0).abs() < 1e-9);
        assert!((vc.transform().offset_y - 30.0).abs() < 1e-9);
    }

    #[test]
    fn move_without_drag_is_ignored() {
        let mut vc = ViewportController::new();
        assert!(!vc.drag_to(Point::new(50.0, 50.0)));
        assert_eq!(vc.transform().offset_x, 0.0);
    }

    #[test]
    fn tiny_drag_counts_as_click() {
        let mut vc = ViewportController::new();
        vc.begin_drag(Point::new(10.0, 10.0));
        vc.drag_to(Point::new(11.0, 11.0));
        vc.end_drag();
        assert!(vc.drag_was_click());

        vc.begin_drag(Point::new(10.0, 10.0));
        vc.drag_to(Point::new(20.0, 10.0));
        vc.end_drag();
        assert!(!vc.drag_was_click());
    }

    #[test]
    fn wheel_steps_compose() {
        let mut vc = ViewportController::new();
        vc.zoom_in();
        vc.zoom_in();
        assert!((vc.transform().scale - ZOOM_STEP * ZOOM_STEP).abs() < 1e-12);
        vc.zoom_out();
        vc.zoom_out();
        assert!((vc.transform().scale - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zoom_clamps_to_bounds() {
        let mut vc = ViewportController::new();
        vc.apply_zoom_factor(1e6);
        assert!((vc.transform().scale - MAX_ZOOM).abs() < 1e-12);
        vc.apply_zoom_factor(1e-9);
        assert!((vc.transform().scale - MIN_ZOOM).abs() < 1e-12);
    }

    #[test]
    fn degenerate_zoom_factors_are_discarded() {
        let mut vc = ViewportController::new();
        vc.apply_zoom_factor(0.0);
        vc.apply_zoom_factor(-2.0);
        vc.apply_zoom_factor(f64::NAN);
        vc.apply_zoom_factor(f64::INFINITY);
        assert!((vc.transform().scale - 1.0).abs() < 1e-12);
    }

    #[test]
    fn pinch_scales_by_distance_ratio() {
        let mut vc = ViewportController::new();
        vc.pinch_begin(100.0);
        assert!(vc.pinch_update(150.0));
        assert!((vc.transform().scale - 1.5).abs() < 1e-12);
    }

    #[test]
    fn pinch_moves_compose_multiplicatively() {
        let mut vc = ViewportController::new();
        vc.pinch_begin(100.0);
        vc.pinch_update(150.0);
        vc.pinch_update(300.0);
        // (150/100) * (300/150) = 3.0
        assert!((vc.transform().scale - 3.0).abs() < 1e-12);
    }

    #[test]
    fn pinch_without_begin_is_a_no_op() {
        let mut vc = ViewportController::new();
        assert!(!vc.pinch_update(200.0));
        assert!((vc.transform().scale - 1.0).abs() < 1e-12);
    }

    #[test]
    fn pinch_end_clears_the_reference() {
        let mut vc = ViewportController::new();
        vc.pinch_begin(100.0);
        vc.pinch_end();
        assert!(!vc.pinch_update(200.0));
    }

    #[test]
    fn reset_restores_identity() {
        let mut vc = ViewportController::new();
        vc.begin_drag(Point::new(0.0, 0.0));
        vc.drag_to(Point::new(40.0, 40.0));
        vc.end_drag();
        vc.zoom_in();
        vc.reset();
        assert_eq!(*vc.transform(), ViewTransform::identity());
    }
}
