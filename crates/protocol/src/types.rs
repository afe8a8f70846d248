use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The drawing surface the scene is projected onto.
///
/// `dpr` is the device pixel ratio of the backing store; renderers that
/// rasterize themselves (canvas, wasm hosts) multiply their buffer size by
/// it so strokes and text stay crisp on high-density displays. `width` and
/// `height` are logical (CSS) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            dpr: 1.0,
        }
    }

    /// Logical center of the surface — the pixel the grid origin maps to
    /// under an identity transform.
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Pan offset + zoom scale applied when projecting grid coordinates to
/// screen pixels.
///
/// Owned by the viewport controller and persists across snapshot
/// navigation; only a fresh session resets it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    /// Pan translation in logical pixels.
    pub offset_x: f64,
    pub offset_y: f64,
    /// Zoom multiplier. Positive; controllers clamp it, and projection
    /// additionally floors it at [`ViewTransform::MIN_SCALE`] so a
    /// degenerate value can never produce inverted or zero-area geometry.
    pub scale: f64,
}

impl ViewTransform {
    /// Smallest scale the projection will ever use.
    pub const MIN_SCALE: f64 = 1e-3;

    pub fn identity() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            scale: 1.0,
        }
    }

    /// Scale with the degenerate-input floor applied.
    pub fn effective_scale(&self) -> f64 {
        if self.scale > Self::MIN_SCALE {
            self.scale
        } else {
            Self::MIN_SCALE
        }
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_center() {
        let vp = Viewport::new(800.0, 600.0);
        let c = vp.center();
        assert!((c.x - 400.0).abs() < f64::EPSILON);
        assert!((c.y - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn effective_scale_floors_degenerate_values() {
        let mut tf = ViewTransform::identity();
        tf.scale = 0.0;
        assert!(tf.effective_scale() > 0.0);
        tf.scale = -2.0;
        assert!(tf.effective_scale() > 0.0);
        tf.scale = 1.5;
        assert!((tf.effective_scale() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn transform_serde_roundtrip() {
        let tf = ViewTransform {
            offset_x: 12.0,
            offset_y: -4.0,
            scale: 2.0,
        };
        let json = serde_json::to_string(&tf).unwrap_or_default();
        let tf2: ViewTransform = serde_json::from_str(&json).unwrap_or_default();
        assert_eq!(tf, tf2);
    }
}
