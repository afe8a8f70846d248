//! Hex geometry: axial→pixel projection and hexagon corner construction.
//!
//! Pointy-top orientation. All functions are pure; the viewport transform
//! is applied by folding the pan offset directly into the projection.

use hexplay_protocol::{Point, ViewTransform};

use crate::model::Coord;

/// Base hexagon radius (center to corner) in logical pixels at scale 1.
pub const HEX_SIZE: f64 = 24.0;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Project a grid coordinate to its on-screen center pixel.
///
/// `center` is the pixel the grid origin maps to under an identity
/// transform (normally the viewport center).
pub fn axial_to_pixel(coord: Coord, transform: &ViewTransform, center: Point) -> Point {
    let size = HEX_SIZE * transform.effective_scale();
    let x = size * SQRT_3 * (f64::from(coord.q) + f64::from(coord.r) / 2.0);
    let y = size * 1.5 * f64::from(coord.r);
    Point::new(
        center.x + transform.offset_x + x,
        center.y + transform.offset_y + y,
    )
}

/// The six corners of a hexagon centered at `center`.
///
/// Corner `i` sits at `60·i − 30` degrees, radius `HEX_SIZE·scale`. The
/// order is fixed (starting at −30°, ascending angle) so the polygon's
/// edges never self-intersect. A non-positive scale is floored to a small
/// epsilon rather than producing degenerate geometry.
pub fn hex_corners(center: Point, scale: f64) -> [Point; 6] {
    let size = HEX_SIZE * scale.max(ViewTransform::MIN_SCALE);
    std::array::from_fn(|i| {
        let angle = (60.0 * i as f64 - 30.0).to_radians();
        Point::new(center.x + size * angle.cos(), center.y + size * angle.sin())
    })
}
