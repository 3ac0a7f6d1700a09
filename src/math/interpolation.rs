//! Linear interpolation helpers shared by the animator and the raster surface

use crate::spatial::tiles::Point;

/// Re-map `value` from one range onto another
///
/// The result is not clamped, so values outside the input range extrapolate. A
/// degenerate input range maps everything to `out_min`.
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    let span = in_max - in_min;
    if span.abs() < f64::EPSILON {
        return out_min;
    }
    ((value - in_min) / span).mul_add(out_max - out_min, out_min)
}

/// Linear interpolation between `a` and `b`
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    t.mul_add(b - a, a)
}

/// Linear interpolation between two points
pub fn lerp_point(a: Point, b: Point, t: f64) -> Point {
    Point::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}
