pub mod intersect_2d;
pub mod polygon_2d;
pub mod reflect_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Determinant below which a ray and a segment are treated as parallel.
pub const PARALLEL_TOLERANCE: f64 = 1e-9;

/// Smallest ray parameter accepted as a forward hit.
pub const FORWARD_TOLERANCE: f64 = 1e-5;

/// Midpoint of the segment `a`–`b`.
#[must_use]
pub fn midpoint(a: &Point2, b: &Point2) -> Point2 {
    nalgebra::center(a, b)
}

/// Unit direction vector for an angle in radians.
#[must_use]
pub fn direction(angle: f64) -> Vector2 {
    Vector2::new(angle.cos(), angle.sin())
}

/// Angle of the vector from `from` to `to`.
#[must_use]
pub fn angle_between_points(from: &Point2, to: &Point2) -> f64 {
    let d = to - from;
    d.y.atan2(d.x)
}
