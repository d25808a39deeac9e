use super::{Point2, Vector2, FORWARD_TOLERANCE, PARALLEL_TOLERANCE};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
) -> Option<(f64, f64)> {
    let cross = d1.x * d2.y - d1.y * d2.x;
    if cross.abs() < PARALLEL_TOLERANCE {
        return None;
    }
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let t = (dx * d2.y - dy * d2.x) / cross;
    let u = (dx * d1.y - dy * d1.x) / cross;
    Some((t, u))
}

/// Ray-segment intersection in 2D.
///
/// Returns the ray parameter `t` at which `origin + t * dir` meets the
/// segment `a`–`b`. Returns `None` if the ray is parallel to the segment,
/// the hit lies outside the segment, or `t` is not clearly ahead of the
/// origin (`t <= FORWARD_TOLERANCE`). For a unit `dir`, `t` is a distance.
#[must_use]
pub fn ray_segment_intersect_2d(
    origin: &Point2,
    dir: &Vector2,
    a: &Point2,
    b: &Point2,
) -> Option<f64> {
    let seg = b - a;
    let (t, u) = line_line_intersect_2d(origin, dir, a, &seg)?;
    if t > FORWARD_TOLERANCE && (0.0..=1.0).contains(&u) {
        Some(t)
    } else {
        None
    }
}

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at(origin: &Point2, dir: &Vector2, t: f64) -> Point2 {
    origin + dir * t
}
