use std::f64::consts::{PI, TAU};

use super::Point2;

/// Angle of vertex 0 of an unrotated regular polygon.
///
/// At rotation 0 a pentagon then has vertices 1 and 2 mirrored about the
/// `y` axis, so edge 1 is horizontal. Every edge index in the crate relies
/// on this convention.
pub const BASE_OFFSET: f64 = -PI / 10.0;

/// Vertices of a regular polygon with `N` corners.
///
/// Vertex `i` sits at angle `BASE_OFFSET + i * 2π/N + rotation` and
/// distance `radius` from `center`.
#[must_use]
pub fn regular_polygon_vertices<const N: usize>(
    center: &Point2,
    radius: f64,
    rotation: f64,
) -> [Point2; N] {
    #[allow(clippy::cast_precision_loss)]
    let step = TAU / N as f64;
    std::array::from_fn(|i| {
        #[allow(clippy::cast_precision_loss)]
        let angle = BASE_OFFSET + i as f64 * step + rotation;
        Point2::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        )
    })
}

/// Regular pentagon vertices in the crate's orientation convention.
#[must_use]
pub fn pentagon_vertices(center: &Point2, radius: f64, rotation: f64) -> [Point2; 5] {
    regular_polygon_vertices::<5>(center, radius, rotation)
}

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise in a `y`-up frame, negative otherwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Absolute difference between two angles, wrapped into `[0, π]`.
#[must_use]
pub fn circular_angle_diff(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(TAU);
    if diff > PI {
        TAU - diff
    } else {
        diff
    }
}

/// Wraps an angle into `(-π, π]`.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn pentagon_radius_and_sides() {
        let c = Point2::new(3.0, -4.0);
        let verts = pentagon_vertices(&c, 100.0, 0.37);
        let side = (verts[1] - verts[0]).norm();
        for i in 0..5 {
            assert_abs_diff_eq!((verts[i] - c).norm(), 100.0, epsilon = 1e-9);
            assert_abs_diff_eq!((verts[(i + 1) % 5] - verts[i]).norm(), side, epsilon = 1e-9);
        }
        // Side of a regular pentagon: 2R sin(36°).
        assert_abs_diff_eq!(side, 200.0 * (PI / 5.0).sin(), epsilon = 1e-9);
    }

    #[test]
    fn unrotated_pentagon_has_horizontal_edge() {
        let verts = pentagon_vertices(&Point2::origin(), 1.0, 0.0);
        assert!((verts[1].y - verts[2].y).abs() < TOL);
        assert!((verts[1].x + verts[2].x).abs() < TOL);
        // Opposite vertex sits straight down the y axis.
        assert!(verts[4].x.abs() < TOL);
        assert!((verts[4].y + 1.0).abs() < TOL);
    }

    #[test]
    fn square_has_right_angles() {
        let verts = regular_polygon_vertices::<4>(&Point2::origin(), 2.0, 0.3);
        for i in 0..4 {
            let a = verts[(i + 1) % 4] - verts[i];
            let b = verts[(i + 2) % 4] - verts[(i + 1) % 4];
            assert!(a.dot(&b).abs() < 1e-9);
        }
    }

    #[test]
    fn generated_pentagon_winds_counter_clockwise() {
        let verts = pentagon_vertices(&Point2::origin(), 1.0, 0.0);
        assert!(signed_area_2d(&verts) > 0.0);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area_2d(&[Point2::origin()]).abs() < TOL);
        assert!(signed_area_2d(&[]).abs() < TOL);
    }

    #[test]
    fn circular_diff_wraps() {
        assert_abs_diff_eq!(circular_angle_diff(0.1, -0.1), 0.2, epsilon = TOL);
        assert_abs_diff_eq!(circular_angle_diff(PI - 0.05, -PI + 0.05), 0.1, epsilon = 1e-9);
        assert_abs_diff_eq!(circular_angle_diff(0.0, TAU), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn normalize_angle_range() {
        assert_abs_diff_eq!(normalize_angle(3.0 * PI / 2.0), -PI / 2.0, epsilon = TOL);
        assert_abs_diff_eq!(normalize_angle(-0.25), -0.25, epsilon = TOL);
        assert_abs_diff_eq!(normalize_angle(PI), PI, epsilon = TOL);
    }
}
