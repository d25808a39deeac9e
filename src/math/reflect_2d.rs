use super::{Point2, TOLERANCE};

/// Reflects `p` across the infinite line through `a` and `b`.
///
/// Uses the closed-form reflection matrix of the line direction
/// `(dx, dy)`: `[[dx²−dy², 2dxdy], [2dxdy, dy²−dx²]] / (dx²+dy²)`.
/// If `a` and `b` coincide there is no line; `p` is returned unchanged.
#[must_use]
pub fn reflect_point_2d(p: &Point2, a: &Point2, b: &Point2) -> Point2 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq < TOLERANCE * TOLERANCE {
        return *p;
    }
    let m_a = (dx * dx - dy * dy) / len_sq;
    let m_b = (2.0 * dx * dy) / len_sq;
    let rx = p.x - a.x;
    let ry = p.y - a.y;
    Point2::new(m_a * rx + m_b * ry + a.x, m_b * rx - m_a * ry + a.y)
}
