use crate::math::polygon_2d::{normalize_angle, pentagon_vertices, BASE_OFFSET};
use crate::math::{angle_between_points, Point2};
use crate::topology::{FaceId, FaceTopology, VertexId, EDGES_PER_FACE};

/// A corner of a placed face: its global identity and plane position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedVertex {
    pub id: VertexId,
    pub point: Point2,
}

/// A pentagon laid out in the plane.
///
/// `vertices[i]` is the corner with identity `vertex_ids[i]` of the face's
/// topology entry, so edge `i` of the placed face is edge `i` of the
/// topology. Once created a placed face is never moved.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedFace {
    pub face_id: FaceId,
    pub center: Point2,
    /// Orientation about `center`, radians.
    pub rotation: f64,
    pub vertices: [PlacedVertex; EDGES_PER_FACE],
}

impl PlacedFace {
    /// Builds a regular pentagon for `topology` at `center` with `rotation`.
    #[must_use]
    pub fn regular(topology: &FaceTopology, center: Point2, radius: f64, rotation: f64) -> Self {
        let points = pentagon_vertices(&center, radius, rotation);
        Self {
            face_id: topology.id,
            center,
            rotation,
            vertices: std::array::from_fn(|i| PlacedVertex {
                id: topology.vertex_ids[i],
                point: points[i],
            }),
        }
    }

    /// Builds a placed face from already positioned corners.
    ///
    /// The rotation is recovered from the position of corner 0.
    #[must_use]
    pub fn from_vertices(
        face_id: FaceId,
        center: Point2,
        vertices: [PlacedVertex; EDGES_PER_FACE],
    ) -> Self {
        let rotation =
            normalize_angle(angle_between_points(&center, &vertices[0].point) - BASE_OFFSET);
        Self {
            face_id,
            center,
            rotation,
            vertices,
        }
    }

    /// World-space endpoints of edge `edge`, in boundary order.
    #[must_use]
    pub fn edge_points(&self, edge: usize) -> (Point2, Point2) {
        let edge = edge % EDGES_PER_FACE;
        (
            self.vertices[edge].point,
            self.vertices[(edge + 1) % EDGES_PER_FACE].point,
        )
    }

    /// Corner positions in boundary order.
    #[must_use]
    pub fn points(&self) -> [Point2; EDGES_PER_FACE] {
        self.vertices.map(|v| v.point)
    }

    /// The placed corner carrying `id`, if this face has one.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&PlacedVertex> {
        self.vertices.iter().find(|v| v.id == id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::topology::{face_topology, ANCHOR_VERTEX};

    #[test]
    fn regular_face_carries_topology_ids() {
        let topo = face_topology(FaceId(4)).unwrap();
        let face = PlacedFace::regular(topo, Point2::new(10.0, 5.0), 100.0, 0.3);
        for (v, id) in face.vertices.iter().zip(topo.vertex_ids) {
            assert_eq!(v.id, id);
            assert_abs_diff_eq!((v.point - face.center).norm(), 100.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn rotation_recovered_from_vertices() {
        let topo = face_topology(FaceId(2)).unwrap();
        let face = PlacedFace::regular(topo, Point2::new(-3.0, 8.0), 50.0, 1.25);
        let rebuilt = PlacedFace::from_vertices(face.face_id, face.center, face.vertices);
        assert_abs_diff_eq!(rebuilt.rotation, 1.25, epsilon = 1e-9);
    }

    #[test]
    fn edge_points_wrap() {
        let topo = face_topology(FaceId::ROOT).unwrap();
        let face = PlacedFace::regular(topo, Point2::origin(), 1.0, 0.0);
        let (a, b) = face.edge_points(4);
        assert_eq!(a, face.vertices[4].point);
        assert_eq!(b, face.vertices[0].point);
    }

    #[test]
    fn vertex_lookup_by_identity() {
        let topo = face_topology(FaceId::ROOT).unwrap();
        let face = PlacedFace::regular(topo, Point2::origin(), 1.0, 0.0);
        assert_eq!(face.vertex(ANCHOR_VERTEX).unwrap().point, face.vertices[0].point);
        assert!(face.vertex(VertexId(19)).is_none());
    }
}
