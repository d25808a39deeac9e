use std::f64::consts::PI;

use tracing::debug;

use crate::error::Result;
use crate::math::polygon_2d::pentagon_vertices;
use crate::math::{midpoint, Point2};
use crate::net::{Net, PlacedFace};
use crate::topology::{entry_edge, face_topology, FaceId, EDGES_PER_FACE};

/// Attaches the neighbor across one edge of a placed face.
pub struct AttachFace {
    parent: FaceId,
    edge: usize,
}

impl AttachFace {
    /// Creates a new `AttachFace` operation for edge `edge` of `parent`.
    #[must_use]
    pub fn new(parent: FaceId, edge: usize) -> Self {
        Self { parent, edge }
    }

    /// Executes the attachment, inserting the child face into the net.
    ///
    /// Returns `Ok(None)` without touching the net when the parent is not
    /// placed, the edge index is out of range, the neighbor is already
    /// placed, or the net is full.
    ///
    /// # Errors
    ///
    /// Returns an error if the face table does not list the parent back
    /// from the child.
    pub fn execute(&self, net: &mut Net) -> Result<Option<PlacedFace>> {
        if self.edge >= EDGES_PER_FACE || net.is_full() {
            debug!(parent = %self.parent, edge = self.edge, "attach rejected");
            return Ok(None);
        }
        let Some(parent) = net.get(self.parent) else {
            debug!(parent = %self.parent, "attach rejected: parent not placed");
            return Ok(None);
        };
        let child_id = face_topology(self.parent)?.neighbors[self.edge];
        if net.contains(child_id) {
            debug!(parent = %self.parent, child = %child_id, "attach rejected: already placed");
            return Ok(None);
        }

        let child = place_child(parent, self.edge, child_id, net.radius())?;
        debug!(
            parent = %self.parent,
            edge = self.edge,
            child = %child_id,
            x = child.center.x,
            y = child.center.y,
            "face attached"
        );
        net.insert(child.clone());
        Ok(Some(child))
    }
}

/// Places `child_id` across edge `edge` of `parent`.
///
/// The child centre is the parent centre mirrored through the shared
/// edge's midpoint. The child rotation turns its own bordering edge, as
/// laid out on an unrotated reference pentagon, onto the shared edge
/// traversed in the opposite direction.
pub(crate) fn place_child(
    parent: &PlacedFace,
    edge: usize,
    child_id: FaceId,
    radius: f64,
) -> Result<PlacedFace> {
    let (v1, v2) = parent.edge_points(edge);
    let center = Point2::from(2.0 * midpoint(&v1, &v2).coords - parent.center.coords);

    let child_edge = entry_edge(parent.face_id, child_id)?;
    let world_angle = (v1.y - v2.y).atan2(v1.x - v2.x);

    let reference = pentagon_vertices(&Point2::origin(), radius, 0.0);
    let a = reference[child_edge];
    let b = reference[(child_edge + 1) % EDGES_PER_FACE];
    let local_angle = (a.y - b.y).atan2(a.x - b.x);

    let rotation = world_angle - local_angle + PI;
    Ok(PlacedFace::regular(
        face_topology(child_id)?,
        center,
        radius,
        rotation,
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::topology::{faces, DODECAHEDRON_FACES, FACE_COUNT};

    const TOL: f64 = 1e-6;

    fn assert_shared_edge(parent: &PlacedFace, edge: usize, child: &PlacedFace) {
        let child_edge = entry_edge(parent.face_id, child.face_id).unwrap();
        let (p1, p2) = parent.edge_points(edge);
        let (c1, c2) = child.edge_points(child_edge);
        let direct = (p1 - c1).norm() < TOL && (p2 - c2).norm() < TOL;
        let swapped = (p1 - c2).norm() < TOL && (p2 - c1).norm() < TOL;
        assert!(
            direct || swapped,
            "{} edge {edge} vs {} edge {child_edge}",
            parent.face_id,
            child.face_id
        );
    }

    #[test]
    fn attach_places_child_across_edge() {
        let mut net = Net::new(100.0);
        let child = AttachFace::new(FaceId::ROOT, 2)
            .execute(&mut net)
            .unwrap()
            .unwrap();
        assert_eq!(child.face_id, FaceId(3));
        assert_eq!(net.len(), 2);
        let root = net.get(FaceId::ROOT).unwrap();
        assert_shared_edge(root, 2, &child);
        // Centres of adjacent faces are two apothems apart.
        let apothem = 100.0 * (PI / 5.0).cos();
        assert_abs_diff_eq!((child.center - root.center).norm(), 2.0 * apothem, epsilon = 1e-9);
    }

    #[test]
    fn shared_endpoints_carry_matching_identities() {
        let mut net = Net::new(100.0);
        let child = AttachFace::new(FaceId::ROOT, 0)
            .execute(&mut net)
            .unwrap()
            .unwrap();
        let root = net.get(FaceId::ROOT).unwrap();
        for v in &child.vertices {
            if let Some(same) = root.vertex(v.id) {
                assert!((same.point - v.point).norm() < TOL, "{} moved", v.id);
            }
        }
    }

    #[test]
    fn every_parent_edge_pair_shares_its_edge() {
        // Place each face at an arbitrary pose and attach across every edge.
        for topo in faces() {
            for edge in 0..EDGES_PER_FACE {
                let parent = PlacedFace::regular(topo, Point2::new(13.0, 7.0), 100.0, 0.7);
                let child_id = topo.neighbors[edge];
                let child = place_child(&parent, edge, child_id, 100.0).unwrap();
                assert_shared_edge(&parent, edge, &child);
            }
        }
    }

    #[test]
    fn child_is_a_regular_pentagon() {
        let parent = PlacedFace::regular(&DODECAHEDRON_FACES[7], Point2::new(-40.0, 2.0), 100.0, 2.1);
        let child = place_child(&parent, 3, FaceId(8), 100.0).unwrap();
        let side = (child.vertices[1].point - child.vertices[0].point).norm();
        for i in 0..EDGES_PER_FACE {
            let (a, b) = child.edge_points(i);
            assert_abs_diff_eq!((a - child.center).norm(), 100.0, epsilon = 1e-9);
            assert_abs_diff_eq!((b - a).norm(), side, epsilon = 1e-9);
        }
    }

    #[test]
    fn attach_onto_placed_neighbor_is_noop() {
        let mut net = Net::new(100.0);
        AttachFace::new(FaceId::ROOT, 1).execute(&mut net).unwrap();
        let before = net.clone();
        let again = AttachFace::new(FaceId::ROOT, 1).execute(&mut net).unwrap();
        assert!(again.is_none());
        // Face 2 lists the root on edge 0.
        let back = AttachFace::new(FaceId(2), 0).execute(&mut net).unwrap();
        assert!(back.is_none());
        assert_eq!(net.len(), before.len());
        assert_eq!(net.get(FaceId(2)), before.get(FaceId(2)));
    }

    #[test]
    fn attach_from_unplaced_parent_is_noop() {
        let mut net = Net::new(100.0);
        let r = AttachFace::new(FaceId(11), 0).execute(&mut net).unwrap();
        assert!(r.is_none());
        assert_eq!(net.len(), 1);
    }

    #[test]
    fn attach_with_bad_edge_is_noop() {
        let mut net = Net::new(100.0);
        assert!(AttachFace::new(FaceId::ROOT, 5).execute(&mut net).unwrap().is_none());
        assert!(AttachFace::new(FaceId(40), 0).execute(&mut net).unwrap().is_none());
        assert_eq!(net.len(), 1);
    }

    #[test]
    fn full_net_has_twelve_distinct_centres() {
        let mut net = Net::new(100.0);
        let mut queue = vec![FaceId::ROOT];
        let mut attached = 0;
        while let Some(parent) = queue.pop() {
            for edge in 0..EDGES_PER_FACE {
                if let Some(child) = AttachFace::new(parent, edge).execute(&mut net).unwrap() {
                    attached += 1;
                    queue.push(child.face_id);
                }
            }
        }
        assert_eq!(attached, FACE_COUNT - 1);
        assert_eq!(net.len(), FACE_COUNT);
        assert!(net.is_full());

        let centres: Vec<Point2> = net.faces().map(|f| f.center).collect();
        for i in 0..centres.len() {
            for j in (i + 1)..centres.len() {
                assert!((centres[i] - centres[j]).norm() > 1.0, "faces {i} and {j} coincide");
            }
        }

        // Nothing more can be attached to a full net.
        for parent in FaceId::all() {
            for edge in 0..EDGES_PER_FACE {
                assert!(AttachFace::new(parent, edge).execute(&mut net).unwrap().is_none());
            }
        }
        assert_eq!(net.len(), FACE_COUNT);
    }
}
