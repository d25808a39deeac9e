pub mod placed_face;

pub use placed_face::{PlacedFace, PlacedVertex};

use crate::math::Point2;
use crate::topology::{FaceId, DODECAHEDRON_FACES, FACE_COUNT};

/// A planar net under construction.
///
/// Holds one optional slot per face. The root face is placed at the
/// origin with rotation 0 on creation and can never be removed. Mutation
/// goes through [`AttachFace`](crate::operations::creation::AttachFace)
/// and [`DetachFace`](crate::operations::modification::DetachFace).
#[derive(Debug, Clone)]
pub struct Net {
    radius: f64,
    slots: [Option<PlacedFace>; FACE_COUNT],
}

impl Net {
    /// Creates a net holding only the root face.
    ///
    /// `radius` is taken as is; [`crate::build_initial_net`] validates it
    /// against an [`UnfoldConfig`](crate::UnfoldConfig) first.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        let mut slots: [Option<PlacedFace>; FACE_COUNT] = Default::default();
        slots[FaceId::ROOT.index()] = Some(PlacedFace::regular(
            &DODECAHEDRON_FACES[FaceId::ROOT.index()],
            Point2::origin(),
            radius,
            0.0,
        ));
        Self { radius, slots }
    }

    /// Circumradius shared by every face of the net.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the placed face for `id`, if placed.
    #[must_use]
    pub fn get(&self, id: FaceId) -> Option<&PlacedFace> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    /// Returns `true` if `id` is placed.
    #[must_use]
    pub fn contains(&self, id: FaceId) -> bool {
        self.get(id).is_some()
    }

    /// Number of placed faces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// A net always holds the root face.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` once every face is placed.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len() == FACE_COUNT
    }

    /// Placed faces in face-id order.
    pub fn faces(&self) -> impl Iterator<Item = &PlacedFace> {
        self.slots.iter().flatten()
    }

    pub(crate) fn insert(&mut self, face: PlacedFace) {
        if let Some(slot) = self.slots.get_mut(face.face_id.index()) {
            *slot = Some(face);
        }
    }

    pub(crate) fn remove(&mut self, id: FaceId) -> Option<PlacedFace> {
        self.slots.get_mut(id.index()).and_then(Option::take)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_net_holds_only_root() {
        let net = Net::new(100.0);
        assert_eq!(net.len(), 1);
        assert!(!net.is_empty());
        assert!(!net.is_full());
        let root = net.get(FaceId::ROOT).unwrap();
        assert_eq!(root.center, Point2::origin());
        assert!(root.rotation.abs() < 1e-12);
        assert_eq!(net.faces().count(), 1);
    }

    #[test]
    fn out_of_range_lookup_is_none() {
        let net = Net::new(1.0);
        assert!(net.get(FaceId(12)).is_none());
        assert!(!net.contains(FaceId(99)));
    }

    #[test]
    fn remove_clears_slot() {
        let mut net = Net::new(1.0);
        assert!(net.remove(FaceId::ROOT).is_some());
        assert_eq!(net.len(), 0);
        assert!(net.remove(FaceId(30)).is_none());
    }
}
