use tracing::debug;

use crate::net::{Net, PlacedFace};
use crate::topology::FaceId;

/// Removes a placed face from a net.
///
/// The root face anchors the net and is never removed. Faces attached
/// through the removed one stay where they are.
pub struct DetachFace {
    face: FaceId,
}

impl DetachFace {
    /// Creates a new `DetachFace` operation.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self { face }
    }

    /// Executes the removal, returning the removed face.
    ///
    /// Returns `None` and leaves the net unchanged for the root face or a
    /// face that is not placed.
    pub fn execute(&self, net: &mut Net) -> Option<PlacedFace> {
        if self.face == FaceId::ROOT {
            debug!("detach rejected: root face is fixed");
            return None;
        }
        let removed = net.remove(self.face);
        if removed.is_some() {
            debug!(face = %self.face, remaining = net.len(), "face detached");
        }
        removed
    }
}
