use crate::error::Result;
use crate::net::Net;
use crate::topology::{face_topology, FaceId, EDGES_PER_FACE};

/// Which edges of a placed face are offered as open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// An edge is open while the face across it is not placed.
    #[default]
    UnplacedNeighbor,
    /// Every edge is open except those bordering the root face, so the
    /// root can never be reached through its own edges.
    ProtectRoot,
}

/// Computes the open-edge mask of a placed face.
pub struct OpenEdges {
    face: FaceId,
    policy: EdgePolicy,
}

impl OpenEdges {
    /// Creates a new `OpenEdges` query with the default policy.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self {
            face,
            policy: EdgePolicy::default(),
        }
    }

    /// Uses `policy` instead of the default.
    #[must_use]
    pub fn with_policy(mut self, policy: EdgePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Executes the query.
    ///
    /// A face that is not placed has no open edges.
    ///
    /// # Errors
    ///
    /// Returns an error if `face` is not a dodecahedron face.
    pub fn execute(&self, net: &Net) -> Result<[bool; EDGES_PER_FACE]> {
        let topology = face_topology(self.face)?;
        if !net.contains(self.face) {
            return Ok([false; EDGES_PER_FACE]);
        }
        Ok(topology.neighbors.map(|neighbor| match self.policy {
            EdgePolicy::UnplacedNeighbor => !net.contains(neighbor),
            EdgePolicy::ProtectRoot => neighbor != FaceId::ROOT,
        }))
    }
}
