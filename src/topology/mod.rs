//! Fixed face-adjacency topology of the regular dodecahedron.

pub mod dodecahedron;
pub mod face;

pub use dodecahedron::{
    entry_edge, face_topology, faces, validate, ANCHOR_VERTEX, DODECAHEDRON_FACES, START_VERTEX,
};
pub use face::FaceTopology;

use std::fmt;

/// Number of faces of the dodecahedron.
pub const FACE_COUNT: usize = 12;

/// Number of vertices of the dodecahedron.
pub const VERTEX_COUNT: usize = 20;

/// Number of edges (and corners) of each pentagonal face.
pub const EDGES_PER_FACE: usize = 5;

/// Identifier of a face, `0..12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub usize);

impl FaceId {
    /// The root face: fixed anchor of every net and the first face of every walk.
    pub const ROOT: Self = Self(0);

    /// Returns the raw index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }

    /// Iterates over every face identifier in order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..FACE_COUNT).map(Self)
    }
}

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

/// Global identity of a dodecahedron corner, `0..20`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

impl VertexId {
    /// Returns the raw index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V{}", self.0)
    }
}
