use thiserror::Error;

/// Top-level error type for dodecahedron unfolding.
#[derive(Debug, Error)]
pub enum UnfoldError {
    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised by the compiled-in face table.
///
/// Any of these means the table itself is wrong; callers should report and
/// stop rather than retry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    #[error("face {0} is out of range [0, 12)")]
    FaceOutOfRange(usize),

    #[error("face {neighbor} is listed as a neighbor of face {face} but does not list it back")]
    MalformedAdjacency { face: usize, neighbor: usize },

    #[error("edge {edge} of face {face} does not match the reversed edge on face {neighbor}")]
    MismatchedEdge {
        face: usize,
        edge: usize,
        neighbor: usize,
    },

    #[error("vertex {vertex} does not lie on face {face}")]
    MissingVertex { face: usize, vertex: usize },

    #[error("vertex {vertex} is used by {count} faces, expected 3")]
    VertexValence { vertex: usize, count: usize },
}

/// Errors related to unfolding configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("radius must be finite and positive, got {0}")]
    InvalidRadius(f64),

    #[error("tolerance {name} must be finite and non-negative, got {value}")]
    InvalidTolerance { name: &'static str, value: f64 },
}

/// Convenience type alias for results using [`UnfoldError`].
pub type Result<T> = std::result::Result<T, UnfoldError>;
