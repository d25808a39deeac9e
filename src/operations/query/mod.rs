mod open_edges;

pub use open_edges::{EdgePolicy, OpenEdges};
