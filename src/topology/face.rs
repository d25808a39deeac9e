use super::{FaceId, VertexId, EDGES_PER_FACE};

/// Static description of one pentagonal face.
///
/// Edge `i` runs from `vertex_ids[i]` to `vertex_ids[(i + 1) % 5]` and is
/// shared with `neighbors[i]`. The neighbor traverses the same edge in the
/// opposite direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceTopology {
    /// Identifier of this face.
    pub id: FaceId,
    /// Global vertex identities in boundary order.
    pub vertex_ids: [VertexId; EDGES_PER_FACE],
    /// Face across each edge.
    pub neighbors: [FaceId; EDGES_PER_FACE],
}

impl FaceTopology {
    pub(crate) const fn new(id: usize, vertex_ids: [usize; 5], neighbors: [usize; 5]) -> Self {
        Self {
            id: FaceId(id),
            vertex_ids: [
                VertexId(vertex_ids[0]),
                VertexId(vertex_ids[1]),
                VertexId(vertex_ids[2]),
                VertexId(vertex_ids[3]),
                VertexId(vertex_ids[4]),
            ],
            neighbors: [
                FaceId(neighbors[0]),
                FaceId(neighbors[1]),
                FaceId(neighbors[2]),
                FaceId(neighbors[3]),
                FaceId(neighbors[4]),
            ],
        }
    }

    /// Endpoints of edge `edge` in boundary order.
    #[must_use]
    pub fn edge(&self, edge: usize) -> (VertexId, VertexId) {
        let edge = edge % EDGES_PER_FACE;
        (
            self.vertex_ids[edge],
            self.vertex_ids[(edge + 1) % EDGES_PER_FACE],
        )
    }

    /// Local index of the edge shared with `neighbor`, if adjacent.
    #[must_use]
    pub fn edge_to(&self, neighbor: FaceId) -> Option<usize> {
        self.neighbors.iter().position(|&n| n == neighbor)
    }

    /// Local index of `vertex` on this face, if present.
    #[must_use]
    pub fn vertex_index(&self, vertex: VertexId) -> Option<usize> {
        self.vertex_ids.iter().position(|&v| v == vertex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_wraps_around() {
        let face = FaceTopology::new(0, [0, 1, 2, 3, 4], [1, 2, 3, 4, 5]);
        assert_eq!(face.edge(4), (VertexId(4), VertexId(0)));
        assert_eq!(face.edge(1), (VertexId(1), VertexId(2)));
    }

    #[test]
    fn edge_to_finds_neighbor() {
        let face = FaceTopology::new(3, [3, 2, 9, 10, 11], [0, 2, 8, 9, 4]);
        assert_eq!(face.edge_to(FaceId(8)), Some(2));
        assert_eq!(face.edge_to(FaceId(11)), None);
    }

    #[test]
    fn vertex_index_lookup() {
        let face = FaceTopology::new(5, [0, 4, 13, 14, 5], [0, 4, 10, 6, 1]);
        assert_eq!(face.vertex_index(VertexId(14)), Some(3));
        assert_eq!(face.vertex_index(VertexId(1)), None);
    }
}
