use super::{FaceId, FaceTopology, VertexId, FACE_COUNT, VERTEX_COUNT};
use crate::error::TopologyError;

/// Start vertex of every ray walk, and the identity whose copies are snap targets.
pub const START_VERTEX: VertexId = VertexId(1);

/// Vertex placed directly below the centre of face 0 when a walk begins.
pub const ANCHOR_VERTEX: VertexId = VertexId(0);

/// Face table of the regular dodecahedron.
///
/// Face 0 is the bottom, faces 1–5 the lower ring (face `k` shares the
/// root's edge `k − 1`), faces 6–10 the upper ring and face 11 the top.
/// Downstream geometry depends on these exact values.
pub const DODECAHEDRON_FACES: [FaceTopology; FACE_COUNT] = [
    FaceTopology::new(0, [0, 1, 2, 3, 4], [1, 2, 3, 4, 5]),
    FaceTopology::new(1, [1, 0, 5, 6, 7], [0, 5, 6, 7, 2]),
    FaceTopology::new(2, [2, 1, 7, 8, 9], [0, 1, 7, 8, 3]),
    FaceTopology::new(3, [3, 2, 9, 10, 11], [0, 2, 8, 9, 4]),
    FaceTopology::new(4, [4, 3, 11, 12, 13], [0, 3, 9, 10, 5]),
    FaceTopology::new(5, [0, 4, 13, 14, 5], [0, 4, 10, 6, 1]),
    FaceTopology::new(6, [6, 5, 14, 19, 15], [1, 5, 10, 11, 7]),
    FaceTopology::new(7, [7, 6, 15, 16, 8], [1, 6, 11, 8, 2]),
    FaceTopology::new(8, [8, 16, 17, 10, 9], [7, 11, 9, 3, 2]),
    FaceTopology::new(9, [10, 17, 18, 12, 11], [8, 11, 10, 4, 3]),
    FaceTopology::new(10, [12, 18, 19, 14, 13], [9, 11, 6, 5, 4]),
    FaceTopology::new(11, [15, 19, 18, 17, 16], [6, 10, 9, 8, 7]),
];

/// All twelve faces, indexed by face id.
#[must_use]
pub fn faces() -> &'static [FaceTopology; FACE_COUNT] {
    &DODECAHEDRON_FACES
}

/// Returns the topology entry for `id`.
///
/// # Errors
///
/// Returns `TopologyError::FaceOutOfRange` if `id` is not in `0..12`.
pub fn face_topology(id: FaceId) -> Result<&'static FaceTopology, TopologyError> {
    DODECAHEDRON_FACES
        .get(id.index())
        .ok_or(TopologyError::FaceOutOfRange(id.index()))
}

/// Local edge index on `to` of the edge it shares with `from`.
///
/// # Errors
///
/// Returns `TopologyError::MalformedAdjacency` if `to` does not list `from`
/// as a neighbor, or `FaceOutOfRange` for an unknown face.
pub fn entry_edge(from: FaceId, to: FaceId) -> Result<usize, TopologyError> {
    face_topology(to)?
        .edge_to(from)
        .ok_or(TopologyError::MalformedAdjacency {
            face: from.index(),
            neighbor: to.index(),
        })
}

/// Checks the whole table.
///
/// Every edge must be listed by both faces with its endpoints reversed, and
/// every vertex must be shared by exactly three faces.
///
/// # Errors
///
/// Returns the first violation found.
pub fn validate() -> Result<(), TopologyError> {
    validate_faces(&DODECAHEDRON_FACES)
}

pub(crate) fn validate_faces(table: &[FaceTopology; FACE_COUNT]) -> Result<(), TopologyError> {
    let lookup = |id: FaceId| {
        table
            .get(id.index())
            .ok_or(TopologyError::FaceOutOfRange(id.index()))
    };

    let mut valence = [0_usize; VERTEX_COUNT];
    for face in table {
        for (edge, &neighbor) in face.neighbors.iter().enumerate() {
            let other = lookup(neighbor)?;
            let back = other
                .edge_to(face.id)
                .ok_or(TopologyError::MalformedAdjacency {
                    face: face.id.index(),
                    neighbor: neighbor.index(),
                })?;
            let (v1, v2) = face.edge(edge);
            let (w1, w2) = other.edge(back);
            if v1 != w2 || v2 != w1 {
                return Err(TopologyError::MismatchedEdge {
                    face: face.id.index(),
                    edge,
                    neighbor: neighbor.index(),
                });
            }
        }
        for vertex in face.vertex_ids {
            match valence.get_mut(vertex.index()) {
                Some(count) => *count += 1,
                None => {
                    return Err(TopologyError::VertexValence {
                        vertex: vertex.index(),
                        count: 0,
                    })
                }
            }
        }
    }

    for (vertex, &count) in valence.iter().enumerate() {
        if count != 3 {
            return Err(TopologyError::VertexValence { vertex, count });
        }
    }
    Ok(())
}
