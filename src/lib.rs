//! Planar unfoldings of the regular dodecahedron.
//!
//! Two entry points sit on top of a fixed face table:
//!
//! - a [`Net`] grown one face at a time by attaching neighbors across open
//!   edges of faces already placed;
//! - a ray walk that unrolls the faces crossed by a straight line leaving
//!   the start vertex, so that the distance from the start point to any
//!   later copy of that vertex is a geodesic length on the solid.
//!
//! Every operation is synchronous and recomputes from its inputs. The net
//! is the only long-lived state and belongs to the caller.

pub mod config;
pub mod error;
pub mod math;
pub mod net;
pub mod operations;
pub mod topology;

pub use config::UnfoldConfig;
pub use error::{ConfigError, Result, TopologyError, UnfoldError};
pub use net::{Net, PlacedFace, PlacedVertex};
pub use operations::unfold::{Candidate, RayWalk, SnapResult};
pub use topology::{FaceId, VertexId};

use operations::creation::AttachFace;
use operations::modification::DetachFace;
use operations::query::OpenEdges;
use operations::unfold::{SnapAngle, UnrollRay};
use topology::EDGES_PER_FACE;

/// Creates a net holding only the root face.
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub fn build_initial_net(config: &UnfoldConfig) -> Result<Net> {
    config.validate()?;
    Ok(Net::new(config.radius))
}

/// Attaches the neighbor across `edge` of `parent`; see [`AttachFace`].
///
/// # Errors
///
/// Returns an error if the face table is malformed.
pub fn attach_face(net: &mut Net, parent: FaceId, edge: usize) -> Result<Option<PlacedFace>> {
    AttachFace::new(parent, edge).execute(net)
}

/// Removes a non-root face; see [`DetachFace`].
pub fn detach_face(net: &mut Net, face: FaceId) -> Option<PlacedFace> {
    DetachFace::new(face).execute(net)
}

/// Open-edge mask of `face` under the default policy; see [`OpenEdges`].
///
/// # Errors
///
/// Returns an error if `face` is not a dodecahedron face.
pub fn open_edge_mask(net: &Net, face: FaceId) -> Result<[bool; EDGES_PER_FACE]> {
    OpenEdges::new(face).execute(net)
}

/// Unrolls the faces crossed by a ray at `angle`, returning at most
/// `step_budget` polygons; see [`UnrollRay`].
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the face table is
/// malformed.
pub fn unroll_ray(config: &UnfoldConfig, angle: f64, step_budget: usize) -> Result<RayWalk> {
    UnrollRay::new(angle)
        .with_step_budget(step_budget)
        .execute(config)
}

/// Snaps `free_angle` onto the nearest copy of the start vertex; see [`SnapAngle`].
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the face table is
/// malformed.
pub fn snap_angle(config: &UnfoldConfig, free_angle: f64) -> Result<SnapResult> {
    SnapAngle::new(free_angle).execute(config)
}
