use std::f64::consts::PI;

use tracing::debug;

use super::unroll_ray::{RayWalk, UnrollRay};
use crate::config::UnfoldConfig;
use crate::error::Result;
use crate::math::polygon_2d::circular_angle_diff;
use crate::math::{angle_between_points, Point2};
use crate::net::PlacedFace;

/// Outcome of snapping a free ray angle onto a copy of the start vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapResult {
    /// Angle actually used: the candidate's exact angle when snapped,
    /// otherwise the free angle.
    pub angle: f64,
    pub is_snapped: bool,
    /// Straight-line distance from the start point to the snapped copy,
    /// i.e. the geodesic length along the strip. Zero when not snapped.
    pub snap_distance: f64,
    /// The copy of the start vertex snapped to.
    pub target: Option<Point2>,
    /// Walk recomputed at `angle`.
    pub walk: RayWalk,
    /// Pentagon circumradius the walk was computed with.
    pub radius: f64,
}

impl SnapResult {
    /// Unrolled strip at the reported angle.
    #[must_use]
    pub fn polygons(&self) -> &[PlacedFace] {
        &self.walk.polygons
    }

    /// Position of the start vertex.
    #[must_use]
    pub fn start_point(&self) -> Point2 {
        self.walk.start_point
    }

    /// Geodesic length in units of the circumradius.
    #[must_use]
    pub fn distance_in_radii(&self) -> f64 {
        self.snap_distance / self.radius
    }

    /// Geodesic length in units of the pentagon side.
    #[must_use]
    pub fn distance_in_side_lengths(&self) -> f64 {
        self.snap_distance / (2.0 * self.radius * (PI / 5.0).sin())
    }
}

/// Snaps a free ray angle to the nearest copy of the start vertex.
pub struct SnapAngle {
    free_angle: f64,
}

impl SnapAngle {
    /// Creates a new `SnapAngle` operation.
    #[must_use]
    pub fn new(free_angle: f64) -> Self {
        Self { free_angle }
    }

    /// Executes the snap.
    ///
    /// Unrolls at the free angle, picks the candidate whose direction from
    /// the start point is closest to it within `config.snap_tolerance`, and
    /// if one is found unrolls again at that candidate's exact angle.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the face table
    /// is malformed.
    pub fn execute(&self, config: &UnfoldConfig) -> Result<SnapResult> {
        let free_walk = UnrollRay::new(self.free_angle).execute(config)?;

        let Some((angle, target)) = nearest_candidate(&free_walk, self.free_angle, config) else {
            return Ok(SnapResult {
                angle: self.free_angle,
                is_snapped: false,
                snap_distance: 0.0,
                target: None,
                walk: free_walk,
                radius: config.radius,
            });
        };

        let snap_distance = (target - free_walk.start_point).norm();
        debug!(
            free_angle = self.free_angle,
            angle,
            snap_distance,
            "snapped to start vertex copy"
        );
        let walk = UnrollRay::new(angle).execute(config)?;
        Ok(SnapResult {
            angle,
            is_snapped: true,
            snap_distance,
            target: Some(target),
            walk,
            radius: config.radius,
        })
    }
}

/// Candidate whose direction from the start point is circularly closest to
/// `free_angle`, strictly within the snap tolerance. Copies too close to
/// the start point are the start vertex itself and are skipped.
fn nearest_candidate(
    walk: &RayWalk,
    free_angle: f64,
    config: &UnfoldConfig,
) -> Option<(f64, Point2)> {
    let min_separation = config.min_snap_separation();
    let mut best_diff = config.snap_tolerance;
    let mut best = None;
    for candidate in &walk.candidates {
        if (candidate.point - walk.start_point).norm() < min_separation {
            continue;
        }
        let target_angle = angle_between_points(&walk.start_point, &candidate.point);
        let diff = circular_angle_diff(target_angle, free_angle);
        if diff < best_diff {
            best_diff = diff;
            best = Some((target_angle, candidate.point));
        }
    }
    best
}
