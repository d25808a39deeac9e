use std::f64::consts::PI;

use tracing::{debug, trace};

use crate::config::UnfoldConfig;
use crate::error::{Result, TopologyError};
use crate::math::intersect_2d::{point_at, ray_segment_intersect_2d};
use crate::math::reflect_2d::reflect_point_2d;
use crate::math::{direction, Point2, Vector2};
use crate::net::{PlacedFace, PlacedVertex};
use crate::topology::{
    entry_edge, face_topology, FaceId, EDGES_PER_FACE, FACE_COUNT, START_VERTEX,
};

/// Rotation of the root face at the start of a walk.
///
/// Puts corner 0 (the anchor vertex) at angle `π/2`, directly below the
/// centre in a `y`-down frame.
pub const INITIAL_ROTATION: f64 = 3.0 * PI / 5.0;

/// A copy of the start vertex met while unrolling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub point: Point2,
    /// Ray parameter at which the face holding this copy was entered.
    pub distance: f64,
}

/// Faces crossed by a ray, laid flat in order.
#[derive(Debug, Clone, PartialEq)]
pub struct RayWalk {
    /// Ray angle, radians.
    pub angle: f64,
    /// Position of the start vertex on the root face.
    pub start_point: Point2,
    /// Unrolled strip, root face first.
    pub polygons: Vec<PlacedFace>,
    /// Copies of the start vertex in the order they were placed.
    pub candidates: Vec<Candidate>,
}

impl RayWalk {
    /// Unit direction of the ray.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        direction(self.angle)
    }

    /// Point at distance `t` along the ray.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        point_at(&self.start_point, &self.direction(), t)
    }

    /// Face identifiers of the strip, in walk order.
    #[must_use]
    pub fn face_ids(&self) -> Vec<FaceId> {
        self.polygons.iter().map(|p| p.face_id).collect()
    }
}

/// Unrolls the faces crossed by a ray leaving the start vertex.
///
/// Each call recomputes the strip from scratch; nothing is cached between
/// calls.
pub struct UnrollRay {
    angle: f64,
    step_budget: Option<usize>,
}

impl UnrollRay {
    /// Creates a new `UnrollRay` operation for a ray at `angle` radians.
    #[must_use]
    pub fn new(angle: f64) -> Self {
        Self {
            angle,
            step_budget: None,
        }
    }

    /// Caps the number of polygons returned, overriding the configured budget.
    ///
    /// Any value is accepted. A ray that keeps crossing faces runs until
    /// the budget is spent, so the walk length is bounded by the caller.
    #[must_use]
    pub fn with_step_budget(mut self, step_budget: usize) -> Self {
        self.step_budget = Some(step_budget);
        self
    }

    /// Executes the walk.
    ///
    /// The walk ends when the budget is spent or when no edge of the
    /// current face is crossed far enough past the previous exit.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the face table
    /// is malformed.
    pub fn execute(&self, config: &UnfoldConfig) -> Result<RayWalk> {
        config.validate()?;
        let budget = self.step_budget.unwrap_or(config.step_budget);

        let root = PlacedFace::regular(
            face_topology(FaceId::ROOT)?,
            Point2::origin(),
            config.radius,
            INITIAL_ROTATION,
        );
        let start_point = root
            .vertex(START_VERTEX)
            .map(|v| v.point)
            .ok_or(TopologyError::MissingVertex {
                face: FaceId::ROOT.index(),
                vertex: START_VERTEX.index(),
            })?;

        let dir = direction(self.angle);
        let margin = config.exit_margin();
        let mut current_t = config.initial_offset();
        let mut polygons = Vec::with_capacity(budget.min(2 * FACE_COUNT));
        let mut candidates = Vec::new();
        if budget > 0 {
            polygons.push(root);
        }

        while polygons.len() < budget {
            let Some(current) = polygons.last() else {
                break;
            };
            let Some((exit, t)) = find_exit(current, &start_point, &dir, current_t + margin) else {
                debug!(
                    angle = self.angle,
                    faces = polygons.len(),
                    "ray left the unrolled strip"
                );
                break;
            };
            current_t = t;

            let next = unfold_across(current, exit)?;
            trace!(
                from = %current.face_id,
                to = %next.face_id,
                exit,
                t,
                "crossed edge"
            );
            candidates.extend(
                next.vertices
                    .iter()
                    .filter(|v| v.id == START_VERTEX)
                    .map(|v| Candidate {
                        point: v.point,
                        distance: current_t,
                    }),
            );
            polygons.push(next);
        }

        Ok(RayWalk {
            angle: self.angle,
            start_point,
            polygons,
            candidates,
        })
    }
}

/// Edge of `face` through which the ray leaves: the nearest crossing with
/// `t > min_t`. Ties keep the lower edge index.
fn find_exit(
    face: &PlacedFace,
    origin: &Point2,
    dir: &Vector2,
    min_t: f64,
) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for edge in 0..EDGES_PER_FACE {
        let (a, b) = face.edge_points(edge);
        let Some(t) = ray_segment_intersect_2d(origin, dir, &a, &b) else {
            continue;
        };
        if t > min_t && best.is_none_or(|(_, best_t)| t < best_t) {
            best = Some((edge, t));
        }
    }
    best
}

/// Mirrors `current` across its edge `exit` to lay out the face beyond it.
///
/// The entry edge `ce` of the next face is the exit edge reversed, so
/// corner `(ce + m) % 5` of the next face is the image of corner
/// `(exit + 1 − m) % 5` of the current one.
fn unfold_across(current: &PlacedFace, exit: usize) -> Result<PlacedFace> {
    let next_id = face_topology(current.face_id)?.neighbors[exit];
    let next_topology = face_topology(next_id)?;
    let entry = entry_edge(current.face_id, next_id)?;
    let (p1, p2) = current.edge_points(exit);

    let center = reflect_point_2d(&current.center, &p1, &p2);
    let vertices = std::array::from_fn(|target| {
        let m = (target + EDGES_PER_FACE - entry) % EDGES_PER_FACE;
        let source = (exit + 1 + EDGES_PER_FACE - m) % EDGES_PER_FACE;
        PlacedVertex {
            id: next_topology.vertex_ids[target],
            point: reflect_point_2d(&current.vertices[source].point, &p1, &p2),
        }
    });
    Ok(PlacedFace::from_vertices(next_id, center, vertices))
}
