mod snap_angle;
mod unroll_ray;

pub use snap_angle::{SnapAngle, SnapResult};
pub use unroll_ray::{Candidate, RayWalk, UnrollRay, INITIAL_ROTATION};
