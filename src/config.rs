//! Unfolding configuration.
//!
//! Every tolerance that depends on the drawing scale is stored as a ratio of
//! the pentagon radius, so the walk behaves the same at any unit scale.

use crate::error::ConfigError;

/// Scale and tolerances shared by the net builder, ray unroller and snapper.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnfoldConfig {
    /// Circumradius of every pentagon.
    pub radius: f64,
    /// Maximum number of polygons a single ray walk may return.
    pub step_budget: usize,
    /// Maximum angular distance (radians) at which a free angle snaps.
    pub snap_tolerance: f64,
    /// Starting ray parameter, as a fraction of `radius`.
    pub initial_offset_ratio: f64,
    /// Forward margin past the previous exit, as a fraction of `radius`.
    pub exit_margin_ratio: f64,
    /// Candidates closer than this to the start point are ignored when
    /// snapping, as a fraction of `radius`.
    pub min_snap_separation_ratio: f64,
}

impl Default for UnfoldConfig {
    fn default() -> Self {
        Self {
            radius: 100.0,
            step_budget: 12,
            snap_tolerance: 0.015,
            initial_offset_ratio: 1e-4,
            exit_margin_ratio: 1e-3,
            min_snap_separation_ratio: 0.1,
        }
    }
}

impl UnfoldConfig {
    /// Returns a copy with a different pentagon radius.
    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Returns a copy with a different step budget.
    #[must_use]
    pub fn with_step_budget(mut self, step_budget: usize) -> Self {
        self.step_budget = step_budget;
        self
    }

    /// Returns a copy with a different snap tolerance (radians).
    #[must_use]
    pub fn with_snap_tolerance(mut self, snap_tolerance: f64) -> Self {
        self.snap_tolerance = snap_tolerance;
        self
    }

    /// Ray parameter the walk starts from.
    #[must_use]
    pub fn initial_offset(&self) -> f64 {
        self.radius * self.initial_offset_ratio
    }

    /// Minimum advance past the previous exit for an edge to count as the next exit.
    #[must_use]
    pub fn exit_margin(&self) -> f64 {
        self.radius * self.exit_margin_ratio
    }

    /// Distance below which a candidate is considered the start vertex itself.
    #[must_use]
    pub fn min_snap_separation(&self) -> f64 {
        self.radius * self.min_snap_separation_ratio
    }

    /// Checks that the radius and tolerances are usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for a non-positive or non-finite radius, or a
    /// negative or non-finite tolerance.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        let tolerances = [
            ("snap_tolerance", self.snap_tolerance),
            ("initial_offset_ratio", self.initial_offset_ratio),
            ("exit_margin_ratio", self.exit_margin_ratio),
            ("min_snap_separation_ratio", self.min_snap_separation_ratio),
        ];
        for (name, value) in tolerances {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidTolerance { name, value });
            }
        }
        Ok(())
    }
}
