//! Checks a computed path length against a scenario's reference lengths.
//!
//! Grid searches must match the grid reference almost exactly. Any-angle
//! solvers legitimately differ a little from one another, so their
//! tolerance is much looser.

use gridlab_paths::Family;

use crate::scenarios::Scenario;

/// Absolute tolerance for any-angle searches.
pub const EPSILON: f64 = 0.545_181_238_833_295_7;

/// Absolute tolerance for grid-optimal searches.
pub const GRID_TOLERANCE: f64 = 0.01;

/// Reference length `family` is checked against in `scenario`.
pub fn reference_length(family: Family, scenario: &Scenario) -> f64 {
    match family {
        Family::GridOptimal => scenario.grid_length,
        Family::AnyAngle => scenario.any_angle_length,
    }
}

/// Tolerance allowed for `family`.
pub fn tolerance(family: Family) -> f64 {
    match family {
        Family::GridOptimal => GRID_TOLERANCE,
        Family::AnyAngle => EPSILON,
    }
}

/// Whether `computed_length` lies strictly within the family's tolerance of
/// the family's reference length.
pub fn is_correct(family: Family, computed_length: f64, scenario: &Scenario) -> bool {
    (computed_length - reference_length(family, scenario)).abs() < tolerance(family)
}
