//! The fixed pool of test scenarios.
//!
//! All scenarios share one 15×30 obstacle map. Each has a start, a goal and
//! two reference path lengths: one for any-angle searches and one for
//! searches on the 8-connected grid.

use std::sync::LazyLock;

use gridlab_core::{Map, Point};
use rand::{Rng, RngExt};

/// Number of scenarios in the pool.
pub const SCENARIO_COUNT: usize = 25;

const MAP_TEXT: &str = "
    . . . . . . . . . . . . . . . . . . . . . # # . . . . . . .
    . . . . . . . . . . . . . . . . . . . . . # # . . . . . . .
    . . . . . . . . . . . . . . . . . . . . . # # . . . . . . .
    . . . # # . . . . . . . . . . . . . . . . # # . . . . . . .
    . . . # # . . . . . . . . # # . . . . . . # # . . . . . . .
    . . . # # . . . . . . . . # # . . . . . . # # # # # . . . .
    . . . # # . . . . . . . . # # . . . . . . # # # # # . . . .
    . . . # # . . . . . . . . # # . . . . . . . . . . . . . . .
    . . . # # . . . . . . . . # # . . . . . . . . . . . . . . .
    . . . # # . . . . . . . . # # . . . . . . . . . . . . . . .
    . . . # # . . . . . . . . # # . . . . . . . . . . . . . . .
    . . . # # . . . . . . . . # # . . . . . . . . . . . . . . .
    . . . . . . . . . . . . . # # . . . . . . . . . . . . . . .
    . . . . . . . . . . . . . # # . . . . . . . . . . . . . . .
    . . . . . . . . . . . . . # # . . . . . . . . . . . . . . .
";

/// Start cells as (row, col).
const STARTS: [(i32, i32); SCENARIO_COUNT] = [
    (9, 0),
    (13, 0),
    (7, 28),
    (14, 29),
    (4, 1),
    (0, 17),
    (5, 6),
    (5, 20),
    (12, 2),
    (7, 28),
    (11, 9),
    (3, 2),
    (3, 17),
    (13, 20),
    (1, 1),
    (9, 10),
    (14, 6),
    (2, 0),
    (9, 28),
    (8, 6),
    (11, 6),
    (3, 0),
    (8, 9),
    (14, 7),
    (12, 4),
];

/// Goal cells as (row, col).
const GOALS: [(i32, i32); SCENARIO_COUNT] = [
    (11, 20),
    (2, 19),
    (6, 5),
    (4, 18),
    (9, 20),
    (7, 0),
    (2, 25),
    (12, 4),
    (3, 25),
    (0, 12),
    (4, 23),
    (2, 24),
    (9, 2),
    (1, 6),
    (13, 29),
    (14, 29),
    (2, 28),
    (14, 16),
    (13, 0),
    (1, 27),
    (14, 25),
    (10, 20),
    (12, 28),
    (2, 29),
    (1, 29),
];

const ANY_ANGLE_LENGTHS: [f64; SCENARIO_COUNT] = [
    28.784, 22.934, 24.549, 14.866, 22.359, 19.973, 25.846, 20.008, 32.162, 18.402, 27.443, 30.408,
    20.964, 19.908, 31.181, 26.149, 31.718, 25.514, 32.991, 27.964, 27.008, 23.393, 23.904, 31.782,
    32.788,
];

const GRID_LENGTHS: [f64; SCENARIO_COUNT] = [
    29.456, 23.556, 25.899, 15.142, 22.728, 21.071, 27.314, 20.556, 33.213, 18.899, 29.142, 31.728,
    21.142, 21.314, 32.971, 27.799, 33.799, 26.243, 34.627, 29.556, 27.456, 24.314, 25.385, 33.799,
    34.042,
];

static MAP: LazyLock<Map> = LazyLock::new(|| {
    MAP_TEXT
        .parse()
        .expect("built-in scenario map is well-formed")
});

/// One test case of the pool.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub index: usize,
    pub start: Point,
    pub goal: Point,
    /// Reference length for any-angle searches.
    pub any_angle_length: f64,
    /// Reference length for searches on the cell grid.
    pub grid_length: f64,
}

impl Scenario {
    /// The obstacle map shared by every scenario.
    pub fn map(&self) -> &'static Map {
        pool_map()
    }
}

/// The obstacle map shared by every scenario.
pub fn pool_map() -> &'static Map {
    &MAP
}

/// Scenario `index`, or `None` if it is not in `0..SCENARIO_COUNT`.
pub fn scenario(index: usize) -> Option<Scenario> {
    (index < SCENARIO_COUNT).then(|| by_index(index))
}

/// All scenarios in ascending index order.
pub fn scenarios() -> impl Iterator<Item = Scenario> {
    (0..SCENARIO_COUNT).map(by_index)
}

/// Resolve a requested index to a scenario, using the thread RNG when the
/// request is missing or out of range.
pub fn get_scenario(index: Option<i64>) -> Scenario {
    get_scenario_with(index, &mut rand::rng())
}

/// Like [`get_scenario`] but draws replacement indices from `rng`.
///
/// A missing or out-of-range index is never an error; a uniformly random
/// index is used instead.
pub fn get_scenario_with(index: Option<i64>, rng: &mut impl Rng) -> Scenario {
    let requested = index.and_then(|i| usize::try_from(i).ok());
    match requested.and_then(scenario) {
        Some(s) => s,
        None => {
            let picked = rng.random_range(0..SCENARIO_COUNT);
            log::debug!("scenario index {index:?} replaced by random index {picked}");
            by_index(picked)
        }
    }
}

// Caller guarantees `index < SCENARIO_COUNT`.
fn by_index(index: usize) -> Scenario {
    let (sr, sc) = STARTS[index];
    let (gr, gc) = GOALS[index];
    Scenario {
        index,
        start: Point::at(sr, sc),
        goal: Point::at(gr, gc),
        any_angle_length: ANY_ANGLE_LENGTHS[index],
        grid_length: GRID_LENGTHS[index],
    }
}
