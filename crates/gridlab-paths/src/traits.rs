use std::fmt;

use gridlab_core::Map;

use crate::result::{SearchError, SearchResult};

/// Family of a search routine, which decides the reference lengths and the
/// tolerance its results are checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Family {
    /// Costs measured on the discretized cell grid (A*-like searches).
    GridOptimal,
    /// Paths may cut across cells at any angle (Theta*-like searches).
    AnyAngle,
}

impl Family {
    /// Name under which grid-optimal routines were traditionally registered.
    pub const GRID_OPTIMAL_NAME: &'static str = "astar";

    /// Guess the family from a routine's name: exactly `"astar"` is
    /// grid-optimal, anything else is any-angle.
    pub fn infer(name: &str) -> Self {
        if name == Self::GRID_OPTIMAL_NAME {
            Family::GridOptimal
        } else {
            Family::AnyAngle
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::GridOptimal => write!(f, "grid-optimal"),
            Family::AnyAngle => write!(f, "any-angle"),
        }
    }
}

/// A search routine under test.
///
/// Extra parameters (heuristic weights, neighbourhood flags, ...) are
/// fields of the implementing type or values captured by a closure.
pub trait Searcher {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Which reference table results are checked against.
    fn family(&self) -> Family;

    /// Search `map` from (`start_row`, `start_col`) to (`goal_row`,
    /// `goal_col`).
    fn search(
        &mut self,
        map: &Map,
        start_row: i32,
        start_col: i32,
        goal_row: i32,
        goal_col: i32,
    ) -> Result<SearchResult, SearchError>;
}

impl<S: Searcher + ?Sized> Searcher for &mut S {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn family(&self) -> Family {
        (**self).family()
    }

    fn search(
        &mut self,
        map: &Map,
        start_row: i32,
        start_col: i32,
        goal_row: i32,
        goal_col: i32,
    ) -> Result<SearchResult, SearchError> {
        (**self).search(map, start_row, start_col, goal_row, goal_col)
    }
}

/// Adapts a closure into a [`Searcher`].
pub struct FnSearcher<F> {
    name: String,
    family: Family,
    f: F,
}

impl<F> FnSearcher<F>
where
    F: FnMut(&Map, i32, i32, i32, i32) -> Result<SearchResult, SearchError>,
{
    /// Wrap `f` with an explicit family.
    pub fn new(name: impl Into<String>, family: Family, f: F) -> Self {
        Self {
            name: name.into(),
            family,
            f,
        }
    }

    /// Wrap `f`, inferring the family from `name` (see [`Family::infer`]).
    pub fn named(name: impl Into<String>, f: F) -> Self {
        let name = name.into();
        let family = Family::infer(&name);
        Self { name, family, f }
    }
}

impl<F> Searcher for FnSearcher<F>
where
    F: FnMut(&Map, i32, i32, i32, i32) -> Result<SearchResult, SearchError>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn family(&self) -> Family {
        self.family
    }

    fn search(
        &mut self,
        map: &Map,
        start_row: i32,
        start_col: i32,
        goal_row: i32,
        goal_col: i32,
    ) -> Result<SearchResult, SearchError> {
        (self.f)(map, start_row, start_col, goal_row, goal_col)
    }
}

impl<F> fmt::Debug for FnSearcher<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSearcher")
            .field("name", &self.name)
            .field("family", &self.family)
            .finish_non_exhaustive()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn family_round_trip() {
        let json = serde_json::to_string(&Family::AnyAngle).unwrap();
        assert_eq!(json, "\"AnyAngle\"");
        let back: Family = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Family::AnyAngle);
    }
}
