//! **gridlab-bench**: runs grid pathfinding search routines against a fixed
//! pool of 25 scenarios and checks the lengths of the paths they return.
//!
//! ```ignore
//! use gridlab_bench::{Bench, Family, FnSearcher};
//!
//! let mut searcher = FnSearcher::new("my_astar", Family::GridOptimal, my_astar);
//! let mut bench = Bench::stdout();
//! bench.run(&mut searcher, Some(3), false);
//! bench.run_all(&mut searcher);
//! ```
//!
//! Each run prints one line: `Path found! ...`, `Path not found!` or
//! `Execution error: ...` followed by a trace. Failures of the routine never
//! escape the bench.

pub mod config;
pub mod oracle;
pub mod runner;
pub mod scenarios;

pub use config::BenchConfig;
pub use oracle::{EPSILON, GRID_TOLERANCE, is_correct};
pub use runner::{BatchSummary, Bench, ExecutionError, FoundReport, Outcome, PanicReport};
pub use scenarios::{SCENARIO_COUNT, Scenario, get_scenario, get_scenario_with, scenario};

pub use gridlab_core::{GridMap, Map, Point};
pub use gridlab_paths::{Family, FnSearcher, Node, Path, SearchError, SearchResult, Searcher};
