//! Single-scenario and batch runners.
//!
//! [`Bench::run`] calls a search routine on one scenario, rebuilds the path
//! it found, checks the path length and prints a one-line report.
//! [`Bench::run_all`] does the same for every scenario in order, without
//! rendering.

use std::any::Any;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::cell::{Cell, RefCell};
use std::error::Error;
use std::fmt;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;
use std::sync::Once;

use gridlab_paths::{Family, Node, Path, SearchError, SearchResult, Searcher};
use gridlab_render::{DrawMode, DrawRequest, ImageSink, NoopSink, RenderSink};

use crate::config::BenchConfig;
use crate::oracle;
use crate::scenarios::{self, Scenario};

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Why a search routine invocation counts as an execution error.
#[derive(Debug)]
pub enum ExecutionError {
    /// The routine returned an error.
    Failed(SearchError),
    /// The routine panicked.
    Panicked(PanicReport),
    /// The routine reported success without an end node.
    MissingEndNode,
}

impl ExecutionError {
    /// Stack at the point the routine failed. `None` for contract
    /// violations detected by the bench itself.
    pub fn backtrace(&self) -> Option<&Backtrace> {
        match self {
            ExecutionError::Failed(e) => Some(e.backtrace()),
            ExecutionError::Panicked(p) => Some(&p.trace),
            ExecutionError::MissingEndNode => None,
        }
    }
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionError::Failed(e) => write!(f, "{e}"),
            ExecutionError::Panicked(p) => write!(f, "{p}"),
            ExecutionError::MissingEndNode => {
                write!(f, "search reported a path but returned no end node")
            }
        }
    }
}

impl Error for ExecutionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ExecutionError::Failed(e) => e.source(),
            _ => None,
        }
    }
}

/// A panic caught while a search routine ran.
#[derive(Debug)]
pub struct PanicReport {
    /// Panic payload, when it was a string.
    pub message: String,
    /// `file:line:col` of the `panic!`, when known.
    pub location: Option<String>,
    /// Stack of the panicking thread, taken inside the panic hook.
    pub trace: Backtrace,
}

impl fmt::Display for PanicReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(at) => write!(f, "search routine panicked at {at}: {}", self.message),
            None => write!(f, "search routine panicked: {}", self.message),
        }
    }
}

/// Statistics of a run that found a path.
#[derive(Debug, Clone)]
pub struct FoundReport {
    pub index: usize,
    pub family: Family,
    pub path: Path,
    pub steps: usize,
    pub tree_size: usize,
    pub correct: bool,
}

impl FoundReport {
    /// Path length reported by the goal node.
    pub fn length(&self) -> f64 {
        self.path.length()
    }
}

impl fmt::Display for FoundReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Path found! Length: {:.3}. Tree size: {}. Number of steps: {}. Correct: {}.",
            self.length(),
            self.tree_size,
            self.steps,
            self.correct
        )
    }
}

/// Result of running one scenario.
#[derive(Debug)]
pub enum Outcome {
    Found(FoundReport),
    NotFound {
        index: usize,
    },
    Error {
        index: usize,
        error: ExecutionError,
    },
}

impl Outcome {
    /// Scenario index the outcome belongs to.
    pub fn index(&self) -> usize {
        match self {
            Outcome::Found(r) => r.index,
            Outcome::NotFound { index } | Outcome::Error { index, .. } => *index,
        }
    }

    pub fn report(&self) -> Option<&FoundReport> {
        match self {
            Outcome::Found(r) => Some(r),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error { .. })
    }

    /// Found a path whose length passed the check.
    pub fn is_correct(&self) -> bool {
        self.report().is_some_and(|r| r.correct)
    }
}

/// Counts over a batch of outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub found: usize,
    pub correct: usize,
    pub not_found: usize,
    pub errors: usize,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[Outcome]) -> Self {
        let mut s = Self {
            total: outcomes.len(),
            ..Self::default()
        };
        for o in outcomes {
            match o {
                Outcome::Found(r) => {
                    s.found += 1;
                    if r.correct {
                        s.correct += 1;
                    }
                }
                Outcome::NotFound { .. } => s.not_found += 1,
                Outcome::Error { .. } => s.errors += 1,
            }
        }
        s
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} found, {} correct, {} not found, {} errors",
            self.found, self.total, self.correct, self.not_found, self.errors
        )
    }
}

// ---------------------------------------------------------------------------
// Bench
// ---------------------------------------------------------------------------

/// Runs search routines on the scenario pool.
///
/// Report lines go to `out`; draw requests go to `sink`.
pub struct Bench<W = io::Stdout, S = NoopSink> {
    out: W,
    sink: S,
}

impl Bench<io::Stdout, NoopSink> {
    /// Bench printing to stdout and discarding draw requests.
    pub fn stdout() -> Self {
        Self::new(io::stdout(), NoopSink)
    }
}

impl Bench<io::Stdout, ImageSink> {
    /// Bench printing to stdout and saving renders as configured.
    pub fn with_config(config: &BenchConfig) -> Self {
        Self::new(io::stdout(), config.image_sink())
    }
}

impl<W: Write, S: RenderSink> Bench<W, S> {
    pub fn new(out: W, sink: S) -> Self {
        Self { out, sink }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (W, S) {
        (self.out, self.sink)
    }

    /// Run `searcher` on scenario `index`; a missing or out-of-range index
    /// picks a random scenario.
    pub fn run<R: Searcher + ?Sized>(
        &mut self,
        searcher: &mut R,
        index: Option<i64>,
        render: bool,
    ) -> Outcome {
        let scenario = scenarios::get_scenario(index);
        self.run_scenario(searcher, &scenario, render)
    }

    /// Run `searcher` on every scenario in ascending order, without
    /// rendering. Failures in one scenario do not stop the batch.
    pub fn run_all<R: Searcher + ?Sized>(&mut self, searcher: &mut R) -> Vec<Outcome> {
        let outcomes: Vec<Outcome> = scenarios::scenarios()
            .map(|s| self.run_scenario(&mut *searcher, &s, false))
            .collect();
        log::info!(
            "{}: {}",
            searcher.name(),
            BatchSummary::from_outcomes(&outcomes)
        );
        outcomes
    }

    /// Run `searcher` on `scenario` and print the report line.
    pub fn run_scenario<R: Searcher + ?Sized>(
        &mut self,
        searcher: &mut R,
        scenario: &Scenario,
        render: bool,
    ) -> Outcome {
        log::debug!(
            "running {} ({}) on scenario {}: {} -> {}",
            searcher.name(),
            searcher.family(),
            scenario.index,
            scenario.start,
            scenario.goal
        );

        let result = match invoke(searcher, scenario) {
            Ok(r) => r,
            Err(error) => return self.report_error(searcher.name(), scenario.index, error),
        };

        if !result.found {
            self.emit(format_args!("Path not found!"));
            return Outcome::NotFound {
                index: scenario.index,
            };
        }

        let Some(end) = result.end_node.as_ref() else {
            let error = ExecutionError::MissingEndNode;
            return self.report_error(searcher.name(), scenario.index, error);
        };

        let path = Path::reconstruct(end);
        if path.start().map(|n| n.pos) != Some(scenario.start) {
            log::warn!(
                "{}: path for scenario {} does not begin at the start cell {}",
                searcher.name(),
                scenario.index,
                scenario.start
            );
        }

        let family = searcher.family();
        let correct = oracle::is_correct(family, path.length(), scenario);

        if render {
            self.dispatch_render(family, scenario, &path, &result);
        }

        let report = FoundReport {
            index: scenario.index,
            family,
            path,
            steps: result.steps,
            tree_size: result.tree_size,
            correct,
        };
        self.emit(format_args!("{report}"));
        Outcome::Found(report)
    }

    fn dispatch_render(
        &mut self,
        family: Family,
        scenario: &Scenario,
        path: &Path,
        result: &SearchResult,
    ) {
        let positions = |nodes: &[Rc<Node>]| nodes.iter().map(|n| n.pos).collect::<Vec<_>>();
        let mode = match family {
            Family::GridOptimal => DrawMode::Discrete,
            Family::AnyAngle => DrawMode::Continuous,
        };
        let mut request = DrawRequest::new(mode, scenario.map())
            .with_endpoints(scenario.start, scenario.goal)
            .with_path(path.positions())
            .with_discovered(positions(&result.discovered))
            .with_expanded(positions(&result.expanded));
        if mode == DrawMode::Discrete {
            // Re-expansions are not reported through the search result.
            request = request.with_reexpanded(Vec::new());
        }
        log::debug!("rendering scenario {} in {:?} mode", scenario.index, mode);
        self.sink.draw(&request);
    }

    fn report_error(&mut self, name: &str, index: usize, error: ExecutionError) -> Outcome {
        log::error!("{name} failed on scenario {index}: {error}");
        self.emit(format_args!("Execution error: {error}"));
        let mut cause = error.source();
        while let Some(e) = cause {
            self.emit(format_args!("Caused by: {e}"));
            cause = e.source();
        }
        if let Some(trace) = error.backtrace() {
            match trace.status() {
                BacktraceStatus::Captured => self.emit(format_args!("{trace}")),
                _ => self.emit(format_args!(
                    "note: run with `RUST_BACKTRACE=1` to display a backtrace"
                )),
            }
        }
        Outcome::Error { index, error }
    }

    fn emit(&mut self, line: fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{line}") {
            log::warn!("cannot write report: {e}");
        }
    }
}

struct PanicSite {
    location: Option<String>,
    trace: Backtrace,
}

thread_local! {
    static CAPTURING: Cell<bool> = const { Cell::new(false) };
    static LAST_PANIC: RefCell<Option<PanicSite>> = const { RefCell::new(None) };
}

// Chains onto the hook present at first use. While this thread is inside
// `invoke`, panics are recorded instead of printed.
fn install_panic_hook() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if CAPTURING.get() {
                LAST_PANIC.set(Some(PanicSite {
                    location: info.location().map(ToString::to_string),
                    trace: Backtrace::capture(),
                }));
            } else {
                previous(info);
            }
        }));
    });
}

/// Call the routine, turning errors and panics into [`ExecutionError`]s.
fn invoke<R: Searcher + ?Sized>(
    searcher: &mut R,
    scenario: &Scenario,
) -> Result<SearchResult, ExecutionError> {
    install_panic_hook();
    let (start, goal) = (scenario.start, scenario.goal);
    LAST_PANIC.set(None);
    let was_capturing = CAPTURING.replace(true);
    let call = panic::catch_unwind(AssertUnwindSafe(|| {
        searcher.search(
            scenario.map(),
            start.row(),
            start.col(),
            goal.row(),
            goal.col(),
        )
    }));
    CAPTURING.set(was_capturing);
    match call {
        Ok(Ok(result)) => Ok(result),
        Ok(Err(e)) => Err(ExecutionError::Failed(e)),
        Err(payload) => {
            // Missing when another hook replaced ours after installation.
            let site = LAST_PANIC.take().unwrap_or_else(|| PanicSite {
                location: None,
                trace: Backtrace::capture(),
            });
            Err(ExecutionError::Panicked(PanicReport {
                message: panic_message(&*payload),
                location: site.location,
                trace: site.trace,
            }))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridlab_core::{Map, Point};
    use gridlab_paths::FnSearcher;

    use crate::scenarios::{SCENARIO_COUNT, scenario};

    /// Sink that keeps the modes and path lengths it was asked to draw.
    #[derive(Default)]
    struct RecordingSink {
        requests: Vec<(DrawMode, usize, Option<usize>)>,
    }

    impl RenderSink for RecordingSink {
        fn draw(&mut self, request: &DrawRequest<'_>) {
            self.requests.push((
                request.mode,
                request.path.as_ref().map_or(0, Vec::len),
                request.reexpanded.as_ref().map(Vec::len),
            ));
        }
    }

    fn bench() -> Bench<Vec<u8>, RecordingSink> {
        Bench::new(Vec::new(), RecordingSink::default())
    }

    fn output(bench: &Bench<Vec<u8>, RecordingSink>) -> String {
        String::from_utf8(bench.writer().clone()).unwrap()
    }

    /// Straight start -> midpoint -> goal chain with the given goal cost.
    fn chain(sr: i32, sc: i32, gr: i32, gc: i32, cost: f64) -> SearchResult {
        let start = Node::root(Point::at(sr, sc));
        let mid = Node::child(&start, Point::at((sr + gr) / 2, (sc + gc) / 2), cost / 2.0);
        let goal = Node::child(&mid, Point::at(gr, gc), cost);
        SearchResult::found(
            Rc::clone(&goal),
            4,
            9,
            vec![Rc::clone(&start), Rc::clone(&mid), Rc::clone(&goal)],
            vec![start, mid],
        )
    }

    #[test]
    fn found_path_reports_statistics() {
        let s = scenario(0).unwrap();
        let mut searcher = FnSearcher::new(
            "grid",
            Family::GridOptimal,
            |_: &Map, sr: i32, sc: i32, gr: i32, gc: i32| Ok(chain(sr, sc, gr, gc, s.grid_length)),
        );
        let mut b = bench();
        let outcome = b.run(&mut searcher, Some(0), false);

        let report = outcome.report().unwrap();
        assert_eq!(report.index, 0);
        assert!(report.correct);
        assert_eq!(report.path.len(), 3);
        assert_eq!(report.path.start().unwrap().pos, s.start);
        assert_eq!(report.path.goal().unwrap().pos, s.goal);
        assert_eq!(
            output(&b),
            "Path found! Length: 29.456. Tree size: 9. Number of steps: 4. Correct: true.\n"
        );
        assert!(b.sink().requests.is_empty());
    }

    #[test]
    fn length_is_printed_with_three_decimals() {
        let mut searcher = FnSearcher::new(
            "short",
            Family::AnyAngle,
            |_: &Map, sr: i32, sc: i32, gr: i32, gc: i32| Ok(chain(sr, sc, gr, gc, 7.5)),
        );
        let mut b = bench();
        let outcome = b.run(&mut searcher, Some(3), false);
        assert!(outcome.is_found());
        assert!(!outcome.is_correct());
        assert_eq!(
            output(&b),
            "Path found! Length: 7.500. Tree size: 9. Number of steps: 4. Correct: false.\n"
        );
    }

    #[test]
    fn family_picks_the_reference_table() {
        let s = scenario(5).unwrap();
        // The any-angle reference is too far from the grid one for a grid search.
        let mut grid = FnSearcher::new(
            "grid",
            Family::GridOptimal,
            |_: &Map, sr: i32, sc: i32, gr: i32, gc: i32| {
                Ok(chain(sr, sc, gr, gc, s.any_angle_length))
            },
        );
        let mut any = FnSearcher::new(
            "theta",
            Family::AnyAngle,
            |_: &Map, sr: i32, sc: i32, gr: i32, gc: i32| {
                Ok(chain(sr, sc, gr, gc, s.any_angle_length))
            },
        );
        let mut b = bench();
        assert!(!b.run(&mut grid, Some(5), false).is_correct());
        assert!(b.run(&mut any, Some(5), false).is_correct());
    }

    #[test]
    fn named_astar_uses_grid_reference() {
        let s = scenario(2).unwrap();
        let mut searcher = FnSearcher::named("astar", |_: &Map, sr: i32, sc: i32, gr: i32, gc: i32| {
            Ok(chain(sr, sc, gr, gc, s.grid_length + 0.005))
        });
        let mut b = bench();
        let outcome = b.run(&mut searcher, Some(2), false);
        assert_eq!(outcome.report().unwrap().family, Family::GridOptimal);
        assert!(outcome.is_correct());
    }

    #[test]
    fn not_found_reports_and_skips_render() {
        let mut searcher = FnSearcher::new(
            "blind",
            Family::GridOptimal,
            |_: &Map, _: i32, _: i32, _: i32, _: i32| {
                Ok(SearchResult::not_found(12, 30, vec![], vec![]))
            },
        );
        let mut b = bench();
        let outcome = b.run(&mut searcher, Some(1), true);
        assert!(matches!(outcome, Outcome::NotFound { index: 1 }));
        assert_eq!(output(&b), "Path not found!\n");
        assert!(b.sink().requests.is_empty());
    }

    #[test]
    fn returned_error_is_contained() {
        let mut searcher = FnSearcher::new(
            "broken",
            Family::AnyAngle,
            |_: &Map, _: i32, _: i32, _: i32, _: i32| Err("open list corrupted".into()),
        );
        let mut b = bench();
        let outcome = b.run(&mut searcher, Some(7), true);
        assert!(outcome.is_error());
        assert_eq!(outcome.index(), 7);
        let text = output(&b);
        assert!(text.starts_with("Execution error: open list corrupted\n"), "{text}");
        assert!(text.lines().count() >= 2, "trace line missing: {text}");
        assert!(b.sink().requests.is_empty());
    }

    #[test]
    fn error_sources_are_listed() {
        let mut searcher = FnSearcher::new(
            "io",
            Family::AnyAngle,
            |_: &Map, _: i32, _: i32, _: i32, _: i32| {
                Err(SearchError::with_source(
                    "cannot load weights",
                    io::Error::other("missing file"),
                ))
            },
        );
        let mut b = bench();
        b.run(&mut searcher, Some(0), false);
        let text = output(&b);
        let head = "Execution error: cannot load weights\nCaused by: missing file\n";
        assert!(text.starts_with(head), "{text}");
    }

    #[inline(never)]
    fn overrun_row_table(map: &Map, line: &Cell<u32>) -> usize {
        let cells = map.to_cells();
        line.set(line!() + 1);
        cells[100].len()
    }

    #[test]
    fn panic_is_contained() {
        let line = Cell::new(0);
        let mut searcher = FnSearcher::new(
            "panicky",
            Family::GridOptimal,
            |map: &Map, _: i32, _: i32, _: i32, _: i32| {
                let width = overrun_row_table(map, &line);
                Ok(SearchResult::not_found(width, 0, vec![], vec![]))
            },
        );
        let mut b = bench();
        let outcome = b.run(&mut searcher, Some(0), false);
        drop(searcher);

        let site = format!("{}:{}:", file!(), line.get());
        let Outcome::Error {
            error: ExecutionError::Panicked(report),
            ..
        } = &outcome
        else {
            panic!("unexpected outcome {outcome:?}");
        };
        assert!(report.message.contains("index out of bounds"), "{}", report.message);
        assert!(report.location.as_deref().is_some_and(|l| l.starts_with(&site)));

        let text = output(&b);
        let head = format!("Execution error: search routine panicked at {site}");
        assert!(text.starts_with(&head), "{text}");
        if report.trace.status() == BacktraceStatus::Captured {
            assert!(text.contains("overrun_row_table"), "{text}");
        }
        assert!(!CAPTURING.get());
    }

    #[inline(never)]
    fn load_weights() -> Result<SearchResult, SearchError> {
        Err(SearchError::new("weights file is empty"))
    }

    #[test]
    fn returned_error_trace_comes_from_the_routine() {
        let mut searcher = FnSearcher::new(
            "weighted",
            Family::AnyAngle,
            |_: &Map, _: i32, _: i32, _: i32, _: i32| load_weights(),
        );
        let mut b = bench();
        let outcome = b.run(&mut searcher, Some(2), false);
        let trace = match &outcome {
            Outcome::Error { error, .. } => error.backtrace().unwrap(),
            other => panic!("unexpected outcome {other:?}"),
        };
        let text = output(&b);
        match trace.status() {
            BacktraceStatus::Captured => {
                assert!(text.contains("load_weights"), "{text}");
                assert!(!text.contains("report_error"), "{text}");
            }
            _ => assert!(text.ends_with("to display a backtrace\n"), "{text}"),
        }
    }

    #[test]
    fn missing_end_node_prints_no_trace() {
        let mut searcher = FnSearcher::new(
            "sloppy",
            Family::GridOptimal,
            |_: &Map, _: i32, _: i32, _: i32, _: i32| {
                Ok(SearchResult {
                    found: true,
                    ..SearchResult::default()
                })
            },
        );
        let mut b = bench();
        b.run(&mut searcher, Some(0), false);
        assert_eq!(
            output(&b),
            "Execution error: search reported a path but returned no end node\n"
        );
    }

    #[test]
    fn found_without_end_node_is_an_error() {
        let mut searcher = FnSearcher::new(
            "sloppy",
            Family::GridOptimal,
            |_: &Map, _: i32, _: i32, _: i32, _: i32| {
                Ok(SearchResult {
                    found: true,
                    ..SearchResult::default()
                })
            },
        );
        let mut b = bench();
        let outcome = b.run(&mut searcher, Some(0), true);
        assert!(matches!(
            outcome,
            Outcome::Error {
                error: ExecutionError::MissingEndNode,
                ..
            }
        ));
        assert!(b.sink().requests.is_empty());
    }

    #[test]
    fn configured_bench_saves_renders() {
        let dir = tempfile::tempdir().unwrap();
        let config = BenchConfig {
            output_dir: dir.path().join("renders"),
            file_prefix: "grid".to_string(),
            ..BenchConfig::default()
        };
        let mut searcher = FnSearcher::new(
            "grid",
            Family::GridOptimal,
            |_: &Map, sr: i32, sc: i32, gr: i32, gc: i32| Ok(chain(sr, sc, gr, gc, 1.0)),
        );
        let mut b = Bench::with_config(&config);
        assert!(b.run(&mut searcher, Some(6), true).is_found());
        b.run(&mut searcher, Some(6), false);
        assert_eq!(b.sink().written(), 1);
        assert!(dir.path().join("renders/grid-000.png").exists());
    }

    #[test]
    fn render_dispatch_follows_family() {
        let mut grid = FnSearcher::new(
            "grid",
            Family::GridOptimal,
            |_: &Map, sr: i32, sc: i32, gr: i32, gc: i32| Ok(chain(sr, sc, gr, gc, 1.0)),
        );
        let mut any = FnSearcher::new(
            "any",
            Family::AnyAngle,
            |_: &Map, sr: i32, sc: i32, gr: i32, gc: i32| Ok(chain(sr, sc, gr, gc, 1.0)),
        );
        let mut b = bench();
        b.run(&mut grid, Some(4), true);
        b.run(&mut any, Some(4), true);
        b.run(&mut any, Some(4), false);
        assert_eq!(
            b.sink().requests,
            vec![(DrawMode::Discrete, 3, Some(0)), (DrawMode::Continuous, 3, None)]
        );
    }

    #[test]
    fn random_scenario_for_bad_index() {
        let mut seen = Vec::new();
        let mut searcher = FnSearcher::new(
            "recorder",
            Family::AnyAngle,
            |_: &Map, sr: i32, sc: i32, gr: i32, gc: i32| {
                seen.push((Point::at(sr, sc), Point::at(gr, gc)));
                Ok(SearchResult::not_found(0, 0, vec![], vec![]))
            },
        );
        let mut b = bench();
        let outcomes: Vec<_> = [None, Some(-1), Some(25)]
            .into_iter()
            .map(|i| b.run(&mut searcher, i, false))
            .collect();
        drop(searcher);
        for (outcome, (start, goal)) in outcomes.iter().zip(&seen) {
            let s = scenario(outcome.index()).unwrap();
            assert_eq!((s.start, s.goal), (*start, *goal));
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn batch_runs_every_scenario_in_order() {
        let mut calls = Vec::new();
        let mut searcher = FnSearcher::new(
            "mixed",
            Family::GridOptimal,
            |_: &Map, sr: i32, sc: i32, gr: i32, gc: i32| {
                calls.push((Point::at(sr, sc), Point::at(gr, gc)));
                match calls.len() % 3 {
                    0 => Err(SearchError::new("every third call fails")),
                    1 => Ok(chain(sr, sc, gr, gc, 10.0)),
                    _ => Ok(SearchResult::not_found(0, 0, vec![], vec![])),
                }
            },
        );
        let mut b = bench();
        let outcomes = b.run_all(&mut searcher);
        drop(searcher);

        assert_eq!(calls.len(), SCENARIO_COUNT);
        let expected: Vec<_> = scenarios::scenarios().map(|s| (s.start, s.goal)).collect();
        assert_eq!(calls, expected);
        let indices: Vec<_> = outcomes.iter().map(Outcome::index).collect();
        assert_eq!(indices, (0..SCENARIO_COUNT).collect::<Vec<_>>());
        assert!(b.sink().requests.is_empty());

        let summary = BatchSummary::from_outcomes(&outcomes);
        assert_eq!(summary.total, 25);
        assert_eq!(summary.found, 9);
        assert_eq!(summary.not_found, 8);
        assert_eq!(summary.errors, 8);
        assert_eq!(summary.correct, 0);

        let text = output(&b);
        assert_eq!(text.matches("Path found!").count(), 9);
        assert_eq!(text.matches("Path not found!").count(), 8);
        assert_eq!(text.matches("Execution error:").count(), 8);
    }

    #[test]
    fn summary_display() {
        let s = BatchSummary {
            total: 25,
            found: 20,
            correct: 18,
            not_found: 3,
            errors: 2,
        };
        assert_eq!(s.to_string(), "20/25 found, 18 correct, 3 not found, 2 errors");
    }
}
