use std::backtrace::Backtrace;
use std::error::Error;
use std::fmt;
use std::rc::Rc;

use crate::node::Node;

/// What a search routine hands back.
///
/// The six fields and their order are fixed: found flag, end node, step
/// count, search tree size, discovered set, expanded set.
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    /// Whether a path to the goal was found.
    pub found: bool,
    /// Goal node of the search tree. Must be `Some` when `found` is true.
    pub end_node: Option<Rc<Node>>,
    /// Number of search steps (usually node expansions).
    pub steps: usize,
    /// Number of nodes in the search tree when the search stopped.
    pub tree_size: usize,
    /// Nodes generated but not necessarily finalized.
    pub discovered: Vec<Rc<Node>>,
    /// Nodes fully processed.
    pub expanded: Vec<Rc<Node>>,
}

impl SearchResult {
    /// A successful search ending at `end_node`.
    pub fn found(
        end_node: Rc<Node>,
        steps: usize,
        tree_size: usize,
        discovered: Vec<Rc<Node>>,
        expanded: Vec<Rc<Node>>,
    ) -> Self {
        Self {
            found: true,
            end_node: Some(end_node),
            steps,
            tree_size,
            discovered,
            expanded,
        }
    }

    /// A search that exhausted its options without reaching the goal.
    pub fn not_found(
        steps: usize,
        tree_size: usize,
        discovered: Vec<Rc<Node>>,
        expanded: Vec<Rc<Node>>,
    ) -> Self {
        Self {
            found: false,
            end_node: None,
            steps,
            tree_size,
            discovered,
            expanded,
        }
    }
}

/// Failure reported by a search routine.
///
/// A backtrace is captured on construction (subject to `RUST_BACKTRACE`),
/// so it points into the routine that gave up.
#[derive(Debug)]
pub struct SearchError {
    message: String,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
    backtrace: Backtrace,
}

impl SearchError {
    /// Create an error with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
            backtrace: Backtrace::capture(),
        }
    }

    /// Create an error wrapping an underlying cause.
    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn Error + Send + Sync + 'static>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
            backtrace: Backtrace::capture(),
        }
    }

    /// The message given at construction.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Stack at the point the error was created.
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|e| e as &(dyn Error + 'static))
    }
}

impl From<String> for SearchError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for SearchError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}
