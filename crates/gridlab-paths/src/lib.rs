//! Search-tree types and the search routine contract.
//!
//! Search routines under test build a tree of [`Node`]s, each pointing at
//! its parent, and hand back a [`SearchResult`]. This crate turns the goal
//! node of that tree into a [`Path`] and defines how routines are called:
//!
//! | Item | Role |
//! |---|---|
//! | [`Searcher`] | The invocation contract every routine implements |
//! | [`FnSearcher`] | Adapts a plain closure into a [`Searcher`] |
//! | [`Family`] | Grid-optimal or any-angle; selects the reference lengths |
//! | [`SearchResult`] | The fixed 6-field value a routine returns |
//! | [`SearchError`] | Failure reported by a routine |

mod node;
mod path;
mod result;
mod traits;

pub use node::Node;
pub use path::Path;
pub use result::{SearchError, SearchResult};
pub use traits::{Family, FnSearcher, Searcher};
