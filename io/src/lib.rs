//! Console and filesystem helpers around the argsieve classifier.
//!
//! The classifier itself never touches the outside world; this crate
//! holds its collaborators:
//!
//! - [`tokens`] — build the flat token stream from process arguments
//!   plus piped standard input.
//! - [`path`] — negotiate a destination file, with an interactive
//!   overwrite confirmation and timestamp fallback names.
//! - [`format`] — compact date and currency formatters.

mod error;
pub mod format;
pub mod path;
pub mod tokens;

pub use error::{ConsoleError, Result};
