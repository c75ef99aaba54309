//! Forgiving option-specification compiler and token classifier.
//!
//! This crate turns a compact specification string into a lookup table
//! and classifies a flat token stream against it:
//!
//! - [`compile`] — parse a specification string (e.g.
//!   `"-e,--example:0:1 -t -x:1"`) into a [`SpecTable`]; never fails,
//!   malformed input degrades silently.
//! - [`classify`] — walk a token stream against a table, producing a
//!   [`ParseOutcome`] (options plus positional parameters) or the first
//!   [`ParseError`].
//! - [`inspect_spec`] — advisory [`SpecNote`] diagnostics for the silent
//!   degradations `compile` allows.
//!
//! Every definition is `KEY[,ALTKEY...][:REQUIRED[:OPTIONAL]]`: comma-
//! separated aliases, then a mandatory-argument count, then a count of
//! arguments taken opportunistically. A definition with no colon is a
//! bare flag. The literal token `--` ends option processing for
//! unrecognized tokens; recognition itself never requires a leading dash.
//!
//! # Example
//!
//! ```
//! use argsieve_core::parse_tokens;
//!
//! let outcome = parse_tokens("-e,--example:0:1 -t -x:1", &["-t", "-e", "hello", "foo"]).unwrap();
//! assert_eq!(outcome.value("-t"), Some("true"));
//! assert_eq!(outcome.value("-e"), Some("hello "));
//! assert_eq!(outcome.params, vec!["foo"]);
//!
//! let err = parse_tokens("-x:1", &["-x"]).unwrap_err();
//! assert_eq!(err.to_string(), "-x requires an argument");
//! ```

mod classify;
mod compile;
mod error;
mod inspect;
mod types;

pub use classify::{END_OF_OPTIONS, classify};
pub use compile::compile;
pub use error::ParseError;
pub use inspect::{SpecNote, inspect_spec};
pub use types::{OptionSpec, ParseOutcome, SpecTable, TRUTHY_MARKER};

/// Compiles `spec` and classifies `tokens` against it in one call.
///
/// # Examples
///
/// ```
/// use argsieve_core::parse_tokens;
///
/// let outcome = parse_tokens("-t", &["-t", "--", "-z"]).unwrap();
/// assert!(outcome.flag("-t"));
/// assert_eq!(outcome.params, vec!["-z"]);
/// ```
pub fn parse_tokens<S: AsRef<str>>(spec: &str, tokens: &[S]) -> Result<ParseOutcome, ParseError> {
    classify(&compile(spec), tokens)
}
