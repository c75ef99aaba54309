//! Classification errors.

use thiserror::Error;

/// Terminal classification failures.
///
/// Both variants abort the scan at the first offending token; a
/// classification that returns an error exposes no partial outcome. The
/// rendered messages carry the offending token verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// An unrecognized dash-prefixed token before the end-of-options
    /// marker.
    #[error("invalid option -- \"{0}\"")]
    InvalidOption(String),
    /// The token stream ended before an option's required arguments were
    /// all consumed.
    #[error("{0} requires an argument")]
    MissingArgument(String),
}
