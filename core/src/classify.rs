//! Token classification against a compiled specification table.
//!
//! A single forward pass with an explicit cursor. Recognition always wins:
//! a token that matches a registered alias is treated as that option even
//! without a leading dash, and even after the end-of-options marker. Only
//! unrecognized tokens fall through to the separator/invalid/positional
//! checks.

use tracing::debug;

use crate::error::ParseError;
use crate::types::{ParseOutcome, SpecTable, TRUTHY_MARKER};

/// After this token, unrecognized dash-prefixed tokens become positional
/// parameters instead of errors. The token itself is never stored.
pub const END_OF_OPTIONS: &str = "--";

/// Classifies `tokens` against `table`.
///
/// Each recognized option consumes its required arguments unconditionally
/// and then up to its optional count of lookahead tokens; everything else
/// lands in `params` in input order. The first error aborts the scan.
///
/// # Examples
///
/// ```
/// use argsieve_core::{classify, compile};
///
/// let table = compile("-e,--example:0:1 -t -x:1");
/// let outcome = classify(&table, &["-t", "-e", "hello", "foo"]).unwrap();
/// assert_eq!(outcome.value("-t"), Some("true"));
/// assert_eq!(outcome.value("-e"), Some("hello "));
/// assert_eq!(outcome.params, vec!["foo"]);
/// ```
pub fn classify<S: AsRef<str>>(table: &SpecTable, tokens: &[S]) -> Result<ParseOutcome, ParseError> {
    let mut outcome = ParseOutcome::default();
    let mut end_of_options = false;
    let mut cursor = 0;

    while cursor < tokens.len() {
        let token = tokens[cursor].as_ref();

        let Some(spec) = table.lookup(token) else {
            if token == END_OF_OPTIONS {
                end_of_options = true;
            } else if token.starts_with('-') && !end_of_options {
                return Err(ParseError::InvalidOption(token.to_string()));
            } else {
                outcome.params.push(token.to_string());
            }
            cursor += 1;
            continue;
        };

        let key = spec.key.clone();
        // A repeated option starts over; its previous value is discarded.
        let initial = if spec.is_flag() { TRUTHY_MARKER } else { "" };
        outcome.options.insert(key.clone(), initial.to_string());

        let mut required = spec.required;
        while required > 0 {
            cursor += 1;
            let Some(argument) = tokens.get(cursor) else {
                return Err(ParseError::MissingArgument(token.to_string()));
            };
            append_argument(&mut outcome, &key, argument.as_ref());
            required -= 1;
        }

        let mut optional = spec.optional;
        while optional > 0 {
            // Stream end stops optional consumption, as does a candidate
            // that is the end-of-options marker or a recognized alias.
            let Some(candidate) = tokens.get(cursor + 1) else {
                break;
            };
            let candidate = candidate.as_ref();
            if candidate == END_OF_OPTIONS || table.contains(candidate) {
                break;
            }
            cursor += 1;
            append_argument(&mut outcome, &key, candidate);
            optional -= 1;
        }

        cursor += 1;
    }

    debug!(
        options = outcome.options.len(),
        params = outcome.params.len(),
        "classified token stream"
    );
    Ok(outcome)
}

fn append_argument(outcome: &mut ParseOutcome, key: &str, argument: &str) {
    let value = outcome.options.entry(key.to_string()).or_default();
    value.push_str(argument);
    value.push(' ');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile;

    #[test]
    fn test_flag_sets_truthy_marker() {
        let table = compile("-t");
        let outcome = classify(&table, &["-t"]).unwrap();
        assert_eq!(outcome.value("-t"), Some("true"));
    }

    #[test]
    fn test_absent_flag_is_absent() {
        let table = compile("-t");
        let outcome = classify(&table, &["other"]).unwrap();
        assert!(!outcome.is_set("-t"));
        assert_eq!(outcome.params, vec!["other"]);
    }

    #[test]
    fn test_required_arguments_are_consumed_unconditionally() {
        let table = compile("-x:2 -t");
        // Even a recognized alias is swallowed by a required slot.
        let outcome = classify(&table, &["-x", "-t", "b", "rest"]).unwrap();
        assert_eq!(outcome.value("-x"), Some("-t b "));
        assert!(!outcome.is_set("-t"));
        assert_eq!(outcome.params, vec!["rest"]);
    }

    #[test]
    fn test_missing_argument_names_the_option() {
        let table = compile("-x:2");
        let err = classify(&table, &["-x", "only"]).unwrap_err();
        assert_eq!(err, ParseError::MissingArgument("-x".to_string()));
        assert_eq!(err.to_string(), "-x requires an argument");
    }

    #[test]
    fn test_alias_accumulates_under_canonical_key() {
        let table = compile("-e,--example:1");
        let outcome = classify(&table, &["--example", "value"]).unwrap();
        assert_eq!(outcome.value("-e"), Some("value "));
        assert!(!outcome.is_set("--example"));
    }

    #[test]
    fn test_optional_argument_is_taken_when_unclaimed() {
        let table = compile("-e:0:1");
        let outcome = classify(&table, &["-e", "hello", "foo"]).unwrap();
        assert_eq!(outcome.value("-e"), Some("hello "));
        assert_eq!(outcome.params, vec!["foo"]);
    }

    #[test]
    fn test_optional_consumption_stops_at_recognized_alias() {
        let table = compile("-e:0:2 -t");
        let outcome = classify(&table, &["-e", "one", "-t"]).unwrap();
        assert_eq!(outcome.value("-e"), Some("one "));
        assert_eq!(outcome.value("-t"), Some("true"));
    }

    #[test]
    fn test_optional_consumption_stops_at_end_of_options_marker() {
        let table = compile("-e:0:2");
        let outcome = classify(&table, &["-e", "--", "tail"]).unwrap();
        assert_eq!(outcome.value("-e"), Some(""));
        assert_eq!(outcome.params, vec!["tail"]);
    }

    #[test]
    fn test_optional_consumption_stops_at_stream_end() {
        let table = compile("-e:0:3");
        let outcome = classify(&table, &["-e", "a", "b"]).unwrap();
        assert_eq!(outcome.value("-e"), Some("a b "));
    }

    #[test]
    fn test_unrecognized_dash_token_is_invalid_before_separator() {
        let table = compile("-t");
        let err = classify(&table, &["-z"]).unwrap_err();
        assert_eq!(err, ParseError::InvalidOption("-z".to_string()));
        assert_eq!(err.to_string(), "invalid option -- \"-z\"");
    }

    #[test]
    fn test_separator_shields_dash_tokens() {
        let table = compile("-t");
        let outcome = classify(&table, &["-t", "--", "-z"]).unwrap();
        assert_eq!(outcome.value("-t"), Some("true"));
        assert_eq!(outcome.params, vec!["-z"]);
    }

    #[test]
    fn test_separator_is_never_stored_even_when_repeated() {
        let table = compile("-t");
        let outcome = classify(&table, &["--", "a", "--", "-b"]).unwrap();
        assert_eq!(outcome.params, vec!["a", "-b"]);
    }

    #[test]
    fn test_recognition_wins_even_after_separator() {
        let table = compile("-t");
        let outcome = classify(&table, &["--", "-t"]).unwrap();
        assert_eq!(outcome.value("-t"), Some("true"));
        assert!(outcome.params.is_empty());
    }

    #[test]
    fn test_recognition_needs_no_dash() {
        let table = compile("add:1");
        let outcome = classify(&table, &["add", "entry", "tail"]).unwrap();
        assert_eq!(outcome.value("add"), Some("entry "));
        assert_eq!(outcome.params, vec!["tail"]);
    }

    #[test]
    fn test_repeated_option_starts_over() {
        let table = compile("-x:1");
        let outcome = classify(&table, &["-x", "first", "-x", "second"]).unwrap();
        assert_eq!(outcome.value("-x"), Some("second "));
    }

    #[test]
    fn test_option_with_arity_but_no_arguments_is_marked_empty() {
        let table = compile("-e:0:1");
        let outcome = classify(&table, &["-e"]).unwrap();
        assert!(outcome.is_set("-e"));
        assert_eq!(outcome.value("-e"), Some(""));
        assert!(!outcome.flag("-e"));
    }

    #[test]
    fn test_empty_table_classifies_everything_positional() {
        let table = compile("");
        let outcome = classify(&table, &["a", "b"]).unwrap();
        assert!(outcome.options.is_empty());
        assert_eq!(outcome.params, vec!["a", "b"]);
    }

    #[test]
    fn test_params_preserve_order_and_duplicates() {
        let table = compile("-t");
        let outcome = classify(&table, &["one", "-t", "two", "one"]).unwrap();
        assert_eq!(outcome.params, vec!["one", "two", "one"]);
    }
}
