//! Advisory diagnostics for specification strings.
//!
//! [`compile`](crate::compile) never rejects its input; malformed pieces
//! degrade silently. This inspection pass walks the same scanner and
//! reports what degraded, so specification authors can see the
//! surprises without changing how compilation behaves.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::compile::{DefinitionSink, scan_definition};

/// One advisory finding about a specification string.
///
/// Notes never block compilation; the `Display` impl provides a
/// human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecNote {
    /// A definition registered an alias with no text (e.g. a leading
    /// comma or colon).
    #[error("definition \"{0}\" registers an empty alias")]
    EmptyAlias(String),
    /// An alias without a dash prefix. Legal, but such a key is
    /// recognized anywhere in the token stream.
    #[error("alias \"{0}\" has no dash prefix")]
    NoDashPrefix(String),
    /// A count field that is not a plain number; it degrades to zero or
    /// to its leading digits.
    #[error("count field \"{field}\" in definition \"{definition}\" is not a plain number")]
    UnparsedCount {
        /// The definition the field came from.
        definition: String,
        /// The offending field text.
        field: String,
    },
    /// An alias bound more than once across the specification; the last
    /// binding wins.
    #[error("alias \"{0}\" is bound more than once; the last binding wins")]
    ReboundAlias(String),
}

/// Inspects a specification string and reports every silent degradation.
///
/// # Examples
///
/// ```
/// use argsieve_core::{SpecNote, inspect_spec};
///
/// assert!(inspect_spec("-e,--example:0:1 -t").is_empty());
///
/// let notes = inspect_spec("-x:lots -x:1");
/// assert!(notes.iter().any(|n| matches!(n, SpecNote::UnparsedCount { .. })));
/// assert!(notes.iter().any(|n| matches!(n, SpecNote::ReboundAlias(_))));
/// ```
pub fn inspect_spec(spec: &str) -> Vec<SpecNote> {
    let mut notes = Vec::new();
    let mut seen: BTreeSet<String> = BTreeSet::new();

    for definition in spec.split_whitespace() {
        let mut sink = NoteSink {
            definition,
            notes: &mut notes,
            seen: &mut seen,
        };
        scan_definition(definition, &mut sink);
    }

    notes
}

/// Sink that collects notes instead of binding a table.
struct NoteSink<'a> {
    definition: &'a str,
    notes: &'a mut Vec<SpecNote>,
    seen: &'a mut BTreeSet<String>,
}

impl NoteSink<'_> {
    fn check_count(&mut self, field: &str) {
        if !field.is_empty() && !field.chars().all(|ch| ch.is_ascii_digit()) {
            self.notes.push(SpecNote::UnparsedCount {
                definition: self.definition.to_string(),
                field: field.to_string(),
            });
        }
    }
}

impl DefinitionSink for NoteSink<'_> {
    fn alias(&mut self, field: &str) {
        if field.is_empty() {
            self.notes
                .push(SpecNote::EmptyAlias(self.definition.to_string()));
            return;
        }
        if !field.starts_with('-') {
            self.notes.push(SpecNote::NoDashPrefix(field.to_string()));
        }
        if !self.seen.insert(field.to_string()) {
            self.notes.push(SpecNote::ReboundAlias(field.to_string()));
        }
    }

    fn required(&mut self, field: &str) {
        self.check_count(field);
    }

    fn optional(&mut self, field: &str) {
        self.check_count(field);
    }
}
