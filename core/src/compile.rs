//! Specification-string compilation.
//!
//! A specification string is a whitespace-separated list of option
//! definitions, each of the form:
//!
//! ```text
//! KEY[,ALTKEY...][:REQUIRED[:OPTIONAL]]
//! ```
//!
//! Commas separate aliases for one option; the first alias becomes the
//! canonical key. The first colon switches to the required-argument count,
//! the second to the optional-argument count. Compilation never fails:
//! missing counts default to zero, and count text that is not a plain
//! number degrades to zero the way C's `atoi` would (leading digits win,
//! the rest is ignored). Use [`inspect_spec`](crate::inspect_spec) to
//! surface those degradations.
//!
//! Each definition is scanned left to right by an explicit state machine,
//! and every alias is bound into the table the moment its terminating
//! delimiter is reached. Binding is therefore incremental: a later
//! definition that reuses an alias overwrites the earlier binding for
//! that alias only, leaving the option's other aliases pointing at the
//! old record.

use tracing::debug;

use crate::types::{OptionSpec, SpecTable};

/// Scanner position within one definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    ReadingKey,
    ReadingRequired,
    ReadingOptional,
}

impl ScanState {
    fn next(self) -> Self {
        match self {
            ScanState::ReadingKey => ScanState::ReadingRequired,
            // Colons beyond the second keep re-targeting the optional count.
            _ => ScanState::ReadingOptional,
        }
    }
}

/// Receives the fields of one definition as the scanner finalizes them.
pub(crate) trait DefinitionSink {
    fn alias(&mut self, field: &str);
    fn required(&mut self, field: &str);
    fn optional(&mut self, field: &str);
}

/// Compiles a specification string into a lookup table.
///
/// Never fails; see the module documentation for how malformed input
/// degrades.
///
/// # Examples
///
/// ```
/// use argsieve_core::compile;
///
/// let table = compile("-e,--example:0:1 -t -x:1");
/// assert_eq!(table.len(), 4);
/// assert_eq!(table.lookup("--example").unwrap().key, "-e");
/// assert!(table.lookup("-t").unwrap().is_flag());
/// assert_eq!(table.lookup("-x").unwrap().required, 1);
/// ```
pub fn compile(spec: &str) -> SpecTable {
    let mut table = SpecTable::default();
    for definition in spec.split_whitespace() {
        let slot = table.push_record(OptionSpec {
            key: String::new(),
            required: 0,
            optional: 0,
        });
        let mut sink = TableSink {
            table: &mut table,
            slot,
        };
        scan_definition(definition, &mut sink);
    }
    debug!(aliases = table.len(), "compiled option specification");
    table
}

/// Walks one definition character by character, handing each finalized
/// field to `sink`.
///
/// A comma terminates an alias regardless of scanner state; a colon
/// terminates the current field and advances the state; the end of the
/// definition terminates a field only when there is accumulated text, so
/// a trailing delimiter emits nothing further.
pub(crate) fn scan_definition(definition: &str, sink: &mut impl DefinitionSink) {
    let mut state = ScanState::ReadingKey;
    let mut field = String::new();
    let mut chars = definition.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            ',' => {
                sink.alias(&field);
                field.clear();
            }
            ':' => {
                emit(sink, state, &field);
                field.clear();
                state = state.next();
            }
            other => {
                field.push(other);
                if chars.peek().is_none() {
                    emit(sink, state, &field);
                }
            }
        }
    }
}

fn emit(sink: &mut impl DefinitionSink, state: ScanState, field: &str) {
    match state {
        ScanState::ReadingKey => sink.alias(field),
        ScanState::ReadingRequired => sink.required(field),
        ScanState::ReadingOptional => sink.optional(field),
    }
}

/// Sink that binds scanned fields into the table for one arena slot.
struct TableSink<'a> {
    table: &'a mut SpecTable,
    slot: usize,
}

impl DefinitionSink for TableSink<'_> {
    fn alias(&mut self, field: &str) {
        self.table.bind_alias(field, self.slot);
        let record = self.table.record_mut(self.slot);
        if record.key.is_empty() {
            record.key = field.to_string();
        }
    }

    fn required(&mut self, field: &str) {
        self.table.record_mut(self.slot).required = parse_count(field);
    }

    fn optional(&mut self, field: &str) {
        self.table.record_mut(self.slot).optional = parse_count(field);
    }
}

/// `atoi`-style count parsing, clamped to non-negative: an optional sign,
/// then leading digits; everything after the first non-digit is ignored
/// and a missing or negative number is zero.
fn parse_count(field: &str) -> usize {
    let (negative, digits) = match field.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, field.strip_prefix('+').unwrap_or(field)),
    };

    let mut value = 0usize;
    for ch in digits.chars() {
        let Some(digit) = ch.to_digit(10) else { break };
        value = value.saturating_mul(10).saturating_add(digit as usize);
    }

    if negative { 0 } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_definition() {
        let table = compile("-t");
        let spec = table.lookup("-t").unwrap();
        assert_eq!(spec.key, "-t");
        assert!(spec.is_flag());
    }

    #[test]
    fn test_aliases_resolve_to_one_record() {
        let table = compile("-e,--example:0:1");
        let by_short = table.lookup("-e").unwrap();
        let by_long = table.lookup("--example").unwrap();
        assert_eq!(by_short, by_long);
        assert_eq!(by_short.key, "-e");
        assert_eq!(by_short.required, 0);
        assert_eq!(by_short.optional, 1);
    }

    #[test]
    fn test_required_and_optional_counts() {
        let spec_table = compile("-x:2:3");
        let spec = spec_table.lookup("-x").unwrap();
        assert_eq!(spec.required, 2);
        assert_eq!(spec.optional, 3);
    }

    #[test]
    fn test_count_parsing_is_atoi_like() {
        assert_eq!(compile("-x:lots").lookup("-x").unwrap().required, 0);
        assert_eq!(compile("-x:2abc").lookup("-x").unwrap().required, 2);
        assert_eq!(compile("-x:-2").lookup("-x").unwrap().required, 0);
        assert_eq!(compile("-x:+4").lookup("-x").unwrap().required, 4);
    }

    #[test]
    fn test_keys_need_no_dash() {
        let table = compile("add:1");
        assert_eq!(table.lookup("add").unwrap().required, 1);
    }

    #[test]
    fn test_empty_spec_compiles_to_empty_table() {
        assert!(compile("").is_empty());
        assert!(compile("   ").is_empty());
    }

    #[test]
    fn test_later_definition_wins_per_alias() {
        let table = compile("-a,-b:1 -b:2");
        // `-b` now points at the second record; `-a` keeps the first.
        assert_eq!(table.lookup("-a").unwrap().required, 1);
        assert_eq!(table.lookup("-b").unwrap().required, 2);
        assert_eq!(table.lookup("-b").unwrap().key, "-b");
    }

    #[test]
    fn test_comma_terminates_an_alias_in_any_state() {
        // The comma inside the count field registers "1" as an alias and
        // discards it as a number; "y" then lands in the count slot.
        let table = compile("x:1,y");
        assert!(table.contains("1"));
        assert_eq!(table.lookup("x").unwrap().required, 0);
    }

    #[test]
    fn test_leading_delimiter_registers_empty_alias() {
        let table = compile(",x");
        assert!(table.contains(""));
        assert_eq!(table.lookup("").unwrap().key, "x");
        assert_eq!(table.lookup("x").unwrap().key, "x");
    }

    #[test]
    fn test_trailing_delimiter_emits_nothing() {
        let table = compile("-a,");
        assert!(!table.contains(""));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_extra_colons_retarget_the_optional_count() {
        let spec_table = compile("a:1:2:3");
        let spec = spec_table.lookup("a").unwrap();
        assert_eq!(spec.required, 1);
        assert_eq!(spec.optional, 3);
    }
}
