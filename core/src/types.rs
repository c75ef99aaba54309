//! Data model for compiled option specifications and classification results.
//!
//! A [`SpecTable`] is the compiled form of a specification string: an arena
//! of [`OptionSpec`] records plus an alias map pointing into it, so that
//! every alias of one option resolves to the same record. A
//! [`ParseOutcome`] holds what classification produced: the options that
//! appeared (keyed by canonical key) and the positional parameters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Value assigned to an option that consumes no arguments.
pub const TRUTHY_MARKER: &str = "true";

/// One logical option from a specification string.
///
/// The canonical key is the first alias seen for the option during
/// compilation, stored verbatim (dashes included). The two counts control
/// how many tokens the option consumes after itself: `required` tokens
/// unconditionally, then up to `optional` more opportunistically.
///
/// # Examples
///
/// ```
/// use argsieve_core::compile;
///
/// let table = compile("-e,--example:0:1");
/// let spec = table.lookup("--example").unwrap();
/// assert_eq!(spec.key, "-e");
/// assert_eq!(spec.required, 0);
/// assert_eq!(spec.optional, 1);
/// assert!(!spec.is_flag());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSpec {
    /// Canonical key: the first alias registered for this option.
    pub key: String,
    /// Tokens consumed unconditionally after the option.
    pub required: usize,
    /// Further tokens consumed opportunistically.
    pub optional: usize,
}

impl OptionSpec {
    /// True when presence alone is the option's whole meaning.
    pub fn is_flag(&self) -> bool {
        self.required == 0 && self.optional == 0
    }
}

/// Compiled lookup table from alias strings to option records.
///
/// Aliases are many-to-one: `-e` and `--example` from one definition share
/// a single arena slot, so updating the record through one alias is
/// visible through the other. The table is immutable once
/// [`compile`](crate::compile) returns it.
#[derive(Debug, Clone, Default)]
pub struct SpecTable {
    arena: Vec<OptionSpec>,
    aliases: BTreeMap<String, usize>,
}

impl SpecTable {
    /// Resolves a token to its option record, if the token is a known alias.
    ///
    /// # Examples
    ///
    /// ```
    /// use argsieve_core::compile;
    ///
    /// let table = compile("-t -x:1");
    /// assert!(table.lookup("-x").is_some());
    /// assert!(table.lookup("-z").is_none());
    /// ```
    pub fn lookup(&self, token: &str) -> Option<&OptionSpec> {
        self.aliases.get(token).map(|&slot| &self.arena[slot])
    }

    /// True when `token` is a registered alias.
    pub fn contains(&self, token: &str) -> bool {
        self.aliases.contains_key(token)
    }

    /// Iterates over every registered alias and the record it resolves to,
    /// in alias order.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &OptionSpec)> {
        self.aliases
            .iter()
            .map(|(alias, &slot)| (alias.as_str(), &self.arena[slot]))
    }

    /// Number of registered aliases.
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// True when no alias is registered.
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    pub(crate) fn push_record(&mut self, record: OptionSpec) -> usize {
        self.arena.push(record);
        self.arena.len() - 1
    }

    pub(crate) fn record_mut(&mut self, slot: usize) -> &mut OptionSpec {
        &mut self.arena[slot]
    }

    pub(crate) fn bind_alias(&mut self, alias: &str, slot: usize) {
        self.aliases.insert(alias.to_string(), slot);
    }
}

/// Classification result.
///
/// `options` maps each canonical key that appeared to its accumulated
/// argument text: the truthy marker for flags, `""` for an option with
/// arity whose arguments never materialized, otherwise the consumed
/// tokens each followed by a single space (`"-x:2"` on `a b` yields
/// `"a b "`). `params` preserves input order and duplicates.
///
/// # Examples
///
/// ```
/// use argsieve_core::parse_tokens;
///
/// let outcome = parse_tokens("-t -x:1", &["-x", "ten", "-t", "rest"]).unwrap();
/// assert!(outcome.flag("-t"));
/// assert_eq!(outcome.value("-x"), Some("ten "));
/// assert_eq!(outcome.params, vec!["rest"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOutcome {
    /// Canonical option key to accumulated argument text.
    pub options: BTreeMap<String, String>,
    /// Tokens classified as positional parameters, in input order.
    pub params: Vec<String>,
}

impl ParseOutcome {
    /// True when the option with canonical key `key` appeared at all.
    pub fn is_set(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    /// The accumulated argument text for `key`, if the option appeared.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// True when `key` appeared as a bare flag (its value is the truthy
    /// marker).
    pub fn flag(&self, key: &str) -> bool {
        self.value(key) == Some(TRUTHY_MARKER)
    }
}
