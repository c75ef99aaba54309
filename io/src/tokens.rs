//! Token-stream collection.
//!
//! The classifier works on one flat token sequence. This module builds
//! it: process arguments first, then the whitespace-split content of
//! standard input appended after them, when standard input is a pipe or
//! redirect rather than an interactive terminal.

use std::io::{BufRead, IsTerminal};

use crate::error::Result;

/// Collects the token stream for the current invocation.
///
/// The program name is skipped. Standard input contributes tokens only
/// when it is not an interactive terminal, so running the program
/// normally never blocks waiting for input.
pub fn collect() -> Result<Vec<String>> {
    let mut tokens: Vec<String> = std::env::args().skip(1).collect();
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        extend_from_reader(&mut tokens, stdin.lock())?;
    }
    Ok(tokens)
}

/// Appends every whitespace-separated token read from `reader`.
///
/// # Examples
///
/// ```
/// use argsieve_io::tokens::extend_from_reader;
///
/// let mut tokens = vec!["-t".to_string()];
/// extend_from_reader(&mut tokens, "foo  bar\nbaz\n".as_bytes()).unwrap();
/// assert_eq!(tokens, vec!["-t", "foo", "bar", "baz"]);
/// ```
pub fn extend_from_reader(tokens: &mut Vec<String>, reader: impl BufRead) -> Result<()> {
    for line in reader.lines() {
        let line = line?;
        tokens.extend(line.split_whitespace().map(str::to_string));
    }
    Ok(())
}
