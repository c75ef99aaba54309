//! Destination-path negotiation.
//!
//! Output files are never clobbered silently: a preferred name that
//! already exists triggers a yes/no confirmation prompt, and when no
//! name is preferred a timestamp name is generated instead.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::Result;
use crate::format;

/// Decides where output should be written.
///
/// With a preferred name the destination is `preferred + suffix`; if
/// that file already exists the user is asked on standard output whether
/// to overwrite it, and a declined prompt yields `None`. Without a
/// preferred name the destination is a minute-resolution timestamp name,
/// extended to second resolution when the minute name is already taken.
pub fn destination(preferred: Option<&str>, suffix: &str) -> Result<Option<PathBuf>> {
    let Some(name) = preferred else {
        return Ok(Some(timestamp_destination(suffix, |path| path.exists())));
    };

    let path = PathBuf::from(format!("{name}{suffix}"));
    if !path.exists() {
        return Ok(Some(path));
    }

    let stdin = std::io::stdin();
    let confirmed = confirm_overwrite(&path, stdin.lock(), std::io::stdout().lock())?;
    Ok(confirmed.then_some(path))
}

/// Asks whether `path` may be overwritten; only `y` or `Y` accepts.
///
/// Reading end-of-input before an answer counts as a decline.
pub fn confirm_overwrite(
    path: &Path,
    mut input: impl BufRead,
    mut prompt: impl Write,
) -> Result<bool> {
    write!(prompt, "File {} exists, overwrite [y/N]? ", path.display())?;
    prompt.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim();
    Ok(answer == "y" || answer == "Y")
}

/// Minute-resolution timestamp name (`ymd.HM` + suffix), extended to
/// second resolution when `taken` says the minute name is in use.
pub fn timestamp_destination(suffix: &str, taken: impl Fn(&Path) -> bool) -> PathBuf {
    let now = Local::now();
    let minute = PathBuf::from(format!("{}{suffix}", format::date("ymd.HM", &now)));
    if !taken(&minute) {
        return minute;
    }
    PathBuf::from(format!("{}{suffix}", format::date("ymd.HMS", &now)))
}
