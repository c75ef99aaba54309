//! Small display formatters.

use std::fmt::Write as _;

use chrono::{DateTime, Datelike, TimeZone, Timelike};

/// Formats `when` with a compact pattern language.
///
/// `d`, `m`, `H`, `M` and `S` expand to zero-padded two-digit fields,
/// `Y` to the full year, and `y` to the years since 2000 without
/// padding. Every other character is copied through literally.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
///
/// let when = Utc.with_ymd_and_hms(2015, 4, 3, 1, 23, 45).unwrap();
/// assert_eq!(argsieve_io::format::date("d/m/y-H:M:S", &when), "03/04/15-01:23:45");
/// ```
pub fn date<Tz: TimeZone>(pattern: &str, when: &DateTime<Tz>) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    for ch in pattern.chars() {
        match ch {
            'd' => {
                let _ = write!(out, "{:02}", when.day());
            }
            'm' => {
                let _ = write!(out, "{:02}", when.month());
            }
            'y' => {
                let _ = write!(out, "{}", when.year() - 2000);
            }
            'Y' => {
                let _ = write!(out, "{}", when.year());
            }
            'H' => {
                let _ = write!(out, "{:02}", when.hour());
            }
            'M' => {
                let _ = write!(out, "{:02}", when.minute());
            }
            'S' => {
                let _ = write!(out, "{:02}", when.second());
            }
            literal => out.push(literal),
        }
    }
    out
}

/// Formats integer cents as a decimal amount: `1234` becomes `"12.34"`.
///
/// # Examples
///
/// ```
/// assert_eq!(argsieve_io::format::cents(1234), "12.34");
/// assert_eq!(argsieve_io::format::cents(5), "0.05");
/// ```
pub fn cents(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let magnitude = amount.unsigned_abs();
    format!("{sign}{}.{:02}", magnitude / 100, magnitude % 100)
}
