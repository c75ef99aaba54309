//! Inspection tool for option specifications.
//!
//! Compiles a user-supplied specification string, classifies tokens
//! against it, and reports the result. The binary's own command line is
//! parsed with the same classifier it demonstrates, which is why user
//! tokens are given after `--`: dash-prefixed tokens behind the
//! separator survive the tool's own parse as positional parameters.
//! (Recognition still wins, so a user token spelled exactly like one of
//! the tool's own keys is claimed by the tool.)

use argsieve_core::{ParseOutcome, classify, compile, inspect_spec};
use argsieve_io::{path, tokens};

use crate::report::{ClassifyReport, DumpReport, ReportFormat, format_classify, format_dump};

mod report;

/// The tool's own option specification.
const OWN_SPEC: &str = "-s,--spec:1 -f,--format:1 -o,--output:0:1 -d,--dump -h,--help -V,--version";

const USAGE: &str = "\
Usage: argsieve -s SPEC [-f FORMAT] [-o [FILE]] [-d] -- TOKEN...

Compiles the option specification SPEC and classifies every token after
`--` (plus piped standard input) against it.

Options:
  -s, --spec SPEC      specification, e.g. \"-e,--example:0:1 -t -x:1\"
  -f, --format FORMAT  report format: json, yaml or table (default: table)
  -o, --output [FILE]  write the report to FILE, or to a timestamp name
                       when FILE is omitted; existing files prompt first
  -d, --dump           report the compiled table and specification notes
                       instead of classifying
  -h, --help           print this help
  -V, --version        print version
";

fn main() {
    if let Err(err) = run() {
        eprintln!("argsieve: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let stream = tokens::collect().map_err(|e| e.to_string())?;
    let own = classify(&compile(OWN_SPEC), &stream).map_err(|e| e.to_string())?;

    if own.flag("-h") {
        print!("{USAGE}");
        return Ok(());
    }
    if own.flag("-V") {
        println!("argsieve {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let format = resolve_format(&own)?;
    let spec =
        option_arg(&own, "-s").ok_or("a specification is required (-s SPEC); see --help")?;
    let table = compile(spec);

    let rendered = if own.flag("-d") {
        let notes = inspect_spec(spec);
        format_dump(&DumpReport::new(spec, &table, &notes), format)?
    } else {
        let outcome = classify(&table, &own.params).map_err(|e| e.to_string())?;
        format_classify(&ClassifyReport::new(spec, &outcome), format)?
    };

    deliver(&own, format, &rendered)
}

/// Looks up an option argument, dropping the trailing separator the
/// classifier appends to every consumed token.
fn option_arg<'a>(own: &'a ParseOutcome, key: &str) -> Option<&'a str> {
    own.value(key)
        .map(|value| value.strip_suffix(' ').unwrap_or(value))
        .filter(|value| !value.is_empty())
}

fn resolve_format(own: &ParseOutcome) -> Result<ReportFormat, String> {
    let Some(raw) = option_arg(own, "-f") else {
        return Ok(ReportFormat::Table);
    };
    ReportFormat::parse(raw)
        .ok_or_else(|| format!("unknown format \"{raw}\"; expected json, yaml or table"))
}

/// Writes the report where the invocation asked for it: standard output
/// by default, otherwise the negotiated destination file. A declined
/// overwrite falls back to standard output.
fn deliver(own: &ParseOutcome, format: ReportFormat, rendered: &str) -> Result<(), String> {
    if own.is_set("-o") {
        let preferred = option_arg(own, "-o");
        let suffix = if preferred.is_some() { "" } else { format.suffix() };
        if let Some(dest) = path::destination(preferred, suffix).map_err(|e| e.to_string())? {
            std::fs::write(&dest, rendered)
                .map_err(|e| format!("writing {}: {e}", dest.display()))?;
            println!("wrote {}", dest.display());
            return Ok(());
        }
    }

    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}
