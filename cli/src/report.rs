//! Report rendering for classification results and table dumps.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::Serialize;

use argsieve_core::{OptionSpec, ParseOutcome, SpecNote, SpecTable};

/// Supported report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Yaml,
    Table,
}

impl ReportFormat {
    /// Resolves a user-supplied format name.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "json" => Some(Self::Json),
            "yaml" => Some(Self::Yaml),
            "table" => Some(Self::Table),
            _ => None,
        }
    }

    /// File suffix for generated output names.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Json => ".json",
            Self::Yaml => ".yaml",
            Self::Table => ".txt",
        }
    }
}

/// Classification report: the specification and what it produced.
#[derive(Debug, Serialize)]
pub struct ClassifyReport<'a> {
    pub spec: &'a str,
    pub options: &'a BTreeMap<String, String>,
    pub params: &'a [String],
}

impl<'a> ClassifyReport<'a> {
    pub fn new(spec: &'a str, outcome: &'a ParseOutcome) -> Self {
        Self {
            spec,
            options: &outcome.options,
            params: &outcome.params,
        }
    }
}

/// Compiled-table report: every alias binding plus advisory notes.
#[derive(Debug, Serialize)]
pub struct DumpReport<'a> {
    pub spec: &'a str,
    pub bindings: BTreeMap<&'a str, &'a OptionSpec>,
    pub notes: Vec<String>,
}

impl<'a> DumpReport<'a> {
    pub fn new(spec: &'a str, table: &'a SpecTable, notes: &[SpecNote]) -> Self {
        Self {
            spec,
            bindings: table.aliases().collect(),
            notes: notes.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Formats a classification report in the requested output format.
pub fn format_classify(
    report: &ClassifyReport<'_>,
    format: ReportFormat,
) -> Result<String, String> {
    match format {
        ReportFormat::Json => serde_json::to_string_pretty(report)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        ReportFormat::Yaml => {
            serde_yaml::to_string(report).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        ReportFormat::Table => Ok(classify_to_table(report)),
    }
}

/// Formats a table dump in the requested output format.
pub fn format_dump(report: &DumpReport<'_>, format: ReportFormat) -> Result<String, String> {
    match format {
        ReportFormat::Json => serde_json::to_string_pretty(report)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        ReportFormat::Yaml => {
            serde_yaml::to_string(report).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        ReportFormat::Table => Ok(dump_to_table(report)),
    }
}

fn classify_to_table(report: &ClassifyReport<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Spec: {}", report.spec);

    if !report.options.is_empty() {
        out.push_str("Options:\n");
        for (key, value) in report.options {
            // Debug formatting keeps the trailing value separator visible.
            let _ = writeln!(out, "  {key} = {value:?}");
        }
    }

    if !report.params.is_empty() {
        out.push_str("Params:\n");
        for param in report.params {
            let _ = writeln!(out, "  {param}");
        }
    }

    out
}

fn dump_to_table(report: &DumpReport<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Spec: {}", report.spec);

    if !report.bindings.is_empty() {
        out.push_str("Bindings:\n");
        for (alias, spec) in &report.bindings {
            let _ = writeln!(
                out,
                "  {alias} -> key={} required={} optional={}",
                spec.key, spec.required, spec.optional
            );
        }
    }

    if !report.notes.is_empty() {
        out.push_str("Notes:\n");
        for note in &report.notes {
            let _ = writeln!(out, "  {note}");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use argsieve_core::{compile, inspect_spec, parse_tokens};

    use super::*;

    #[test]
    fn test_format_names_resolve() {
        assert_eq!(ReportFormat::parse("json"), Some(ReportFormat::Json));
        assert_eq!(ReportFormat::parse("yaml"), Some(ReportFormat::Yaml));
        assert_eq!(ReportFormat::parse("table"), Some(ReportFormat::Table));
        assert_eq!(ReportFormat::parse("csv"), None);
    }

    #[test]
    fn test_classify_report_serializes_to_json() {
        let outcome = parse_tokens("-t", &["-t", "foo"]).unwrap();
        let report = ClassifyReport::new("-t", &outcome);
        let rendered = format_classify(&report, ReportFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["spec"], "-t");
        assert_eq!(value["options"]["-t"], "true");
        assert_eq!(value["params"][0], "foo");
    }

    #[test]
    fn test_classify_table_shows_values_quoted() {
        let outcome = parse_tokens("-x:1", &["-x", "ten", "rest"]).unwrap();
        let report = ClassifyReport::new("-x:1", &outcome);
        let rendered = format_classify(&report, ReportFormat::Table).unwrap();

        assert!(rendered.contains("-x = \"ten \""));
        assert!(rendered.contains("  rest"));
    }

    #[test]
    fn test_dump_table_lists_every_alias() {
        let table = compile("-e,--example:0:1");
        let notes = inspect_spec("-e,--example:0:1");
        let report = DumpReport::new("-e,--example:0:1", &table, &notes);
        let rendered = format_dump(&report, ReportFormat::Table).unwrap();

        assert!(rendered.contains("-e -> key=-e required=0 optional=1"));
        assert!(rendered.contains("--example -> key=-e required=0 optional=1"));
        assert!(!rendered.contains("Notes:"));
    }
}
