//! Output formatting for parsed documents.

use helpdoc_core::ParsedDocument;
use thiserror::Error;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    Json,
    Yaml,
    Table,
}

/// Errors raised while serializing a document.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Formats a document in the requested output format.
pub fn format_document(document: &ParsedDocument, format: OutputFormat) -> Result<String, OutputError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(document)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(document)?),
        OutputFormat::Table => Ok(document_to_table(document)),
    }
}

fn document_to_table(document: &ParsedDocument) -> String {
    let mut out = String::new();

    if let Some(ref desc) = document.description {
        out.push_str(&format!("{desc}\n"));
    }
    for usage in &document.usage_lines {
        out.push_str(&format!("Usage: {usage}\n"));
    }

    if !document.commands.is_empty() {
        let rows = document
            .commands
            .iter()
            .map(|cmd| {
                let name = if cmd.has_subcommands == Some(true) {
                    format!("{} ...", cmd.name)
                } else {
                    cmd.name.clone()
                };
                (name, cmd.summary.as_str())
            })
            .collect::<Vec<_>>();
        push_table(&mut out, "Commands", &rows);
    }

    if !document.options.is_empty() {
        let rows = document
            .options
            .iter()
            .map(|opt| (opt.flags.clone(), opt.description.as_str()))
            .collect::<Vec<_>>();
        push_table(&mut out, "Options", &rows);
    }

    if !document.env.is_empty() {
        let rows = document
            .env
            .iter()
            .map(|var| (var.name.clone(), var.description.as_str()))
            .collect::<Vec<_>>();
        push_table(&mut out, "Environment", &rows);
    }

    if !document.examples.is_empty() {
        out.push_str("\nExamples:\n");
        for example in &document.examples {
            out.push_str(&format!("  {example}\n"));
        }
    }

    if !document.warnings.is_empty() {
        out.push_str("\nWarnings:\n");
        for warning in &document.warnings {
            out.push_str(&format!("  ! {warning}\n"));
        }
    }

    out
}

fn push_table(out: &mut String, title: &str, rows: &[(String, &str)]) {
    let width = rows
        .iter()
        .map(|(left, _)| left.chars().count())
        .max()
        .unwrap_or(0);

    out.push_str(&format!("\n{title}:\n"));
    for (left, right) in rows {
        if right.is_empty() {
            out.push_str(&format!("  {left}\n"));
        } else {
            out.push_str(&format!("  {left:<width$}  {right}\n"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    const HELP: &str = "A tool\nusage: tool [options] <command>\n\nCommands:\n  drive (drv) <command> [flags]\n    Google Drive\n  version\tPrint version\n\nOptions:\n  -v, --verbose   talk more\n";

    #[test]
    fn test_json_output_uses_camel_case() {
        let doc = parse(HELP);
        let json = format_document(&doc, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["usageLines"][0], "tool [options] <command>");
        assert_eq!(value["commands"][0]["hasSubcommands"], true);
        assert_eq!(value["options"][0]["flags"], "-v, --verbose");
    }

    #[test]
    fn test_yaml_output_round_trips() {
        let doc = parse(HELP);
        let yaml = format_document(&doc, OutputFormat::Yaml).unwrap();
        let back: ParsedDocument = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_table_output_aligns_columns() {
        let doc = parse(HELP);
        let table = format_document(&doc, OutputFormat::Table).unwrap();
        assert!(table.starts_with("A tool\nUsage: tool [options] <command>\n"));
        assert!(table.contains("  drive ...  Google Drive\n"));
        assert!(table.contains("  version    Print version\n"));
        assert!(table.contains("  -v, --verbose  talk more\n"));
        assert!(!table.contains("Warnings:"));
    }

    #[test]
    fn test_table_output_lists_warnings() {
        let table = format_document(&parse(""), OutputFormat::Table).unwrap();
        assert_eq!(
            table,
            "\nWarnings:\n  ! No commands detected.\n  ! No options detected.\n"
        );
    }
}
