//! Document type definitions for parsed help output.
//!
//! These types are plain output data: the parser builds a fresh
//! [`ParsedDocument`] per call and never holds on to it. Field names
//! serialize in camelCase (`usageLines`, `hasSubcommands`) so the documents
//! can be consumed by tooling outside Rust.

use serde::{Deserialize, Serialize};

/// Warning appended when no command listing produced any entry.
pub const NO_COMMANDS_WARNING: &str = "No commands detected.";

/// Warning appended when no flag/option entry was found.
pub const NO_OPTIONS_WARNING: &str = "No options detected.";

/// A subcommand listed in help output.
///
/// # Examples
///
/// ```
/// use helpdoc_core::Command;
///
/// let cmd = Command::new("drive", "Google Drive").with_subcommands();
/// assert_eq!(cmd.name, "drive");
/// assert_eq!(cmd.has_subcommands, Some(true));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    /// Single token, without trailing colon or alias/placeholder annotations.
    pub name: String,
    /// Free text; empty when the listing carries no summary.
    pub summary: String,
    /// `Some(true)` only when the listing shows a nested `<command>` placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_subcommands: Option<bool>,
}

impl Command {
    /// Creates a command entry with no subcommand marker.
    pub fn new(name: &str, summary: &str) -> Self {
        Self {
            name: name.to_string(),
            summary: summary.to_string(),
            has_subcommands: None,
        }
    }

    /// Marks the command as a group with its own subcommands.
    pub fn with_subcommands(mut self) -> Self {
        self.has_subcommands = Some(true);
        self
    }
}

/// A flag/option row, captured verbatim.
///
/// `flags` keeps the literal spelling including alternates and argument
/// placeholders, e.g. `-o, --output <file>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpOption {
    pub flags: String,
    pub description: String,
}

impl HelpOption {
    pub fn new(flags: &str, description: &str) -> Self {
        Self {
            flags: flags.to_string(),
            description: description.to_string(),
        }
    }
}

/// An environment variable row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvVar {
    pub name: String,
    pub description: String,
}

impl EnvVar {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

/// Structured view of one tool's help output.
///
/// Every sequence is in source order. `warnings` is empty when both commands
/// and options were found; otherwise it carries [`NO_COMMANDS_WARNING`]
/// and/or [`NO_OPTIONS_WARNING`].
///
/// # Examples
///
/// ```
/// use helpdoc_core::{Command, ParsedDocument, NO_OPTIONS_WARNING};
///
/// let mut doc = ParsedDocument::default();
/// doc.commands.push(Command::new("build", "Build the project"));
/// doc.warnings.push(NO_OPTIONS_WARNING.to_string());
///
/// assert_eq!(doc.entry_count(), 1);
/// assert!(!doc.is_degraded());
/// assert!(doc.find_command("build").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDocument {
    /// Tool tagline: the first preamble line that is not usage syntax.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub usage_lines: Vec<String>,
    pub commands: Vec<Command>,
    pub options: Vec<HelpOption>,
    pub examples: Vec<String>,
    pub env: Vec<EnvVar>,
    pub warnings: Vec<String>,
}

impl ParsedDocument {
    /// Finds a command by exact name.
    pub fn find_command(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|cmd| cmd.name == name)
    }

    /// Finds the first option whose flag spec mentions `flag` as a whole token.
    ///
    /// ```
    /// use helpdoc_core::{HelpOption, ParsedDocument};
    ///
    /// let mut doc = ParsedDocument::default();
    /// doc.options.push(HelpOption::new("-o, --output <file>", "write to file"));
    /// assert!(doc.find_option("--output").is_some());
    /// assert!(doc.find_option("-o").is_some());
    /// assert!(doc.find_option("--out").is_none());
    /// ```
    pub fn find_option(&self, flag: &str) -> Option<&HelpOption> {
        self.options.iter().find(|opt| {
            opt.flags
                .split(|ch: char| ch.is_whitespace() || matches!(ch, ',' | '=' | '[' | '<'))
                .any(|token| token == flag)
        })
    }

    /// Total number of extracted entities (usage lines, commands, options,
    /// examples and env vars).
    pub fn entry_count(&self) -> usize {
        self.usage_lines.len()
            + self.commands.len()
            + self.options.len()
            + self.examples.len()
            + self.env.len()
    }

    /// Returns `true` when neither commands nor options were detected.
    ///
    /// Callers use this to decide whether to retry with another help
    /// invocation.
    pub fn is_degraded(&self) -> bool {
        self.warnings.iter().any(|w| w == NO_COMMANDS_WARNING)
            && self.warnings.iter().any(|w| w == NO_OPTIONS_WARNING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case_fields() {
        let mut doc = ParsedDocument::default();
        doc.usage_lines.push("tool [options]".to_string());
        doc.commands
            .push(Command::new("drive", "Google Drive").with_subcommands());
        doc.commands.push(Command::new("auth", "Authenticate"));

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["usageLines"][0], "tool [options]");
        assert_eq!(json["commands"][0]["hasSubcommands"], true);
        assert!(json["commands"][1].get("hasSubcommands").is_none());
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_round_trips_through_json() {
        let mut doc = ParsedDocument::default();
        doc.description = Some("A tool".to_string());
        doc.options.push(HelpOption::new("-v, --verbose", "talk more"));
        doc.env.push(EnvVar::new("HOME", "home directory"));

        let json = serde_json::to_string(&doc).unwrap();
        let back: ParsedDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_degraded_requires_both_warnings() {
        let mut doc = ParsedDocument::default();
        doc.warnings.push(NO_COMMANDS_WARNING.to_string());
        assert!(!doc.is_degraded());

        doc.warnings.push(NO_OPTIONS_WARNING.to_string());
        assert!(doc.is_degraded());
    }
}
