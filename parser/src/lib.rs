//! Offline parsing of CLI help output into structured documents.
//!
//! This crate turns the free-form text a tool prints for `--help` into a
//! [`ParsedDocument`]: usage lines, commands, options, examples,
//! environment variables and extraction warnings. It never runs commands
//! and never fails; missing structure is reported through
//! [`ParsedDocument::warnings`].
//!
//! # Main entry points
//!
//! - [`parse_help_text`]: parse pre-captured help text.
//! - [`parser::parse_with_keywords`]: same, with a custom header keyword
//!   table.
//! - [`quality::prefer`]: keep the better of a primary and a fallback parse.
//! - [`output::format_document`]: render a document as JSON, YAML or a
//!   terminal table.
//!
//! # Example
//!
//! ```
//! use helpdoc_parser::parse_help_text;
//!
//! let help = "\
//! Usage: mycli [OPTIONS] <COMMAND>
//!
//! Commands:
//!   build  Compile the project
//!   test   Run tests
//!
//! Options:
//!   -v, --verbose        Enable verbose output
//!   -o, --output <PATH>  Output file
//! ";
//!
//! let doc = parse_help_text(help);
//! assert_eq!(doc.usage_lines, vec!["mycli [OPTIONS] <COMMAND>"]);
//! assert!(doc.find_command("build").is_some());
//! assert!(doc.find_option("--output").is_some());
//! assert!(doc.warnings.is_empty());
//! ```
//!
//! [`ParsedDocument`]: helpdoc_core::ParsedDocument
//! [`ParsedDocument::warnings`]: helpdoc_core::ParsedDocument::warnings

pub mod output;
pub mod parser;
pub mod quality;

use helpdoc_core::ParsedDocument;

/// Parses pre-captured help text into a document.
///
/// Total and deterministic: the same input always yields an equal document,
/// and empty or unrecognizable input yields empty sequences plus warnings.
///
/// # Examples
///
/// ```
/// use helpdoc_parser::parse_help_text;
///
/// let doc = parse_help_text("");
/// assert_eq!(doc.warnings, vec!["No commands detected.", "No options detected."]);
/// ```
pub fn parse_help_text(help_text: &str) -> ParsedDocument {
    parser::parse(help_text)
}
