//! Core document types for parsed CLI help output.
//!
//! This crate defines the output model produced by `helpdoc-parser`:
//!
//! - [`ParsedDocument`]: usage lines, commands, options, examples,
//!   environment variables and extraction warnings for one help text.
//! - [`Command`]: a listed subcommand with its summary.
//! - [`HelpOption`]: a verbatim flag spec and its description.
//! - [`EnvVar`]: an environment variable and its description.
//!
//! # Example
//!
//! ```
//! use helpdoc_core::*;
//!
//! let mut doc = ParsedDocument::default();
//! doc.usage_lines.push("mycli [OPTIONS] <FILE>".into());
//! doc.options.push(HelpOption::new("-v, --verbose", "Enable verbose output"));
//! doc.warnings.push(NO_COMMANDS_WARNING.into());
//!
//! assert!(doc.find_option("--verbose").is_some());
//! assert!(!doc.is_degraded());
//! ```

mod types;

pub use types::*;
