//! Help output parser for free-form CLI help text.
//!
//! There is no schema for `--help` output, so parsing is a cascade of
//! line-shape heuristics rather than a grammar:
//!
//! 1. **Normalize**: strip ANSI styling/overstrike, unify line endings.
//! 2. **Split**: detect header lines (`Commands:`, `CORE COMMANDS`,
//!    `GLOBAL OPTIONS`, ...) and bucket the lines beneath them into tagged
//!    regions; text before the first header forms the preamble, and inline
//!    `usage:` markers are collected separately.
//! 3. **Extract**: usage lines, commands, options, examples and environment
//!    variables from their regions. Options fall back to a scan of the whole
//!    document when no option region exists.
//! 4. **Warn**: record missing commands/options as warnings.
//!
//! Parsing is total: every input, including empty or binary text, yields a
//! [`ParsedDocument`]. Degraded extraction is visible only through
//! [`ParsedDocument::warnings`].

mod normalize;
mod sections;
mod strategies;
mod util;

use helpdoc_core::{NO_COMMANDS_WARNING, NO_OPTIONS_WARNING, ParsedDocument};
use tracing::debug;

pub use sections::{DEFAULT_KEYWORDS, KeywordRule, SectionTag};

use sections::{Line, SectionTag as Tag};
use strategies::{commands, listing, options, usage};

/// Parses raw help output with the default header keywords.
///
/// # Examples
///
/// ```
/// use helpdoc_parser::parser::parse;
///
/// let doc = parse("Commands:\n  build  Build the project\n  test   Run tests\n");
/// assert_eq!(doc.commands[0].name, "build");
/// assert_eq!(doc.commands[1].summary, "Run tests");
/// assert_eq!(doc.warnings, vec!["No options detected."]);
/// ```
pub fn parse(raw: &str) -> ParsedDocument {
    parse_with_keywords(raw, DEFAULT_KEYWORDS)
}

/// Parses raw help output using a caller-supplied header keyword table.
///
/// Rules earlier in `keywords` take precedence when a header contains more
/// than one keyword.
pub fn parse_with_keywords(raw: &str, keywords: &[KeywordRule]) -> ParsedDocument {
    let normalized = normalize::normalize_help_output(raw);
    let lines = normalized.lines().collect::<Vec<_>>();
    let split = sections::split_sections(&lines, keywords);
    debug!(
        sections = split.sections.len(),
        labels = ?split.sections.iter().map(|s| (s.label.as_str(), s.tag, s.header_index)).collect::<Vec<_>>(),
        preamble = split.preamble.len(),
        inline_usage = split.inline_usage.len(),
        "split help text"
    );

    let option_lines = if split.has_section(Tag::Options) {
        split.bodies(Tag::Options)
    } else {
        debug!("no option region; scanning whole document for flag rows");
        lines
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, text)| !text.trim().is_empty())
            .map(|(index, text)| Line { index, text })
            .collect()
    };

    let mut document = ParsedDocument {
        description: usage::extract_description(&split.preamble),
        usage_lines: usage::extract_usage(&split),
        commands: commands::extract_commands(&split.bodies(Tag::Commands)),
        options: options::extract_options(&option_lines),
        examples: listing::extract_examples(&split.bodies(Tag::Examples)),
        env: listing::extract_env(&split.bodies(Tag::Env)),
        warnings: Vec::new(),
    };
    document.warnings = synthesize_warnings(&document);

    debug!(
        usage = document.usage_lines.len(),
        commands = document.commands.len(),
        options = document.options.len(),
        examples = document.examples.len(),
        env = document.env.len(),
        warnings = document.warnings.len(),
        "parsed help document"
    );
    document
}

fn synthesize_warnings(document: &ParsedDocument) -> Vec<String> {
    let mut warnings = Vec::new();
    if document.commands.is_empty() {
        warnings.push(NO_COMMANDS_WARNING.to_string());
    }
    if document.options.is_empty() {
        warnings.push(NO_OPTIONS_WARNING.to_string());
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use helpdoc_core::{Command, EnvVar, HelpOption};

    const CLAP_HELP: &str = r#"
myapp 1.0.0
A sample application

USAGE:
    myapp [OPTIONS] <SUBCOMMAND>

FLAGS:
    -h, --help       Prints help information
    -V, --version    Prints version information

OPTIONS:
    -c, --config <FILE>    Config file path

SUBCOMMANDS:
    init      Initialize a new project
    build     Build the project
    help      Prints this message
"#;

    const GH_HELP: &str = r#"Work seamlessly with GitHub from the command line.

USAGE
  gh <command> <subcommand> [flags]

CORE COMMANDS
  auth:        Authenticate gh and git with GitHub
  repo:        Manage repositories

ADDITIONAL COMMANDS
  alias:       Create command shortcuts
  api:         Make an authenticated GitHub API request

FLAGS
  --help      Show help for command
  --version   Show gh version

EXAMPLES
  $ gh issue create
  $ gh repo clone cli/cli

ENVIRONMENT VARIABLES
  GH_HOST     default host
  NO_COLOR    disable colors

LEARN MORE
  Use 'gh <command> <subcommand> --help' for more information about a command.
"#;

    #[test]
    fn test_exact_header_round_trip() {
        let doc = parse("Commands:\n  build  Build the project\n  test   Run tests\n");
        assert_eq!(
            doc.commands,
            vec![
                Command::new("build", "Build the project"),
                Command::new("test", "Run tests"),
            ]
        );
        assert!(!doc.warnings.iter().any(|w| w == NO_COMMANDS_WARNING));
        assert!(doc.warnings.iter().any(|w| w == NO_OPTIONS_WARNING));
    }

    #[test]
    fn test_fuzzy_headers_merge_command_groups() {
        let doc = parse(GH_HELP);
        let names = doc.commands.iter().map(|c| c.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["auth", "repo", "alias", "api"]);
        assert!(doc.warnings.is_empty());
    }

    #[test]
    fn test_gh_style_document_sections() {
        let doc = parse(GH_HELP);
        assert_eq!(
            doc.description.as_deref(),
            Some("Work seamlessly with GitHub from the command line.")
        );
        assert_eq!(doc.usage_lines, vec!["gh <command> <subcommand> [flags]"]);
        assert_eq!(doc.options[0], HelpOption::new("--help", "Show help for command"));
        assert_eq!(doc.examples, vec!["$ gh issue create", "$ gh repo clone cli/cli"]);
        assert_eq!(
            doc.env,
            vec![
                EnvVar::new("GH_HOST", "default host"),
                EnvVar::new("NO_COLOR", "disable colors"),
            ]
        );
    }

    #[test]
    fn test_clap_document_merges_flag_and_option_regions() {
        let doc = parse(CLAP_HELP);
        assert_eq!(doc.description.as_deref(), Some("A sample application"));
        assert_eq!(doc.usage_lines, vec!["myapp [OPTIONS] <SUBCOMMAND>"]);
        let flags = doc.options.iter().map(|o| o.flags.as_str()).collect::<Vec<_>>();
        assert_eq!(flags, vec!["-h, --help", "-V, --version", "-c, --config <FILE>"]);
        assert!(doc.find_command("init").is_some());
        assert_eq!(doc.commands.len(), 3);
    }

    #[test]
    fn test_tab_delimited_entries() {
        let doc = parse("Commands:\n  show\tShow reminders\n  add\tAdd a reminder\n");
        assert_eq!(doc.commands[0], Command::new("show", "Show reminders"));
    }

    #[test]
    fn test_two_line_signature_block() {
        let doc = parse("Commands:\n  drive (drv) <command> [flags]\n    Google Drive\n");
        assert_eq!(
            doc.commands,
            vec![Command::new("drive", "Google Drive").with_subcommands()]
        );
    }

    #[test]
    fn test_trailing_colon_stripped() {
        let doc = parse("Commands:\nauth:   Authenticate\n");
        assert_eq!(doc.commands[0].name, "auth");
        assert_eq!(doc.commands[0].summary, "Authenticate");
    }

    #[test]
    fn test_group_labels_inside_command_region() {
        let doc = parse("Commands:\nBasic:\n  show   Show things\nAdvanced:\n  purge  Remove everything\n");
        assert_eq!(
            doc.commands,
            vec![
                Command::new("show", "Show things"),
                Command::new("purge", "Remove everything"),
            ]
        );
        assert!(!doc.warnings.iter().any(|w| w == NO_COMMANDS_WARNING));
    }

    #[test]
    fn test_group_labels_inside_option_region() {
        let doc = parse("Options:\nGeneral:\n  -v, --verbose  talk more\nOutput:\n  -o FILE        write to FILE\n");
        assert_eq!(
            doc.options,
            vec![
                HelpOption::new("-v, --verbose", "talk more"),
                HelpOption::new("-o FILE", "write to FILE"),
            ]
        );
    }

    #[test]
    fn test_title_case_and_slashed_command_headers() {
        let doc = parse("Tool\n\nAdditional Commands For Admins\n  purge  Remove everything\n");
        assert_eq!(doc.commands, vec![Command::new("purge", "Remove everything")]);
        assert_eq!(doc.description.as_deref(), Some("Tool"));

        let doc = parse("Commands/Aliases:\n  purge  Remove everything\n");
        assert_eq!(doc.commands, vec![Command::new("purge", "Remove everything")]);
    }

    #[test]
    fn test_nested_row_is_not_merged_into_summary() {
        let doc = parse("Commands:\n a  Do a\n    sub  Do sub\n");
        assert_eq!(
            doc.commands,
            vec![Command::new("a", "Do a"), Command::new("sub", "Do sub")]
        );
    }

    #[test]
    fn test_headerless_options() {
        let doc = parse("  --verbose   talk more\n  --output <file>   write to file");
        assert_eq!(
            doc.options,
            vec![
                HelpOption::new("--verbose", "talk more"),
                HelpOption::new("--output <file>", "write to file"),
            ]
        );
        assert_eq!(doc.warnings, vec![NO_COMMANDS_WARNING]);
    }

    #[test]
    fn test_option_region_disables_headerless_scan() {
        let doc = parse("  --stray   outside any region\n\nOptions:\n  -v  verbose\n");
        assert_eq!(doc.options, vec![HelpOption::new("-v", "verbose")]);
    }

    #[test]
    fn test_empty_input_degrades_with_both_warnings() {
        let doc = parse("");
        assert!(doc.commands.is_empty());
        assert!(doc.options.is_empty());
        assert!(doc.usage_lines.is_empty());
        assert!(doc.examples.is_empty());
        assert!(doc.env.is_empty());
        assert_eq!(doc.description, None);
        assert_eq!(doc.warnings, vec![NO_COMMANDS_WARNING, NO_OPTIONS_WARNING]);
        assert!(doc.is_degraded());
    }

    #[test]
    fn test_garbage_input_never_panics() {
        let inputs = [
            "\u{0}\u{1}\u{2}\x1b[31m\x08\x08\x08",
            "::::\n----\n\t\t\t\n<<<>>>",
            "usage:\nusage: \nCommands:\n\t\n  -\n  --",
            "é ü 漢字\n  名前  説明\nCOMMANDS\n  ünï  cödé",
        ];
        for input in inputs {
            let doc = parse(input);
            assert_eq!(doc, parse(input));
        }
    }

    #[test]
    fn test_inline_usage_marker_excludes_preamble() {
        let doc = parse("Universal media converter\nusage: tool [options]...");
        assert_eq!(doc.usage_lines, vec!["tool [options]..."]);
        assert_eq!(doc.description.as_deref(), Some("Universal media converter"));
    }

    #[test]
    fn test_parse_is_deterministic() {
        assert_eq!(parse(GH_HELP), parse(GH_HELP));
        assert_eq!(parse(CLAP_HELP), parse(CLAP_HELP));
    }

    #[test]
    fn test_custom_keywords_override_defaults() {
        let table = [KeywordRule {
            keyword: "verbs",
            tag: SectionTag::Commands,
        }];
        let doc = parse_with_keywords("Verbs:\n  go  Go somewhere\nCommands:\n  x  ignored", &table);
        let names = doc.commands.iter().map(|c| c.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["go"]);
    }
}
