//! Selection between a primary parse and a fallback parse.
//!
//! When the primary help invocation (e.g. `tool --help`) parses into a
//! degraded document, callers re-run the tool with another invocation
//! (`tool help`, `tool -h`) and keep whichever document is better.

use std::cmp::Ordering;

use helpdoc_core::ParsedDocument;

/// Which of two candidate documents was kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Primary,
    Fallback,
}

/// Returns `true` when a document warrants a retry with another invocation.
pub fn needs_fallback(document: &ParsedDocument) -> bool {
    document.is_degraded()
}

/// Ranks two documents: fewer warnings first, then more extracted entries.
/// Ties keep the primary.
pub fn choose(primary: &ParsedDocument, fallback: &ParsedDocument) -> Choice {
    let by_warnings = fallback.warnings.len().cmp(&primary.warnings.len());
    let by_entries = primary.entry_count().cmp(&fallback.entry_count());
    match by_warnings.then(by_entries) {
        Ordering::Less => Choice::Fallback,
        Ordering::Equal | Ordering::Greater => Choice::Primary,
    }
}

/// Keeps the better of two documents according to [`choose`].
///
/// # Examples
///
/// ```
/// use helpdoc_parser::parser::parse;
/// use helpdoc_parser::quality::prefer;
///
/// let primary = parse("tool: unknown option --help");
/// let fallback = parse("Commands:\n  run  Run it\nOptions:\n  -v  verbose");
/// let kept = prefer(primary, fallback);
/// assert_eq!(kept.commands[0].name, "run");
/// ```
pub fn prefer(primary: ParsedDocument, fallback: ParsedDocument) -> ParsedDocument {
    match choose(&primary, &fallback) {
        Choice::Primary => primary,
        Choice::Fallback => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_fewer_warnings_wins() {
        let primary = parse("");
        let fallback = parse("Commands:\n  run  Run it");
        assert!(needs_fallback(&primary));
        assert_eq!(choose(&primary, &fallback), Choice::Fallback);
    }

    #[test]
    fn test_more_entries_breaks_warning_ties() {
        let primary = parse("Commands:\n  run  Run it");
        let fallback = parse("Commands:\n  run  Run it\n  stop  Stop it\nExamples:\n  tool run");
        assert_eq!(primary.warnings.len(), fallback.warnings.len());
        assert_eq!(choose(&primary, &fallback), Choice::Fallback);
    }

    #[test]
    fn test_ties_keep_primary() {
        let primary = parse("Commands:\n  run  Run it");
        let fallback = parse("Commands:\n  go  Go on");
        assert_eq!(choose(&primary, &fallback), Choice::Primary);
        assert_eq!(prefer(primary, fallback).commands[0].name, "run");
    }

    #[test]
    fn test_worse_fallback_is_discarded() {
        let primary = parse("Commands:\n  run  Run it\nOptions:\n  -v  verbose");
        assert!(!needs_fallback(&primary));
        assert_eq!(choose(&primary, &parse("")), Choice::Primary);
    }
}
