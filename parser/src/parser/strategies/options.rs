//! Flag/option strategy shared by option regions and the headerless scan.

use std::collections::HashSet;

use helpdoc_core::HelpOption;
use tracing::trace;

use crate::parser::sections::Line;
use crate::parser::util::{column_gap, indent_width, looks_like_flag_row_start, tokens_with_offsets};

/// Parses flag rows, joining deeper-indented description lines onto the
/// preceding entry. Entries are unique by verbatim flag spec.
pub(crate) fn extract_options(lines: &[Line<'_>]) -> Vec<HelpOption> {
    let mut options = Vec::new();
    let mut seen_flags = HashSet::new();
    let mut cursor = 0;

    while cursor < lines.len() {
        let line = lines[cursor];
        cursor += 1;
        let Some((flags, first)) = parse_option_row(line.text) else {
            continue;
        };

        let base_indent = indent_width(line.text);
        let mut description = first.to_string();
        while let Some(next) = lines.get(cursor) {
            let trimmed = next.text.trim();
            if trimmed.is_empty()
                || indent_width(next.text) <= base_indent
                || looks_like_flag_row_start(trimmed)
            {
                break;
            }
            if !description.is_empty() {
                description.push(' ');
            }
            description.push_str(trimmed);
            cursor += 1;
        }

        if seen_flags.insert(flags.to_string()) {
            options.push(HelpOption::new(flags, &description));
        } else {
            trace!(line = line.index, flags, "duplicate flag spec");
        }
    }

    options
}

/// Splits one flag row into its verbatim flag spec and inline description.
///
/// With a column gap the split is positional. Without one, the run of flag
/// and placeholder tokens forms the spec; a single trailing word is treated
/// as an argument name (`-name string`) rather than a description.
pub(crate) fn parse_option_row(text: &str) -> Option<(&str, &str)> {
    let trimmed = text.trim();
    if !looks_like_flag_row_start(trimmed) {
        return None;
    }

    if let Some((start, end)) = column_gap(trimmed) {
        return Some((trimmed[..start].trim_end(), trimmed[end..].trim()));
    }

    let run_end = flag_run_end(trimmed);
    let rest = trimmed[run_end..].trim();
    if rest.split_whitespace().count() <= 1 {
        return Some((trimmed, ""));
    }
    Some((trimmed[..run_end].trim_end_matches(',').trim_end(), rest))
}

/// Byte offset where the leading run of flag/placeholder tokens ends.
fn flag_run_end(trimmed: &str) -> usize {
    let mut end = 0;
    for (offset, token) in tokens_with_offsets(trimmed) {
        let bare = token.trim_end_matches(',');
        if !(looks_like_flag_row_start(bare) || is_placeholder_token(bare)) {
            break;
        }
        end = offset + token.len();
    }
    end
}

fn is_placeholder_token(token: &str) -> bool {
    if token.is_empty() {
        return false;
    }
    if token == "|" || token == "..." {
        return true;
    }
    if token.starts_with(['<', '[', '{']) || token.ends_with(['>', ']', '}']) {
        return true;
    }

    let bare = token.trim_end_matches("...");
    bare.chars().any(|ch| ch.is_ascii_uppercase())
        && bare
            .chars()
            .all(|ch| ch.is_ascii_uppercase() || ch.is_ascii_digit() || matches!(ch, '_' | '-' | '.'))
}
