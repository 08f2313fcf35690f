//! Section splitting: header detection, region bodies and inline usage.
//!
//! The splitter walks the normalized lines once with an explicit cursor.
//! Each line is either blank (dropped), an inline `usage:` marker (collected
//! with its continuation lines), a header (opens a region), or a body line of
//! the most recent region (or the preamble before any header). Keyword-less
//! group labels such as `Basic:` stay inside an open command or option region
//! when the rows beneath them belong to it.

use tracing::trace;

use super::util::{column_gap, indent_width, looks_like_flag_row_start};

/// Normalized tag of a region, used for extractor selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionTag {
    Usage,
    Commands,
    Options,
    Examples,
    Env,
    /// Header-shaped line without a known keyword (`Arguments:`, `LEARN MORE`).
    Other,
}

/// Maps one header keyword to a region tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    /// Lowercase keyword matched against whole header words.
    pub keyword: &'static str,
    pub tag: SectionTag,
}

const fn rule(keyword: &'static str, tag: SectionTag) -> KeywordRule {
    KeywordRule { keyword, tag }
}

/// Default header keywords in priority order.
///
/// When a header contains several keywords, the rule listed first wins, so
/// `COMMAND OPTIONS` is a command region and `USAGE EXAMPLES` an example
/// region.
pub const DEFAULT_KEYWORDS: &[KeywordRule] = &[
    rule("command", SectionTag::Commands),
    rule("commands", SectionTag::Commands),
    rule("subcommand", SectionTag::Commands),
    rule("subcommands", SectionTag::Commands),
    rule("option", SectionTag::Options),
    rule("options", SectionTag::Options),
    rule("flag", SectionTag::Options),
    rule("flags", SectionTag::Options),
    rule("example", SectionTag::Examples),
    rule("examples", SectionTag::Examples),
    rule("env", SectionTag::Env),
    rule("environment", SectionTag::Env),
    rule("usage", SectionTag::Usage),
];

const MAX_HEADER_WORDS: usize = 4;
const MAX_HEADER_CHARS: usize = 48;
const MAX_COLON_HEADER_CHARS: usize = 64;

/// One normalized line with its position in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Line<'a> {
    pub(crate) index: usize,
    pub(crate) text: &'a str,
}

/// A header label plus the body lines beneath it.
#[derive(Debug, Clone)]
pub(crate) struct Section<'a> {
    /// Literal header text without the trailing colon.
    pub(crate) label: String,
    pub(crate) tag: SectionTag,
    pub(crate) header_index: usize,
    pub(crate) body: Vec<Line<'a>>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct SplitDocument<'a> {
    pub(crate) preamble: Vec<Line<'a>>,
    pub(crate) sections: Vec<Section<'a>>,
    /// Payloads of inline `usage:` markers and their continuation lines.
    pub(crate) inline_usage: Vec<String>,
}

impl<'a> SplitDocument<'a> {
    /// Body lines of every region tagged `tag`, in document order.
    pub(crate) fn bodies(&self, tag: SectionTag) -> Vec<Line<'a>> {
        self.sections
            .iter()
            .filter(|section| section.tag == tag)
            .flat_map(|section| section.body.iter().copied())
            .collect()
    }

    pub(crate) fn has_section(&self, tag: SectionTag) -> bool {
        self.sections.iter().any(|section| section.tag == tag)
    }
}

/// Splits normalized lines into preamble, labelled regions and inline usage.
pub(crate) fn split_sections<'a>(lines: &[&'a str], keywords: &[KeywordRule]) -> SplitDocument<'a> {
    let mut doc = SplitDocument::default();
    let mut cursor = 0;

    while cursor < lines.len() {
        let text = lines[cursor];
        if text.trim().is_empty() {
            cursor += 1;
            continue;
        }

        if let Some(payload) = inline_usage_payload(text) {
            doc.inline_usage.push(payload.to_string());
            cursor = collect_usage_continuation(lines, cursor, &mut doc.inline_usage);
            continue;
        }

        let header = classify_header(text, keywords).filter(|(label, tag)| {
            let open = doc.sections.last().map(|section| section.tag);
            let grouped = *tag == SectionTag::Other
                && open.is_some_and(|open| is_group_label(open, lines, cursor));
            if grouped {
                trace!(line = cursor, label = %label, "group label inside region");
            }
            !grouped
        });
        if let Some((label, tag)) = header {
            trace!(line = cursor, label = %label, tag = ?tag, "section header");
            doc.sections.push(Section {
                label,
                tag,
                header_index: cursor,
                body: Vec::new(),
            });
            cursor += 1;
            continue;
        }

        let line = Line {
            index: cursor,
            text,
        };
        match doc.sections.last_mut() {
            Some(section) => section.body.push(line),
            None => doc.preamble.push(line),
        }
        cursor += 1;
    }

    doc
}

/// Whether a keyword-less heading at `at` labels a group of rows that still
/// belong to the open `region` (`Basic:` under `Commands:`, `Output:` under
/// `Options:`), judged by the first non-blank line that follows it.
fn is_group_label(region: SectionTag, lines: &[&str], at: usize) -> bool {
    let label_indent = indent_width(lines[at]);
    let mut following = lines[at + 1..]
        .iter()
        .copied()
        .filter(|line| !line.trim().is_empty());
    let Some(next) = following.next() else {
        return false;
    };

    match region {
        SectionTag::Options => looks_like_flag_row_start(next.trim()),
        SectionTag::Commands => {
            let next_indent = indent_width(next);
            next_indent > label_indent
                && next.trim().starts_with(|ch: char| ch.is_ascii_alphabetic())
                && (column_gap(next).is_some()
                    || following
                        .next()
                        .is_some_and(|summary| indent_width(summary) > next_indent))
        }
        _ => false,
    }
}

/// Returns the text after a leading `usage:` marker, if any.
pub(crate) fn inline_usage_payload(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    let marker = trimmed.get(..6)?;
    if !marker.eq_ignore_ascii_case("usage:") {
        return None;
    }
    let payload = trimmed[6..].trim();
    (!payload.is_empty()).then_some(payload)
}

/// Pushes lines indented deeper than the marker line at `start`; returns the
/// cursor of the first line that is not a continuation.
fn collect_usage_continuation(lines: &[&str], start: usize, out: &mut Vec<String>) -> usize {
    let base = indent_width(lines[start]);
    let mut cursor = start + 1;
    while let Some(text) = lines.get(cursor) {
        if text.trim().is_empty() || indent_width(text) <= base {
            break;
        }
        let trimmed = text.trim();
        let continuation = match trimmed.get(..3) {
            Some(marker) if marker.eq_ignore_ascii_case("or:") => trimmed[3..].trim_start(),
            _ => trimmed,
        };
        if !continuation.is_empty() {
            out.push(continuation.to_string());
        }
        cursor += 1;
    }
    cursor
}

/// Classifies `line` as a region header, returning its label and tag.
pub(crate) fn classify_header(line: &str, keywords: &[KeywordRule]) -> Option<(String, SectionTag)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('-') || inline_usage_payload(trimmed).is_some() {
        return None;
    }

    let (label, has_colon) = match trimmed.strip_suffix(':') {
        Some(rest) => (rest.trim_end(), true),
        None => (trimmed, false),
    };
    if !is_header_shaped(label, has_colon) {
        return None;
    }

    let unindented = indent_width(line) == 0;
    let upper_case = label.chars().any(char::is_alphabetic) && !label.chars().any(char::is_lowercase);

    match keyword_tag(label, keywords) {
        Some(tag) if has_colon || upper_case || unindented => {
            Some((label.to_string(), tag))
        }
        None if unindented && (has_colon || upper_case) => {
            Some((label.to_string(), SectionTag::Other))
        }
        _ => None,
    }
}

fn is_header_shaped(label: &str, has_colon: bool) -> bool {
    if !label.chars().next().is_some_and(char::is_alphabetic) {
        return false;
    }
    if column_gap(label).is_some() {
        return false;
    }
    if !label
        .chars()
        .all(|ch| ch.is_alphabetic() || ch == ' ' || matches!(ch, '-' | '&' | '(' | ')' | ',' | '/'))
    {
        return false;
    }

    let short = label.split_whitespace().count() <= MAX_HEADER_WORDS && label.len() <= MAX_HEADER_CHARS;
    short || (has_colon && label.len() <= MAX_COLON_HEADER_CHARS)
}

/// First keyword rule (in table order) matching a whole word of `label`.
fn keyword_tag(label: &str, keywords: &[KeywordRule]) -> Option<SectionTag> {
    let words = label
        .split(|ch: char| ch.is_whitespace() || ch == '/')
        .filter(|word| !word.is_empty())
        .map(|word| {
            word.chars()
                .filter(|ch| ch.is_alphanumeric())
                .collect::<String>()
                .to_lowercase()
        })
        .collect::<Vec<_>>();

    keywords
        .iter()
        .find(|rule| words.iter().any(|word| word == rule.keyword))
        .map(|rule| rule.tag)
}
