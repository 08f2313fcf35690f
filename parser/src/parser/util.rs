//! Shared line-shape helpers for columns, indentation and flag detection.

use regex::Regex;
use std::sync::LazyLock;

const TAB_WIDTH: usize = 8;

// SAFETY: compile-time constant pattern, exercised by tests.
static COLUMN_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\t+| {2,}").expect("static regex must compile"));

/// Display width of `text`, expanding tabs to the next multiple of 8.
pub(crate) fn display_width(text: &str) -> usize {
    text.chars().fold(0, |width, ch| {
        if ch == '\t' {
            width + TAB_WIDTH - width % TAB_WIDTH
        } else {
            width + 1
        }
    })
}

/// Width of the leading whitespace of `line`.
pub(crate) fn indent_width(line: &str) -> usize {
    let trimmed = line.trim_start();
    display_width(&line[..line.len() - trimmed.len()])
}

/// Byte range of the first column gap (a tab run or two or more spaces)
/// inside `text`, ignoring leading indentation.
pub(crate) fn column_gap(text: &str) -> Option<(usize, usize)> {
    let offset = text.len() - text.trim_start().len();
    let found = COLUMN_BREAK_RE.find(&text[offset..])?;
    let (start, end) = (offset + found.start(), offset + found.end());
    if end >= text.len() {
        return None;
    }
    Some((start, end))
}

/// Splits a row at its first column gap into trimmed, non-empty halves.
pub(crate) fn split_two_columns(line: &str) -> Option<(&str, &str)> {
    let (start, end) = column_gap(line)?;
    let left = line[..start].trim();
    let right = line[end..].trim();
    if left.is_empty() || right.is_empty() {
        return None;
    }
    Some((left, right))
}

/// Returns `true` when a trimmed line starts with a `-x` or `--long` token.
pub(crate) fn looks_like_flag_row_start(trimmed: &str) -> bool {
    let Some(rest) = trimmed.strip_prefix('-') else {
        return false;
    };

    if let Some(long) = rest.strip_prefix('-') {
        return long
            .chars()
            .next()
            .is_some_and(|ch| ch.is_ascii_alphanumeric());
    }

    let mut chars = rest.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphanumeric() || matches!(first, '?' | '@')) {
        return false;
    }

    // "-20 ..." is prose or a range, not a flag row.
    !(first.is_ascii_digit() && chars.next().is_some_and(|ch| ch.is_ascii_digit()))
}

/// Whitespace-separated tokens of `text` with their byte offsets.
pub(crate) fn tokens_with_offsets(text: &str) -> Vec<(usize, &str)> {
    let mut tokens = Vec::new();
    let mut start = None;
    for (idx, ch) in text.char_indices() {
        match (ch.is_whitespace(), start) {
            (true, Some(begin)) => {
                tokens.push((begin, &text[begin..idx]));
                start = None;
            }
            (false, None) => start = Some(idx),
            _ => {}
        }
    }
    if let Some(begin) = start {
        tokens.push((begin, &text[begin..]));
    }
    tokens
}
