//! Command-listing strategy: tab-delimited, column-aligned and two-line
//! signature rows.

use std::collections::HashSet;

use helpdoc_core::Command;
use tracing::trace;

use crate::parser::sections::Line;
use crate::parser::util::{column_gap, display_width, indent_width, split_two_columns};

/// Line shapes a command entry can take, in the order they are attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CommandShape {
    /// `name<TAB>summary`
    TabDelimited,
    /// `name [annotations]  summary`
    ColumnAligned,
    /// `name (alias) <command> [flags]` followed by a deeper summary line.
    SignatureBlock,
}

pub(crate) const COMMAND_SHAPES: [CommandShape; 3] = [
    CommandShape::TabDelimited,
    CommandShape::ColumnAligned,
    CommandShape::SignatureBlock,
];

/// A recognized entry and how many lines it spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ShapeMatch {
    pub(crate) command: Command,
    pub(crate) consumed: usize,
}

impl CommandShape {
    /// Tries to recognize an entry starting at `lines[at]`.
    pub(crate) fn recognize(self, lines: &[Line<'_>], at: usize) -> Option<ShapeMatch> {
        match self {
            Self::TabDelimited => tab_delimited(lines, at),
            Self::ColumnAligned => column_aligned(lines, at),
            Self::SignatureBlock => signature_block(lines, at),
        }
    }
}

/// Parses command-region body lines into commands, first appearance wins.
pub(crate) fn extract_commands(lines: &[Line<'_>]) -> Vec<Command> {
    let mut commands = Vec::new();
    let mut seen_names = HashSet::new();
    let mut cursor = 0;

    while cursor < lines.len() {
        let trimmed = lines[cursor].text.trim();
        if trimmed.starts_with('-') {
            cursor += 1;
            continue;
        }

        let matched = COMMAND_SHAPES
            .iter()
            .find_map(|shape| shape.recognize(lines, cursor));
        let Some(matched) = matched else {
            trace!(line = lines[cursor].index, text = trimmed, "skipping non-command row");
            cursor += 1;
            continue;
        };

        if seen_names.insert(matched.command.name.clone()) {
            commands.push(matched.command);
        }
        cursor += matched.consumed.max(1);
    }

    commands
}

fn tab_delimited(lines: &[Line<'_>], at: usize) -> Option<ShapeMatch> {
    let trimmed = lines[at].text.trim();
    if trimmed.matches('\t').count() != 1 {
        return None;
    }
    let (name, summary) = trimmed.split_once('\t')?;
    let (name, summary) = (name.trim(), summary.trim());
    if summary.is_empty() || name.contains(char::is_whitespace) {
        return None;
    }

    Some(ShapeMatch {
        command: Command::new(command_name(name)?, summary),
        consumed: 1,
    })
}

fn column_aligned(lines: &[Line<'_>], at: usize) -> Option<ShapeMatch> {
    let text = lines[at].text;
    let (signature, summary) = split_two_columns(text)?;
    let name = command_name(signature.split_whitespace().next()?)?;

    let (_, gap_end) = column_gap(text)?;
    let summary_column = display_width(&text[..gap_end]);
    let mut summary = summary.to_string();
    let mut consumed = 1;
    while let Some(next) = lines.get(at + consumed) {
        if indent_width(next.text) < summary_column || !is_summary_text(next.text) {
            break;
        }
        summary.push(' ');
        summary.push_str(next.text.trim());
        consumed += 1;
    }

    Some(ShapeMatch {
        command: build_command(name, signature, summary),
        consumed,
    })
}

fn signature_block(lines: &[Line<'_>], at: usize) -> Option<ShapeMatch> {
    let text = lines[at].text;
    let signature = text.trim();
    if column_gap(text).is_some() || signature.contains('\t') {
        return None;
    }

    let summary_line = lines.get(at + 1)?;
    let summary_indent = indent_width(summary_line.text);
    if summary_indent <= indent_width(text) || !is_summary_text(summary_line.text) {
        return None;
    }
    // A deeper line under the candidate summary makes it a nested signature,
    // which turns the current line into a bare category label.
    if lines
        .get(at + 2)
        .is_some_and(|line| indent_width(line.text) > summary_indent)
    {
        return None;
    }

    let name = command_name(signature.split_whitespace().next()?)?;
    let mut summary = summary_line.text.trim().to_string();
    let mut consumed = 2;
    while let Some(next) = lines.get(at + consumed) {
        if indent_width(next.text) != summary_indent || !is_summary_text(next.text) {
            break;
        }
        summary.push(' ');
        summary.push_str(next.text.trim());
        consumed += 1;
    }

    Some(ShapeMatch {
        command: build_command(name, signature, summary),
        consumed,
    })
}

fn build_command(name: &str, signature: &str, summary: String) -> Command {
    let command = Command::new(name, &summary);
    if has_command_placeholder(signature) {
        command.with_subcommands()
    } else {
        command
    }
}

/// Free text that is not itself a row (no column gap, tab or flag prefix).
fn is_summary_text(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.starts_with('-') && !trimmed.contains('\t') && column_gap(text).is_none()
}

/// Strips alias/label punctuation from a name token and validates it.
fn command_name(token: &str) -> Option<&str> {
    let name = token.trim_end_matches([':', ',']);
    let valid = name
        .chars()
        .next()
        .is_some_and(|ch| ch.is_ascii_alphanumeric())
        && name
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.' | ':' | '+'));
    valid.then_some(name)
}

fn has_command_placeholder(signature: &str) -> bool {
    signature.split_whitespace().skip(1).any(|token| {
        let token = token.trim_end_matches("...").to_ascii_lowercase();
        token == "<command>" || token == "<subcommand>"
    })
}
