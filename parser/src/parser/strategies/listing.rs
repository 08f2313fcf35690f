//! Example and environment-variable collectors.

use helpdoc_core::EnvVar;

use crate::parser::sections::Line;
use crate::parser::util::{indent_width, split_two_columns};

/// Every non-blank example line, trimmed.
pub(crate) fn extract_examples(lines: &[Line<'_>]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.text.trim())
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .collect()
}

/// Environment rows split into name and description.
pub(crate) fn extract_env(lines: &[Line<'_>]) -> Vec<EnvVar> {
    let mut vars: Vec<EnvVar> = Vec::new();
    let mut row_indent = None;

    for line in lines {
        let trimmed = line.text.trim();
        if trimmed.is_empty() {
            continue;
        }

        let indent = indent_width(line.text);
        if let (Some(base), Some(last)) = (row_indent, vars.last_mut()) {
            if indent > base {
                if !last.description.is_empty() {
                    last.description.push(' ');
                }
                last.description.push_str(trimmed);
                continue;
            }
        }

        let (name, description) = parse_env_row(trimmed);
        vars.push(EnvVar::new(name, description));
        row_indent = Some(indent);
    }

    vars
}

fn parse_env_row(trimmed: &str) -> (&str, &str) {
    if let Some((name, description)) = split_two_columns(trimmed) {
        return (name, description);
    }
    match trimmed.split_once(": ") {
        Some((name, description)) if !name.trim().is_empty() => (name.trim(), description.trim()),
        _ => (trimmed.trim_end_matches(':'), ""),
    }
}
