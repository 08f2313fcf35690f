//! Usage-line and preamble strategy.

use regex::Regex;
use std::sync::LazyLock;

use crate::parser::sections::{Line, SectionTag, SplitDocument};
use crate::parser::util::{looks_like_flag_row_start, split_two_columns};

/// Usage lines from `usage` regions, else from inline `usage:` markers.
pub(crate) fn extract_usage(doc: &SplitDocument<'_>) -> Vec<String> {
    if doc.has_section(SectionTag::Usage) {
        return doc
            .bodies(SectionTag::Usage)
            .iter()
            .map(|line| line.text.trim())
            .filter(|text| !text.is_empty())
            .map(str::to_string)
            .collect();
    }

    doc.inline_usage.clone()
}

/// First preamble line that reads like a tagline.
///
/// Skips flag rows, two-column rows and `name 1.2.3` version banners.
pub(crate) fn extract_description(preamble: &[Line<'_>]) -> Option<String> {
    // SAFETY: compile-time constant pattern, exercised by tests.
    static BANNER_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[A-Za-z][A-Za-z0-9+._-]*\s+v?\d+\.\d+(?:\.\d+)?\b")
            .expect("static regex must compile")
    });

    preamble
        .iter()
        .map(|line| line.text.trim())
        .find(|trimmed| {
            !trimmed.is_empty()
                && !looks_like_flag_row_start(trimmed)
                && split_two_columns(trimmed).is_none()
                && !BANNER_VERSION_RE.is_match(trimmed)
        })
        .map(str::to_string)
}
