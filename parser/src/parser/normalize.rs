//! Help-text normalization utilities.

use regex::Regex;
use std::sync::LazyLock;

/// Strips terminal styling and unifies line endings.
///
/// Removes ANSI CSI and OSC escape sequences (colors, hyperlinks) and
/// backspace overstrike (`X\bX` bold, `_\bX` underline), turns CR/CRLF into
/// LF and trims trailing whitespace on every line. Tabs and leading
/// indentation are preserved.
pub(crate) fn normalize_help_output(raw: &str) -> String {
    // SAFETY: These regexes are compile-time constants and are validated by tests.
    static ANSI_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]|\x1b\][^\x07\x1b]*(?:\x07|\x1b\\)")
            .expect("static regex must compile")
    });
    static OVERSTRIKE_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r".\x08").expect("static regex must compile"));

    let stripped = ANSI_RE.replace_all(raw, "");
    let mut cleaned = stripped.into_owned();
    while OVERSTRIKE_RE.is_match(&cleaned) {
        cleaned = OVERSTRIKE_RE.replace_all(&cleaned, "").into_owned();
    }
    let replaced = cleaned.replace("\r\n", "\n").replace('\r', "\n");

    replaced
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}
