//! Region extractors, one per kind of help content.
//!
//! Each extractor is a plain function over a slice of body lines. Command
//! rows additionally try an ordered list of line shapes
//! ([`commands::COMMAND_SHAPES`]); the first shape that recognizes a row
//! wins.

pub(crate) mod commands;
pub(crate) mod listing;
pub(crate) mod options;
pub(crate) mod usage;
