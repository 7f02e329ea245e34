//! Error types for font parsing.

use std::path::PathBuf;
use thiserror::Error;

/// A malformed or unsupported font source.
///
/// Every variant that comes from the token stream carries the 1-based source
/// line of the offending token. A `FormatError` is always fatal to the parse
/// of that one font.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A required token was not where the format expects it.
    #[error("missing '{expected}' found <{found}> line: {line}")]
    Unexpected {
        expected: String,
        found: String,
        line: u32,
    },

    /// A numeric literal that does not fit the field it was read into.
    #[error("malformed numeric literal <{token}> line: {line}")]
    BadNumber { token: String, line: u32 },

    /// A `/*` block comment that runs to the end of the source.
    #[error("block comment opened on line {line} never ends")]
    UnterminatedComment { line: u32 },

    /// The source ended, or an array came up short, before the font was complete.
    #[error("truncated {what} line: {line}")]
    Truncated { what: String, line: u32 },

    /// A header field holds a value this decoder does not support.
    #[error("unsupported {field} value {value} line: {line}")]
    Unsupported {
        field: &'static str,
        value: i64,
        line: u32,
    },

    /// Structurally valid input whose values are inconsistent.
    #[error("invalid font data: {what} line: {line}")]
    Invalid { what: String, line: u32 },

    /// No declaration for the requested font symbol was found.
    #[error("font name '{name}' not found")]
    NameNotFound { name: String },

    /// Single-line measurement was asked to handle an embedded line break.
    #[error("newlines are not supported; split the text into lines first")]
    NewlineInText,
}

impl FormatError {
    /// Source line the error was raised on, when it has one.
    pub fn line(&self) -> Option<u32> {
        match self {
            FormatError::Unexpected { line, .. }
            | FormatError::BadNumber { line, .. }
            | FormatError::UnterminatedComment { line }
            | FormatError::Truncated { line, .. }
            | FormatError::Unsupported { line, .. }
            | FormatError::Invalid { line, .. } => Some(*line),
            FormatError::NameNotFound { .. } | FormatError::NewlineInText => None,
        }
    }
}

/// Errors from loading a font file from disk.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },
}

/// An unrecognized font format name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown font format '{0}' (expected gfx, glcd, t3 or utft)")]
pub struct UnknownFormat(pub String);
