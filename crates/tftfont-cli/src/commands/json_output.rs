//! JSON output types for machine-readable CLI output.
//!
//! Every `--json` command prints exactly one of these documents. Failures
//! are reported inside the document with a stable error code rather than
//! on stderr.

use serde::{Deserialize, Serialize};
use tftfont_core::{FontError, FormatError};
use tftfont_render::TextMetrics;

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
pub mod error_codes {
    /// Font source or manifest could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Font source is malformed or unsupported
    pub const FONT_PARSE: &str = "CLI_002";
    /// Text could not be measured or laid out
    pub const TEXT_LAYOUT: &str = "CLI_003";
    /// Manifest is not valid JSON or has the wrong shape
    pub const MANIFEST: &str = "CLI_004";
    /// Unknown platform name
    pub const UNKNOWN_PLATFORM: &str = "CLI_005";
}

/// Warning codes for CLI operations.
pub mod warning_codes {
    /// Two catalog entries share a key
    pub const DUPLICATE_KEY: &str = "CLI_W001";
    /// A category's font folder is missing
    pub const MISSING_FOLDER: &str = "CLI_W002";
    /// A discovered file could not be catalogued
    pub const UNUSABLE_FILE: &str = "CLI_W003";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Line number in the font source (if available)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
            line: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Sets the source line for this error.
    pub fn with_line(mut self, line: Option<u32>) -> Self {
        self.line = line;
        self
    }

    /// A font parse failure, carrying the offending source line.
    pub fn from_format(error: &FormatError, file: &str) -> Self {
        Self::new(error_codes::FONT_PARSE, format!("{file}: {error}"))
            .with_file(file)
            .with_line(error.line())
    }

    /// A font load failure from a catalogued path.
    pub fn from_font(error: &FontError) -> Self {
        match error {
            FontError::Io { path, .. } => Self::new(error_codes::FILE_READ, error.to_string())
                .with_file(path.display().to_string()),
            FontError::Format { path, source } => {
                Self::from_format(source, &path.display().to_string())
            }
        }
    }
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for JsonError {}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "CLI_W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
}

impl JsonWarning {
    /// Creates a new warning with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// JSON output for the `inspect` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectOutput {
    /// Whether the font parsed
    pub success: bool,
    /// Errors encountered while loading
    pub errors: Vec<JsonError>,
    /// Font summary (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<InspectResult>,
}

/// Summary of one parsed font.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InspectResult {
    /// Symbol the font was parsed under
    pub name: String,
    /// Font encoding
    pub format: String,
    /// Source file path
    pub file: String,
    /// BLAKE3 hash of the source file
    pub source_hash: String,
    /// Declared code point ranges as inclusive `[first, last]` pairs
    pub ranges: Vec<[u32; 2]>,
    /// Number of code points with a drawable glyph
    pub glyph_count: usize,
    /// Distance between baselines in pixels
    pub line_height: u32,
    /// Scale multiplier
    pub text_size: u32,
    /// Widest character cell in pixels
    pub max_char_width: u32,
    /// Tallest character cell in pixels
    pub max_char_height: u32,
}

impl InspectOutput {
    /// Creates a successful inspect output.
    pub fn success(result: InspectResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed inspect output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// JSON output for the `measure` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasureOutput {
    /// Whether the text was measured
    pub success: bool,
    /// Errors encountered while loading or measuring
    pub errors: Vec<JsonError>,
    /// Measurement (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<MeasureResult>,
}

/// Block and per-line metrics for measured text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MeasureResult {
    /// Font symbol
    pub font: String,
    /// Metrics of the whole text block
    pub metrics: TextMetrics,
    /// Metrics of each line, top to bottom
    pub lines: Vec<TextMetrics>,
}

impl MeasureOutput {
    /// Creates a successful measure output.
    pub fn success(result: MeasureResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed measure output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// JSON output for `catalog list` and `catalog check`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogOutput {
    /// False when the manifest failed to load or any checked font failed
    pub success: bool,
    /// Manifest errors
    pub errors: Vec<JsonError>,
    /// Registration warnings
    pub warnings: Vec<JsonWarning>,
    /// Registered fonts in registration order
    pub fonts: Vec<CatalogFontResult>,
}

/// One catalogued font.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogFontResult {
    /// Catalog key (`<platform>_<displayName>`)
    pub key: String,
    /// Platform name
    pub platform: String,
    /// Font encoding
    pub format: String,
    /// Family name
    pub family: String,
    /// Nominal size, when the manifest gives a numeric one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    /// Logical style (PLAIN, BOLD, ...)
    pub style: String,
    /// Resolved source path
    pub path: String,
    /// Number of drawable glyphs (check only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glyph_count: Option<usize>,
    /// Load failure (check only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
}

impl CatalogOutput {
    /// Creates a failed output for a manifest that could not be loaded.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            warnings: Vec::new(),
            fonts: Vec::new(),
        }
    }
}
