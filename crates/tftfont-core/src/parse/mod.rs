//! Format parsers.
//!
//! Each parser walks the token stream of one source file and produces an
//! immutable [`Font`]. Any structural problem is a [`FormatError`]; there is
//! no partial-font recovery.

mod gfx;
mod glcd;
mod t3;
mod utft;

use std::path::Path;

use crate::error::{FontError, FormatError};
use crate::font::{Font, FontFormat};

/// Parses font source bytes.
///
/// `name` is the C symbol the font is declared under (`FreeSans9pt7b`,
/// `DroidSans_12`, `SmallFont`). GLCD sources have a single anonymous font
/// and only use it as a label. Bytes that are not valid UTF-8 are replaced.
pub fn parse(format: FontFormat, source: &[u8], name: &str) -> Result<Font, FormatError> {
    let text = String::from_utf8_lossy(source);
    parse_str(format, &text, name)
}

/// Parses font source text.
pub fn parse_str(format: FontFormat, source: &str, name: &str) -> Result<Font, FormatError> {
    log::debug!("parsing {} font '{}' ({} bytes)", format, name, source.len());
    let font: Font = match format {
        FontFormat::Gfx => gfx::parse(source, name)?.into(),
        FontFormat::Glcd => glcd::parse(source, name)?.into(),
        FontFormat::T3 => t3::parse(source, name)?.into(),
        FontFormat::Utft => utft::parse(source, name)?.into(),
    };
    log::debug!(
        "parsed {} font '{}': {} displayable glyphs",
        format,
        name,
        font.displayable_count()
    );
    Ok(font)
}

/// Reads and parses a font source file.
pub fn parse_path(
    format: FontFormat,
    path: impl AsRef<Path>,
    name: &str,
) -> Result<Font, FontError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| FontError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(format, &bytes, name).map_err(|source| FontError::Format {
        path: path.to_path_buf(),
        source,
    })
}
