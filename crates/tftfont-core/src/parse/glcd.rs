//! The classic GLCD 5x8 font (`glcdfont.c`).

use crate::error::FormatError;
use crate::font::{GlcdFont, GLCD_CELL_WIDTH};
use crate::scanner::{Scanner, TokenKind};

/// GLCD sources carry no per-glyph metadata, so `name` only labels the font.
pub(crate) fn parse(src: &str, name: &str) -> Result<GlcdFont, FormatError> {
    let mut scanner = Scanner::new(src);
    scanner.skip_to(TokenKind::LeftBrace, "'{' opening the glyph array")?;
    let bitmap = scanner.read_hex_until(TokenKind::Semicolon, true, "glyph array")?;
    if bitmap.len() < GLCD_CELL_WIDTH as usize {
        return Err(FormatError::Truncated {
            what: format!("glyph array ({} bytes, one cell needs 5)", bitmap.len()),
            line: scanner.line(),
        });
    }
    if bitmap.len() % GLCD_CELL_WIDTH as usize != 0 {
        log::debug!(
            "{}: {} trailing bytes do not form a full cell",
            name,
            bitmap.len() % GLCD_CELL_WIDTH as usize
        );
    }
    Ok(GlcdFont::from_parts(name.to_string(), bitmap))
}
