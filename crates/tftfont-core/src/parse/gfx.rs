//! Adafruit GFX font sources.
//!
//! ```c
//! const uint8_t FreeMono9pt7bBitmaps[] PROGMEM = { 0xAA, 0xA8, ... };
//! const GFXglyph FreeMono9pt7bGlyphs[] PROGMEM = {
//!   {     0,   0,   0,  11,    0,    1 },   // 0x20 ' '
//!   ... };
//! const GFXfont FreeMono9pt7b PROGMEM = {
//!   (uint8_t  *)FreeMono9pt7bBitmaps,
//!   (GFXglyph *)FreeMono9pt7bGlyphs,
//!   0x20, 0x7E, 18 };
//! ```

use crate::error::FormatError;
use crate::font::{GfxFont, GfxGlyph};
use crate::repair::repair_glyphs;
use crate::scanner::{unexpected, Scanner, TokenKind};

/// `GFXfont` stores `first` and `last` as `uint16_t`.
const MAX_CODEPOINT: u32 = 0xFFFF;

const GLYPH_FIELDS: [&str; 6] = [
    "bitmapOffset",
    "width",
    "height",
    "xAdvance",
    "xOffset",
    "yOffset",
];

pub(crate) fn parse(src: &str, name: &str) -> Result<GfxFont, FormatError> {
    let mut scanner = Scanner::new(src);

    // The bitmap array is the first declaration named after the font.
    loop {
        let token = scanner.next_token();
        match token.kind {
            TokenKind::Word if token.text.starts_with(name) => break,
            TokenKind::Semicolon | TokenKind::Eof => {
                return Err(FormatError::NameNotFound {
                    name: name.to_string(),
                })
            }
            _ => {}
        }
    }
    let bitmap = scanner.read_hex_until(TokenKind::Semicolon, false, "bitmap array")?;

    let (glyphs, glyph_lines) = read_glyph_table(&mut scanner)?;
    let (first, last, y_advance, header_line) = read_header(&mut scanner)?;

    if last < first {
        return Err(FormatError::Invalid {
            what: format!("last code point 0x{last:02X} precedes first 0x{first:02X}"),
            line: header_line,
        });
    }
    if last > MAX_CODEPOINT {
        return Err(FormatError::Invalid {
            what: format!("last code point 0x{last:X} exceeds 16 bits"),
            line: header_line,
        });
    }
    let needed = (last - first) as usize + 1;
    if glyphs.len() < needed {
        return Err(FormatError::Truncated {
            what: format!("glyph table ({} of {} glyphs)", glyphs.len(), needed),
            line: header_line,
        });
    }
    for (i, glyph) in glyphs.iter().take(needed).enumerate() {
        let end = glyph.bitmap_offset as usize + glyph.byte_len();
        if !glyph.is_blank() && end > bitmap.len() {
            return Err(FormatError::Truncated {
                what: format!(
                    "bitmap for glyph 0x{:02X} (needs {} bytes, array has {})",
                    first as usize + i,
                    end,
                    bitmap.len()
                ),
                line: glyph_lines[i],
            });
        }
    }
    if glyphs.len() > needed {
        log::debug!(
            "{}: ignoring {} glyphs past 0x{:02X}",
            name,
            glyphs.len() - needed,
            last
        );
    }

    let mut glyphs = glyphs;
    repair_glyphs(&bitmap, &mut glyphs);

    Ok(GfxFont::from_parts(
        name.to_string(),
        bitmap,
        glyphs,
        first,
        last,
        y_advance,
    ))
}

/// Reads `{offset, w, h, xAdvance, xOffset, yOffset}` tuples up to the `;`
/// that ends the glyph array. Returns the glyphs and the line of each.
fn read_glyph_table(scanner: &mut Scanner<'_>) -> Result<(Vec<GfxGlyph>, Vec<u32>), FormatError> {
    loop {
        let token = scanner.next_token();
        match token.kind {
            TokenKind::LeftBrace => break,
            TokenKind::Semicolon | TokenKind::Eof => return Err(unexpected("glyph data", &token)),
            _ => {}
        }
    }

    let mut glyphs = Vec::new();
    let mut lines = Vec::new();
    loop {
        let token = scanner.next_token();
        match token.kind {
            TokenKind::Semicolon => return Ok((glyphs, lines)),
            TokenKind::Eof => {
                return Err(FormatError::Truncated {
                    what: "glyph table".to_string(),
                    line: token.line,
                })
            }
            TokenKind::LeftBrace => {
                glyphs.push(read_glyph(scanner)?);
                lines.push(token.line);
            }
            _ => {}
        }
    }
}

fn read_glyph(scanner: &mut Scanner<'_>) -> Result<GfxGlyph, FormatError> {
    let mut values = [0i64; 6];
    for (i, field) in GLYPH_FIELDS.iter().enumerate() {
        if i > 0 {
            scanner.expect_special(',', &format!("',' before {field}"))?;
        }
        let token = scanner.expect(TokenKind::Integer, &format!("glyph missing {field}"))?;
        values[i] = token.int_value()?;
        let fits = if i < 3 {
            u32::try_from(values[i]).is_ok()
        } else {
            i32::try_from(values[i]).is_ok()
        };
        if !fits {
            return Err(FormatError::Invalid {
                what: format!("glyph {field} {}", values[i]),
                line: token.line,
            });
        }
    }
    let [bitmap_offset, width, height, x_advance, x_offset, y_offset] = values;
    Ok(GfxGlyph {
        bitmap_offset: bitmap_offset as u32,
        width: width as u32,
        height: height as u32,
        x_advance: x_advance as i32,
        x_offset: x_offset as i32,
        y_offset: y_offset as i32,
        image_width: width as u32,
        image_height: height as u32,
    })
}

/// Reads `first, last, yAdvance` from the trailing `GFXfont` struct.
fn read_header(scanner: &mut Scanner<'_>) -> Result<(u32, u32, i32, u32), FormatError> {
    loop {
        let token = scanner.next_token();
        match token.kind {
            TokenKind::Hex => {
                let first = token.hex_value()?;
                scanner.expect_special(',', "GFXfont struct: ',' after first")?;
                let last = scanner
                    .expect(TokenKind::Hex, "GFXfont struct: last")?
                    .hex_value()?;
                scanner.expect_special(',', "GFXfont struct: ',' after last")?;
                let advance = scanner.expect(TokenKind::Integer, "GFXfont struct: yAdvance")?;
                let y_advance = i32::try_from(advance.int_value()?).map_err(|_| {
                    FormatError::BadNumber {
                        token: advance.text.to_string(),
                        line: advance.line,
                    }
                })?;
                return Ok((first, last, y_advance, token.line));
            }
            TokenKind::Semicolon | TokenKind::Eof => {
                return Err(unexpected("GFXfont struct", &token))
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TINY: &str = r#"
const uint8_t TinyBitmaps[] PROGMEM = {
  0xF0, 0x90 };

const GFXglyph TinyGlyphs[] PROGMEM = {
  {     0,   2,   2,   3,    0,   -2 },   // 0x41 'A'
  {     1,   4,   1,   5,    1,   -1 } }; // 0x42 'B'

const GFXfont Tiny PROGMEM = {
  (uint8_t  *)TinyBitmaps,
  (GFXglyph *)TinyGlyphs,
  0x41, 0x42, 4 };
"#;

    #[test]
    fn test_parse_tiny_font() {
        let font = parse(TINY, "Tiny").unwrap();
        assert_eq!(font.first(), 0x41);
        assert_eq!(font.last(), 0x42);
        assert_eq!(font.y_advance(), 4);
        assert_eq!(font.bitmap(), &[0xF0, 0x90]);
        let b = font.glyph(0x42).unwrap();
        assert_eq!((b.bitmap_offset, b.width, b.height), (1, 4, 1));
        assert_eq!((b.x_advance, b.x_offset, b.y_offset), (5, 1, -1));
        assert!(font.glyph(0x43).is_none());
    }

    #[test]
    fn test_missing_field_reports_field_name() {
        let src = TINY.replace("{     1,   4,   1,", "{     1,   4,  x,");
        let err = parse(&src, "Tiny").unwrap_err();
        match err {
            FormatError::Unexpected { expected, found, .. } => {
                assert_eq!(expected, "glyph missing height");
                assert_eq!(found, "x");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = parse(TINY, "Other").unwrap_err();
        assert_eq!(
            err,
            FormatError::NameNotFound {
                name: "Other".to_string()
            }
        );
    }

    #[test]
    fn test_short_glyph_table_is_truncated() {
        let src = TINY.replace("0x41, 0x42, 4", "0x41, 0x43, 4");
        assert!(matches!(
            parse(&src, "Tiny"),
            Err(FormatError::Truncated { .. })
        ));
    }

    #[test]
    fn test_glyph_past_bitmap_is_truncated() {
        let src = TINY.replace("{     1,   4,   1,", "{     1,   4,   4,");
        assert!(matches!(
            parse(&src, "Tiny"),
            Err(FormatError::Truncated { .. })
        ));
    }

    #[test]
    fn test_last_code_point_past_sixteen_bits() {
        let src = TINY.replace("0x41, 0x42, 4", "0x00, 0xFFFFFFFF, 4");
        match parse(&src, "Tiny").unwrap_err() {
            FormatError::Invalid { what, line } => {
                assert!(what.contains("0xFFFFFFFF"));
                assert_eq!(line, 12);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_inverted_range_is_invalid() {
        let src = TINY.replace("0x41, 0x42, 4", "0x42, 0x41, 4");
        assert!(matches!(
            parse(&src, "Tiny"),
            Err(FormatError::Invalid { .. })
        ));
    }

    #[test]
    fn test_missing_header() {
        let src = TINY.replace("0x41, 0x42, 4", "65, 66, 4");
        assert!(matches!(
            parse(&src, "Tiny"),
            Err(FormatError::Unexpected { .. })
        ));
    }
}
