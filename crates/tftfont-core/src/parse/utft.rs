//! UTFT fixed-cell font sources.
//!
//! ```c
//! fontdatatype SmallFont[1144] PROGMEM = {
//! 0x08,0x0C,0x20,0x5F,
//! 0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,  // <space>
//! ... };
//! ```
//!
//! The declared array length counts the four header bytes.

use crate::error::FormatError;
use crate::font::UtftFont;
use crate::scanner::{unexpected, Scanner, TokenKind};

const HEADER_LEN: i64 = 4;

pub(crate) fn parse(src: &str, name: &str) -> Result<UtftFont, FormatError> {
    let mut scanner = Scanner::new(src);
    if scanner.find_word(|w| w == name).is_none() {
        return Err(FormatError::NameNotFound {
            name: name.to_string(),
        });
    }
    scanner.expect(TokenKind::LeftBracket, &format!("{name}["))?;
    let length = scanner.expect(TokenKind::Integer, &format!("{name}[nnnn]"))?;
    let declared = length.int_value()?;
    if declared < HEADER_LEN {
        return Err(FormatError::Invalid {
            what: format!("array length {declared} is shorter than the header"),
            line: length.line,
        });
    }
    let n_bytes = (declared - HEADER_LEN) as usize;

    let header = scanner.skip_to(TokenKind::Hex, "font header")?;
    let char_width = header.byte_value()?;
    let char_height = next_byte(&mut scanner, "char_height")?;
    let first = next_byte(&mut scanner, "first character")?;
    let count = next_byte(&mut scanner, "character count")?;

    if char_width == 0 || char_width % 8 != 0 {
        return Err(FormatError::Invalid {
            what: format!("char_width {char_width} is not a multiple of 8"),
            line: header.line,
        });
    }
    if count == 0 {
        return Err(FormatError::Invalid {
            what: "font declares no characters".to_string(),
            line: header.line,
        });
    }

    let mut bitmap = Vec::with_capacity(n_bytes);
    while bitmap.len() < n_bytes {
        let token = scanner.next_significant()?;
        match token.kind {
            TokenKind::Hex => bitmap.push(token.byte_value()?),
            TokenKind::Special if token.is_special(',') => {}
            _ => {
                return Err(FormatError::Truncated {
                    what: format!(
                        "glyph data ({} of {} bytes, found <{}>)",
                        bitmap.len(),
                        n_bytes,
                        token.display_text()
                    ),
                    line: token.line,
                })
            }
        }
    }

    let first = u32::from(first);
    let last = first + u32::from(count) - 1;
    Ok(UtftFont::from_parts(
        name.to_string(),
        bitmap,
        u32::from(char_width),
        u32::from(char_height),
        first,
        last,
    ))
}

/// Reads `, 0xNN` from the header.
fn next_byte(scanner: &mut Scanner<'_>, what: &str) -> Result<u8, FormatError> {
    let comma = scanner.next_token();
    if !comma.is_special(',') {
        return Err(unexpected(&format!("',' before {what}"), &comma));
    }
    scanner.expect(TokenKind::Hex, what)?.byte_value()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Two 8x2 glyphs starting at 'A'.
    const SRC: &str = "fontdatatype Mini[8] PROGMEM = {\n\
                       0x08,0x02,0x41,0x02,\n\
                       0x81,0x7E,  // A\n\
                       0xFF,0x00,  // B\n\
                       };";

    #[test]
    fn test_parse_header_and_bitmap() {
        let font = parse(SRC, "Mini").unwrap();
        assert_eq!(font.char_width(), 8);
        assert_eq!(font.char_height(), 2);
        assert_eq!(font.first(), 0x41);
        assert_eq!(font.last(), 0x42);
        assert_eq!(font.point_size(), 8);
        assert_eq!(font.glyph_bitmap(0x42), Some(&[0xFF, 0x00][..]));
    }

    #[test]
    fn test_short_array_is_truncated() {
        let src = SRC.replace("Mini[8]", "Mini[10]");
        assert!(matches!(
            parse(&src, "Mini"),
            Err(FormatError::Truncated { .. })
        ));
    }

    #[test]
    fn test_bad_cell_width() {
        let src = SRC.replace("0x08,0x02", "0x06,0x02");
        assert!(matches!(
            parse(&src, "Mini"),
            Err(FormatError::Invalid { .. })
        ));
    }
}
