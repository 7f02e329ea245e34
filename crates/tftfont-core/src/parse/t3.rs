//! PJRC ILI9341_t3 font sources.
//!
//! A font is two byte arrays followed by a struct literal:
//!
//! ```c
//! static const unsigned char DroidSans_12_data[] = { 0x00, ... };
//! static const unsigned char DroidSans_12_index[] = { 0x00, ... };
//! const ILI9341_t3_font_t DroidSans_12 = {
//!     DroidSans_12_index, 0, DroidSans_12_data, 1, 0,
//!     32, 126, 0, 0, 10, 4, 4, 2, 4, 4, 16, 12
//! };
//! ```

use crate::bits::fetch_unsigned;
use crate::error::FormatError;
use crate::font::{T3Font, T3Params};
use crate::scanner::{unexpected, Scanner, Token, TokenKind};

/// Zero bytes appended to each blob so the five-byte extraction window
/// stays in bounds for every offset inside the declared data.
const BLOB_TAIL: [u8; 4] = [0; 4];

pub(crate) fn parse(src: &str, name: &str) -> Result<T3Font, FormatError> {
    let mut scanner = Scanner::new(src);
    let data_name = format!("{name}_data");
    let index_name = format!("{name}_index");

    let mut data = read_blob(&mut scanner, &data_name)?;
    data.extend_from_slice(&BLOB_TAIL);
    let mut index = read_blob(&mut scanner, &index_name)?;
    index.extend_from_slice(&BLOB_TAIL);

    if scanner.find_word(|w| w == name).is_none() {
        return Err(FormatError::NameNotFound {
            name: name.to_string(),
        });
    }
    if scanner.find_word(|w| w == index_name).is_none() {
        return Err(FormatError::Unexpected {
            expected: format!("{index_name} inside {name}"),
            found: "EOF".to_string(),
            line: scanner.line(),
        });
    }

    let mut fields = StructFields {
        scanner: &mut scanner,
    };
    let unicode = fields.integer("unicode")?;
    if unicode.value != 0 {
        return Err(FormatError::Unsupported {
            field: "unicode",
            value: unicode.value,
            line: unicode.line,
        });
    }
    fields.word(&data_name)?;
    let version = fields.integer("version")?;
    if version.value != 1 {
        return Err(FormatError::Unsupported {
            field: "version",
            value: version.value,
            line: version.line,
        });
    }
    fields.integer("reserved")?;

    let (index1_first, _) = fields.unsigned_at("index1_first")?;
    let (index1_last, band1_line) = fields.unsigned_at("index1_last")?;
    let (index2_first, _) = fields.unsigned_at("index2_first")?;
    let (index2_last, band2_line) = fields.unsigned_at("index2_last")?;
    let params = T3Params {
        index1_first,
        index1_last,
        index2_first,
        index2_last,
        bits_index: fields.bit_width("bits_index")?,
        bits_width: fields.bit_width("bits_width")?,
        bits_height: fields.bit_width("bits_height")?,
        bits_xoffset: fields.bit_width("bits_xoffset")?,
        bits_yoffset: fields.bit_width("bits_yoffset")?,
        bits_delta: fields.bit_width("bits_delta")?,
        line_space: fields.unsigned("line_space")?,
        cap_height: fields.unsigned("cap_height")?,
    };

    if index1_last < index1_first {
        return Err(inverted_band("index1", index1_first, index1_last, band1_line));
    }
    if params.has_second_band() && index2_last < index2_first {
        return Err(inverted_band("index2", index2_first, index2_last, band2_line));
    }
    check_index(&params, &index, data.len() - BLOB_TAIL.len(), band1_line)?;

    log::debug!(
        "{}: t3 bands {}..={} / {}..={}, {} data bytes, {} index bytes",
        name,
        params.index1_first,
        params.index1_last,
        params.index2_first,
        params.index2_last,
        data.len() - BLOB_TAIL.len(),
        index.len() - BLOB_TAIL.len()
    );

    Ok(T3Font::from_parts(name.to_string(), data, index, params))
}

/// Finds the array declared as `array` and reads its bytes up to `}`.
fn read_blob(scanner: &mut Scanner<'_>, array: &str) -> Result<Vec<u8>, FormatError> {
    if scanner.find_word(|w| w == array).is_none() {
        return Err(FormatError::Unexpected {
            expected: format!("font array {array}"),
            found: "EOF".to_string(),
            line: scanner.line(),
        });
    }
    scanner.read_hex_until(TokenKind::RightBrace, true, array)
}

fn inverted_band(band: &str, first: u32, last: u32, line: u32) -> FormatError {
    FormatError::Invalid {
        what: format!("{band} band {first}..={last} ends before it starts"),
        line,
    }
}

/// Every code point in the bands needs an index entry, and every entry
/// must point inside the declared data.
fn check_index(
    params: &T3Params,
    index: &[u8],
    data_len: usize,
    line: u32,
) -> Result<(), FormatError> {
    let mut bands: Vec<(u32, u32)> = vec![(params.index1_first, params.index1_last)];
    if params.has_second_band() {
        bands.push((params.index2_first, params.index2_last));
    }
    let slots: u64 = bands
        .iter()
        .map(|&(first, last)| u64::from(last - first) + 1)
        .sum();

    if params.bits_index == 0 {
        return Err(FormatError::Invalid {
            what: "bits_index of 0 bits".to_string(),
            line,
        });
    }
    let declared_bits = (index.len() - BLOB_TAIL.len()) as u64 * 8;
    let needed_bits = slots * u64::from(params.bits_index);
    if needed_bits > declared_bits {
        return Err(FormatError::Truncated {
            what: format!(
                "index array ({} of {} entries)",
                declared_bits / u64::from(params.bits_index),
                slots
            ),
            line,
        });
    }

    let mut bit = 0usize;
    for (first, last) in bands {
        for codepoint in first..=last {
            let entry = fetch_unsigned(index, 0, bit, params.bits_index).unwrap_or(u32::MAX);
            if entry as usize >= data_len {
                return Err(FormatError::Invalid {
                    what: format!(
                        "index entry for code point {codepoint} points to byte {entry} \
                         of a {data_len} byte data array"
                    ),
                    line,
                });
            }
            bit += params.bits_index as usize;
        }
    }
    Ok(())
}

/// A numeric struct field with its source line.
struct Field {
    value: i64,
    line: u32,
}

/// Comma-separated fields of the font struct literal. Block comments
/// between fields are skipped.
struct StructFields<'s, 'a> {
    scanner: &'s mut Scanner<'a>,
}

impl<'s, 'a> StructFields<'s, 'a> {
    fn next(&mut self, what: &str) -> Result<Token<'a>, FormatError> {
        let comma = self.scanner.next_significant()?;
        if !comma.is_special(',') {
            return Err(unexpected(&format!("',' before {what}"), &comma));
        }
        self.scanner.next_significant()
    }

    fn integer(&mut self, what: &str) -> Result<Field, FormatError> {
        let token = self.next(what)?;
        if token.kind != TokenKind::Integer {
            return Err(unexpected(what, &token));
        }
        Ok(Field {
            value: token.int_value()?,
            line: token.line,
        })
    }

    fn unsigned(&mut self, what: &str) -> Result<u32, FormatError> {
        self.unsigned_at(what).map(|(value, _)| value)
    }

    /// An unsigned field and the line it sits on.
    fn unsigned_at(&mut self, what: &str) -> Result<(u32, u32), FormatError> {
        let field = self.integer(what)?;
        u32::try_from(field.value)
            .map(|value| (value, field.line))
            .map_err(|_| FormatError::Invalid {
                what: format!("{what} {}", field.value),
                line: field.line,
            })
    }

    fn bit_width(&mut self, what: &str) -> Result<u32, FormatError> {
        let field = self.integer(what)?;
        match u32::try_from(field.value) {
            Ok(bits) if bits <= 32 => Ok(bits),
            _ => Err(FormatError::Invalid {
                what: format!("{what} of {} bits", field.value),
                line: field.line,
            }),
        }
    }

    fn word(&mut self, expected: &str) -> Result<(), FormatError> {
        let token = self.next(expected)?;
        if token.is_word(expected) {
            Ok(())
        } else {
            Err(unexpected(expected, &token))
        }
    }
}
