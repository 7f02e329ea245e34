use std::ops::RangeInclusive;

use super::is_line_break;
use crate::bits::{fetch_unsigned, BitCursor};

/// Header fields of an ILI9341_t3 font.
///
/// The `bits_*` values are field widths in bits, not byte counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct T3Params {
    pub index1_first: u32,
    pub index1_last: u32,
    pub index2_first: u32,
    pub index2_last: u32,
    pub bits_index: u32,
    pub bits_width: u32,
    pub bits_height: u32,
    pub bits_xoffset: u32,
    pub bits_yoffset: u32,
    pub bits_delta: u32,
    pub line_space: u32,
    pub cap_height: u32,
}

impl T3Params {
    /// A second band of `(0, 0)` means the font has only one.
    pub fn has_second_band(&self) -> bool {
        !(self.index2_first == 0 && self.index2_last == 0)
    }
}

/// Glyph header decoded from the data blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct T3Glyph {
    pub width: u32,
    pub height: u32,
    pub x_offset: i32,
    pub y_offset: i32,
    /// Advance width.
    pub delta: u32,
    /// Byte offset of the glyph record in the data blob.
    pub data_pos: usize,
    /// Bit index, relative to `data_pos`, where the scanlines start.
    pub bits_start: usize,
}

/// A horizontal run of set pixels, repeated over `rows` consecutive rows.
///
/// Coordinates are relative to the glyph's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct T3Span {
    pub x: u32,
    pub y: u32,
    pub len: u32,
    pub rows: u32,
}

impl T3Span {
    /// One past the last row the span covers.
    pub fn bottom(&self) -> u32 {
        self.y + self.rows
    }
}

/// A PJRC ILI9341_t3 run-length font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct T3Font {
    name: String,
    data: Vec<u8>,
    index: Vec<u8>,
    params: T3Params,
}

impl T3Font {
    /// Both blobs must already carry the four-byte zero tail.
    pub(crate) fn from_parts(name: String, data: Vec<u8>, index: Vec<u8>, params: T3Params) -> Self {
        Self {
            name,
            data,
            index,
            params,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &T3Params {
        &self.params
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn index(&self) -> &[u8] {
        &self.index
    }

    /// The declared code point bands.
    pub fn ranges(&self) -> Vec<RangeInclusive<u32>> {
        let p = &self.params;
        let mut ranges = vec![p.index1_first..=p.index1_last];
        if p.has_second_band() {
            ranges.push(p.index2_first..=p.index2_last);
        }
        ranges
    }

    /// Bit offset of the code point's entry in the index blob.
    fn index_offset(&self, codepoint: u32) -> Option<usize> {
        let p = &self.params;
        let slot = if (p.index1_first..=p.index1_last).contains(&codepoint) {
            codepoint - p.index1_first
        } else if p.has_second_band() && (p.index2_first..=p.index2_last).contains(&codepoint) {
            let band_one = p.index1_last.checked_sub(p.index1_first)?.checked_add(1)?;
            (codepoint - p.index2_first).checked_add(band_one)?
        } else {
            return None;
        };
        (slot as usize).checked_mul(p.bits_index as usize)
    }

    /// Decodes the glyph header for `codepoint`.
    ///
    /// Returns `None` for code points outside both bands, for glyphs whose
    /// encoding tag is not 0, and for records that run past the data blob.
    pub fn lookup(&self, codepoint: u32) -> Option<T3Glyph> {
        let p = &self.params;
        let bit_offset = self.index_offset(codepoint)?;
        let data_pos = fetch_unsigned(&self.index, 0, bit_offset, p.bits_index)? as usize;
        if data_pos >= self.data.len() {
            return None;
        }

        let mut cursor = BitCursor::new(&self.data, data_pos, 0);
        if cursor.unsigned(3)? != 0 {
            return None;
        }
        let width = cursor.unsigned(p.bits_width)?;
        let height = cursor.unsigned(p.bits_height)?;
        let x_offset = cursor.signed(p.bits_xoffset)?;
        let y_offset = cursor.signed(p.bits_yoffset)?;
        let delta = cursor.unsigned(p.bits_delta)?;

        Some(T3Glyph {
            width,
            height,
            x_offset,
            y_offset,
            delta,
            data_pos,
            bits_start: cursor.index(),
        })
    }

    pub fn can_display(&self, codepoint: u32) -> bool {
        !is_line_break(codepoint) && self.lookup(codepoint).is_some_and(|g| g.delta > 0)
    }

    /// Decodes the glyph's run-length scanlines into horizontal spans.
    ///
    /// Each row group starts with a control bit. `0` is a single row of
    /// `width` bits. `1` is followed by a 3-bit count; the next row of bits is
    /// repeated `count + 2` times. A repeat may run past `height`; those
    /// rows are reported as encoded. Decoding stops quietly if the bit
    /// stream runs out.
    pub fn spans<F>(&self, glyph: &T3Glyph, mut emit: F)
    where
        F: FnMut(T3Span),
    {
        let mut cursor = BitCursor::new(&self.data, glyph.data_pos, glyph.bits_start);
        let mut y = 0u32;
        let mut remaining = glyph.height;
        while remaining > 0 {
            let Some(repeated) = cursor.bit() else { return };
            let rows = if repeated {
                match cursor.unsigned(3) {
                    Some(n) => n + 2,
                    None => return,
                }
            } else {
                1
            };

            let mut x = 0u32;
            while x < glyph.width {
                let chunk = (glyph.width - x).min(32);
                let Some(bits) = cursor.unsigned(chunk) else { return };
                emit_runs(bits, chunk, x, y, rows, &mut emit);
                x += chunk;
            }

            y += rows;
            remaining = remaining.saturating_sub(rows);
        }
    }

    /// One past the lowest inked row of the glyph, relative to its top.
    pub fn ink_bottom(&self, glyph: &T3Glyph) -> u32 {
        let mut bottom = 0;
        self.spans(glyph, |span| bottom = bottom.max(span.bottom()));
        bottom
    }
}

/// Splits a `count`-bit chunk into runs of set bits by counting leading
/// zeros and ones.
fn emit_runs<F>(bits: u32, count: u32, x0: u32, y: u32, rows: u32, emit: &mut F)
where
    F: FnMut(T3Span),
{
    if bits == 0 || count == 0 {
        return;
    }
    let mut word = bits << (32 - count);
    let mut left = count;
    let mut x = x0;
    while left > 0 {
        let zeros = word.leading_zeros().min(left);
        left -= zeros;
        x += zeros;
        word = word.checked_shl(zeros).unwrap_or(0);

        let ones = (!word).leading_zeros().min(left);
        left -= ones;
        word = word.checked_shl(ones).unwrap_or(0);
        if ones > 0 {
            emit(T3Span {
                x,
                y,
                len: ones,
                rows,
            });
            x += ones;
        }
    }
}
