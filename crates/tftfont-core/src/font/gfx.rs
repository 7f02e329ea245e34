use super::{is_line_break, MAX_TEXT_SIZE};

/// One entry of a GFX glyph table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GfxGlyph {
    /// Byte offset of the glyph's first bit in the shared bitmap.
    pub bitmap_offset: u32,
    /// Declared bitmap width. Defines the bit-stream row length.
    pub width: u32,
    /// Declared bitmap height. Defines the bit-stream row count.
    pub height: u32,
    pub x_advance: i32,
    pub x_offset: i32,
    pub y_offset: i32,
    /// Repaired ink width, never smaller than `width`.
    pub image_width: u32,
    /// Repaired ink height, never smaller than `height`.
    pub image_height: u32,
}

impl GfxGlyph {
    /// Number of bytes the glyph's bit stream occupies.
    pub fn byte_len(&self) -> usize {
        (self.width as usize * self.height as usize).div_ceil(8)
    }

    pub fn is_blank(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// An Adafruit GFX font.
///
/// Bitmaps are one bit per pixel, MSB-first, with rows packed back to back
/// without byte padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GfxFont {
    name: String,
    bitmap: Vec<u8>,
    glyphs: Vec<GfxGlyph>,
    first: u32,
    last: u32,
    y_advance: i32,
    text_size: u32,
}

impl GfxFont {
    /// Assembles a font from already validated parts.
    pub(crate) fn from_parts(
        name: String,
        bitmap: Vec<u8>,
        glyphs: Vec<GfxGlyph>,
        first: u32,
        last: u32,
        y_advance: i32,
    ) -> Self {
        Self {
            name,
            bitmap,
            glyphs,
            first,
            last,
            y_advance,
            text_size: 1,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bitmap(&self) -> &[u8] {
        &self.bitmap
    }

    pub fn glyphs(&self) -> &[GfxGlyph] {
        &self.glyphs
    }

    pub fn first(&self) -> u32 {
        self.first
    }

    pub fn last(&self) -> u32 {
        self.last
    }

    pub fn y_advance(&self) -> i32 {
        self.y_advance
    }

    pub fn text_size(&self) -> u32 {
        self.text_size
    }

    /// Sets the integer scale multiplier, clamped to `1..=MAX_TEXT_SIZE`.
    pub fn with_text_size(mut self, size: u32) -> Self {
        self.text_size = size.clamp(1, MAX_TEXT_SIZE);
        self
    }

    /// Glyph record for `codepoint`, if it lies in `[first, last]`.
    pub fn glyph(&self, codepoint: u32) -> Option<&GfxGlyph> {
        if codepoint < self.first || codepoint > self.last {
            return None;
        }
        self.glyphs.get((codepoint - self.first) as usize)
    }

    pub fn can_display(&self, codepoint: u32) -> bool {
        !is_line_break(codepoint) && self.glyph(codepoint).is_some()
    }

    /// Calls `paint(x, y, set)` for every pixel of the glyph's declared box,
    /// in bit-stream order.
    pub fn for_each_pixel<F>(&self, glyph: &GfxGlyph, paint: F)
    where
        F: FnMut(u32, u32, bool),
    {
        decode_pixels(&self.bitmap, glyph, paint);
    }
}

/// Walks a glyph's bit stream. Bits past the end of `bitmap` read as clear.
pub(crate) fn decode_pixels<F>(bitmap: &[u8], glyph: &GfxGlyph, mut paint: F)
where
    F: FnMut(u32, u32, bool),
{
    let mut offset = glyph.bitmap_offset as usize;
    let mut bits = 0u8;
    let mut bit = 0u32;
    for yy in 0..glyph.height {
        for xx in 0..glyph.width {
            if bit & 7 == 0 {
                bits = bitmap.get(offset).copied().unwrap_or(0);
                offset += 1;
            }
            bit += 1;
            paint(xx, yy, bits & 0x80 != 0);
            bits <<= 1;
        }
    }
}
