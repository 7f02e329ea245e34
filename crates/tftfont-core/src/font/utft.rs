use super::is_line_break;

/// A UTFT fixed-cell font.
///
/// Glyphs are `char_width x char_height` cells stored back to back, row-major,
/// MSB-first, `char_width / 8` bytes per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtftFont {
    name: String,
    bitmap: Vec<u8>,
    char_width: u32,
    char_height: u32,
    first: u32,
    last: u32,
    point_size: u32,
}

impl UtftFont {
    pub(crate) fn from_parts(
        name: String,
        bitmap: Vec<u8>,
        char_width: u32,
        char_height: u32,
        first: u32,
        last: u32,
    ) -> Self {
        Self {
            name,
            bitmap,
            char_width,
            char_height,
            first,
            last,
            point_size: char_width,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bitmap(&self) -> &[u8] {
        &self.bitmap
    }

    pub fn char_width(&self) -> u32 {
        self.char_width
    }

    pub fn char_height(&self) -> u32 {
        self.char_height
    }

    pub fn first(&self) -> u32 {
        self.first
    }

    pub fn last(&self) -> u32 {
        self.last
    }

    /// Nominal size recorded from the header. Informational only.
    pub fn point_size(&self) -> u32 {
        self.point_size
    }

    pub fn bytes_per_row(&self) -> usize {
        (self.char_width / 8) as usize
    }

    /// Bytes per glyph cell.
    pub fn cell_len(&self) -> usize {
        self.bytes_per_row() * self.char_height as usize
    }

    /// The cell bytes for `codepoint`, if it is in range and fully present.
    pub fn glyph_bitmap(&self, codepoint: u32) -> Option<&[u8]> {
        if codepoint < self.first || codepoint > self.last {
            return None;
        }
        let len = self.cell_len();
        let start = (codepoint - self.first) as usize * len;
        self.bitmap.get(start..start + len)
    }

    pub fn can_display(&self, codepoint: u32) -> bool {
        !is_line_break(codepoint) && self.glyph_bitmap(codepoint).is_some()
    }

    /// Whether pixel `(x, y)` of a cell returned by [`UtftFont::glyph_bitmap`] is set.
    pub fn pixel(&self, cell: &[u8], x: u32, y: u32) -> bool {
        let index = y as usize * self.bytes_per_row() + (x / 8) as usize;
        cell.get(index)
            .is_some_and(|byte| byte & (0x80 >> (x % 8)) != 0)
    }
}
