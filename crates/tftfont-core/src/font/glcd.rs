use super::{is_line_break, MAX_TEXT_SIZE};

/// Columns per glyph cell.
pub const GLCD_CELL_WIDTH: u32 = 5;
/// Rows per glyph cell.
pub const GLCD_CELL_HEIGHT: u32 = 8;
/// Horizontal advance per glyph, one spacing column included.
pub const GLCD_ADVANCE: u32 = 6;

/// The fixed 5x8 GLCD font.
///
/// Each glyph is five column bytes at `bitmap[codepoint * 5 + col]`; bit
/// `row` of a column byte (LSB at the top) is the pixel at that row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlcdFont {
    name: String,
    bitmap: Vec<u8>,
    text_size: u32,
}

impl GlcdFont {
    /// The bitmap must hold at least one full cell.
    pub(crate) fn from_parts(name: String, bitmap: Vec<u8>) -> Self {
        Self {
            name,
            bitmap,
            text_size: 1,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bitmap(&self) -> &[u8] {
        &self.bitmap
    }

    pub fn text_size(&self) -> u32 {
        self.text_size
    }

    pub fn with_text_size(mut self, size: u32) -> Self {
        self.text_size = size.clamp(1, MAX_TEXT_SIZE);
        self
    }

    /// Highest code point with a complete cell, capped at 255.
    pub fn last(&self) -> u32 {
        let cells = (self.bitmap.len() / GLCD_CELL_WIDTH as usize).min(256);
        cells.saturating_sub(1) as u32
    }

    pub fn can_display(&self, codepoint: u32) -> bool {
        !is_line_break(codepoint)
            && codepoint <= self.last()
            && self.bitmap.len() >= GLCD_CELL_WIDTH as usize
    }

    /// Column byte `col` (0..5) of the glyph for `codepoint`.
    pub fn column(&self, codepoint: u32, col: u32) -> Option<u8> {
        if col >= GLCD_CELL_WIDTH || !self.can_display(codepoint) {
            return None;
        }
        let index = codepoint as usize * GLCD_CELL_WIDTH as usize + col as usize;
        self.bitmap.get(index).copied()
    }
}
