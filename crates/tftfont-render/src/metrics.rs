//! Text metrics.
//!
//! [`measure`] returns the ink-relative box a single line of text occupies
//! when drawn with its pen at `(0, 0)`. For GFX the pen sits on the
//! baseline, for T3 at the top of the cap line, and for GLCD and UTFT at the
//! top-left of the first cell.

use serde::{Deserialize, Serialize};
use tftfont_core::{Font, FormatError, GLCD_ADVANCE, GLCD_CELL_HEIGHT};

use crate::align::Rect;
use crate::raster::{gfx, glcd, t3, utft};

/// Bounding box of a measured string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextMetrics {
    /// Left edge of the ink relative to the pen.
    pub origin_x: i32,
    /// Top edge of the ink relative to the pen.
    pub origin_y: i32,
    pub width: u32,
    pub height: u32,
    /// Baseline offset from the top of the box. Only GFX and T3 have one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_height: Option<i32>,
}

impl TextMetrics {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Limits the box to the canvas dimensions.
    pub fn clipped_to(self, canvas: CanvasSize) -> Self {
        Self {
            width: self.width.min(canvas.width),
            height: self.height.min(canvas.height),
            ..self
        }
    }
}

/// Size of the drawing surface text is clipped against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(320, 240)
    }
}

/// Measures one line of text.
///
/// Characters the font cannot display are skipped. GFX fonts reject `'\n'`
/// with [`FormatError::NewlineInText`]; use
/// [`measure_lines`](crate::layout::measure_lines) for multi-line text.
/// With `clip` set, GFX measurement stops at the first glyph that would
/// cross the canvas's right edge, and every format's box is limited to the
/// canvas size.
pub fn measure(font: &Font, text: &str, clip: Option<CanvasSize>) -> Result<TextMetrics, FormatError> {
    let metrics = match font {
        Font::Gfx(f) => gfx::measure(f, text, clip)?,
        Font::Glcd(f) => glcd::measure(f, text),
        Font::T3(f) => t3::measure(f, text),
        Font::Utft(f) => utft::measure(f, text),
    };
    Ok(match clip {
        Some(canvas) => metrics.clipped_to(canvas),
        None => metrics,
    })
}

/// Largest cell any single character of the font can occupy.
pub fn max_char_size(font: &Font) -> (u32, u32) {
    match font {
        Font::Gfx(f) => {
            let ts = f.text_size();
            let advance = f
                .glyphs()
                .iter()
                .map(|g| g.x_advance.max(0) as u32)
                .max()
                .unwrap_or(0);
            (advance * ts, f.y_advance().max(0) as u32 * ts)
        }
        Font::Glcd(f) => (GLCD_ADVANCE * f.text_size(), GLCD_CELL_HEIGHT * f.text_size()),
        Font::T3(f) => {
            let delta = f
                .ranges()
                .into_iter()
                .flatten()
                .filter_map(|cp| f.lookup(cp))
                .map(|g| g.delta)
                .max()
                .unwrap_or(0);
            (delta, f.params().line_space)
        }
        Font::Utft(f) => (f.char_width(), f.char_height()),
    }
}

/// Worst-case box for `length` characters drawn at `(x, y)`, with a one
/// pixel border on each side, clipped to the canvas.
pub fn max_text_bounds(font: &Font, length: usize, x: i32, y: i32, canvas: CanvasSize) -> Rect {
    let (char_w, char_h) = max_char_size(font);
    let mut width = char_w.saturating_mul(length as u32).saturating_add(2);
    let mut height = char_h + 2;
    let room_x = (canvas.width as i64 - i64::from(x)).max(0) as u32;
    let room_y = (canvas.height as i64 - i64::from(y)).max(0) as u32;
    width = width.min(room_x);
    height = height.min(room_y);
    Rect::new(x, y, width, height)
}
