//! Multi-line text.
//!
//! Single-line measurement treats `'\n'` as an error for GFX fonts, so
//! callers with multi-line strings split and stack here instead.

use tftfont_core::{Font, FormatError};

use crate::align::{resolve, Align, Rect};
use crate::buffer::PixelBuffer;
use crate::metrics::{measure, CanvasSize, TextMetrics};
use crate::raster::{draw, TextStyle};

/// A stack of measured lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock<'t> {
    /// Combined box. Width is the widest line, height the sum of line
    /// advances; origin and baseline come from the last line.
    pub metrics: TextMetrics,
    pub lines: Vec<Line<'t>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'t> {
    pub text: &'t str,
    pub metrics: TextMetrics,
    /// Vertical distance to the next line's top.
    pub advance: u32,
}

/// Splits `text` on `'\n'`, drops trailing `'\r'`, and measures each line.
///
/// An empty line advances by the font's line height.
pub fn measure_lines<'t>(
    font: &Font,
    text: &'t str,
    clip: Option<CanvasSize>,
) -> Result<TextBlock<'t>, FormatError> {
    let mut lines = Vec::new();
    for raw in text.split('\n') {
        let line = raw.trim_end_matches('\r');
        let metrics = measure(font, line, clip)?;
        let advance = if metrics.height == 0 {
            font.line_height()
        } else {
            metrics.height
        };
        lines.push(Line {
            text: line,
            metrics,
            advance,
        });
    }

    let mut metrics = lines.last().map(|l| l.metrics).unwrap_or_default();
    metrics.width = lines.iter().map(|l| l.metrics.width).max().unwrap_or(0);
    metrics.height = lines.iter().map(|l| l.advance).sum();
    Ok(TextBlock { metrics, lines })
}

/// Draws possibly multi-line text aligned inside `rect` on `canvas`.
///
/// The whole block is aligned as one box; every line starts at the same
/// ink x and each line's top follows the previous line's advance. Returns
/// the block metrics.
pub fn draw_text(
    canvas: &mut PixelBuffer,
    font: &Font,
    rect: Rect,
    text: &str,
    align: Align,
    margin: i32,
    style: &TextStyle,
) -> Result<TextMetrics, FormatError> {
    let block = measure_lines(font, text, None)?;
    let (x, y) = resolve(rect, &block.metrics, align, margin);
    let left = x + block.metrics.origin_x;
    let mut top = y + block.metrics.origin_y;

    let mut clipped = 0;
    for line in &block.lines {
        let pen = (left - line.metrics.origin_x, top - line.metrics.origin_y);
        clipped += draw(canvas, font, line.text, pen, style)?;
        top += line.advance as i32;
    }
    if clipped > 0 {
        log::trace!("{} lines drew {} clipped pixels", block.lines.len(), clipped);
    }
    Ok(block.metrics)
}
