use tftfont_core::{GlcdFont, GLCD_ADVANCE, GLCD_CELL_HEIGHT, GLCD_CELL_WIDTH};

use crate::buffer::Painter;
use crate::metrics::TextMetrics;
use crate::raster::TextStyle;

fn visible(font: &GlcdFont, text: &str) -> u32 {
    text.chars()
        .filter(|&ch| font.can_display(u32::from(ch)))
        .count() as u32
}

pub(crate) fn measure(font: &GlcdFont, text: &str) -> TextMetrics {
    let ts = font.text_size();
    TextMetrics {
        width: (GLCD_ADVANCE * ts).saturating_mul(visible(font, text)),
        height: GLCD_CELL_HEIGHT * ts,
        ..TextMetrics::default()
    }
}

/// Column-major cells, LSB at the top. An opaque background also fills the
/// spacing column after each cell.
pub(crate) fn draw(
    painter: &mut Painter<'_>,
    font: &GlcdFont,
    text: &str,
    pen: (i32, i32),
    style: &TextStyle,
) {
    let ts = font.text_size();
    let step = ts as i32;
    let paint_bg = style.paints_background();
    let mut x = pen.0;
    for ch in text.chars() {
        let codepoint = u32::from(ch);
        if !font.can_display(codepoint) {
            continue;
        }
        for col in 0..GLCD_CELL_WIDTH {
            let bits = font.column(codepoint, col).unwrap_or(0);
            for row in 0..GLCD_CELL_HEIGHT {
                let color = if bits >> row & 1 != 0 {
                    style.fg
                } else if paint_bg {
                    style.bg
                } else {
                    continue;
                };
                painter.fill_rect(
                    x + col as i32 * step,
                    pen.1 + row as i32 * step,
                    ts,
                    ts,
                    color,
                );
            }
        }
        if paint_bg {
            painter.fill_rect(
                x + GLCD_CELL_WIDTH as i32 * step,
                pen.1,
                ts,
                GLCD_CELL_HEIGHT * ts,
                style.bg,
            );
        }
        x += (GLCD_ADVANCE * ts) as i32;
    }
}
