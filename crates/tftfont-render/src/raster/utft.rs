use tftfont_core::UtftFont;

use crate::buffer::Painter;
use crate::metrics::TextMetrics;
use crate::raster::TextStyle;

pub(crate) fn measure(font: &UtftFont, text: &str) -> TextMetrics {
    let count = text
        .chars()
        .filter(|&ch| font.can_display(u32::from(ch)))
        .count() as u32;
    TextMetrics {
        width: font.char_width() * count,
        height: font.char_height(),
        ..TextMetrics::default()
    }
}

pub(crate) fn draw(
    painter: &mut Painter<'_>,
    font: &UtftFont,
    text: &str,
    pen: (i32, i32),
    style: &TextStyle,
) {
    let paint_bg = style.paints_background();
    let mut x = pen.0;
    for ch in text.chars() {
        let codepoint = u32::from(ch);
        if !font.can_display(codepoint) {
            continue;
        }
        let Some(cell) = font.glyph_bitmap(codepoint) else {
            continue;
        };
        for yy in 0..font.char_height() {
            for xx in 0..font.char_width() {
                let color = if font.pixel(cell, xx, yy) {
                    style.fg
                } else if paint_bg {
                    style.bg
                } else {
                    continue;
                };
                painter.put(x + xx as i32, pen.1 + yy as i32, color);
            }
        }
        x += font.char_width() as i32;
    }
}
