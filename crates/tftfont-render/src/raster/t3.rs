use tftfont_core::{T3Font, T3Glyph};

use crate::buffer::Painter;
use crate::metrics::TextMetrics;
use crate::raster::TextStyle;

/// Box heights at or above this get one extra row, matching the upstream
/// library's output for large fonts.
const TALL_FONT_HEIGHT: u32 = 48;

struct Placed {
    glyph: T3Glyph,
    x: i32,
    y: i32,
}

/// Places glyphs the way the ILI9341_t3 driver advances its cursor: the
/// cursor never starts a glyph left of zero, and a glyph whose x offset
/// would push it left is moved right by that offset instead.
///
/// Returns the placements and the final cursor.
fn place(font: &T3Font, text: &str) -> (Vec<Placed>, i32) {
    let cap = font.params().cap_height as i32;
    let mut cursor = 0i32;
    let mut placed = Vec::new();
    for ch in text.chars() {
        let codepoint = u32::from(ch);
        if !font.can_display(codepoint) {
            continue;
        }
        let Some(glyph) = font.lookup(codepoint) else {
            continue;
        };
        cursor = cursor.max(0);
        let mut x = cursor + glyph.x_offset;
        if x < 0 {
            cursor -= glyph.x_offset;
            x = 0;
        }
        let y = cap - glyph.height as i32 - glyph.y_offset;
        placed.push(Placed { glyph, x, y });
        cursor += glyph.delta as i32;
    }
    (placed, cursor)
}

/// Width is the larger of the summed advances and the rightmost glyph
/// edge. Height covers the cap line and any glyph that reaches above or
/// below it.
pub(crate) fn measure(font: &T3Font, text: &str) -> TextMetrics {
    let cap = font.params().cap_height as i32;
    let (placed, advance) = place(font, text);
    let mut right = advance.max(0);
    let (mut top, mut bottom) = (0i32, cap);
    for p in &placed {
        right = right.max(p.x + p.glyph.width as i32);
        if p.glyph.height > 0 {
            let rows = p.glyph.height.max(font.ink_bottom(&p.glyph)) as i32;
            top = top.min(p.y);
            bottom = bottom.max(p.y + rows);
        }
    }

    let mut height = (bottom - top) as u32;
    if height >= TALL_FONT_HEIGHT {
        height += 1;
    }
    TextMetrics {
        origin_x: 0,
        origin_y: top,
        width: right as u32,
        height,
        base_height: Some(cap - top),
    }
}

pub(crate) fn draw(
    painter: &mut Painter<'_>,
    font: &T3Font,
    text: &str,
    pen: (i32, i32),
    style: &TextStyle,
) {
    let paint_bg = style.paints_background();
    for p in place(font, text).0 {
        let (ox, oy) = (pen.0 + p.x, pen.1 + p.y);
        if paint_bg {
            painter.fill_rect(ox, oy, p.glyph.width, p.glyph.height, style.bg);
        }
        font.spans(&p.glyph, |span| {
            painter.fill_rect(
                ox + span.x as i32,
                oy + span.y as i32,
                span.len,
                span.rows,
                style.fg,
            );
        });
    }
}
