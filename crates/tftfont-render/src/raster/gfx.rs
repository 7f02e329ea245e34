use tftfont_core::{FormatError, GfxFont, GfxGlyph};

use crate::buffer::Painter;
use crate::metrics::{CanvasSize, TextMetrics};
use crate::raster::TextStyle;

/// A glyph with its declared box's top-left corner relative to the pen.
struct Placed<'f> {
    glyph: &'f GfxGlyph,
    x: i32,
    y: i32,
}

fn place<'f>(
    font: &'f GfxFont,
    text: &str,
    clip: Option<CanvasSize>,
) -> Result<Vec<Placed<'f>>, FormatError> {
    if text.contains(['\n', '\r']) {
        return Err(FormatError::NewlineInText);
    }
    let ts = font.text_size() as i32;
    let mut cursor = 0i32;
    let mut placed = Vec::with_capacity(text.len());
    for ch in text.chars() {
        let codepoint = u32::from(ch);
        if !font.can_display(codepoint) {
            continue;
        }
        let Some(glyph) = font.glyph(codepoint) else {
            continue;
        };
        let x = cursor + glyph.x_offset * ts;
        let y = glyph.y_offset * ts;
        if let Some(canvas) = clip {
            let right = x + glyph.image_width as i32 * ts;
            if right > canvas.width as i32 {
                break;
            }
        }
        placed.push(Placed { glyph, x, y });
        cursor += glyph.x_advance * ts;
    }
    Ok(placed)
}

/// Union of every glyph's repaired ink box. The pen is on the baseline, so
/// `base_height` is the distance from the box top down to it.
pub(crate) fn measure(
    font: &GfxFont,
    text: &str,
    clip: Option<CanvasSize>,
) -> Result<TextMetrics, FormatError> {
    let ts = font.text_size() as i32;
    let mut bounds: Option<(i32, i32, i32, i32)> = None;
    for p in place(font, text, clip)? {
        if p.glyph.image_width == 0 || p.glyph.image_height == 0 {
            continue;
        }
        let x2 = p.x + p.glyph.image_width as i32 * ts - 1;
        let y2 = p.y + p.glyph.image_height as i32 * ts - 1;
        bounds = Some(match bounds {
            None => (p.x, p.y, x2, y2),
            Some((x1, y1, bx2, by2)) => (x1.min(p.x), y1.min(p.y), bx2.max(x2), by2.max(y2)),
        });
    }

    let Some((min_x, min_y, max_x, max_y)) = bounds else {
        return Ok(TextMetrics {
            base_height: Some(0),
            ..TextMetrics::default()
        });
    };
    Ok(TextMetrics {
        origin_x: min_x,
        origin_y: min_y,
        width: (max_x - min_x + 1) as u32,
        height: (max_y - min_y + 1) as u32,
        base_height: Some(-min_y),
    })
}

pub(crate) fn draw(
    painter: &mut Painter<'_>,
    font: &GfxFont,
    text: &str,
    pen: (i32, i32),
    style: &TextStyle,
) -> Result<(), FormatError> {
    let ts = font.text_size();
    let paint_bg = style.paints_background();
    for p in place(font, text, None)? {
        let (ox, oy) = (pen.0 + p.x, pen.1 + p.y);
        font.for_each_pixel(p.glyph, |xx, yy, set| {
            let color = if set {
                style.fg
            } else if paint_bg {
                style.bg
            } else {
                return;
            };
            painter.fill_rect(ox + (xx * ts) as i32, oy + (yy * ts) as i32, ts, ts, color);
        });
    }
    Ok(())
}
