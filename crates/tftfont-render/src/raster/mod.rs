//! Glyph rasterization.
//!
//! Every format draws relative to a pen position, using the same placement
//! rules its measurement uses, so a render at `(-origin_x, -origin_y)` lands
//! inside the measured box. Writes outside the target buffer are dropped and
//! summarized in one debug log line per draw.

pub(crate) mod gfx;
pub(crate) mod glcd;
pub(crate) mod t3;
pub(crate) mod utft;

use tftfont_core::{Font, FormatError};

use crate::buffer::{Painter, PixelBuffer};
use crate::color::Color;
use crate::metrics::measure;

/// Foreground/background colour pair.
///
/// The background is painted only when `opaque` is set and the colours
/// differ; equal colours mean a transparent background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub fg: Color,
    pub bg: Color,
    pub opaque: bool,
}

impl TextStyle {
    pub const fn new(fg: Color, bg: Color, opaque: bool) -> Self {
        Self { fg, bg, opaque }
    }

    pub fn paints_background(&self) -> bool {
        self.opaque && self.fg != self.bg
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(Color::WHITE, Color::BLACK, false)
    }
}

/// Renders one line of text into a new buffer sized to its metrics.
///
/// Unpainted pixels are transparent unless the style paints a background,
/// in which case the whole buffer starts filled with it.
pub fn render(font: &Font, text: &str, style: &TextStyle) -> Result<PixelBuffer, FormatError> {
    let metrics = measure(font, text, None)?;
    let fill = if style.paints_background() {
        style.bg
    } else {
        Color::TRANSPARENT
    };
    let mut buffer = PixelBuffer::new(metrics.width, metrics.height, fill);
    draw(
        &mut buffer,
        font,
        text,
        (-metrics.origin_x, -metrics.origin_y),
        style,
    )?;
    Ok(buffer)
}

/// Draws one line of text with its pen at `pen`, returning the number of
/// pixel writes that fell outside `buffer`.
///
/// A painted background covers only each glyph's own cell.
pub fn draw(
    buffer: &mut PixelBuffer,
    font: &Font,
    text: &str,
    pen: (i32, i32),
    style: &TextStyle,
) -> Result<usize, FormatError> {
    let mut painter = Painter::new(buffer);
    match font {
        Font::Gfx(f) => gfx::draw(&mut painter, f, text, pen, style)?,
        Font::Glcd(f) => glcd::draw(&mut painter, f, text, pen, style),
        Font::T3(f) => t3::draw(&mut painter, f, text, pen, style),
        Font::Utft(f) => utft::draw(&mut painter, f, text, pen, style),
    }
    Ok(painter.finish(font.name()))
}
