//! Parsed font descriptors.
//!
//! A [`Font`] is built once by [`crate::parse`] and never mutated
//! afterwards, so it can be shared across threads behind an `Arc` without
//! locking.

mod gfx;
mod glcd;
mod t3;
mod utft;

pub use gfx::{GfxFont, GfxGlyph};
pub(crate) use gfx::decode_pixels;
pub use glcd::{GlcdFont, GLCD_ADVANCE, GLCD_CELL_HEIGHT, GLCD_CELL_WIDTH};
pub use t3::{T3Font, T3Glyph, T3Params, T3Span};
pub use utft::UtftFont;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::UnknownFormat;

/// Largest text size multiplier; the driver libraries keep it in a byte.
pub const MAX_TEXT_SIZE: u32 = 255;

/// The four supported encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFormat {
    /// Adafruit GFX proportional fonts.
    Gfx,
    /// The classic 5x8 GLCD font.
    Glcd,
    /// PJRC ILI9341_t3 run-length fonts.
    T3,
    /// UTFT fixed-cell fonts.
    Utft,
}

impl FontFormat {
    pub const ALL: [FontFormat; 4] = [
        FontFormat::Gfx,
        FontFormat::Glcd,
        FontFormat::T3,
        FontFormat::Utft,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FontFormat::Gfx => "gfx",
            FontFormat::Glcd => "glcd",
            FontFormat::T3 => "t3",
            FontFormat::Utft => "utft",
        }
    }

    /// Whether metrics for this format carry a baseline offset.
    pub fn has_baseline(&self) -> bool {
        matches!(self, FontFormat::Gfx | FontFormat::T3)
    }
}

impl fmt::Display for FontFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontFormat {
    type Err = UnknownFormat;

    /// Accepts the short names (`gfx`) and the designer category names
    /// (`FONT_GFX`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        let name = lower.strip_prefix("font_").unwrap_or(&lower);
        match name {
            "gfx" => Ok(FontFormat::Gfx),
            "glcd" => Ok(FontFormat::Glcd),
            "t3" => Ok(FontFormat::T3),
            "utft" => Ok(FontFormat::Utft),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

/// Returns true for the two code points no format can display.
pub fn is_line_break(codepoint: u32) -> bool {
    codepoint == u32::from('\n') || codepoint == u32::from('\r')
}

/// One parsed font, closed over the supported formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Font {
    Gfx(GfxFont),
    Glcd(GlcdFont),
    T3(T3Font),
    Utft(UtftFont),
}

impl Font {
    pub fn format(&self) -> FontFormat {
        match self {
            Font::Gfx(_) => FontFormat::Gfx,
            Font::Glcd(_) => FontFormat::Glcd,
            Font::T3(_) => FontFormat::T3,
            Font::Utft(_) => FontFormat::Utft,
        }
    }

    /// Symbol the font was parsed under.
    pub fn name(&self) -> &str {
        match self {
            Font::Gfx(f) => f.name(),
            Font::Glcd(f) => f.name(),
            Font::T3(f) => f.name(),
            Font::Utft(f) => f.name(),
        }
    }

    /// Whether `codepoint` has a glyph this font can draw.
    ///
    /// Out-of-range code points and line breaks are a plain `false`.
    pub fn can_display(&self, codepoint: u32) -> bool {
        match self {
            Font::Gfx(f) => f.can_display(codepoint),
            Font::Glcd(f) => f.can_display(codepoint),
            Font::T3(f) => f.can_display(codepoint),
            Font::Utft(f) => f.can_display(codepoint),
        }
    }

    /// Declared code point ranges. T3 fonts may have two.
    pub fn codepoint_ranges(&self) -> Vec<RangeInclusive<u32>> {
        match self {
            Font::Gfx(f) => vec![f.first()..=f.last()],
            Font::Glcd(f) => vec![0..=f.last()],
            Font::T3(f) => f.ranges(),
            Font::Utft(f) => vec![f.first()..=f.last()],
        }
    }

    /// Number of code points that pass [`Font::can_display`].
    pub fn displayable_count(&self) -> usize {
        self.codepoint_ranges()
            .into_iter()
            .flatten()
            .filter(|&cp| self.can_display(cp))
            .count()
    }

    /// Scale multiplier applied by formats that support one (GFX, GLCD).
    pub fn text_size(&self) -> u32 {
        match self {
            Font::Gfx(f) => f.text_size(),
            Font::Glcd(f) => f.text_size(),
            Font::T3(_) | Font::Utft(_) => 1,
        }
    }

    /// Returns a copy scaled by `size`, clamped to `1..=MAX_TEXT_SIZE`.
    /// Formats without a multiplier are returned unchanged.
    pub fn with_text_size(self, size: u32) -> Self {
        match self {
            Font::Gfx(f) => Font::Gfx(f.with_text_size(size)),
            Font::Glcd(f) => Font::Glcd(f.with_text_size(size)),
            other => other,
        }
    }

    /// Distance in pixels between consecutive baselines.
    pub fn line_height(&self) -> u32 {
        match self {
            Font::Gfx(f) => f.y_advance().max(0) as u32 * f.text_size(),
            Font::Glcd(f) => GLCD_CELL_HEIGHT * f.text_size(),
            Font::T3(f) => f.params().line_space,
            Font::Utft(f) => f.char_height(),
        }
    }
}

impl From<GfxFont> for Font {
    fn from(font: GfxFont) -> Self {
        Font::Gfx(font)
    }
}

impl From<GlcdFont> for Font {
    fn from(font: GlcdFont) -> Self {
        Font::Glcd(font)
    }
}

impl From<T3Font> for Font {
    fn from(font: T3Font) -> Self {
        Font::T3(font)
    }
}

impl From<UtftFont> for Font {
    fn from(font: UtftFont) -> Self {
        Font::Utft(font)
    }
}
