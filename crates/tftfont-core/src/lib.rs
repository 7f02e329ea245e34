//! Bitmap font decoding for embedded TFT displays.
//!
//! This crate reads the C source files that microcontroller graphics
//! libraries ship their fonts as and turns them into immutable, thread-safe
//! glyph tables.
//!
//! # Supported Formats
//!
//! - **GFX** - Adafruit GFX proportional fonts (`GFXglyph` tables).
//! - **GLCD** - the fixed 5x8 `glcdfont.c` font.
//! - **T3** - PJRC ILI9341_t3 fonts with bit-packed, run-length glyphs.
//! - **UTFT** - UTFT fixed-cell fonts.
//!
//! # Example
//!
//! ```
//! use tftfont_core::{parse, FontFormat};
//!
//! let src = b"static const unsigned char font[] = { 0x00, 0x3E, 0x51, 0x49, 0x3E };";
//! let font = parse(FontFormat::Glcd, src, "glcd").unwrap();
//! assert!(font.can_display(0));
//! assert!(!font.can_display('\n' as u32));
//! ```
//!
//! # Modules
//!
//! - [`scanner`] - tokenizer shared by all parsers
//! - [`bits`] - MSB-first bit-field extraction
//! - [`font`] - the parsed font model
//! - [`repair`] - GFX ink extent repair

pub mod bits;
pub mod error;
pub mod font;
pub mod parse;
pub mod repair;
pub mod scanner;

pub use error::{FontError, FormatError, UnknownFormat};
pub use font::{
    is_line_break, Font, FontFormat, GfxFont, GfxGlyph, GlcdFont, T3Font, T3Glyph, T3Params,
    T3Span, UtftFont, GLCD_ADVANCE, GLCD_CELL_HEIGHT, GLCD_CELL_WIDTH, MAX_TEXT_SIZE,
};
pub use parse::{parse, parse_path, parse_str};
