//! Text measurement and rasterization for embedded TFT bitmap fonts.
//!
//! Works on the immutable [`Font`](tftfont_core::Font) produced by
//! `tftfont-core`. Every call allocates its own output, so a font can be
//! shared across threads and measured or rendered concurrently.
//!
//! # Example
//!
//! ```
//! use tftfont_core::{parse, FontFormat};
//! use tftfont_render::{measure, render, Color, TextStyle};
//!
//! let src = b"static const unsigned char font[] = { 0x00, 0x00, 0x00, 0x00, 0x00, \
//!             0x7E, 0x11, 0x11, 0x11, 0x7E };";
//! let font = parse(FontFormat::Glcd, src, "glcd").unwrap();
//!
//! let metrics = measure(&font, "\u{1}\u{1}", None).unwrap();
//! assert_eq!((metrics.width, metrics.height), (12, 8));
//!
//! let style = TextStyle::new(Color::WHITE, Color::BLACK, true);
//! let buffer = render(&font, "\u{1}", &style).unwrap();
//! assert_eq!((buffer.width, buffer.height), (6, 8));
//! ```
//!
//! # Modules
//!
//! - [`metrics`] - single-line text metrics and size bounds
//! - [`align`] - the nine alignment modes
//! - [`raster`] - per-format glyph painting
//! - [`layout`] - multi-line measurement and aligned drawing
//! - [`png`] - deterministic PNG export

pub mod align;
pub mod buffer;
pub mod color;
pub mod error;
pub mod layout;
pub mod metrics;
pub mod png;
pub mod raster;

pub use align::{resolve, Align, Rect};
pub use buffer::{Painter, PixelBuffer};
pub use color::Color;
pub use error::RenderError;
pub use layout::{draw_text, measure_lines, TextBlock};
pub use metrics::{max_char_size, max_text_bounds, measure, CanvasSize, TextMetrics};
pub use raster::{draw, render, TextStyle};
