//! Render command implementation
//!
//! Rasterizes text to a PNG. Without a target rect the image is exactly the
//! text's bounding box; with one, the text is aligned inside a canvas of
//! that size.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use tftfont_core::Font;
use tftfont_render::png::{write_png_to_vec_with_hash, PngConfig};
use tftfont_render::{
    draw_text, render, Align, CanvasSize, Color, PixelBuffer, Rect, TextStyle,
};

use super::FontSource;

/// Placement inside a fixed-size canvas.
#[derive(Debug, Clone, Copy)]
pub struct Placement {
    pub canvas: CanvasSize,
    pub align: Align,
    pub margin: i32,
}

/// Run the render command
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(
    source: &FontSource<'_>,
    text: &str,
    out: &str,
    style: &TextStyle,
    placement: Option<Placement>,
) -> Result<ExitCode> {
    let loaded = source.load()?;
    let buffer = rasterize(&loaded.font, text, style, placement)?;

    let (png, hash) = write_png_to_vec_with_hash(&buffer, &PngConfig::default())
        .with_context(|| format!("Failed to encode {}", out))?;
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(out_path, &png).with_context(|| format!("Failed to write {}", out))?;

    println!(
        "{} {} ({}x{})",
        "Wrote:".green().bold(),
        out,
        buffer.width,
        buffer.height
    );
    println!("{} {}", "Hash:".dimmed(), &hash[..16]);
    Ok(ExitCode::SUCCESS)
}

/// Renders into a tight buffer, or into a canvas when `placement` is set.
pub fn rasterize(
    font: &Font,
    text: &str,
    style: &TextStyle,
    placement: Option<Placement>,
) -> Result<PixelBuffer> {
    let Some(placement) = placement else {
        let buffer = render(font, text, style)?;
        if buffer.is_empty() {
            anyhow::bail!("'{}' has no drawable glyphs in {}", text, font.name());
        }
        return Ok(buffer);
    };

    let CanvasSize { width, height } = placement.canvas;
    let fill = if style.paints_background() {
        style.bg
    } else {
        Color::TRANSPARENT
    };
    let mut canvas = PixelBuffer::new(width, height, fill);
    let metrics = draw_text(
        &mut canvas,
        font,
        Rect::new(0, 0, width, height),
        text,
        placement.align,
        placement.margin,
        style,
    )?;
    log::debug!(
        "placed {}x{} text block {} in {}x{}",
        metrics.width,
        metrics.height,
        placement.align,
        width,
        height
    );
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tftfont_core::{parse, FontFormat};

    fn glcd() -> Font {
        let src = b"x[] = { 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF };";
        parse(FontFormat::Glcd, src, "glcd").unwrap()
    }

    #[test]
    fn test_rasterize_tight_buffer() {
        let style = TextStyle::new(Color::WHITE, Color::BLACK, false);
        let buffer = rasterize(&glcd(), "\u{1}\u{1}", &style, None).unwrap();
        assert_eq!((buffer.width, buffer.height), (12, 8));
        assert_eq!(buffer.count(Color::WHITE), 2 * 5 * 8);
    }

    #[test]
    fn test_rasterize_into_canvas() {
        let style = TextStyle::new(Color::WHITE, Color::BLACK, true);
        let placement = Placement {
            canvas: CanvasSize::new(40, 20),
            align: Align::MidMid,
            margin: 0,
        };
        let buffer = rasterize(&glcd(), "\u{1}", &style, Some(placement)).unwrap();
        assert_eq!((buffer.width, buffer.height), (40, 20));
        assert_eq!(buffer.count(Color::WHITE), 5 * 8);
        assert_eq!(buffer.count(Color::BLACK), 40 * 20 - 5 * 8);
    }

    #[test]
    fn test_rasterize_empty_text_fails() {
        let style = TextStyle::default();
        assert!(rasterize(&glcd(), "", &style, None).is_err());
    }
}
