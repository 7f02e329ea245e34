//! Measure command implementation
//!
//! Prints the bounding box of a (possibly multi-line) string.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use tftfont_core::Font;
use tftfont_render::{measure_lines, CanvasSize, TextMetrics};

use super::json_output::{error_codes, JsonError, MeasureOutput, MeasureResult};
use super::FontSource;

/// Run the measure command
///
/// With `clip`, each line is measured against a canvas of that size.
pub fn run(
    source: &FontSource<'_>,
    text: &str,
    clip: Option<CanvasSize>,
    json_output: bool,
) -> Result<ExitCode> {
    let result = source
        .load()
        .and_then(|loaded| measure_text(&loaded.font, text, clip));

    if json_output {
        let output = match result {
            Ok(result) => MeasureOutput::success(result),
            Err(error) => MeasureOutput::failure(vec![error]),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(if output.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        });
    }

    let result = result?;
    println!("{} {}", "Font:".cyan().bold(), result.font);
    print_metrics("Text:", &result.metrics);
    if result.lines.len() > 1 {
        for (i, line) in result.lines.iter().enumerate() {
            print_metrics(&format!("  line {}:", i + 1), line);
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Measures `text` line by line.
pub fn measure_text(
    font: &Font,
    text: &str,
    clip: Option<CanvasSize>,
) -> Result<MeasureResult, JsonError> {
    let block = measure_lines(font, text, clip)
        .map_err(|e| JsonError::new(error_codes::TEXT_LAYOUT, e.to_string()))?;
    Ok(MeasureResult {
        font: font.name().to_string(),
        metrics: block.metrics,
        lines: block.lines.iter().map(|l| l.metrics).collect(),
    })
}

fn print_metrics(label: &str, m: &TextMetrics) {
    let base = match m.base_height {
        Some(b) => format!(" base {b}"),
        None => String::new(),
    };
    println!(
        "{} {}x{} at ({}, {}){}",
        label.dimmed(),
        m.width,
        m.height,
        m.origin_x,
        m.origin_y,
        base
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use tftfont_core::{parse, FontFormat};

    fn glcd() -> Font {
        let src = b"x[] = { 0x00, 0x00, 0x00, 0x00, 0x00, 0x7E, 0x11, 0x11, 0x11, 0x7E };";
        parse(FontFormat::Glcd, src, "glcd").unwrap()
    }

    #[test]
    fn test_measure_text_stacks_lines() {
        let result = measure_text(&glcd(), "\u{1}\u{1}\n\u{1}", None).unwrap();
        assert_eq!(result.lines.len(), 2);
        assert_eq!(result.lines[0].width, 12);
        assert_eq!(result.lines[1].width, 6);
        assert_eq!((result.metrics.width, result.metrics.height), (12, 16));
    }

    #[test]
    fn test_measure_text_clips_to_canvas() {
        let result = measure_text(&glcd(), "\u{1}\u{1}\u{1}", Some(CanvasSize::new(10, 4))).unwrap();
        assert_eq!((result.metrics.width, result.metrics.height), (10, 4));
    }
}
