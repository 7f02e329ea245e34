//! Inspect command implementation
//!
//! Parses one font source and prints what it contains.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use tftfont_render::max_char_size;

use super::json_output::{InspectOutput, InspectResult};
use super::{FontSource, LoadedFont};

/// Run the inspect command
///
/// # Returns
/// Exit code: 0 on success, 1 if the font cannot be loaded
pub fn run(source: &FontSource<'_>, json_output: bool) -> Result<ExitCode> {
    if json_output {
        let output = match source.load() {
            Ok(loaded) => InspectOutput::success(summarize(source, &loaded)),
            Err(error) => InspectOutput::failure(vec![error]),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(if output.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        });
    }

    let loaded = source.load()?;
    let result = summarize(source, &loaded);

    println!("{} {}", "Font:".cyan().bold(), result.name);
    println!("{} {}", "Format:".dimmed(), result.format);
    println!("{} {}", "File:".dimmed(), result.file);
    println!("{} {}", "Hash:".dimmed(), &result.source_hash[..16]);
    let ranges: Vec<String> = result
        .ranges
        .iter()
        .map(|[first, last]| format!("0x{first:02X}..=0x{last:02X}"))
        .collect();
    println!("{} {}", "Ranges:".dimmed(), ranges.join(", "));
    println!("{} {}", "Glyphs:".dimmed(), result.glyph_count);
    println!("{} {}", "Line height:".dimmed(), result.line_height);
    if result.text_size != 1 {
        println!("{} {}", "Text size:".dimmed(), result.text_size);
    }
    println!(
        "{} {}x{}",
        "Max char:".dimmed(),
        result.max_char_width,
        result.max_char_height
    );

    Ok(ExitCode::SUCCESS)
}

/// Font summary shared by both output modes.
pub fn summarize(source: &FontSource<'_>, loaded: &LoadedFont) -> InspectResult {
    let font = &loaded.font;
    let (max_char_width, max_char_height) = max_char_size(font);
    InspectResult {
        name: font.name().to_string(),
        format: font.format().to_string(),
        file: source.file.to_string(),
        source_hash: loaded.source_hash.clone(),
        ranges: font
            .codepoint_ranges()
            .into_iter()
            .map(|r| [*r.start(), *r.end()])
            .collect(),
        glyph_count: font.displayable_count(),
        line_height: font.line_height(),
        text_size: font.text_size(),
        max_char_width,
        max_char_height,
    }
}
