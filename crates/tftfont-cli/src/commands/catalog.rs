//! Catalog command implementations
//!
//! `list` shows what a font manifest registers; `check` additionally parses
//! every registered font and fails if any of them is broken.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use tftfont_catalog::{CatalogError, CatalogWarning, FontCatalog, FontItem, Manifest};

use super::json_output::{
    error_codes, warning_codes, CatalogFontResult, CatalogOutput, JsonError, JsonWarning,
};

/// Manifest location and optional platform filter.
#[derive(Debug, Clone, Copy)]
pub struct CatalogSource<'a> {
    pub manifest: &'a str,
    /// Directory relative font paths resolve against
    pub root: &'a str,
    pub platform: Option<&'a str>,
}

/// List registered fonts
pub fn list(source: &CatalogSource<'_>, json_output: bool) -> Result<ExitCode> {
    run(source, false, json_output)
}

/// Parse every registered font
///
/// # Returns
/// Exit code: 0 if every font parsed, 1 otherwise
pub fn check(source: &CatalogSource<'_>, json_output: bool) -> Result<ExitCode> {
    run(source, true, json_output)
}

fn run(source: &CatalogSource<'_>, parse_fonts: bool, json_output: bool) -> Result<ExitCode> {
    let catalog = match open(source) {
        Ok(catalog) => catalog,
        Err(error) if json_output => {
            let output = CatalogOutput::failure(vec![error]);
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(ExitCode::from(1));
        }
        Err(error) => return Err(error.into()),
    };

    let output = collect(&catalog, source.platform, parse_fonts);
    if json_output {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_human(&output, parse_fonts);
    }

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn open(source: &CatalogSource<'_>) -> Result<FontCatalog, JsonError> {
    let manifest = Manifest::load(Path::new(source.manifest)).map_err(|e| {
        let code = match e {
            CatalogError::Io { .. } => error_codes::FILE_READ,
            _ => error_codes::MANIFEST,
        };
        JsonError::new(code, e.to_string()).with_file(source.manifest)
    })?;

    if let Some(platform) = source.platform {
        if !manifest.platforms.iter().any(|p| p.name == platform) {
            let known: Vec<&str> = manifest.platforms.iter().map(|p| p.name.as_str()).collect();
            return Err(JsonError::new(
                error_codes::UNKNOWN_PLATFORM,
                format!(
                    "unknown platform '{}' (manifest has: {})",
                    platform,
                    known.join(", ")
                ),
            )
            .with_file(source.manifest));
        }
    }

    Ok(FontCatalog::from_manifest(&manifest, Path::new(source.root)))
}

/// Builds the output document for the selected platform. With
/// `parse_fonts`, every font is loaded and its outcome recorded.
pub fn collect(
    catalog: &FontCatalog,
    platform: Option<&str>,
    parse_fonts: bool,
) -> CatalogOutput {
    let items: Vec<&FontItem> = match platform {
        Some(platform) => catalog.platform_items(platform).collect(),
        None => catalog.items().collect(),
    };

    let fonts: Vec<CatalogFontResult> = items
        .into_iter()
        .map(|item| {
            let mut result = CatalogFontResult {
                key: item.key().to_string(),
                platform: item.platform().to_string(),
                format: item.format().to_string(),
                family: item.family().to_string(),
                size: item.size(),
                style: item.style().to_string(),
                path: item.path().display().to_string(),
                glyph_count: None,
                error: None,
            };
            if parse_fonts {
                match item.font() {
                    Ok(font) => result.glyph_count = Some(font.displayable_count()),
                    Err(e) => result.error = Some(JsonError::from_font(&e)),
                }
            }
            result
        })
        .collect();

    CatalogOutput {
        success: fonts.iter().all(|f| f.error.is_none()),
        errors: Vec::new(),
        warnings: catalog.warnings().iter().map(to_json_warning).collect(),
        fonts,
    }
}

fn to_json_warning(warning: &CatalogWarning) -> JsonWarning {
    let code = match warning {
        CatalogWarning::DuplicateKey { .. } => warning_codes::DUPLICATE_KEY,
        CatalogWarning::MissingFolder { .. } => warning_codes::MISSING_FOLDER,
        CatalogWarning::Unusable { .. } => warning_codes::UNUSABLE_FILE,
    };
    JsonWarning::new(code, warning.to_string())
}

fn print_human(output: &CatalogOutput, parse_fonts: bool) {
    for warning in &output.warnings {
        println!("{} {}", "warning:".yellow().bold(), warning.message);
    }

    for font in &output.fonts {
        let size = font.size.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string());
        let line = format!(
            "{:<32} {:<5} {:<20} {:>3} {:<12}",
            font.key, font.format, font.family, size, font.style
        );
        match (&font.error, font.glyph_count) {
            (Some(error), _) => println!("{} {}\n      {}", "FAIL".red().bold(), line, error),
            (None, Some(count)) => println!("{} {} {} glyphs", "ok  ".green(), line, count),
            (None, None) => println!("  {}", line),
        }
    }

    let failed = output.fonts.iter().filter(|f| f.error.is_some()).count();
    if parse_fonts {
        let summary = format!(
            "{} fonts, {} failed, {} warnings",
            output.fonts.len(),
            failed,
            output.warnings.len()
        );
        if failed == 0 {
            println!("\n{}", summary.green().bold());
        } else {
            println!("\n{}", summary.red().bold());
        }
    } else {
        println!(
            "\n{} fonts, {} warnings",
            output.fonts.len(),
            output.warnings.len()
        );
    }
}
