//! Populating manifest categories from font folders.
//!
//! Each encoding has its own on-disk convention:
//!
//! - **GFX**: `<family>/<STYLE>/<Name><size>pt7b.h`, where `STYLE` is one
//!   of `PLAIN`, `BOLD`, `ITALIC` or `BOLD_ITALIC`.
//! - **T3**: headers declaring `extern const ILI9341_t3_font_t <Name>_<size>;`
//!   next to a `.c` file with the data.
//! - **UTFT**: one `.c` file per font, named after the font.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use tftfont_core::scanner::{Scanner, TokenKind};
use tftfont_core::FontFormat;
use walkdir::WalkDir;

use crate::error::CatalogWarning;
use crate::manifest::FontEntry;

const GFX_SIZE_PATTERN: &str = r"(\d+)pt[78]b$";
const T3_DECL_PATTERN: &str =
    r"extern\s+const\s+ILI9(?:341|488)_t3_font_t\s+([A-Za-z_][A-Za-z0-9_]*)\s*;";

static GFX_SIZE_REGEX: OnceLock<Regex> = OnceLock::new();
static T3_DECL_REGEX: OnceLock<Regex> = OnceLock::new();

fn gfx_size_regex() -> &'static Regex {
    GFX_SIZE_REGEX.get_or_init(|| Regex::new(GFX_SIZE_PATTERN).expect("invalid regex pattern"))
}

fn t3_decl_regex() -> &'static Regex {
    T3_DECL_REGEX.get_or_init(|| Regex::new(T3_DECL_PATTERN).expect("invalid regex pattern"))
}

/// Style names, as directory name and manifest value.
const STYLES: [(&str, &str); 4] = [
    ("PLAIN", "PLAIN"),
    ("BOLD", "BOLD"),
    ("ITALIC", "ITALIC"),
    ("BOLD_ITALIC", "BOLD+ITALIC"),
];

/// Fonts found under `root/folder`, sorted by path.
///
/// Files that look like fonts but cannot be used become warnings.
pub fn discover(
    format: FontFormat,
    root: &Path,
    folder: &str,
    warnings: &mut Vec<CatalogWarning>,
) -> Vec<FontEntry> {
    let dir = root.join(folder);
    let files: Vec<PathBuf> = WalkDir::new(&dir)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .collect();

    let mut entries = Vec::new();
    for path in &files {
        let found = match format {
            FontFormat::Gfx => gfx_entry(root, &dir, path).into_iter().collect(),
            FontFormat::T3 => t3_entries(root, path, warnings),
            FontFormat::Utft => utft_entry(root, path, warnings).into_iter().collect(),
            FontFormat::Glcd => Vec::new(),
        };
        entries.extend(found);
    }
    log::debug!(
        "discovered {} {} fonts under {}",
        entries.len(),
        format,
        dir.display()
    );
    entries
}

/// `path` relative to `root`, with `/` separators.
fn relative(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn file_stem(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|s| s.to_str())
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().is_some_and(|e| e == ext)
}

fn dir_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|s| s.to_str())
}

fn gfx_entry(root: &Path, folder: &Path, path: &Path) -> Option<FontEntry> {
    if !has_extension(path, "h") {
        return None;
    }
    let stem = file_stem(path)?;
    let size_match = gfx_size_regex().captures(stem)?;
    let size = size_match.get(1)?;

    let parent = path.parent()?;
    let (style, family_dir) = match STYLES.iter().find(|(dir, _)| Some(*dir) == dir_name(parent)) {
        Some((_, style)) => (*style, parent.parent()),
        None => ("PLAIN", Some(parent)),
    };
    let family = match family_dir.filter(|d| *d != folder).and_then(dir_name) {
        Some(name) => name.to_string(),
        None => stem[..size.start()].to_string(),
    };

    Some(FontEntry {
        family_name: family,
        display_name: stem.to_string(),
        file_name: relative(root, path),
        font_ref: format!("&{stem}"),
        logical_size: size.as_str().to_string(),
        logical_style: style.to_string(),
    })
}

/// Splits `Family_Bold_Italic` into family and manifest style.
fn t3_family_style(base: &str) -> (&str, &str) {
    for (suffix, style) in [
        ("_Bold_Italic", "BOLD+ITALIC"),
        ("_BoldItalic", "BOLD+ITALIC"),
        ("_Bold", "BOLD"),
        ("_Italic", "ITALIC"),
        ("_Oblique", "ITALIC"),
    ] {
        if let Some(family) = base.strip_suffix(suffix) {
            return (family, style);
        }
    }
    (base, "PLAIN")
}

fn t3_entries(root: &Path, path: &Path, warnings: &mut Vec<CatalogWarning>) -> Vec<FontEntry> {
    if !has_extension(path, "h") {
        return Vec::new();
    }
    let header = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            warnings.push(CatalogWarning::Unusable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            });
            return Vec::new();
        }
    };

    let data_file = path.with_extension("c");
    let mut entries = Vec::new();
    for caps in t3_decl_regex().captures_iter(&header) {
        let name = &caps[1];
        let Some((base, size)) = name.rsplit_once('_') else {
            log::debug!("{}: '{}' has no size suffix", path.display(), name);
            continue;
        };
        if size.is_empty() || !size.bytes().all(|b| b.is_ascii_digit()) {
            log::debug!("{}: '{}' has no size suffix", path.display(), name);
            continue;
        }
        if !data_file.is_file() {
            warnings.push(CatalogWarning::Unusable {
                path: path.to_path_buf(),
                reason: format!("no data file {} for {name}", data_file.display()),
            });
            continue;
        }
        let (family, style) = t3_family_style(base);
        entries.push(FontEntry {
            family_name: family.to_string(),
            display_name: name.to_string(),
            file_name: relative(root, &data_file),
            font_ref: format!("&{name}"),
            logical_size: size.to_string(),
            logical_style: style.to_string(),
        });
    }
    entries
}

fn utft_entry(root: &Path, path: &Path, warnings: &mut Vec<CatalogWarning>) -> Option<FontEntry> {
    if !has_extension(path, "c") {
        return None;
    }
    let stem = file_stem(path)?;
    let source = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            warnings.push(CatalogWarning::Unusable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            });
            return None;
        }
    };

    // The first header byte is the cell width, recorded as the size.
    let mut scanner = Scanner::new(&source);
    let size = match scanner
        .skip_to(TokenKind::Hex, "font header")
        .and_then(|t| t.byte_value())
    {
        Ok(size) => size,
        Err(e) => {
            warnings.push(CatalogWarning::Unusable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            });
            return None;
        }
    };

    Some(FontEntry {
        family_name: stem.to_string(),
        display_name: stem.to_string(),
        file_name: relative(root, path),
        font_ref: stem.to_string(),
        logical_size: size.to_string(),
        logical_style: "PLAIN".to_string(),
    })
}
