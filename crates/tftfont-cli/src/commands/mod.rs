//! CLI command implementations

pub mod catalog;
pub mod inspect;
pub mod json_output;
pub mod measure;
pub mod render;

use std::fs;

use tftfont_core::{parse, Font, FontFormat};
use tftfont_render::CanvasSize;

use json_output::{error_codes, JsonError};

/// Where a font comes from on the command line.
#[derive(Debug, Clone, Copy)]
pub struct FontSource<'a> {
    pub format: FontFormat,
    pub file: &'a str,
    /// C symbol the font is declared under
    pub name: &'a str,
    /// Scale override for GFX and GLCD fonts
    pub text_size: Option<u32>,
}

/// A parsed font with the hash of the bytes it was parsed from.
pub struct LoadedFont {
    pub font: Font,
    pub source_hash: String,
}

impl FontSource<'_> {
    pub fn load(&self) -> Result<LoadedFont, JsonError> {
        let bytes = fs::read(self.file).map_err(|e| {
            JsonError::new(
                error_codes::FILE_READ,
                format!("failed to read {}: {}", self.file, e),
            )
            .with_file(self.file)
        })?;
        let source_hash = blake3::hash(&bytes).to_hex().to_string();
        let mut font = parse(self.format, &bytes, self.name)
            .map_err(|e| JsonError::from_format(&e, self.file))?;
        if let Some(size) = self.text_size {
            font = font.with_text_size(size);
        }
        Ok(LoadedFont { font, source_hash })
    }
}

/// Parses a `WxH` size such as `320x240`.
pub fn parse_size(s: &str) -> Result<CanvasSize, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let width = w
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("bad width '{w}': {e}"))?;
    let height = h
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("bad height '{h}': {e}"))?;
    if width == 0 || height == 0 {
        return Err(format!("size must be non-zero, got '{s}'"));
    }
    Ok(CanvasSize::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("320x240"), Ok(CanvasSize::new(320, 240)));
        assert_eq!(parse_size("64X32"), Ok(CanvasSize::new(64, 32)));
        assert!(parse_size("320").is_err());
        assert!(parse_size("0x10").is_err());
        assert!(parse_size("ax10").is_err());
    }

    #[test]
    fn test_load_missing_file_is_file_read() {
        let source = FontSource {
            format: FontFormat::Glcd,
            file: "/nonexistent/glcdfont.c",
            name: "glcd",
            text_size: None,
        };
        let err = source.load().err().unwrap();
        assert_eq!(err.code, error_codes::FILE_READ);
        assert_eq!(err.file.as_deref(), Some("/nonexistent/glcdfont.c"));
    }
}
