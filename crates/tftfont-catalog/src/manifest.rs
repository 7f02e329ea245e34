//! The JSON font manifest.
//!
//! ```json
//! { "platforms": [ { "name": "arduino", "dpi": 100, "categories": [
//!     { "name": "FONT_GFX", "includePath": "Fonts/", "fontFolder": "fonts/gfx",
//!       "fonts": [ { "familyName": "FreeMono", "displayName": "FreeMono12pt7b",
//!                    "fileName": "fonts/gfx/FreeMono12pt7b.h", "fontRef": "&FreeMono12pt7b",
//!                    "logicalSize": "12", "logicalStyle": "PLAIN" } ] } ] } ] }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tftfont_core::{FontFormat, UnknownFormat};

use crate::error::CatalogError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default)]
    pub platforms: Vec<Platform>,
}

impl Manifest {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

/// A target platform and its font categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Platform {
    pub name: String,
    #[serde(default)]
    pub dpi: u32,
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Fonts of one encoding within a platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// `FONT_GFX`, `FONT_GLCD`, `FONT_T3` or `FONT_UTFT`.
    pub name: String,
    #[serde(default)]
    pub include_path: String,
    /// Folder scanned for fonts when `fonts` is empty, relative to the
    /// catalog root.
    #[serde(default)]
    pub font_folder: String,
    #[serde(default)]
    pub fonts: Vec<FontEntry>,
}

impl Category {
    /// The encoding this category holds. Native pass-through categories
    /// such as `FONT_TTF` have none.
    pub fn format(&self) -> Result<FontFormat, UnknownFormat> {
        self.name.parse()
    }
}

/// One font as listed in the manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontEntry {
    pub family_name: String,
    pub display_name: String,
    /// Source file, relative to the catalog root.
    pub file_name: String,
    /// C reference to the font, e.g. `&FreeMono12pt7b`.
    #[serde(default)]
    pub font_ref: String,
    #[serde(default)]
    pub logical_size: String,
    #[serde(default)]
    pub logical_style: String,
}

impl FontEntry {
    /// Symbol the font is declared under in its source file.
    pub fn symbol(&self) -> &str {
        let symbol = self.font_ref.trim().trim_start_matches('&');
        if symbol.is_empty() || symbol == "NULL" {
            &self.display_name
        } else {
            symbol
        }
    }

    pub fn size(&self) -> Option<u32> {
        self.logical_size.trim().parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = r#"{ "platforms": [ { "name": "arduino", "dpi": 100, "categories": [
        { "name": "FONT_GFX", "includePath": "Fonts/", "fontFolder": "fonts/gfx",
          "fonts": [ { "familyName": "FreeMono", "displayName": "FreeMono12pt7b",
                       "fileName": "fonts/gfx/FreeMono12pt7b.h", "fontRef": "&FreeMono12pt7b",
                       "logicalSize": "12", "logicalStyle": "PLAIN" } ] },
        { "name": "FONT_TTF", "fonts": [] } ] } ] }"#;

    #[test]
    fn test_parse_camel_case() {
        let manifest = Manifest::from_json(JSON).unwrap();
        let platform = &manifest.platforms[0];
        assert_eq!(platform.dpi, 100);
        let gfx = &platform.categories[0];
        assert_eq!(gfx.format().unwrap(), FontFormat::Gfx);
        assert_eq!(gfx.font_folder, "fonts/gfx");
        assert_eq!(gfx.fonts[0].symbol(), "FreeMono12pt7b");
        assert_eq!(gfx.fonts[0].size(), Some(12));
        assert!(platform.categories[1].format().is_err());
    }

    #[test]
    fn test_symbol_falls_back_to_display_name() {
        let entry = FontEntry {
            display_name: "SmallFont".into(),
            font_ref: "NULL".into(),
            ..FontEntry::default()
        };
        assert_eq!(entry.symbol(), "SmallFont");
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Manifest::from_json("{ \"platforms\": 3 }"),
            Err(CatalogError::Manifest(_))
        ));
    }
}
