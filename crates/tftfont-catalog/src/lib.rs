//! A catalog of embedded TFT bitmap fonts.
//!
//! The catalog is described by a JSON manifest listing platforms, font
//! categories (one per encoding) and fonts. Categories may leave their font
//! list empty and name a folder instead; the folder is scanned using the
//! encoding's file conventions.
//!
//! Fonts are registered under `<platform>_<displayName>` and parsed the
//! first time they are requested. Registration problems such as duplicate
//! keys are collected as [`CatalogWarning`]s rather than failing the load.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use tftfont_catalog::FontCatalog;
//!
//! let catalog = FontCatalog::load(Path::new("fonts.json"), Path::new(".")).unwrap();
//! for warning in catalog.warnings() {
//!     eprintln!("warning: {warning}");
//! }
//! let font = catalog.font("arduino_FreeSans9pt7b").unwrap();
//! assert!(font.can_display('A' as u32));
//! ```

pub mod catalog;
pub mod discover;
pub mod error;
pub mod manifest;

pub use catalog::{FontCatalog, FontItem};
pub use error::{CatalogError, CatalogWarning};
pub use manifest::{Category, FontEntry, Manifest, Platform};
