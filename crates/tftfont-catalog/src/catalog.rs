//! The lazily loaded font catalog.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use tftfont_core::{parse_path, Font, FontError, FontFormat};

use crate::discover::discover;
use crate::error::{CatalogError, CatalogWarning};
use crate::manifest::{FontEntry, Manifest};

/// GLCD text size is the logical size divided by this.
const GLCD_SIZE_DIVISOR: u32 = 5;

/// A catalogued font. The source is parsed on first use.
#[derive(Debug)]
pub struct FontItem {
    key: String,
    platform: String,
    format: FontFormat,
    entry: FontEntry,
    path: PathBuf,
    text_size: u32,
    font: OnceLock<Arc<Font>>,
    init: Mutex<()>,
}

impl FontItem {
    fn new(platform: &str, format: FontFormat, entry: FontEntry, root: &Path) -> Self {
        let text_size = match (format, entry.size()) {
            (FontFormat::Glcd, Some(size)) if size / GLCD_SIZE_DIVISOR > 0 => {
                size / GLCD_SIZE_DIVISOR
            }
            _ => 1,
        };
        Self {
            key: format!("{}_{}", platform, entry.display_name),
            platform: platform.to_string(),
            format,
            path: root.join(&entry.file_name),
            entry,
            text_size,
            font: OnceLock::new(),
            init: Mutex::new(()),
        }
    }

    /// `<platform>_<displayName>`.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn format(&self) -> FontFormat {
        self.format
    }

    pub fn entry(&self) -> &FontEntry {
        &self.entry
    }

    pub fn family(&self) -> &str {
        &self.entry.family_name
    }

    pub fn display_name(&self) -> &str {
        &self.entry.display_name
    }

    pub fn size(&self) -> Option<u32> {
        self.entry.size()
    }

    pub fn style(&self) -> &str {
        &self.entry.logical_style
    }

    /// Resolved source file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text_size(&self) -> u32 {
        self.text_size
    }

    pub fn is_loaded(&self) -> bool {
        self.font.get().is_some()
    }

    /// The parsed font, parsing it on first call.
    ///
    /// Concurrent first calls parse once; the rest wait and share the
    /// result. A failed parse caches nothing, so a later call tries again.
    pub fn font(&self) -> Result<Arc<Font>, FontError> {
        if let Some(font) = self.font.get() {
            return Ok(Arc::clone(font));
        }
        let _guard = self.init.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(font) = self.font.get() {
            return Ok(Arc::clone(font));
        }

        let font = parse_path(self.format, &self.path, self.entry.symbol())?
            .with_text_size(self.text_size);
        log::debug!(
            "loaded {} ({}, {} glyphs)",
            self.key,
            self.format,
            font.displayable_count()
        );
        Ok(Arc::clone(self.font.get_or_init(|| Arc::new(font))))
    }
}

/// Fonts registered from a manifest, in registration order.
///
/// The catalog is built once; each item loads its own font lazily, so a
/// shared catalog can be queried from any thread.
#[derive(Debug, Default)]
pub struct FontCatalog {
    items: Vec<FontItem>,
    index: HashMap<String, usize>,
    warnings: Vec<CatalogWarning>,
}

impl FontCatalog {
    /// Registers every font of the manifest. Relative file names and font
    /// folders resolve against `root`.
    ///
    /// Categories with an empty font list are filled by scanning their
    /// font folder. Categories that are not one of the four bitmap
    /// encodings are skipped.
    pub fn from_manifest(manifest: &Manifest, root: &Path) -> Self {
        let mut catalog = Self::default();
        for platform in &manifest.platforms {
            for category in &platform.categories {
                let format = match category.format() {
                    Ok(format) => format,
                    Err(_) => {
                        log::debug!(
                            "{}: skipping non-bitmap category {}",
                            platform.name,
                            category.name
                        );
                        continue;
                    }
                };

                let entries = if category.fonts.is_empty() && !category.font_folder.is_empty() {
                    let folder = root.join(&category.font_folder);
                    if !folder.is_dir() {
                        log::warn!(
                            "{}: font folder {} not found",
                            category.name,
                            folder.display()
                        );
                        catalog.warnings.push(CatalogWarning::MissingFolder {
                            category: category.name.clone(),
                            path: folder,
                        });
                        continue;
                    }
                    discover(format, root, &category.font_folder, &mut catalog.warnings)
                } else {
                    category.fonts.clone()
                };

                for entry in entries {
                    catalog.register(FontItem::new(&platform.name, format, entry, root));
                }
            }
        }
        catalog
    }

    /// Reads the manifest at `path` and builds the catalog.
    pub fn load(manifest: &Path, root: &Path) -> Result<Self, CatalogError> {
        let manifest = Manifest::load(manifest)?;
        Ok(Self::from_manifest(&manifest, root))
    }

    fn register(&mut self, item: FontItem) {
        if self.index.contains_key(item.key()) {
            log::warn!("duplicate font: {}", item.key());
            self.warnings.push(CatalogWarning::DuplicateKey {
                key: item.key().to_string(),
            });
            return;
        }
        self.index.insert(item.key().to_string(), self.items.len());
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn warnings(&self) -> &[CatalogWarning] {
        &self.warnings
    }

    pub fn item(&self, key: &str) -> Option<&FontItem> {
        self.index.get(key).map(|&i| &self.items[i])
    }

    /// The parsed font registered under `key`.
    pub fn font(&self, key: &str) -> Result<Arc<Font>, CatalogError> {
        let item = self.item(key).ok_or_else(|| CatalogError::NotFound {
            key: key.to_string(),
        })?;
        Ok(item.font()?)
    }

    /// All items in registration order.
    pub fn items(&self) -> impl Iterator<Item = &FontItem> {
        self.items.iter()
    }

    pub fn platform_items<'a: 'p, 'p>(&'a self, platform: &'p str) -> impl Iterator<Item = &'a FontItem> + 'p {
        self.items.iter().filter(move |i| i.platform == platform)
    }

    /// Distinct family names of a platform, in registration order.
    pub fn families(&self, platform: &str) -> Vec<&str> {
        let mut families: Vec<&str> = Vec::new();
        for item in self.platform_items(platform) {
            if !families.contains(&item.family()) {
                families.push(item.family());
            }
        }
        families
    }

    /// Exact family, size and style match.
    pub fn find(&self, platform: &str, family: &str, size: u32, style: &str) -> Option<&FontItem> {
        self.platform_items(platform)
            .find(|i| i.family() == family && i.size() == Some(size) && i.style() == style)
    }

    /// Exact match, or else the largest size below `size` in the same
    /// family and style.
    pub fn by_size_style(
        &self,
        platform: &str,
        family: &str,
        size: u32,
        style: &str,
    ) -> Option<&FontItem> {
        if let Some(item) = self.find(platform, family, size, style) {
            return Some(item);
        }
        self.platform_items(platform)
            .filter(|i| i.family() == family && i.style() == style)
            .filter_map(|i| i.size().filter(|&s| s < size).map(|s| (s, i)))
            .max_by_key(|&(s, _)| s)
            .map(|(_, i)| i)
    }
}
