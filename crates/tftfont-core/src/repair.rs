//! Ink extent repair for GFX glyph tables.
//!
//! Metrics read each glyph's `image_width`/`image_height`; decoding always
//! uses the declared `width`/`height`, since those define the bit stream.
//! The replay runs in glyph-local coordinates and never leaves the declared
//! box, so the image extent of a parsed glyph equals its declared size.
//! Clipped descenders show up in metrics through `yOffset`, not here.

use crate::font::{decode_pixels, GfxGlyph};

/// Replays the glyph's bitmap at its own top-left corner and returns
/// `(image_width, image_height)`.
///
/// Each extent is `max(ink_max + 1, declared)`. Ink can never lie past the
/// declared box, so this is the declared size for every glyph.
pub fn ink_extent(bitmap: &[u8], glyph: &GfxGlyph) -> (u32, u32) {
    let mut max_x: Option<u32> = None;
    let mut max_y: Option<u32> = None;
    decode_pixels(bitmap, glyph, |x, y, set| {
        if set {
            max_x = Some(max_x.map_or(x, |m| m.max(x)));
            max_y = Some(max_y.map_or(y, |m| m.max(y)));
        }
    });
    let width = max_x.map_or(0, |m| m + 1).max(glyph.width);
    let height = max_y.map_or(0, |m| m + 1).max(glyph.height);
    (width, height)
}

/// Recomputes the ink extents of every glyph in place.
///
/// The result depends only on the declared fields and the bitmap, so
/// running it again changes nothing.
pub fn repair_glyphs(bitmap: &[u8], glyphs: &mut [GfxGlyph]) {
    for glyph in glyphs.iter_mut() {
        let (width, height) = ink_extent(bitmap, glyph);
        glyph.image_width = width;
        glyph.image_height = height;
    }
}
