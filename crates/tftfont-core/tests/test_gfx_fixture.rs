//! GFX parsing against a real Adafruit font file.

mod common;

use pretty_assertions::assert_eq;
use tftfont_core::repair::{ink_extent, repair_glyphs};
use tftfont_core::{parse, parse_path, Font, FontFormat, GfxGlyph};

fn dosis() -> tftfont_core::GfxFont {
    let font = parse_path(
        FontFormat::Gfx,
        common::fixture_path("dosis_bold18pt7b.h"),
        "dosis_bold18pt7b",
    )
    .expect("fixture should parse");
    match font {
        Font::Gfx(gfx) => gfx,
        other => panic!("expected a GFX font, got {:?}", other.format()),
    }
}

// ============================================================================
// Header and glyph table
// ============================================================================

#[test]
fn test_header_fields() {
    let font = dosis();
    assert_eq!(font.first(), 0x20);
    assert_eq!(font.last(), 0x7E);
    assert_eq!(font.y_advance(), 45);
    assert_eq!(font.glyphs().len(), 95);
    assert_eq!(font.bitmap().len(), 3898);
}

#[test]
fn test_last_glyph_matches_source() {
    let font = dosis();
    let tilde = font.glyph('~' as u32).unwrap();
    assert_eq!(
        (
            tilde.bitmap_offset,
            tilde.width,
            tilde.height,
            tilde.x_advance,
            tilde.x_offset,
            tilde.y_offset
        ),
        (3892, 12, 4, 14, 1, -10)
    );
}

#[test]
fn test_negative_offsets_parse() {
    let font = dosis();
    let underscore = font.glyph('_' as u32).unwrap();
    assert_eq!((underscore.x_offset, underscore.y_offset), (-1, 1));
    let j = font.glyph('j' as u32).unwrap();
    assert_eq!((j.width, j.height, j.x_offset), (7, 33, -1));
}

#[test]
fn test_first_rows_of_exclamation_mark() {
    let font = dosis();
    let bang = *font.glyph('!' as u32).unwrap();
    let mut row0 = Vec::new();
    font.for_each_pixel(&bang, |x, y, set| {
        if y == 0 {
            row0.push((x, set));
        }
    });
    // 0x73 = 0111_0011: the first five bits are row 0.
    assert_eq!(
        row0,
        vec![(0, false), (1, true), (2, true), (3, true), (4, false)]
    );
}

// ============================================================================
// Display range
// ============================================================================

#[test]
fn test_can_display_range() {
    let font = Font::Gfx(dosis());
    assert!(font.can_display(' ' as u32));
    assert!(font.can_display('~' as u32));
    assert!(!font.can_display(0x1F));
    assert!(!font.can_display(0x7F));
    assert!(!font.can_display('\n' as u32));
    assert!(!font.can_display('\r' as u32));
    assert_eq!(font.displayable_count(), 95);
}

// ============================================================================
// Glyph repair
// ============================================================================

#[test]
fn test_repaired_extents_cover_declared_box() {
    let font = dosis();
    for glyph in font.glyphs() {
        assert!(glyph.image_width >= glyph.width);
        assert!(glyph.image_height >= glyph.height);
    }
}

#[test]
fn test_repair_is_idempotent_on_real_font() {
    let font = dosis();
    let mut glyphs: Vec<GfxGlyph> = font.glyphs().to_vec();
    repair_glyphs(font.bitmap(), &mut glyphs);
    assert_eq!(glyphs.as_slice(), font.glyphs());
    repair_glyphs(font.bitmap(), &mut glyphs);
    assert_eq!(glyphs.as_slice(), font.glyphs());
}

#[test]
fn test_space_glyph_is_blank_but_sized() {
    let font = dosis();
    let space = font.glyph(' ' as u32).unwrap();
    assert_eq!(ink_extent(font.bitmap(), space), (1, 1));
}

#[test]
fn test_parse_from_bytes_matches_path() {
    let bytes = std::fs::read(common::fixture_path("dosis_bold18pt7b.h")).unwrap();
    let from_bytes = parse(FontFormat::Gfx, &bytes, "dosis_bold18pt7b").unwrap();
    assert_eq!(from_bytes, Font::Gfx(dosis()));
}
