//! GLCD and UTFT parsing and display ranges.

use pretty_assertions::assert_eq;
use tftfont_core::{parse_str, Font, FontFormat};

const GLCD_SRC: &str = "\
// Standard ASCII 5x7 font
static const unsigned char font[] PROGMEM = {
\t0x00, 0x00, 0x00, 0x00, 0x00,
\t0x3E, 0x5B, 0x4F, 0x5B, 0x3E,
\t0x3E, 0x6B, 0x4F, 0x6B, 0x3E,
};
";

const UTFT_SRC: &str = "\
#include <avr/pgmspace.h>
fontdatatype TinyFont[12] PROGMEM={
0x08,0x04,0x30,0x02,
0x18,0x24,0x24,0x18, // 0
0x08,0x18,0x08,0x1C, // 1
};
";

// ============================================================================
// GLCD
// ============================================================================

#[test]
fn test_glcd_range_follows_blob_length() {
    let font = parse_str(FontFormat::Glcd, GLCD_SRC, "glcd").unwrap();
    assert_eq!(font.codepoint_ranges(), vec![0..=2]);
    assert!(font.can_display(2));
    assert!(!font.can_display(3));
    assert!(!font.can_display('\n' as u32));
}

#[test]
fn test_glcd_columns() {
    let Font::Glcd(font) = parse_str(FontFormat::Glcd, GLCD_SRC, "glcd").unwrap() else {
        panic!("expected GLCD");
    };
    let columns: Vec<u8> = (0..5).filter_map(|c| font.column(1, c)).collect();
    assert_eq!(columns, vec![0x3E, 0x5B, 0x4F, 0x5B, 0x3E]);
}

#[test]
fn test_glcd_text_size() {
    let font = parse_str(FontFormat::Glcd, GLCD_SRC, "glcd")
        .unwrap()
        .with_text_size(2);
    assert_eq!(font.text_size(), 2);
    assert_eq!(font.line_height(), 16);
}

// ============================================================================
// UTFT
// ============================================================================

#[test]
fn test_utft_header() {
    let Font::Utft(font) = parse_str(FontFormat::Utft, UTFT_SRC, "TinyFont").unwrap() else {
        panic!("expected UTFT");
    };
    assert_eq!((font.char_width(), font.char_height()), (8, 4));
    assert_eq!((font.first(), font.last()), ('0' as u32, '1' as u32));
    assert_eq!(font.bitmap().len(), 8);
}

#[test]
fn test_utft_pixels() {
    let Font::Utft(font) = parse_str(FontFormat::Utft, UTFT_SRC, "TinyFont").unwrap() else {
        panic!("expected UTFT");
    };
    let cell = font.glyph_bitmap('1' as u32).unwrap();
    // Row 3 is 0x1C = 0001_1100.
    let row3: Vec<bool> = (0..8).map(|x| font.pixel(cell, x, 3)).collect();
    assert_eq!(
        row3,
        vec![false, false, false, true, true, true, false, false]
    );
}

#[test]
fn test_utft_can_display() {
    let font = parse_str(FontFormat::Utft, UTFT_SRC, "TinyFont").unwrap();
    assert!(font.can_display('0' as u32));
    assert!(font.can_display('1' as u32));
    assert!(!font.can_display('2' as u32));
    assert!(!font.can_display('/' as u32));
    assert!(!font.can_display('\r' as u32));
}
