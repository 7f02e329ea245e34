//! Font builders shared by render integration tests.

#![allow(dead_code)]

#[path = "../../../tftfont-core/tests/common/mod.rs"]
mod t3_builder;

use tftfont_core::{parse_path, parse_str, Font, FontFormat};

pub use t3_builder::{t3_source, CAP_HEIGHT, LINE_SPACE};

pub const GLCD_SRC: &str = "\
static const unsigned char font[] PROGMEM = {
\t0x00, 0x00, 0x00, 0x00, 0x00,
\t0x3E, 0x5B, 0x4F, 0x5B, 0x3E,
\t0x7E, 0x11, 0x11, 0x11, 0x7E,
\t0x7F, 0x49, 0x49, 0x49, 0x36,
\t0xFF, 0x81, 0x81, 0x81, 0xFF,
};
";

pub const UTFT_SRC: &str = "\
fontdatatype TinyFont[12] PROGMEM={
0x08,0x04,0x30,0x02,
0x18,0x24,0x24,0x18, // 0
0x08,0x18,0x08,0x1C, // 1
};
";

pub fn dosis() -> Font {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../tftfont-core/tests/fixtures/dosis_bold18pt7b.h");
    parse_path(FontFormat::Gfx, path, "dosis_bold18pt7b").expect("fixture should parse")
}

pub fn glcd() -> Font {
    parse_str(FontFormat::Glcd, GLCD_SRC, "glcd").unwrap()
}

pub fn t3() -> Font {
    parse_str(FontFormat::T3, &t3_source("Test_8"), "Test_8").unwrap()
}

/// The synthetic T3 font with its cap height replaced.
pub fn t3_with_cap_height(cap_height: u32) -> Font {
    let src = t3_source("Test_8").replace(
        &format!("\t{LINE_SPACE}, {CAP_HEIGHT}\n"),
        &format!("\t{LINE_SPACE}, {cap_height}\n"),
    );
    parse_str(FontFormat::T3, &src, "Test_8").unwrap()
}

pub fn utft() -> Font {
    parse_str(FontFormat::Utft, UTFT_SRC, "TinyFont").unwrap()
}

pub fn all_fonts() -> Vec<Font> {
    vec![dosis(), glcd(), t3(), utft()]
}

/// Every code point the font can display, as a one-character string.
pub fn displayable(font: &Font) -> Vec<String> {
    font.codepoint_ranges()
        .into_iter()
        .flatten()
        .filter(|&cp| font.can_display(cp))
        .filter_map(char::from_u32)
        .map(String::from)
        .collect()
}
