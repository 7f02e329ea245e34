//! Builds font folders and manifests in a temporary directory.

#![allow(dead_code)]

#[path = "../../../tftfont-core/tests/common/mod.rs"]
mod t3_builder;

use std::fs;
use std::path::{Path, PathBuf};

pub use t3_builder::t3_source;

pub const GLCD_SRC: &str = "static const unsigned char font[] PROGMEM = {\n\
                            0x00, 0x00, 0x00, 0x00, 0x00,\n\
                            0x3E, 0x5B, 0x4F, 0x5B, 0x3E,\n\
                            };\n";

pub const UTFT_SRC: &str = "fontdatatype TinyFont[12] PROGMEM={\n\
                            0x08,0x04,0x30,0x02,\n\
                            0x18,0x24,0x24,0x18,\n\
                            0x08,0x18,0x08,0x1C,\n\
                            };\n";

pub fn dosis_source() -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../tftfont-core/tests/fixtures/dosis_bold18pt7b.h");
    fs::read_to_string(path).unwrap()
}

pub fn write(root: &Path, rel: &str, contents: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, contents).unwrap();
    path
}

/// A root with discoverable GFX, T3 and UTFT folders plus a GLCD file.
pub fn font_tree(root: &Path) {
    let dosis = dosis_source();
    write(root, "gfx/Dosis/BOLD/dosis_bold18pt7b.h", &dosis);
    // Same glyphs under other names and sizes for nearest-size lookups.
    write(
        root,
        "gfx/Dosis/BOLD/dosis_bold12pt7b.h",
        &dosis.replace("dosis_bold18pt7b", "dosis_bold12pt7b"),
    );
    write(
        root,
        "gfx/Dosis/BOLD/dosis_bold24pt7b.h",
        &dosis.replace("dosis_bold18pt7b", "dosis_bold24pt7b"),
    );
    write(
        root,
        "gfx/Dosis/PLAIN/dosis9pt7b.h",
        &dosis.replace("dosis_bold18pt7b", "dosis9pt7b"),
    );
    write(root, "gfx/README.txt", "not a font");

    write(
        root,
        "t3/font_Test_8.h",
        "#include \"ILI9341_t3.h\"\nextern const ILI9341_t3_font_t Test_8;\n",
    );
    write(root, "t3/font_Test_8.c", &t3_source("Test_8"));

    write(root, "utft/TinyFont.c", UTFT_SRC);
    write(root, "glcd/glcdfont.c", GLCD_SRC);
}

pub const MANIFEST: &str = r#"{
  "platforms": [
    { "name": "arduino", "dpi": 100, "categories": [
      { "name": "FONT_GLCD", "includePath": "", "fontFolder": "",
        "fonts": [
          { "familyName": "BuiltIn", "displayName": "BuiltIn(5x8pt)",
            "fileName": "glcd/glcdfont.c", "fontRef": "NULL",
            "logicalSize": "5", "logicalStyle": "PLAIN" },
          { "familyName": "BuiltIn", "displayName": "BuiltIn(10x16pt)",
            "fileName": "glcd/glcdfont.c", "fontRef": "NULL",
            "logicalSize": "10", "logicalStyle": "PLAIN" },
          { "familyName": "BuiltIn", "displayName": "BuiltIn(5x8pt)",
            "fileName": "glcd/glcdfont.c", "fontRef": "NULL",
            "logicalSize": "5", "logicalStyle": "PLAIN" }
        ] },
      { "name": "FONT_GFX", "includePath": "Fonts/", "fontFolder": "gfx", "fonts": [] },
      { "name": "FONT_SIM", "fonts": [
          { "familyName": "Sim", "displayName": "Sim", "fileName": "", "fontRef": "" } ] }
    ] },
    { "name": "teensy", "dpi": 100, "categories": [
      { "name": "FONT_T3", "includePath": "", "fontFolder": "t3", "fonts": [] },
      { "name": "FONT_UTFT", "includePath": "", "fontFolder": "utft", "fonts": [] },
      { "name": "FONT_GFX", "includePath": "", "fontFolder": "missing", "fonts": [] }
    ] }
  ]
}"#;
