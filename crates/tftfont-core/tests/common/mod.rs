//! Shared fixture builders for core integration tests.

#![allow(dead_code)]

use tftfont_core::bits::BitWriter;

/// Path to a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// One glyph row group of a T3 run-length bitmap.
pub enum Row<'a> {
    Single(&'a str),
    Repeat(u32, &'a str),
}

/// A synthetic T3 glyph record.
pub struct T3Record<'a> {
    pub encoding: u32,
    pub width: u32,
    pub height: u32,
    pub x_offset: i32,
    pub y_offset: i32,
    pub delta: u32,
    pub rows: Vec<Row<'a>>,
}

/// Bit widths used by [`t3_source`].
pub const BITS_INDEX: u32 = 8;
pub const BITS_WIDTH: u32 = 4;
pub const BITS_HEIGHT: u32 = 4;
pub const BITS_XOFFSET: u32 = 3;
pub const BITS_YOFFSET: u32 = 3;
pub const BITS_DELTA: u32 = 4;
pub const LINE_SPACE: u32 = 8;
pub const CAP_HEIGHT: u32 = 6;

/// Glyphs for 'A', 'B', 'C' and (band two) 'a'.
///
/// - 'A': 3x4, rows `010`, `101`, then `111` repeated twice.
/// - 'B': 2x2 at offset (1, 2), `11` repeated twice.
/// - 'C': encoding tag 1, so no glyph.
/// - 'a': shares the 'B' record.
pub fn t3_records() -> Vec<T3Record<'static>> {
    vec![
        T3Record {
            encoding: 0,
            width: 3,
            height: 4,
            x_offset: 0,
            y_offset: 0,
            delta: 4,
            rows: vec![Row::Single("010"), Row::Single("101"), Row::Repeat(2, "111")],
        },
        T3Record {
            encoding: 0,
            width: 2,
            height: 2,
            x_offset: 1,
            y_offset: 2,
            delta: 4,
            rows: vec![Row::Repeat(2, "11")],
        },
        T3Record {
            encoding: 1,
            width: 1,
            height: 1,
            x_offset: 0,
            y_offset: 0,
            delta: 1,
            rows: vec![Row::Single("1")],
        },
    ]
}

fn push_bits(w: &mut BitWriter, pattern: &str) {
    for ch in pattern.chars() {
        w.push_bit(ch == '1');
    }
}

/// Encodes records into `(data, record byte offsets)`.
pub fn encode_records(records: &[T3Record<'_>]) -> (Vec<u8>, Vec<u32>) {
    let mut w = BitWriter::new();
    let mut offsets = Vec::new();
    for record in records {
        w.align();
        offsets.push((w.bit_len() / 8) as u32);
        w.push(record.encoding, 3);
        w.push(record.width, BITS_WIDTH);
        w.push(record.height, BITS_HEIGHT);
        w.push_signed(record.x_offset, BITS_XOFFSET);
        w.push_signed(record.y_offset, BITS_YOFFSET);
        w.push(record.delta, BITS_DELTA);
        for row in &record.rows {
            match row {
                Row::Single(bits) => {
                    w.push_bit(false);
                    push_bits(&mut w, bits);
                }
                Row::Repeat(n, bits) => {
                    w.push_bit(true);
                    w.push(n - 2, 3);
                    push_bits(&mut w, bits);
                }
            }
        }
    }
    (w.into_bytes(), offsets)
}

fn hex_list(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("0x{b:02X}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// C source for a T3 font named `name` with the given header values.
pub fn t3_source_with(name: &str, unicode: i32, version: i32) -> String {
    let (data, offsets) = encode_records(&t3_records());
    // Index slots: 'A', 'B', 'C', then band two 'a' -> 'B' record.
    let mut index = BitWriter::new();
    for slot in [offsets[0], offsets[1], offsets[2], offsets[1]] {
        index.push(slot, BITS_INDEX);
    }
    let index = index.into_bytes();

    format!(
        "#include \"font_{name}.h\"\n\
         \n\
         static const unsigned char {name}_data[] = {{\n\
         /* glyph records */ {data}\n\
         }};\n\
         /* font data size: {len} bytes */\n\
         \n\
         static const unsigned char {name}_index[] = {{\n\
         {index}\n\
         }};\n\
         \n\
         const ILI9341_t3_font_t {name} = {{\n\
         \t{name}_index,\n\
         \t{unicode},\n\
         \t{name}_data,\n\
         \t{version},\n\
         \t0,\n\
         \t65, 67, 97, 97,\n\
         \t{BITS_INDEX}, {BITS_WIDTH}, {BITS_HEIGHT}, {BITS_XOFFSET}, {BITS_YOFFSET}, {BITS_DELTA},\n\
         \t{LINE_SPACE}, {CAP_HEIGHT}\n\
         }};\n",
        data = hex_list(&data),
        len = data.len(),
        index = hex_list(&index),
    )
}

pub fn t3_source(name: &str) -> String {
    t3_source_with(name, 0, 1)
}
