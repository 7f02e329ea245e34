//! Variable-width bit-field extraction.
//!
//! T3 fonts pack every glyph field at arbitrary bit offsets. Bits are read
//! MSB-first: bit index 0 is the high bit of the byte at `pos`. A field of up
//! to 32 bits is assembled from a five-byte window starting at the byte that
//! holds its first bit.
//!
//! All functions return `None` rather than panicking when the window would
//! run past the end of the slice.

/// Reads the single bit at bit index `index`, counted from byte `pos`.
pub fn fetch_bit(data: &[u8], pos: usize, index: usize) -> Option<bool> {
    let byte = *data.get(pos + (index >> 3))?;
    Some(byte & (0x80 >> (index & 7)) != 0)
}

/// Reads an unsigned field `required` bits wide (0..=32).
pub fn fetch_unsigned(data: &[u8], pos: usize, index: usize, required: u32) -> Option<u32> {
    if required == 0 {
        return Some(0);
    }
    if required > 32 {
        return None;
    }
    let start = pos + (index >> 3);
    let shift = (index & 7) as u32;
    let window = data.get(start..start + 4)?;
    let mut val = u64::from(u32::from_be_bytes([window[0], window[1], window[2], window[3]]));
    val <<= shift;
    if 32 - shift < required {
        let spill = *data.get(start + 4)?;
        val |= u64::from(spill) >> (8 - shift);
    }
    Some(((val & 0xFFFF_FFFF) >> (32 - required)) as u32)
}

/// Reads a two's-complement signed field `required` bits wide (0..=32).
pub fn fetch_signed(data: &[u8], pos: usize, index: usize, required: u32) -> Option<i32> {
    let val = fetch_unsigned(data, pos, index, required)?;
    if required == 0 {
        return Some(0);
    }
    let raw = i64::from(val);
    if val & (1u32 << (required - 1)) != 0 {
        Some((raw - (1i64 << required)) as i32)
    } else {
        Some(raw as i32)
    }
}

/// Sequential reader over a bit-packed record.
#[derive(Debug, Clone)]
pub struct BitCursor<'a> {
    data: &'a [u8],
    pos: usize,
    index: usize,
}

impl<'a> BitCursor<'a> {
    /// Starts reading at bit `index` past byte `pos`.
    pub fn new(data: &'a [u8], pos: usize, index: usize) -> Self {
        Self { data, pos, index }
    }

    /// Bit index of the next field, relative to `pos`.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn bit(&mut self) -> Option<bool> {
        let bit = fetch_bit(self.data, self.pos, self.index)?;
        self.index += 1;
        Some(bit)
    }

    pub fn unsigned(&mut self, bits: u32) -> Option<u32> {
        let val = fetch_unsigned(self.data, self.pos, self.index, bits)?;
        self.index += bits as usize;
        Some(val)
    }

    pub fn signed(&mut self, bits: u32) -> Option<i32> {
        let val = fetch_signed(self.data, self.pos, self.index, bits)?;
        self.index += bits as usize;
        Some(val)
    }
}

/// MSB-first bit writer used to assemble bit-packed fixtures.
#[derive(Debug, Default, Clone)]
pub struct BitWriter {
    bytes: Vec<u8>,
    len: usize,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bits written so far.
    pub fn bit_len(&self) -> usize {
        self.len
    }

    /// Appends the low `bits` bits of `value`, high bit first.
    pub fn push(&mut self, value: u32, bits: u32) {
        for i in (0..bits).rev() {
            self.push_bit((value >> i) & 1 != 0);
        }
    }

    /// Appends the low `bits` bits of a signed value in two's complement.
    pub fn push_signed(&mut self, value: i32, bits: u32) {
        let mask = if bits >= 32 { u32::MAX } else { (1u32 << bits) - 1 };
        self.push(value as u32 & mask, bits);
    }

    pub fn push_bit(&mut self, bit: bool) {
        if self.len % 8 == 0 {
            self.bytes.push(0);
        }
        if bit {
            if let Some(last) = self.bytes.last_mut() {
                *last |= 0x80 >> (self.len % 8);
            }
        }
        self.len += 1;
    }

    /// Pads to a byte boundary.
    pub fn align(&mut self) {
        while self.len % 8 != 0 {
            self.push_bit(false);
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn padded(mut bytes: Vec<u8>) -> Vec<u8> {
        bytes.extend_from_slice(&[0, 0, 0, 0]);
        bytes
    }

    #[test]
    fn test_fetch_bit_msb_first() {
        let data = [0b1000_0001, 0b0100_0000];
        assert_eq!(fetch_bit(&data, 0, 0), Some(true));
        assert_eq!(fetch_bit(&data, 0, 1), Some(false));
        assert_eq!(fetch_bit(&data, 0, 7), Some(true));
        assert_eq!(fetch_bit(&data, 0, 9), Some(true));
        assert_eq!(fetch_bit(&data, 1, 1), Some(true));
        assert_eq!(fetch_bit(&data, 0, 16), None);
    }

    #[test]
    fn test_fetch_unsigned_aligned() {
        let data = padded(vec![0xAB, 0xCD]);
        assert_eq!(fetch_unsigned(&data, 0, 0, 8), Some(0xAB));
        assert_eq!(fetch_unsigned(&data, 0, 0, 16), Some(0xABCD));
        assert_eq!(fetch_unsigned(&data, 1, 0, 4), Some(0xC));
    }

    #[test]
    fn test_fetch_unsigned_unaligned() {
        // 0b1010_1011 1100_1101: bits 3..9 are 0101_111
        let data = padded(vec![0xAB, 0xCD]);
        assert_eq!(fetch_unsigned(&data, 0, 3, 7), Some(0b010_1111));
    }

    #[test]
    fn test_fetch_unsigned_spans_fifth_byte() {
        let mut w = BitWriter::new();
        w.push(0, 5);
        w.push(0xDEAD_BEEF, 32);
        let data = padded(w.into_bytes());
        assert_eq!(fetch_unsigned(&data, 0, 5, 32), Some(0xDEAD_BEEF));
    }

    #[test]
    fn test_fetch_signed_sign_extends() {
        let mut w = BitWriter::new();
        w.push(1, 3);
        w.push_signed(-3, 5);
        w.push_signed(7, 5);
        w.push_signed(-16, 5);
        let data = padded(w.into_bytes());
        assert_eq!(fetch_signed(&data, 0, 3, 5), Some(-3));
        assert_eq!(fetch_signed(&data, 0, 8, 5), Some(7));
        assert_eq!(fetch_signed(&data, 0, 13, 5), Some(-16));
    }

    #[test]
    fn test_zero_width_fields() {
        let data = padded(vec![0xFF]);
        assert_eq!(fetch_unsigned(&data, 0, 3, 0), Some(0));
        assert_eq!(fetch_signed(&data, 0, 3, 0), Some(0));
    }

    #[test]
    fn test_window_past_end_is_none() {
        let data = [0xFF, 0xFF];
        assert_eq!(fetch_unsigned(&data, 0, 0, 8), None);
        assert_eq!(fetch_unsigned(&[0u8; 4], 0, 33, 4), None);
    }

    #[test]
    fn test_cursor_reads_sequential_fields() {
        let mut w = BitWriter::new();
        w.push(0, 3);
        w.push(9, 6);
        w.push_signed(-2, 4);
        w.push_bit(true);
        let data = padded(w.into_bytes());
        let mut cursor = BitCursor::new(&data, 0, 0);
        assert_eq!(cursor.unsigned(3), Some(0));
        assert_eq!(cursor.unsigned(6), Some(9));
        assert_eq!(cursor.signed(4), Some(-2));
        assert_eq!(cursor.bit(), Some(true));
        assert_eq!(cursor.index(), 14);
    }
}
