//! Deterministic PNG export.
//!
//! Fixed encoder settings give byte-identical output for identical pixels,
//! so a render can be compared by hash.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};

use crate::buffer::PixelBuffer;
use crate::error::RenderError;

/// PNG encoder settings.
#[derive(Debug, Clone)]
pub struct PngConfig {
    pub compression: Compression,
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

/// Write a pixel buffer to a PNG file.
pub fn write_png(buffer: &PixelBuffer, path: &Path, config: &PngConfig) -> Result<(), RenderError> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    write_png_to_writer(buffer, writer, config)
}

/// Write a pixel buffer as RGBA PNG to any writer.
pub fn write_png_to_writer<W: Write>(
    buffer: &PixelBuffer,
    writer: W,
    config: &PngConfig,
) -> Result<(), RenderError> {
    if buffer.is_empty() {
        return Err(RenderError::EmptyImage {
            width: buffer.width,
            height: buffer.height,
        });
    }
    let mut encoder = Encoder::new(writer, buffer.width, buffer.height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&buffer.to_rgba8())?;
    Ok(())
}

/// BLAKE3 hash of encoded data, hex encoded.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Encode to memory and return the bytes with their hash.
pub fn write_png_to_vec_with_hash(
    buffer: &PixelBuffer,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), RenderError> {
    let mut data = Vec::new();
    write_png_to_writer(buffer, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_output_is_deterministic() {
        let mut buffer = PixelBuffer::transparent(16, 8);
        for x in 0..16 {
            buffer.set(x, x / 2, Color::WHITE);
        }
        let config = PngConfig::default();
        let (data1, hash1) = write_png_to_vec_with_hash(&buffer, &config).unwrap();
        let (data2, hash2) = write_png_to_vec_with_hash(&buffer, &config).unwrap();
        assert_eq!(data1, data2);
        assert_eq!(hash1, hash2);
        assert_eq!(&data1[1..4], b"PNG");
    }

    #[test]
    fn test_empty_buffer_is_rejected() {
        let buffer = PixelBuffer::transparent(0, 8);
        let err = write_png_to_vec_with_hash(&buffer, &PngConfig::default()).unwrap_err();
        assert!(matches!(err, RenderError::EmptyImage { width: 0, .. }));
    }

    #[test]
    fn test_write_png_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let buffer = PixelBuffer::new(3, 3, Color::BLACK);
        write_png(&buffer, &path, &PngConfig::default()).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 8);
    }
}
