//! Deterministic PNG writer.
//!
//! Uses fixed compression settings so the same pixels always produce the
//! same bytes.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};

use crate::error::{RenderError, RenderResult};
use crate::raster::RgbaBuffer;

/// PNG export configuration.
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

/// Write an RGBA buffer to a PNG file.
pub fn write_rgba(buffer: &RgbaBuffer, path: &Path, config: &PngConfig) -> RenderResult<()> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    write_rgba_to_writer(buffer, writer, config)
}

/// Write an RGBA buffer to any writer.
pub fn write_rgba_to_writer<W: Write>(
    buffer: &RgbaBuffer,
    writer: W,
    config: &PngConfig,
) -> RenderResult<()> {
    if buffer.width() == 0 || buffer.height() == 0 {
        return Err(RenderError::InvalidDimensions(format!(
            "{}x{}",
            buffer.width(),
            buffer.height()
        )));
    }

    let mut encoder = Encoder::new(writer, buffer.width(), buffer.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(buffer.as_bytes())?;

    Ok(())
}

/// Encode to a `Vec<u8>` and return the bytes with their BLAKE3 hash.
pub fn write_rgba_to_vec_with_hash(
    buffer: &RgbaBuffer,
    config: &PngConfig,
) -> RenderResult<(Vec<u8>, String)> {
    let mut data = Vec::new();
    write_rgba_to_writer(buffer, &mut data, config)?;
    let hash = blake3::hash(&data).to_hex().to_string();
    Ok((data, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphcipher_core::Rgb;

    #[test]
    fn test_png_signature_and_determinism() {
        let mut buffer = RgbaBuffer::new(16, 8, Rgb::new(255, 255, 255));
        buffer.fill_disc(8.0, 4.0, 3.0, Rgb::new(255, 0, 0));

        let config = PngConfig::default();
        let (data1, hash1) = write_rgba_to_vec_with_hash(&buffer, &config).unwrap();
        let (data2, hash2) = write_rgba_to_vec_with_hash(&buffer, &config).unwrap();

        assert_eq!(&data1[1..4], b"PNG");
        assert_eq!(data1, data2);
        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_decode_dimensions() {
        let buffer = RgbaBuffer::new(10, 6, Rgb::new(1, 2, 3));
        let (data, _) = write_rgba_to_vec_with_hash(&buffer, &PngConfig::default()).unwrap();

        let decoder = ::png::Decoder::new(std::io::Cursor::new(data));
        let reader = decoder.read_info().unwrap();
        assert_eq!(reader.info().width, 10);
        assert_eq!(reader.info().height, 6);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let buffer = RgbaBuffer::new(0, 6, Rgb::new(0, 0, 0));
        let err = write_rgba_to_vec_with_hash(&buffer, &PngConfig::default()).unwrap_err();
        assert_eq!(err.code(), "RENDER_003");
    }
}
