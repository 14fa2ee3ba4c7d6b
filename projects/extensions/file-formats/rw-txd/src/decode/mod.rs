//! Decoding of texture payloads into RGBA8.
//!
//! The decoder is chosen from a texture's format tag and raster flags, see
//! [`TextureFormat::from_raw`]. Output is always a row-major RGBA8 buffer of
//! `width * height * 4` bytes with the origin at the top left. Only the base image
//! is decoded; mip levels are left as raw payloads.

/// Sink trait for encoding decoded images into a file format.
pub mod encoder;

/// `A8R8G8B8` and `X8R8G8B8` decoding.
pub mod bgra;

/// 8-bit palettised decoding.
pub mod pal8;

pub use encoder::*;

use crate::error::{DecodeError, DecodeResult};
use crate::txd::constants::*;
use crate::txd::TextureDataChunk;
use alloc::vec::Vec;
use derive_enum_all_values::AllValues;
use log::{debug, warn};

/// Pixel formats with a decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AllValues)]
pub enum TextureFormat {
    /// 32-bit B, G, R, A bytes per pixel. Tags [`FORMAT_A8R8G8B8`] and [`FORMAT_X8R8G8B8`].
    Bgra,
    /// One palette index byte per pixel. Tag 0 with no raster flags.
    Pal8,
    /// DXT1 blocks of 8 bytes per 4x4 tile. Tag [`FORMAT_DXT1`].
    Dxt1,
    /// DXT3 blocks of 16 bytes per 4x4 tile. Tag [`FORMAT_DXT3`].
    Dxt3,
}

impl TextureFormat {
    /// Selects the decoder for a format tag and raster flags.
    ///
    /// Returns [`None`] for formats without a decoder, including DXT2, DXT4 and DXT5.
    pub fn from_raw(format: u32, flags: u8) -> Option<Self> {
        match (format, flags) {
            (FORMAT_A8R8G8B8 | FORMAT_X8R8G8B8, _) => Some(Self::Bgra),
            (0, 0) => Some(Self::Pal8),
            (FORMAT_DXT1, _) => Some(Self::Dxt1),
            (FORMAT_DXT3, _) => Some(Self::Dxt3),
            _ => None,
        }
    }
}

/// A texture decoded to RGBA8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
    /// Row-major RGBA8 pixels, `width * height * 4` bytes.
    pub pixels: Vec<u8>,
    /// Number of palettised pixels whose index had no palette entry.
    ///
    /// Those pixels are transparent black. Always 0 for other formats.
    pub missing_palette_entries: usize,
}

impl DecodedImage {
    /// Encodes the image with `encoder`.
    pub fn encode_with<E: ImageEncoder>(&self, encoder: &E) -> Result<Vec<u8>, E::Error> {
        encoder.encode(self.width as u32, self.height as u32, &self.pixels)
    }
}

/// Decodes the base image of a texture to RGBA8.
///
/// # Errors
///
/// - [`DecodeError::UnsupportedFormat`] if no decoder handles the texture's format.
/// - [`DecodeError::PayloadTooShort`] if a BGRA or PAL8 payload is smaller than the
///   texture dimensions need.
///
/// DXT payloads that are too short are not an error: the pixels of missing blocks
/// are left transparent black.
pub fn decode_texture(texture: &TextureDataChunk<'_>) -> DecodeResult<DecodedImage> {
    let width = texture.width as usize;
    let height = texture.height as usize;

    let Some(format) = texture.texture_format() else {
        return Err(DecodeError::UnsupportedFormat {
            format: texture.format,
            flags: texture.flags,
        });
    };

    debug!(
        "Decoding '{}' as {:?} ({}x{})",
        texture.name, format, width, height
    );

    let mut missing_palette_entries = 0;
    let pixels = match format {
        TextureFormat::Bgra => bgra::decode_bgra(texture.data, width, height)?,
        TextureFormat::Pal8 => {
            let decoded = pal8::decode_pal8(texture.palette, texture.data, width, height)?;
            missing_palette_entries = decoded.missing_entries;
            if missing_palette_entries > 0 {
                warn!(
                    "Texture '{}' has {} pixels without a palette entry",
                    texture.name, missing_palette_entries
                );
            }
            decoded.pixels
        }
        TextureFormat::Dxt1 => rw_txd_bc1::decode_bc1_image(texture.data, width, height),
        TextureFormat::Dxt3 => rw_txd_bc2::decode_bc2_image(texture.data, width, height),
    };

    Ok(DecodedImage {
        width,
        height,
        pixels,
        missing_palette_entries,
    })
}

/// Checks that `payload` holds `width * height` pixels of `bytes_per_pixel` each.
///
/// Returns the number of bytes those pixels occupy.
pub(crate) fn ensure_payload(
    payload: &[u8],
    width: usize,
    height: usize,
    bytes_per_pixel: usize,
) -> DecodeResult<usize> {
    let required = width.saturating_mul(height).saturating_mul(bytes_per_pixel);
    if payload.len() < required {
        return Err(DecodeError::PayloadTooShort {
            required,
            actual: payload.len(),
        });
    }
    Ok(required)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(FORMAT_A8R8G8B8, 0, Some(TextureFormat::Bgra))]
    #[case(FORMAT_X8R8G8B8, 0, Some(TextureFormat::Bgra))]
    #[case(0, 0, Some(TextureFormat::Pal8))]
    #[case(0, 1, None)]
    #[case(FORMAT_DXT1, 1, Some(TextureFormat::Dxt1))]
    #[case(FORMAT_DXT3, 0, Some(TextureFormat::Dxt3))]
    #[case(FORMAT_DXT5, 0, None)]
    #[case(7, 0, None)]
    fn selects_decoder(#[case] format: u32, #[case] flags: u8, #[case] expected: Option<TextureFormat>) {
        assert_eq!(TextureFormat::from_raw(format, flags), expected);
    }

    #[test]
    fn every_format_produces_full_sized_buffer() {
        for &format in TextureFormat::all_values() {
            let spec = TextureSpec::solid(format, 5, 3);
            let bytes = TxdBuilder::new().texture(spec).build();
            let file = crate::parse_txd(&bytes).unwrap();
            let texture = file.textures().next().unwrap().texture_data().unwrap();

            let image = decode_texture(texture).unwrap();
            assert_eq!(image.pixels.len(), 5 * 3 * 4, "{format:?}");
            assert_eq!(image.missing_palette_entries, 0, "{format:?}");
        }
    }

    #[test]
    fn unsupported_format_reports_tag_and_flags() {
        let spec = TextureSpec {
            format: FORMAT_DXT5,
            flags: 0x03,
            ..TextureSpec::solid(TextureFormat::Dxt3, 4, 4)
        };
        let bytes = TxdBuilder::new().texture(spec).build();
        let file = crate::parse_txd(&bytes).unwrap();
        let texture = file.textures().next().unwrap().texture_data().unwrap();

        assert_eq!(
            decode_texture(texture),
            Err(DecodeError::UnsupportedFormat {
                format: FORMAT_DXT5,
                flags: 0x03,
            })
        );
    }

    #[test]
    fn dxt1_round_trip_block_is_pure_red() {
        let block = [0x00, 0xF8, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x00];
        let spec = TextureSpec::new("red", FORMAT_DXT1, 4, 4, block.to_vec());
        let bytes = TxdBuilder::new().texture(spec).build();
        let file = crate::parse_txd(&bytes).unwrap();
        let texture = file.textures().next().unwrap().texture_data().unwrap();

        let image = decode_texture(texture).unwrap();
        assert!(image.pixels.chunks_exact(4).all(|px| px == [255, 0, 0, 255]));
    }

    #[test]
    fn encode_with_passes_dimensions_and_pixels() {
        struct Recorder;
        impl ImageEncoder for Recorder {
            type Error = core::convert::Infallible;

            fn encode(&self, width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>, Self::Error> {
                let mut out = vec![width as u8, height as u8];
                out.extend_from_slice(rgba);
                Ok(out)
            }
        }

        let image = DecodedImage {
            width: 1,
            height: 2,
            pixels: vec![1, 2, 3, 4, 5, 6, 7, 8],
            missing_palette_entries: 0,
        };
        let encoded = image.encode_with(&Recorder).unwrap();
        assert_eq!(encoded, [1, 2, 1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
