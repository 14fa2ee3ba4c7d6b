//! Decoding of 8-bit palettised rasters.
//!
//! The palette holds up to 256 entries of R, G, B, A bytes. Each payload byte is the
//! palette index of one pixel, row-major. Palettes shorter than 1024 bytes are
//! allowed; indices past their end produce [`Color8888::TRANSPARENT`].

use super::ensure_payload;
use crate::cursor::Cursor;
use crate::error::DecodeResult;
use alloc::vec::Vec;
use rw_txd_common::color_8888::Color8888;

/// Bytes per palette entry.
pub const PALETTE_ENTRY_SIZE: usize = 4;

/// Pixels of a palettised texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pal8Image {
    /// Row-major RGBA8 pixels.
    pub pixels: Vec<u8>,
    /// Number of pixels whose index had no palette entry.
    pub missing_entries: usize,
}

/// Splits a raw palette into its RGBA entries. A trailing partial entry is dropped.
pub fn read_palette(palette: &[u8]) -> Vec<Color8888> {
    Cursor::new(palette)
        .read_chunks(PALETTE_ENTRY_SIZE)
        .into_iter()
        .map(|entry| Color8888::from_rgba([entry[0], entry[1], entry[2], entry[3]]))
        .collect()
}

/// Looks up `width * height` palette indices from `indices`.
///
/// # Errors
///
/// [`DecodeError::PayloadTooShort`](crate::error::DecodeError::PayloadTooShort) if
/// `indices` holds fewer than `width * height` bytes.
pub fn decode_pal8(
    palette: &[u8],
    indices: &[u8],
    width: usize,
    height: usize,
) -> DecodeResult<Pal8Image> {
    let required = ensure_payload(indices, width, height, 1)?;
    let entries = read_palette(palette);

    let mut missing_entries = 0;
    let mut pixels = Vec::with_capacity(required * 4);
    for &index in &indices[..required] {
        let color = match entries.get(index as usize) {
            Some(color) => *color,
            None => {
                missing_entries += 1;
                Color8888::TRANSPARENT
            }
        };
        pixels.extend_from_slice(&color.to_rgba());
    }

    Ok(Pal8Image {
        pixels,
        missing_entries,
    })
}
