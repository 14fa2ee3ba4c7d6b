//! DXT1 (BC1) decoding implementation.
//!
//! Colour table construction lives in [`rw_txd_common::interpolate`]; this module
//! handles the block layout and index unpacking.

use alloc::vec::Vec;
use rw_txd_common::color_565::Color565;
use rw_txd_common::decoded_4x4_block::{decode_tiles, Decoded4x4Block, TILE_DIMENSION};
use rw_txd_common::interpolate::interpolate_565;

/// Size of a single DXT1 block in bytes.
pub const BC1_BLOCK_SIZE: usize = 8;

/// Decodes a DXT1 block into a structured representation of pixels
///
/// # Parameters
///
/// - `src`: The source DXT1 block (8 bytes)
///
/// # Returns
///
/// A [`Decoded4x4Block`] containing all 16 decoded pixels.
///
/// # Example
///
/// ```
/// use rw_txd_bc1::util::decode_bc1_block;
///
/// // Pure red endpoint, every pixel selecting entry 0.
/// let block = [0x00, 0xF8, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x00];
/// let decoded = decode_bc1_block(&block);
/// assert!(decoded.pixels.iter().all(|p| (p.r, p.g, p.b, p.a) == (255, 0, 0, 255)));
/// ```
#[inline]
pub fn decode_bc1_block(src: &[u8; BC1_BLOCK_SIZE]) -> Decoded4x4Block {
    let color0 = Color565::from_raw(u16::from_le_bytes([src[0], src[1]]));
    let color1 = Color565::from_raw(u16::from_le_bytes([src[2], src[3]]));
    let table = interpolate_565(color0, color1);

    let mut result = Decoded4x4Block::new(table[0]);

    // One index byte per row; bits 0-1 address column 0, bits 6-7 column 3.
    for (y, row) in src[4..8].iter().enumerate() {
        for x in 0..TILE_DIMENSION {
            let index = (row >> (x * 2)) & 0b11;
            result.set_pixel(x, y, table[index as usize]);
        }
    }

    result
}

/// Safely wraps [`decode_bc1_block`] for use with slices
///
/// # Returns
///
/// A decoded block, else [`None`] if the slice is too short.
#[inline]
pub fn decode_bc1_block_from_slice(src: &[u8]) -> Option<Decoded4x4Block> {
    let block: &[u8; BC1_BLOCK_SIZE] = src.get(..BC1_BLOCK_SIZE)?.try_into().ok()?;
    Some(decode_bc1_block(block))
}

/// Decodes a DXT1 payload into a row-major RGBA8 image of `width` x `height` pixels.
///
/// Blocks are laid out row-major across `ceil(width / 4)` tiles per row. A
/// trailing partial block is ignored, and pixels not covered by a block are left
/// transparent black.
///
/// # Returns
///
/// A buffer of exactly `width * height * 4` bytes.
pub fn decode_bc1_image(data: &[u8], width: usize, height: usize) -> Vec<u8> {
    decode_tiles(data, BC1_BLOCK_SIZE, width, height, |block| {
        // `decode_tiles` only hands out whole blocks.
        decode_bc1_block_from_slice(block).unwrap_or(Decoded4x4Block::new(Default::default()))
    })
}
