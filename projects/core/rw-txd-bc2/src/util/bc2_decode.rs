//! DXT3 (BC2) decoding implementation.

use alloc::vec::Vec;
use rw_txd_common::color_565::Color565;
use rw_txd_common::decoded_4x4_block::{decode_tiles, Decoded4x4Block, TILE_DIMENSION};
use rw_txd_common::interpolate::interpolate_565;

/// Size of a single DXT3 block in bytes.
pub const BC2_BLOCK_SIZE: usize = 16;

/// Returns the explicit 4-bit alpha of local pixel `(x, y)` from the first 8 bytes of a block.
///
/// Row `y` spans bytes `2y` and `2y + 1`. Even columns sit in the low nibble and odd
/// columns in the high nibble, so higher nibbles always belong to higher `x`.
#[inline]
pub fn alpha_nibble(alpha: &[u8; 8], x: usize, y: usize) -> u8 {
    let byte = alpha[y * 2 + x / 2];
    (byte >> ((x & 1) * 4)) & 0x0F
}

/// Decodes a DXT3 block into a structured representation of pixels
///
/// # Parameters
///
/// - `src`: The source DXT3 block (16 bytes)
///
/// # Returns
///
/// A [`Decoded4x4Block`] containing all 16 decoded pixels with alpha
///
/// # Example
///
/// ```
/// use rw_txd_bc2::util::decode_bc2_block;
///
/// let mut block = [0u8; 16];
/// block[0..8].fill(0xFF); // fully opaque
/// block[8..10].copy_from_slice(&0xF800u16.to_le_bytes());
/// let decoded = decode_bc2_block(&block);
/// assert!(decoded.pixels.iter().all(|p| p.a == 255));
/// ```
#[inline]
pub fn decode_bc2_block(src: &[u8; BC2_BLOCK_SIZE]) -> Decoded4x4Block {
    let mut alpha = [0u8; 8];
    alpha.copy_from_slice(&src[0..8]);

    // Last 8 bytes contain the color data (same format as DXT1)
    let color0 = Color565::from_raw(u16::from_le_bytes([src[8], src[9]]));
    let color1 = Color565::from_raw(u16::from_le_bytes([src[10], src[11]]));
    let table = interpolate_565(color0, color1);

    let mut result = Decoded4x4Block::new(table[0]);

    for (y, row) in src[12..16].iter().enumerate() {
        for x in 0..TILE_DIMENSION {
            let index = (row >> (x * 2)) & 0b11;
            let mut pixel = table[index as usize];

            // Scale 4-bit alpha (0-15) to 8-bit (0-255)
            pixel.a = alpha_nibble(&alpha, x, y) * 17;
            result.set_pixel(x, y, pixel);
        }
    }

    result
}

/// Safely wraps [`decode_bc2_block`] for use with slices
///
/// # Returns
///
/// A decoded block, else [`None`] if the slice is too short.
#[inline]
pub fn decode_bc2_block_from_slice(src: &[u8]) -> Option<Decoded4x4Block> {
    let block: &[u8; BC2_BLOCK_SIZE] = src.get(..BC2_BLOCK_SIZE)?.try_into().ok()?;
    Some(decode_bc2_block(block))
}

/// Decodes a DXT3 payload into a row-major RGBA8 image of `width` x `height` pixels.
///
/// Tile placement is identical to DXT1; see [`decode_tiles`].
pub fn decode_bc2_image(data: &[u8], width: usize, height: usize) -> Vec<u8> {
    decode_tiles(data, BC2_BLOCK_SIZE, width, height, |block| {
        decode_bc2_block_from_slice(block).unwrap_or(Decoded4x4Block::new(Default::default()))
    })
}
