//! Decoding of 32-bit BGRA rasters.
//!
//! Direct3D stores `A8R8G8B8` and `X8R8G8B8` pixels as B, G, R, A bytes in memory.
//! The fourth byte is copied through unchanged for both formats.

use super::ensure_payload;
use crate::error::DecodeResult;
use alloc::vec::Vec;
use rw_txd_common::color_8888::Color8888;

/// Bytes per BGRA pixel.
pub const BGRA_PIXEL_SIZE: usize = 4;

/// Swizzles `width * height` BGRA pixels into RGBA8.
///
/// Bytes beyond the last pixel are ignored.
///
/// # Errors
///
/// [`DecodeError::PayloadTooShort`](crate::error::DecodeError::PayloadTooShort) if `data`
/// holds fewer than `width * height * 4` bytes.
pub fn decode_bgra(data: &[u8], width: usize, height: usize) -> DecodeResult<Vec<u8>> {
    let required = ensure_payload(data, width, height, BGRA_PIXEL_SIZE)?;

    let mut rgba = Vec::with_capacity(required);
    for pixel in data[..required].chunks_exact(BGRA_PIXEL_SIZE) {
        let color = Color8888::from_bgra([pixel[0], pixel[1], pixel[2], pixel[3]]);
        rgba.extend_from_slice(&color.to_rgba());
    }
    Ok(rgba)
}
