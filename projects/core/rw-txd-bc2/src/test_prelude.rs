//! Common test imports and utilities for DXT3 tests
#![allow(unused_imports)]

pub use alloc::{vec, vec::Vec};
pub use rstest::rstest;

pub use rw_txd_common::color_8888::Color8888;
pub use rw_txd_common::decoded_4x4_block::Decoded4x4Block;

/// Assembles a 16-byte DXT3 block from its alpha bytes, endpoints and per-row index bytes.
pub(crate) fn make_bc2_block(alpha: [u8; 8], color0: u16, color1: u16, rows: [u8; 4]) -> [u8; 16] {
    let mut block = [0u8; 16];
    block[0..8].copy_from_slice(&alpha);
    block[8..10].copy_from_slice(&color0.to_le_bytes());
    block[10..12].copy_from_slice(&color1.to_le_bytes());
    block[12..16].copy_from_slice(&rows);
    block
}
