//! Common test imports and utilities for DXT1 tests
#![allow(unused_imports)]

pub use alloc::{vec, vec::Vec};
pub use rstest::rstest;

pub use rw_txd_common::color_8888::Color8888;
pub use rw_txd_common::decoded_4x4_block::Decoded4x4Block;

/// Assembles an 8-byte DXT1 block from its endpoints and per-row index bytes.
pub(crate) fn make_bc1_block(color0: u16, color1: u16, rows: [u8; 4]) -> [u8; 8] {
    let c0 = color0.to_le_bytes();
    let c1 = color1.to_le_bytes();
    [c0[0], c0[1], c1[0], c1[1], rows[0], rows[1], rows[2], rows[3]]
}
