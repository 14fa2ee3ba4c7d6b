//! # Decoded 4x4 Block
//!
//! This module provides the [`Decoded4x4Block`] structure for representing decompressed
//! 4x4 pixel tiles of DXT1/DXT3 textures, and the helpers that lay those tiles out
//! into a canonical RGBA8 image.
//!
//! ## Memory Layout
//!
//! The pixels are stored in row-major order:
//! ```text
//! [ 0] [ 1] [ 2] [ 3]
//! [ 4] [ 5] [ 6] [ 7]
//! [ 8] [ 9] [10] [11]
//! [12] [13] [14] [15]
//! ```
//!
//! ## Tile Placement
//!
//! Blocks are stored row-major across `ceil(width / 4)` tiles per row. Tile `i`
//! covers the pixels starting at `((i % tiles_per_row) * 4, (i / tiles_per_row) * 4)`.
//! Pixels of edge tiles that fall outside the image are discarded.
//!
//! ## Usage
//!
//! ```
//! use rw_txd_common::color_8888::Color8888;
//! use rw_txd_common::decoded_4x4_block::{decode_tiles, Decoded4x4Block};
//!
//! let red = Color8888::new(255, 0, 0, 255);
//! // Two 8-byte blocks make an 8x4 image.
//! let data = [0u8; 16];
//! let rgba = decode_tiles(&data, 8, 8, 4, |_| Decoded4x4Block::new(red));
//! assert_eq!(rgba.len(), 8 * 4 * 4);
//! assert!(rgba.chunks_exact(4).all(|px| px == [255, 0, 0, 255]));
//! ```

use crate::color_8888::Color8888;
use alloc::vec;
use alloc::vec::Vec;

/// Width and height of a compression tile, in pixels.
pub const TILE_DIMENSION: usize = 4;

/// Represents a decoded 4x4 block of pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded4x4Block {
    /// The 16 pixels in the block (row-major order)
    /// (i.e. `pixels[0]` is top-left, `pixels[3]` is top-right, etc.)
    pub pixels: [Color8888; 16],
}

impl Decoded4x4Block {
    /// Constructs a new decoded block initialised with 16 copies of the provided pixel.
    pub fn new(pixel: Color8888) -> Self {
        Self {
            pixels: [pixel; 16],
        }
    }

    /// Gets the pixel at local coordinates `(x, y)`.
    ///
    /// # Panics
    ///
    /// If `x` or `y` is not in `0..4`.
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> Color8888 {
        assert!(x < TILE_DIMENSION && y < TILE_DIMENSION);
        self.pixels[y * TILE_DIMENSION + x]
    }

    /// Sets the pixel at local coordinates `(x, y)`.
    ///
    /// # Panics
    ///
    /// If `x` or `y` is not in `0..4`.
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: Color8888) {
        assert!(x < TILE_DIMENSION && y < TILE_DIMENSION);
        self.pixels[y * TILE_DIMENSION + x] = pixel;
    }

    /// Checks if all pixels in the block have the same color values
    #[inline]
    pub fn has_identical_pixels(&self) -> bool {
        let first = self.pixels[0];
        self.pixels.iter().all(|pixel| *pixel == first)
    }

    /// Copies this tile into a row-major RGBA8 image of `width` x `height` pixels,
    /// with the tile's top-left corner at `(origin_x, origin_y)`.
    ///
    /// Pixels falling outside the image are skipped.
    ///
    /// # Panics
    ///
    /// If `dst` is shorter than `width * height * 4` bytes.
    pub fn write_to_rgba(
        &self,
        dst: &mut [u8],
        width: usize,
        height: usize,
        origin_x: usize,
        origin_y: usize,
    ) {
        for local_y in 0..TILE_DIMENSION {
            let y = origin_y + local_y;
            if y >= height {
                break;
            }
            for local_x in 0..TILE_DIMENSION {
                let x = origin_x + local_x;
                if x >= width {
                    break;
                }
                let offset = (y * width + x) * 4;
                dst[offset..offset + 4]
                    .copy_from_slice(&self.pixels[local_y * TILE_DIMENSION + local_x].to_rgba());
            }
        }
    }
}

/// Number of tiles in one row of tiles for an image `width` pixels wide.
#[inline]
pub fn tiles_per_row(width: usize) -> usize {
    width.div_ceil(TILE_DIMENSION)
}

/// Pixel coordinates of the top-left corner of tile `tile_index`.
#[inline]
pub fn tile_origin(tile_index: usize, tiles_per_row: usize) -> (usize, usize) {
    (
        (tile_index % tiles_per_row) * TILE_DIMENSION,
        (tile_index / tiles_per_row) * TILE_DIMENSION,
    )
}

/// Decodes a sequence of fixed-size compressed blocks into a `width` x `height` RGBA8 image.
///
/// `data` is split into as many whole `block_size` byte blocks as fit. A trailing
/// partial block is ignored. Each block is handed to `decode_block` and the result
/// placed per the module's tile placement rules. Pixels not covered by any block
/// are left as transparent black.
///
/// # Parameters
///
/// - `data`: The compressed payload.
/// - `block_size`: Size of one compressed block in bytes (8 for DXT1, 16 for DXT3).
/// - `width`, `height`: Dimensions of the output image in pixels.
/// - `decode_block`: Decodes one `block_size` byte block.
pub fn decode_tiles<F>(
    data: &[u8],
    block_size: usize,
    width: usize,
    height: usize,
    mut decode_block: F,
) -> Vec<u8>
where
    F: FnMut(&[u8]) -> Decoded4x4Block,
{
    let mut rgba = vec![0u8; width * height * 4];
    if width == 0 || height == 0 || block_size == 0 {
        return rgba;
    }

    let per_row = tiles_per_row(width);
    let tile_rows = height.div_ceil(TILE_DIMENSION);
    let max_tiles = per_row * tile_rows;

    for (tile_index, block) in data.chunks_exact(block_size).take(max_tiles).enumerate() {
        let (origin_x, origin_y) = tile_origin(tile_index, per_row);
        decode_block(block).write_to_rgba(&mut rgba, width, height, origin_x, origin_y);
    }

    rgba
}
