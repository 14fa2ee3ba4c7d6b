#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod util;

#[cfg(test)]
pub mod test_prelude;

pub use util::{decode_bc2_block, decode_bc2_block_from_slice, decode_bc2_image, BC2_BLOCK_SIZE};
