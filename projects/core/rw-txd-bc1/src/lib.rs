#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod util;

#[cfg(test)]
pub mod test_prelude;

pub use util::{decode_bc1_block, decode_bc1_block_from_slice, decode_bc1_image, BC1_BLOCK_SIZE};
