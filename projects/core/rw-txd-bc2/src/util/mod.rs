//! Block and image decoding utilities for DXT3.

mod bc2_decode;
pub use bc2_decode::*;
