//! Block and image decoding utilities for DXT1.

mod bc1_decode;
pub use bc1_decode::*;
