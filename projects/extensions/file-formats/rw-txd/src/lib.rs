#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// Bounds-checked byte reader used by the chunk parser.
pub mod cursor;

/// Pixel format dispatch and the uncompressed decoders.
pub mod decode;

/// Error types for parsing and decoding.
pub mod error;

/// Texture dictionary structure: chunk tree, parser and name lookup.
pub mod txd;

#[cfg(test)]
pub mod test_prelude;

pub use cursor::Cursor;
pub use decode::{decode_texture, DecodedImage, ImageEncoder, TextureFormat};
pub use error::{DecodeError, DecodeResult, TxdError, TxdResult};
pub use txd::*;
