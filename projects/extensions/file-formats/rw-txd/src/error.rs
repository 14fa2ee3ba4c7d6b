//! Error types for reading texture dictionaries.
//!
//! Parsing and decoding fail independently. A [`TxdError`] aborts the whole parse
//! and no tree is produced. A [`DecodeError`] only affects the texture being decoded.

use thiserror::Error;

/// Errors raised while parsing a texture dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TxdError {
    /// A read would have advanced past the end of the buffer.
    #[error("read of {requested} bytes at offset {offset:#x} exceeds buffer ({available} bytes remaining)")]
    OutOfBounds {
        /// Cursor position when the read was attempted.
        offset: usize,
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes left in the buffer.
        available: usize,
    },

    /// A texture chunk did not contain both of its children.
    #[error("texture chunk at offset {offset:#x} is missing its {missing} chunk")]
    MalformedTexture {
        /// Offset of the texture chunk's header.
        offset: usize,
        /// Which child was missing.
        missing: &'static str,
    },

    /// Texture chunks were nested deeper than [`MAX_CHUNK_DEPTH`](crate::txd::constants::MAX_CHUNK_DEPTH).
    #[error("texture chunk at offset {offset:#x} is nested {depth} levels deep")]
    NestingTooDeep {
        /// Offset of the offending texture chunk.
        offset: usize,
        /// Nesting depth of that chunk.
        depth: usize,
    },

    /// The first chunk after the root header is not an info chunk.
    #[error("expected info chunk at offset {offset:#x}, found chunk id {found:#x}")]
    MissingInfoChunk {
        /// Offset where the info chunk was expected.
        offset: usize,
        /// ID of the chunk found there.
        found: u32,
    },

    /// The root chunk's declared size disagrees with the buffer length.
    ///
    /// Only raised when [`ParseSettings::strict_root_size`](crate::txd::ParseSettings::strict_root_size) is set.
    #[error("root chunk declares {declared} bytes but {actual} follow the header")]
    RootSizeMismatch {
        /// Size stored in the root header.
        declared: u32,
        /// Bytes actually present after the 12-byte root header.
        actual: usize,
    },
}

/// Errors raised while decoding a single texture.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// No decoder exists for this pixel format.
    #[error("unsupported pixel format {format} (flags {flags:#04x})")]
    UnsupportedFormat {
        /// The Direct3D format tag of the texture.
        format: u32,
        /// The raster flags byte of the texture.
        flags: u8,
    },

    /// The pixel payload holds fewer bytes than the texture dimensions need.
    #[error("pixel payload is {actual} bytes but {required} are required")]
    PayloadTooShort {
        /// Bytes needed for `width * height` pixels.
        required: usize,
        /// Bytes present in the payload.
        actual: usize,
    },
}

/// Result type for parsing operations.
pub type TxdResult<T> = Result<T, TxdError>;

/// Result type for decoding operations.
pub type DecodeResult<T> = Result<T, DecodeError>;
