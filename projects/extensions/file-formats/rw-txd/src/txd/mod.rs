/// Name lookup over parsed textures.
pub mod catalog;

/// Typed chunk tree.
pub mod chunk;

/// Chunk IDs, format tags and label tables.
pub mod constants;

/// Parse a texture dictionary into a chunk tree.
pub mod parse_txd;

pub use catalog::*;
pub use chunk::*;
pub use parse_txd::*;
