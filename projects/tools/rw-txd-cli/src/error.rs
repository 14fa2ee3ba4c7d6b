use rw_txd::{DecodeError, TxdError};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("Memory mapping error: {0}")]
    MmapError(String),
    #[error("Failed to parse texture dictionary: {0}")]
    Parse(#[from] TxdError),
    #[error("Failed to decode texture '{name}': {source}")]
    Decode { name: String, source: DecodeError },
    #[error("Failed to encode texture '{name}': {source}")]
    Encode {
        name: String,
        source: image::ImageError,
    },
    #[error("No texture named '{0}'")]
    TextureNotFound(String),
}
