#![cfg(not(tarpaulin_include))]

use crate::error::CliError;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder as _, ImageError};
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::path::Path;

/// Opens a file in read-only mode and returns a handle.
///
/// # Arguments
///
/// * `path` - The path to the file to open.
///
/// # Returns
///
/// A read-only file handle on success, or a [`CliError`] if the file cannot be opened.
#[inline(always)]
pub fn open_read_handle(path: &Path) -> Result<ReadOnlyFileHandle, CliError> {
    let path_str = path
        .to_str()
        .ok_or_else(|| CliError::MmapError(format!("Path is not valid UTF-8: {}", path.display())))?;
    ReadOnlyFileHandle::open(path_str).map_err(|e| CliError::MmapError(e.to_string()))
}

/// Memory maps the file at `path` and hands its contents to `f`.
///
/// The mapping lives only for the duration of the call. Empty files are passed as an
/// empty slice without being mapped.
pub fn with_mapped_file<T>(
    path: &Path,
    f: impl FnOnce(&[u8]) -> Result<T, CliError>,
) -> Result<T, CliError> {
    let handle = open_read_handle(path)?;
    let size = handle
        .size()
        .map_err(|e| CliError::MmapError(e.to_string()))? as usize;

    if size == 0 {
        return f(&[]);
    }

    let mapping =
        ReadOnlyMmap::new(&handle, 0, size).map_err(|e| CliError::MmapError(e.to_string()))?;
    f(mapping.as_slice())
}

/// Encodes decoded textures as PNG using the `image` crate.
pub struct PngSink;

impl rw_txd::ImageEncoder for PngSink {
    type Error = ImageError;

    fn encode(&self, width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>, ImageError> {
        let mut out = Vec::new();
        PngEncoder::new(&mut out).write_image(rgba, width, height, ExtendedColorType::Rgba8)?;
        Ok(out)
    }
}

/// Turns a texture name into a file name, replacing path separators and other
/// characters that are invalid on common file systems.
pub fn texture_file_name(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if stem.is_empty() {
        "unnamed.png".to_owned()
    } else {
        format!("{stem}.png")
    }
}
