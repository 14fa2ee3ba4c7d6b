//! Recursive descent parser for texture dictionaries.
//!
//! Chunk ID `0x01` is overloaded: it is the [`InfoChunk`] when it is the very first
//! chunk after the root header, and a [`TextureDataChunk`] everywhere else. The parser
//! tracks this with an explicit `has_seen_info` argument.

use super::chunk::*;
use super::constants::*;
use crate::cursor::Cursor;
use crate::error::{TxdError, TxdResult};
use alloc::vec;
use alloc::vec::Vec;
use log::{debug, warn};

/// Run-time options for [`parse_txd_with_settings`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseSettings {
    /// Fail with [`TxdError::RootSizeMismatch`] when the root chunk's declared size
    /// differs from the number of bytes after its header. When unset, the mismatch
    /// is only logged.
    pub strict_root_size: bool,
}

/// Parses a texture dictionary with default [`ParseSettings`].
///
/// # Example
///
/// ```
/// use rw_txd::parse_txd;
///
/// // Root header followed by an info chunk declaring zero textures.
/// let mut data = Vec::new();
/// for value in [0x16u32, 16, 0x1803_FFFF, 0x01, 4, 0x1803_FFFF] {
///     data.extend_from_slice(&value.to_le_bytes());
/// }
/// data.extend_from_slice(&[0, 0, 0, 0]);
///
/// let file = parse_txd(&data).unwrap();
/// assert_eq!(file.info().unwrap().count, 0);
/// assert_eq!(file.metadata().rw_version, Some("3.6.0.3"));
/// ```
pub fn parse_txd(data: &[u8]) -> TxdResult<TxdFile<'_>> {
    parse_txd_with_settings(data, ParseSettings::default())
}

/// Parses a texture dictionary.
///
/// Reads the root header and the info chunk, then up to `info.count` top-level
/// chunks. Scanning stops early, without error, when the buffer is exhausted or an
/// unrecognised chunk is met; the latter is recorded in [`TxdFile::stopped_at`].
///
/// # Errors
///
/// - [`TxdError::OutOfBounds`] if any chunk is truncated.
/// - [`TxdError::MissingInfoChunk`] if the first chunk is not an info chunk.
/// - [`TxdError::MalformedTexture`] if a texture lacks one of its children.
/// - [`TxdError::RootSizeMismatch`] in strict mode, see [`ParseSettings`].
pub fn parse_txd_with_settings(data: &[u8], settings: ParseSettings) -> TxdResult<TxdFile<'_>> {
    let mut cursor = Cursor::new(data);
    let header = read_header(&mut cursor)?;

    let actual = data.len() - CHUNK_HEADER_SIZE;
    if header.size as usize != actual {
        if settings.strict_root_size {
            return Err(TxdError::RootSizeMismatch {
                declared: header.size,
                actual,
            });
        }
        warn!(
            "Root chunk declares {} bytes but {} follow the header",
            header.size, actual
        );
    }

    let info_offset = cursor.position();
    let info = match parse_chunk(&mut cursor, false)? {
        Parsed::Chunk(Chunk::Info(info)) => info,
        Parsed::Chunk(other) => {
            return Err(TxdError::MissingInfoChunk {
                offset: info_offset,
                found: other.id(),
            })
        }
        Parsed::Unrecognized(chunk) => {
            return Err(TxdError::MissingInfoChunk {
                offset: info_offset,
                found: chunk.id,
            })
        }
    };

    let count = info.count;
    let mut children = vec![Chunk::Info(info)];
    let mut stopped_at = None;

    for index in 0..count {
        if !cursor.has_more() {
            debug!("Buffer exhausted after {index} of {count} chunks");
            break;
        }

        match parse_chunk(&mut cursor, true)? {
            Parsed::Chunk(chunk) => children.push(chunk),
            Parsed::Unrecognized(chunk) => {
                stopped_at = Some(chunk);
                break;
            }
        }
    }

    Ok(TxdFile {
        header,
        children,
        stopped_at,
    })
}

/// Parses the chunk at the cursor.
///
/// `has_seen_info` selects the meaning of ID `0x01`: an [`InfoChunk`] when `false`,
/// a [`TextureDataChunk`] when `true`. Children of texture chunks are always parsed
/// with `has_seen_info = true`.
///
/// An unrecognised ID is not an error. The ID read is rewound, leaving the cursor at
/// the start of that chunk, and [`Parsed::Unrecognized`] is returned.
pub fn parse_chunk<'a>(cursor: &mut Cursor<'a>, has_seen_info: bool) -> TxdResult<Parsed<'a>> {
    parse_chunk_at_depth(cursor, has_seen_info, 0)
}

fn parse_chunk_at_depth<'a>(
    cursor: &mut Cursor<'a>,
    has_seen_info: bool,
    depth: usize,
) -> TxdResult<Parsed<'a>> {
    let offset = cursor.position();
    let id = cursor.read_u32()?;

    let chunk = match id {
        CHUNK_ID_INFO if !has_seen_info => Chunk::Info(parse_info(cursor, id, offset)?),
        CHUNK_ID_TEXTURE_DATA => Chunk::TextureData(parse_texture_data(cursor, id, offset)?),
        CHUNK_ID_TEXTURE => Chunk::Texture(parse_texture(cursor, id, offset, depth)?),
        CHUNK_ID_EXTRA_INFO => Chunk::ExtraInfo(parse_extra_info(cursor, id, offset)?),
        _ => {
            cursor.rewind();
            warn!("Unrecognised chunk ID {id:#x} at offset {offset:#x}");
            return Ok(Parsed::Unrecognized(UnrecognizedChunk { id, offset }));
        }
    };

    debug!(
        "Parsed {} chunk at offset {:#x} ({} bytes)",
        chunk.chunk_type(),
        offset,
        chunk.header().size
    );
    Ok(Parsed::Chunk(chunk))
}

/// Reads a full 12-byte chunk header.
fn read_header(cursor: &mut Cursor<'_>) -> TxdResult<ChunkHeader> {
    let offset = cursor.position();
    let id = cursor.read_u32()?;
    read_header_after_id(cursor, id, offset)
}

/// Reads the size and version that follow a chunk ID.
fn read_header_after_id(cursor: &mut Cursor<'_>, id: u32, offset: usize) -> TxdResult<ChunkHeader> {
    let size = cursor.read_u32()?;
    let version = cursor.read_u32()?;
    Ok(ChunkHeader {
        id,
        size,
        version,
        offset,
    })
}

fn parse_info(cursor: &mut Cursor<'_>, id: u32, offset: usize) -> TxdResult<InfoChunk> {
    let header = read_header_after_id(cursor, id, offset)?;
    let count = cursor.read_u16()?;
    let unknown = cursor.read_u16()?;
    Ok(InfoChunk {
        header,
        count,
        unknown,
    })
}

fn parse_texture<'a>(
    cursor: &mut Cursor<'a>,
    id: u32,
    offset: usize,
    depth: usize,
) -> TxdResult<TextureChunk<'a>> {
    let header = read_header_after_id(cursor, id, offset)?;
    if depth >= MAX_CHUNK_DEPTH {
        return Err(TxdError::NestingTooDeep { offset, depth });
    }

    let texture_data = match parse_chunk_at_depth(cursor, true, depth + 1)? {
        Parsed::Chunk(chunk) => chunk,
        Parsed::Unrecognized(_) => {
            return Err(TxdError::MalformedTexture {
                offset,
                missing: "texture data",
            })
        }
    };
    let extra_info = match parse_chunk_at_depth(cursor, true, depth + 1)? {
        Parsed::Chunk(chunk) => chunk,
        Parsed::Unrecognized(_) => {
            return Err(TxdError::MalformedTexture {
                offset,
                missing: "extra info",
            })
        }
    };

    Ok(TextureChunk {
        header,
        children: vec![texture_data, extra_info],
    })
}

fn parse_texture_data<'a>(
    cursor: &mut Cursor<'a>,
    id: u32,
    offset: usize,
) -> TxdResult<TextureDataChunk<'a>> {
    let header = read_header_after_id(cursor, id, offset)?;

    let version = cursor.read_u32()?;
    let filter_flags = cursor.read_u32()?;
    let name = cursor.read_string(TEXTURE_NAME_SIZE)?;
    let alpha_name = cursor.read_string(TEXTURE_NAME_SIZE)?;
    let alpha_flags = cursor.read_u32()?;
    let format = cursor.read_u32()?;
    let width = cursor.read_u16()?;
    let height = cursor.read_u16()?;
    let depth = cursor.read_u8()?;
    let mipmap_count = cursor.read_u8()?;
    let texcode_type = cursor.read_u8()?;
    let flags = cursor.read_u8()?;

    let palette_size = if depth == PALETTE_DEPTH {
        PALETTE_SIZE
    } else {
        0
    };
    let palette = cursor.read_section(palette_size)?;

    let data_size = cursor.read_u32()?;
    let data = cursor.read_section(data_size as usize)?;

    // The base image counts as the first level.
    let mut mipmaps = Vec::with_capacity(mipmap_count.saturating_sub(1) as usize);
    for _ in 1..mipmap_count {
        let data_size = cursor.read_u32()?;
        let data = cursor.read_section(data_size as usize)?;
        mipmaps.push(MipmapLevel { data_size, data });
    }

    debug!("Texture '{name}': {width}x{height}, format {format}, {mipmap_count} levels");

    Ok(TextureDataChunk {
        header,
        version,
        filter_flags,
        name,
        alpha_name,
        alpha_flags,
        format,
        format_label: format_label(format, flags),
        width,
        height,
        depth,
        mipmap_count,
        texcode_type,
        flags,
        palette_size,
        palette,
        data_size,
        data,
        mipmaps,
    })
}

fn parse_extra_info<'a>(
    cursor: &mut Cursor<'a>,
    id: u32,
    offset: usize,
) -> TxdResult<ExtraInfoChunk<'a>> {
    let header = read_header_after_id(cursor, id, offset)?;
    let data = cursor.read_section(header.size as usize)?;
    Ok(ExtraInfoChunk { header, data })
}
