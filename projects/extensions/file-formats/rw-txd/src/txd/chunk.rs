//! Typed chunk tree of a parsed texture dictionary.
//!
//! Every chunk starts with the same 12-byte header (ID, size, library version),
//! captured in [`ChunkHeader`]. The body layout depends on the ID, giving one
//! [`Chunk`] variant per known chunk kind. Byte payloads borrow from the input
//! buffer for the lifetime `'a`.

use super::constants::*;
use crate::decode::TextureFormat;
use alloc::string::String;
use alloc::vec::Vec;

/// Header shared by every chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    /// Chunk type ID.
    pub id: u32,
    /// Declared size of the chunk body in bytes.
    pub size: u32,
    /// RenderWare library version stamp.
    pub version: u32,
    /// Offset of the header within the input buffer.
    pub offset: usize,
}

impl ChunkHeader {
    /// The decoded library version, if the stamp is a known one.
    pub fn rw_version(&self) -> Option<&'static str> {
        rw_version_label(self.version)
    }
}

/// Human readable description of a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkMetadata {
    /// Kind of chunk, e.g. `"TXD Texture"`.
    pub chunk_type: &'static str,
    /// Decoded library version, when known.
    pub rw_version: Option<&'static str>,
}

/// The info chunk opening every texture dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoChunk {
    /// Chunk header.
    pub header: ChunkHeader,
    /// Number of chunks following this one at the top level.
    pub count: u16,
    /// Reserved. Holds the device ID in later library versions.
    pub unknown: u16,
}

/// A texture: a data chunk followed by an extra info chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureChunk<'a> {
    /// Chunk header.
    pub header: ChunkHeader,
    /// Always two children, normally `[TextureData, ExtraInfo]`.
    pub children: Vec<Chunk<'a>>,
}

impl<'a> TextureChunk<'a> {
    /// The texture's data chunk, if the first child is one.
    pub fn texture_data(&self) -> Option<&TextureDataChunk<'a>> {
        match self.children.first() {
            Some(Chunk::TextureData(data)) => Some(data),
            _ => None,
        }
    }

    /// The texture's extra info chunk, if the second child is one.
    pub fn extra_info(&self) -> Option<&ExtraInfoChunk<'a>> {
        match self.children.get(1) {
            Some(Chunk::ExtraInfo(extra)) => Some(extra),
            _ => None,
        }
    }

    /// Name of the texture, if it has a data chunk.
    pub fn name(&self) -> Option<&str> {
        self.texture_data().map(|data| data.name.as_str())
    }
}

/// One additional mip level following a texture's base image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MipmapLevel<'a> {
    /// Declared payload size.
    pub data_size: u32,
    /// The payload. Not decoded.
    pub data: &'a [u8],
}

/// Raster header and pixel payloads of a single texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureDataChunk<'a> {
    /// Chunk header.
    pub header: ChunkHeader,
    /// Platform/raster version.
    pub version: u32,
    /// Filtering and addressing mode flags.
    pub filter_flags: u32,
    /// Texture name.
    pub name: String,
    /// Alpha mask name.
    pub alpha_name: String,
    /// Raster format flags.
    pub alpha_flags: u32,
    /// Direct3D format tag, e.g. [`FORMAT_DXT1`].
    pub format: u32,
    /// Display label for [`Self::format`]. See [`format_label`].
    pub format_label: &'static str,
    /// Width in pixels.
    pub width: u16,
    /// Height in pixels.
    pub height: u16,
    /// Bits per pixel.
    pub depth: u8,
    /// Number of stored levels, base image included.
    pub mipmap_count: u8,
    /// Raster type.
    pub texcode_type: u8,
    /// Raster flags; bit 0 marks DXT1 compression when [`Self::format`] is 0.
    pub flags: u8,
    /// Size of [`Self::palette`]: [`PALETTE_SIZE`] when `depth == 8`, else 0.
    pub palette_size: usize,
    /// 256 RGBA palette entries for 8-bit textures. Empty otherwise.
    pub palette: &'a [u8],
    /// Declared size of the base image payload.
    pub data_size: u32,
    /// Base image payload.
    pub data: &'a [u8],
    /// Levels after the base image, `mipmap_count - 1` of them.
    pub mipmaps: Vec<MipmapLevel<'a>>,
}

impl TextureDataChunk<'_> {
    /// The decoder that applies to this texture, if any.
    pub fn texture_format(&self) -> Option<TextureFormat> {
        TextureFormat::from_raw(self.format, self.flags)
    }
}

/// Opaque extension data of a texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraInfoChunk<'a> {
    /// Chunk header.
    pub header: ChunkHeader,
    /// Payload of `header.size` bytes.
    pub data: &'a [u8],
}

/// A parsed chunk of any known kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk<'a> {
    /// See [`InfoChunk`].
    Info(InfoChunk),
    /// See [`TextureChunk`].
    Texture(TextureChunk<'a>),
    /// See [`TextureDataChunk`].
    TextureData(TextureDataChunk<'a>),
    /// See [`ExtraInfoChunk`].
    ExtraInfo(ExtraInfoChunk<'a>),
}

impl<'a> Chunk<'a> {
    /// Header of this chunk.
    pub fn header(&self) -> &ChunkHeader {
        match self {
            Chunk::Info(chunk) => &chunk.header,
            Chunk::Texture(chunk) => &chunk.header,
            Chunk::TextureData(chunk) => &chunk.header,
            Chunk::ExtraInfo(chunk) => &chunk.header,
        }
    }

    /// Chunk type ID.
    pub fn id(&self) -> u32 {
        self.header().id
    }

    /// Nested chunks. Only texture chunks have any.
    pub fn children(&self) -> &[Chunk<'a>] {
        match self {
            Chunk::Texture(chunk) => &chunk.children,
            _ => &[],
        }
    }

    /// Human readable kind of this chunk.
    pub fn chunk_type(&self) -> &'static str {
        match self {
            Chunk::Info(_) => "TXD Info",
            Chunk::Texture(_) => "TXD Texture",
            Chunk::TextureData(_) => "Texture Data",
            Chunk::ExtraInfo(_) => "TXD Extra Info",
        }
    }

    /// Kind and decoded version of this chunk.
    pub fn metadata(&self) -> ChunkMetadata {
        ChunkMetadata {
            chunk_type: self.chunk_type(),
            rw_version: self.header().rw_version(),
        }
    }
}

/// A chunk ID the parser has no layout for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnrecognizedChunk {
    /// The ID that was read.
    pub id: u32,
    /// Offset of the chunk's header.
    pub offset: usize,
}

/// Outcome of parsing a single chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed<'a> {
    /// A chunk of a known kind.
    Chunk(Chunk<'a>),
    /// The ID was not recognised. The cursor was left at the start of the chunk.
    Unrecognized(UnrecognizedChunk),
}

/// A parsed texture dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxdFile<'a> {
    /// Root chunk header.
    pub header: ChunkHeader,
    /// Top-level chunks: the info chunk, then up to `info.count` more.
    pub children: Vec<Chunk<'a>>,
    /// Set when top-level scanning stopped at an unrecognised chunk.
    pub stopped_at: Option<UnrecognizedChunk>,
}

impl<'a> TxdFile<'a> {
    /// The info chunk.
    pub fn info(&self) -> Option<&InfoChunk> {
        match self.children.first() {
            Some(Chunk::Info(info)) => Some(info),
            _ => None,
        }
    }

    /// Top-level texture chunks in file order.
    pub fn textures(&self) -> impl Iterator<Item = &TextureChunk<'a>> + '_ {
        self.children.iter().filter_map(|chunk| match chunk {
            Chunk::Texture(texture) => Some(texture),
            _ => None,
        })
    }

    /// Kind and decoded version of the root chunk.
    pub fn metadata(&self) -> ChunkMetadata {
        ChunkMetadata {
            chunk_type: "File",
            rw_version: self.header.rw_version(),
        }
    }
}
