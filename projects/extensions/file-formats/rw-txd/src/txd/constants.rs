//! Texture dictionary format constants and label tables.

/// ID of the root texture dictionary chunk.
pub const CHUNK_ID_TEXTURE_DICTIONARY: u32 = 0x16;

/// ID of the info chunk when it is the first chunk in the file.
pub const CHUNK_ID_INFO: u32 = 0x01;

/// ID of a texture's data chunk. Shares its value with [`CHUNK_ID_INFO`].
pub const CHUNK_ID_TEXTURE_DATA: u32 = 0x01;

/// ID of the texture chunk wrapping a data chunk and an extra info chunk.
pub const CHUNK_ID_TEXTURE: u32 = 0x15;

/// ID of the extra info chunk.
pub const CHUNK_ID_EXTRA_INFO: u32 = 0x03;

/// Size of a chunk header: ID, size and version, each a `u32`.
pub const CHUNK_HEADER_SIZE: usize = 12;

/// Size of the fixed, null padded name fields of a texture data chunk.
pub const TEXTURE_NAME_SIZE: usize = 32;

/// Size of the palette of an 8-bit texture: 256 RGBA entries.
pub const PALETTE_SIZE: usize = 256 * 4;

/// Depth of palettised textures.
pub const PALETTE_DEPTH: u8 = 8;

/// Deepest allowed nesting of texture chunks.
pub const MAX_CHUNK_DEPTH: usize = 16;

/// `D3DFMT_A8R8G8B8`
pub const FORMAT_A8R8G8B8: u32 = 21;
/// `D3DFMT_X8R8G8B8`
pub const FORMAT_X8R8G8B8: u32 = 22;

/// FourCC `DXT1`, read as a little-endian `u32`.
pub const FORMAT_DXT1: u32 = 0x3154_5844;
/// FourCC `DXT2`, read as a little-endian `u32`.
pub const FORMAT_DXT2: u32 = 0x3254_5844;
/// FourCC `DXT3`, read as a little-endian `u32`.
pub const FORMAT_DXT3: u32 = 0x3354_5844;
/// FourCC `DXT4`, read as a little-endian `u32`.
pub const FORMAT_DXT4: u32 = 0x3454_5844;
/// FourCC `DXT5`, read as a little-endian `u32`.
pub const FORMAT_DXT5: u32 = 0x3554_5844;

/// Raster flag marking a texture with a zero format tag as DXT1 compressed.
pub const FLAG_COMPRESSED: u8 = 0x01;

/// Returns the human readable name of a RenderWare library version stamp.
pub fn rw_version_label(version: u32) -> Option<&'static str> {
    match version {
        0x0003_FFFF => Some("3.0.0.3"),
        0x0800_FFFF => Some("3.?.?.?"),
        0x0000_0310 => Some("3.1.0.0"),
        0x0C02_FFFF => Some("3.3.0.2"),
        0x1003_FFFF => Some("3.4.0.3"),
        0x1803_FFFF => Some("3.6.0.3"),
        _ => None,
    }
}

/// Returns a display label for a texture's pixel format.
///
/// Known FourCC tags map to their name. Otherwise the label is inferred from the tag
/// and the raster `flags`.
pub fn format_label(format: u32, flags: u8) -> &'static str {
    match format {
        FORMAT_DXT1 => "Dxt1",
        FORMAT_DXT2 => "Dxt2",
        FORMAT_DXT3 => "Dxt3",
        FORMAT_DXT4 => "Dxt4",
        FORMAT_DXT5 => "Dxt5",
        FORMAT_A8R8G8B8 => "RGBA32",
        FORMAT_X8R8G8B8 => "RGB32",
        0 if flags & FLAG_COMPRESSED != 0 => "S3TC DXT1",
        _ => "Unknown",
    }
}
