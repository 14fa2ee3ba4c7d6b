//! Common test imports and utilities for texture dictionary tests
//!
//! Provides builders that assemble synthetic dictionaries byte by byte.
#![allow(unused_imports)]
#![allow(dead_code)]

// Re-export commonly used alloc types for tests
pub use alloc::{borrow::ToOwned, format, string::String, vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

use crate::decode::TextureFormat;
use crate::txd::constants::*;

/// Library version stamp used by the builders.
pub const TEST_RW_VERSION: u32 = 0x1803_FFFF;

/// Appends `values` to `out` as little-endian `u32`s.
pub fn push_u32s(out: &mut Vec<u8>, values: &[u32]) {
    for value in values {
        out.extend_from_slice(&value.to_le_bytes());
    }
}

/// Appends a chunk header followed by `body`.
pub fn push_chunk(out: &mut Vec<u8>, id: u32, body: &[u8]) {
    push_u32s(out, &[id, body.len() as u32, TEST_RW_VERSION]);
    out.extend_from_slice(body);
}

/// Writes `name` into a null padded 32-byte field.
pub fn name_field(name: &str) -> [u8; TEXTURE_NAME_SIZE] {
    let mut field = [0u8; TEXTURE_NAME_SIZE];
    let len = name.len().min(TEXTURE_NAME_SIZE);
    field[..len].copy_from_slice(&name.as_bytes()[..len]);
    field
}

/// A palette whose entry `i` is `(i, 2i, 3i, 255)`, wrapping.
pub fn numbered_palette() -> Vec<u8> {
    (0..=255u8)
        .flat_map(|i| [i, i.wrapping_mul(2), i.wrapping_mul(3), 255])
        .collect()
}

/// Contents of one synthetic texture.
#[derive(Debug, Clone)]
pub struct TextureSpec {
    pub name: String,
    pub alpha_name: String,
    pub format: u32,
    pub flags: u8,
    pub width: u16,
    pub height: u16,
    pub depth: u8,
    pub mipmap_count: u8,
    pub palette: Vec<u8>,
    pub data: Vec<u8>,
    pub mipmaps: Vec<Vec<u8>>,
    pub extra_info: Vec<u8>,
}

impl TextureSpec {
    /// A 32-bit depth texture with no palette and no mip levels.
    pub fn new(name: &str, format: u32, width: u16, height: u16, data: Vec<u8>) -> Self {
        Self {
            name: name.to_owned(),
            alpha_name: String::new(),
            format,
            flags: 0,
            width,
            height,
            depth: 32,
            mipmap_count: 1,
            palette: Vec::new(),
            data,
            mipmaps: Vec::new(),
            extra_info: Vec::new(),
        }
    }

    /// A texture of `format` with a payload of exactly the size it needs.
    pub fn solid(format: TextureFormat, width: u16, height: u16) -> Self {
        let pixels = width as usize * height as usize;
        let blocks = (width as usize).div_ceil(4) * (height as usize).div_ceil(4);
        match format {
            TextureFormat::Bgra => {
                Self::new("bgra", FORMAT_A8R8G8B8, width, height, vec![0x7F; pixels * 4])
            }
            TextureFormat::Pal8 => Self::new("pal8", 0, width, height, vec![3; pixels])
                .with_palette(numbered_palette()),
            TextureFormat::Dxt1 => Self {
                flags: FLAG_COMPRESSED,
                depth: 16,
                ..Self::new("dxt1", FORMAT_DXT1, width, height, vec![0x11; blocks * 8])
            },
            TextureFormat::Dxt3 => {
                Self::new("dxt3", FORMAT_DXT3, width, height, vec![0x33; blocks * 16])
            }
        }
    }

    /// Renames the texture.
    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_owned();
        self
    }

    /// Sets depth 8 and attaches `palette`.
    pub fn with_palette(mut self, palette: Vec<u8>) -> Self {
        self.depth = PALETTE_DEPTH;
        self.palette = palette;
        self
    }

    /// Appends a mip level and bumps the level count.
    pub fn with_mipmap(mut self, data: Vec<u8>) -> Self {
        self.mipmaps.push(data);
        self.mipmap_count += 1;
        self
    }

    /// Body of the texture data chunk.
    pub fn data_body(&self) -> Vec<u8> {
        let mut body = Vec::new();
        push_u32s(&mut body, &[8, 0x1102]);
        body.extend_from_slice(&name_field(&self.name));
        body.extend_from_slice(&name_field(&self.alpha_name));
        push_u32s(&mut body, &[0, self.format]);
        body.extend_from_slice(&self.width.to_le_bytes());
        body.extend_from_slice(&self.height.to_le_bytes());
        body.extend_from_slice(&[self.depth, self.mipmap_count, 4, self.flags]);
        body.extend_from_slice(&self.palette);
        push_u32s(&mut body, &[self.data.len() as u32]);
        body.extend_from_slice(&self.data);
        for level in &self.mipmaps {
            push_u32s(&mut body, &[level.len() as u32]);
            body.extend_from_slice(level);
        }
        body
    }

    /// The full texture chunk: data chunk then extra info chunk.
    pub fn encode(&self) -> Vec<u8> {
        let mut children = Vec::new();
        push_chunk(&mut children, CHUNK_ID_TEXTURE_DATA, &self.data_body());
        push_chunk(&mut children, CHUNK_ID_EXTRA_INFO, &self.extra_info);

        let mut chunk = Vec::new();
        push_chunk(&mut chunk, CHUNK_ID_TEXTURE, &children);
        chunk
    }
}

/// Assembles a whole texture dictionary.
#[derive(Debug, Clone, Default)]
pub struct TxdBuilder {
    chunks: Vec<Vec<u8>>,
    count: Option<u16>,
    declared_size: Option<u32>,
}

impl TxdBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a texture chunk.
    pub fn texture(mut self, spec: TextureSpec) -> Self {
        self.chunks.push(spec.encode());
        self
    }

    /// Appends arbitrary bytes as a top-level chunk.
    pub fn raw(mut self, bytes: Vec<u8>) -> Self {
        self.chunks.push(bytes);
        self
    }

    /// Overrides the info chunk's count, which defaults to the number of chunks added.
    pub fn count(mut self, count: u16) -> Self {
        self.count = Some(count);
        self
    }

    /// Overrides the root chunk's declared size, which defaults to the real size.
    pub fn declared_size(mut self, size: u32) -> Self {
        self.declared_size = Some(size);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let count = self.count.unwrap_or(self.chunks.len() as u16);

        let mut body = Vec::new();
        let mut info = Vec::new();
        info.extend_from_slice(&count.to_le_bytes());
        info.extend_from_slice(&0u16.to_le_bytes());
        push_chunk(&mut body, CHUNK_ID_INFO, &info);
        for chunk in &self.chunks {
            body.extend_from_slice(chunk);
        }

        let size = self.declared_size.unwrap_or(body.len() as u32);
        let mut file = Vec::new();
        push_u32s(&mut file, &[CHUNK_ID_TEXTURE_DICTIONARY, size, TEST_RW_VERSION]);
        file.extend_from_slice(&body);
        file
    }
}
