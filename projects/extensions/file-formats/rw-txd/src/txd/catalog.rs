//! Name lookup over the textures of a parsed dictionary.

use super::chunk::{Chunk, TextureChunk, TxdFile};
use crate::decode::{decode_texture, DecodedImage};
use crate::error::DecodeResult;
use alloc::string::String;
use alloc::vec::Vec;

struct CatalogEntry<'f, 'a> {
    /// Lowercased name used for matching.
    key: String,
    texture: &'f TextureChunk<'a>,
}

/// Index of the textures in a [`TxdFile`], by name.
///
/// Only top-level texture chunks whose first child is a data chunk are indexed.
/// Names keep their original case; lookups ignore it.
pub struct TextureCatalog<'f, 'a> {
    entries: Vec<CatalogEntry<'f, 'a>>,
}

impl<'f, 'a> TextureCatalog<'f, 'a> {
    /// Indexes the textures of `file` in file order.
    pub fn new(file: &'f TxdFile<'a>) -> Self {
        let entries = file
            .children
            .iter()
            .filter_map(|chunk| match chunk {
                Chunk::Texture(texture) => texture.name().map(|name| CatalogEntry {
                    key: name.to_lowercase(),
                    texture,
                }),
                _ => None,
            })
            .collect();

        Self { entries }
    }

    /// Names of all indexed textures, in file order.
    pub fn list_names(&self) -> Vec<&'f str> {
        self.textures().filter_map(TextureChunk::name).collect()
    }

    /// Number of indexed textures.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no textures were indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Indexed texture chunks, in file order.
    pub fn textures(&self) -> impl Iterator<Item = &'f TextureChunk<'a>> + '_ {
        self.entries.iter().map(|entry| entry.texture)
    }

    /// Finds a texture by name, ignoring case.
    ///
    /// Returns the enclosing [`TextureChunk`] of the first match in file order.
    pub fn find(&self, name: &str) -> Option<&'f TextureChunk<'a>> {
        let key = name.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.texture)
    }

    /// Whether a texture named `name` exists, ignoring case.
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Finds a texture by name and decodes its base image.
    ///
    /// Returns `Ok(None)` when no texture has that name.
    pub fn decode(&self, name: &str) -> DecodeResult<Option<DecodedImage>> {
        let Some(data) = self.find(name).and_then(TextureChunk::texture_data) else {
            return Ok(None);
        };
        decode_texture(data).map(Some)
    }
}
