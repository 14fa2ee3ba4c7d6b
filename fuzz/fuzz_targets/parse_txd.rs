#![no_main]

// Feeds arbitrary bytes through the parser, the catalog and every decoder.

use libfuzzer_sys::fuzz_target;
use rw_txd::{decode_texture, parse_txd, TextureCatalog};

/// Largest texture area decoded, to keep allocations bounded.
const MAX_PIXELS: usize = 1024 * 1024;

fuzz_target!(|data: &[u8]| {
    let Ok(file) = parse_txd(data) else {
        return;
    };

    // Every payload must be a view into the input.
    let range = data.as_ptr_range();
    let catalog = TextureCatalog::new(&file);
    for name in catalog.list_names() {
        assert!(catalog.contains(name));
    }

    for texture in catalog.textures().filter_map(|texture| texture.texture_data()) {
        if !texture.data.is_empty() {
            assert!(range.contains(&texture.data.as_ptr()));
        }
        assert_eq!(texture.mipmaps.len(), texture.mipmap_count.saturating_sub(1) as usize);

        let pixels = texture.width as usize * texture.height as usize;
        if pixels > MAX_PIXELS {
            continue;
        }

        if let Ok(image) = decode_texture(texture) {
            assert_eq!(image.pixels.len(), pixels * 4);
        }
    }
});
