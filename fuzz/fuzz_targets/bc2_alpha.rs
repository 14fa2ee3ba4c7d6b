#![no_main]

// This fuzz test compares our DXT3 explicit alpha against bcdec_rs.
// Colours are not compared since the interpolation weights differ from bcdec.

use libfuzzer_sys::{arbitrary, fuzz_target};
use rw_txd_bc2::util::decode_bc2_block;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Bc2Block {
    pub bytes: [u8; 16],
}

fuzz_target!(|block: Bc2Block| {
    let ours = decode_bc2_block(&block.bytes);

    let mut bcdec_buffer = [0u8; 4 * 16]; // 4 bytes per pixel * 16 pixels
    bcdec_rs::bc2(&block.bytes, &mut bcdec_buffer, 4 * 4);

    for (index, pixel) in ours.pixels.iter().enumerate() {
        assert_eq!(
            pixel.a,
            bcdec_buffer[index * 4 + 3],
            "Alpha mismatch at pixel {index}"
        );
    }
});
