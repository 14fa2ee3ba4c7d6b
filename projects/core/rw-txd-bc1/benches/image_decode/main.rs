use criterion::{criterion_group, criterion_main, Criterion};
use rw_txd_bc1::{decode_bc1_block, decode_bc1_image, BC1_BLOCK_SIZE};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("DXT1 Decode (DXT1 -> RGBA8888)");

    // 1024x1024 texture = 256x256 blocks.
    let width = 1024;
    let height = 1024;
    let blocks_count = (width / 4) * (height / 4);
    let mut input = vec![0u8; blocks_count * BC1_BLOCK_SIZE];

    // Alternate between opaque and transparent mode blocks with varied indices.
    for (block_idx, block) in input.chunks_exact_mut(BC1_BLOCK_SIZE).enumerate() {
        let (c0, c1) = if block_idx % 2 == 0 {
            (0xF800u16, 0x001Fu16)
        } else {
            (0x001Fu16, 0xF800u16)
        };
        block[0..2].copy_from_slice(&c0.to_le_bytes());
        block[2..4].copy_from_slice(&c1.to_le_bytes());
        for (i, byte) in block[4..8].iter_mut().enumerate() {
            *byte = ((block_idx * (i + 4)) % 255) as u8;
        }
    }

    group.throughput(criterion::Throughput::Bytes(input.len() as u64));

    group.bench_function("decode_bc1_block", |b| {
        b.iter(|| {
            let mut identical_count = 0;
            for block in input.chunks_exact(BC1_BLOCK_SIZE) {
                let block: &[u8; BC1_BLOCK_SIZE] = block.try_into().unwrap();
                if decode_bc1_block(block).has_identical_pixels() {
                    identical_count += 1;
                }
            }
            identical_count
        })
    });

    group.bench_function("decode_bc1_image", |b| {
        b.iter(|| decode_bc1_image(&input, width, height))
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
