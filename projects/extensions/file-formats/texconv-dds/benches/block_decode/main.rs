use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use texconv_common::color_8888::Color8888;
use texconv_common::decoded_4x4_block::Decoded4x4Block;
use texconv_dds::decode::bc1::{decode_bc1_block, BC1_BLOCK_SIZE};
use texconv_dds::decode::bc2::{decode_bc2_block, BC2_BLOCK_SIZE};
use texconv_dds::decode::bc3::{decode_bc3_block, BC3_BLOCK_SIZE};

/// Fills `size` bytes with blocks whose endpoints and indices vary per block.
fn make_blocks(size: usize, block_size: usize) -> Vec<u8> {
    let mut input = vec![0u8; size];
    for (block_idx, block) in input.chunks_exact_mut(block_size).enumerate() {
        for (i, byte) in block.iter_mut().enumerate() {
            *byte = ((block_idx * (i + 1)) % 255) as u8;
        }
    }
    input
}

fn bench_decoder(
    c: &mut Criterion,
    name: &str,
    block_size: usize,
    decode_block: fn(&[u8]) -> Decoded4x4Block,
) {
    let mut group = c.benchmark_group(format!("{name} Decode Blocks ({name} -> RGBA8888)"));

    // 8MB of blocks
    let size = 8388608;
    let input = make_blocks(size, block_size);
    let mut output = vec![Decoded4x4Block::new(Color8888::default()); size / block_size];

    group.throughput(criterion::Throughput::Bytes(size as u64));
    group.bench_function("decode_blocks", |b| {
        b.iter(|| {
            for (block, out) in input.chunks_exact(block_size).zip(output.iter_mut()) {
                *out = decode_block(black_box(block));
            }
        })
    });
    group.finish();
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_decoder(c, "BC1", BC1_BLOCK_SIZE, decode_bc1_block);
    bench_decoder(c, "BC2", BC2_BLOCK_SIZE, decode_bc2_block);
    bench_decoder(c, "BC3", BC3_BLOCK_SIZE, decode_bc3_block);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
