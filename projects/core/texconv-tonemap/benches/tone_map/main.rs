use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use texconv_common::{Channels, PixelBuffer};
use texconv_tonemap::tone_map;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Tone Map (RGB f32 -> RGB u8)");

    // 1024x1024 RGB, ~12MB of f32 samples
    let width = 1024u32;
    let height = 1024u32;
    let samples: Vec<f32> = (0..(width * height * 3) as usize)
        .map(|i| ((i * 7919) % 65521) as f32 / 1024.0)
        .collect();
    let hdr = PixelBuffer::new(width, height, Channels::Rgb, samples).unwrap();

    group.throughput(criterion::Throughput::Bytes(
        (hdr.samples().len() * core::mem::size_of::<f32>()) as u64,
    ));
    group.bench_function("tone_map", |b| b.iter(|| tone_map(black_box(&hdr))));
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
