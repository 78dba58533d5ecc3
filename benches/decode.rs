use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_qr_decoder::decoder::galois::Galois;
use rust_qr_decoder::decoder::reed_solomon::RsDecoder;
use rust_qr_decoder::utils::grayscale::{rgb_to_grayscale, rgb_to_grayscale_parallel};
use rust_qr_decoder::{LumaImage, QrDecoder};

#[path = "../tests/common/mod.rs"]
mod common;

use common::*;

fn bench_decode_grid_v1(c: &mut Criterion) {
    let decoder = QrDecoder::default();
    let symbol = grid(HELLO_V1_M);
    c.bench_function("decode_grid_v1", |b| {
        b.iter(|| decoder.decode_grid(black_box(&symbol)))
    });
}

fn bench_decode_grid_v7(c: &mut Criterion) {
    let decoder = QrDecoder::default();
    let symbol = grid(FOX_V7_Q);
    c.bench_function("decode_grid_v7", |b| {
        b.iter(|| decoder.decode_grid(black_box(&symbol)))
    });
}

fn bench_decode_grid_v1_damaged(c: &mut Criterion) {
    let decoder = QrDecoder::default();
    let mut symbol = grid(HELLO_V1_M);
    flip(&mut symbol, &[(20, 20), (20, 16), (20, 12), (18, 9)]);
    c.bench_function("decode_grid_v1_4_errors", |b| {
        b.iter(|| decoder.decode_grid(black_box(&symbol)))
    });
}

fn bench_decode_image_v7(c: &mut Criterion) {
    let decoder = QrDecoder::default();
    let pixels = render(&grid(FOX_V7_Q), 8);
    let marks = marks(45, 8);
    let image = LumaImage::new(pixels.as_raw(), pixels.width() as usize, pixels.height() as usize)
        .unwrap();
    c.bench_function("decode_image_v7_360x360", |b| {
        b.iter(|| decoder.decode_image(black_box(&image), black_box(&marks)))
    });
}

fn bench_reed_solomon(c: &mut Criterion) {
    let gf = Galois::qr();
    let rs = RsDecoder::new(gf, 30).unwrap();
    let mut received = vec![0u8; 150];
    for (i, byte) in received.iter_mut().step_by(10).enumerate() {
        *byte = i as u8 + 1;
    }
    c.bench_function("rs_decode_150_15_errors", |b| {
        b.iter(|| {
            let mut block = received.clone();
            rs.decode(black_box(&mut block), false)
        })
    });
}

fn bench_decode_batch(c: &mut Criterion) {
    let decoder = QrDecoder::default();
    let grids: Vec<_> = (0..64)
        .map(|i| grid(if i % 2 == 0 { HELLO_V1_M } else { FOX_V7_Q }))
        .collect();
    c.bench_function("decode_batch_64", |b| {
        b.iter(|| decoder.decode_batch(black_box(&grids)))
    });
}

fn bench_rgb_to_grayscale(c: &mut Criterion) {
    let image = vec![128u8; 640 * 480 * 3];
    c.bench_function("rgb_to_grayscale_640x480", |b| {
        b.iter(|| rgb_to_grayscale(black_box(&image), black_box(640), black_box(480)))
    });
    c.bench_function("rgb_to_grayscale_parallel_640x480", |b| {
        b.iter(|| rgb_to_grayscale_parallel(black_box(&image), black_box(640), black_box(480)))
    });
}

criterion_group!(
    benches,
    bench_decode_grid_v1,
    bench_decode_grid_v7,
    bench_decode_grid_v1_damaged,
    bench_decode_image_v7,
    bench_reed_solomon,
    bench_decode_batch,
    bench_rgb_to_grayscale
);
criterion_main!(benches);
