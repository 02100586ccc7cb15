//! Benchmarks for tagcloud-render canvas fill and cloud painting.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tagcloud_core::{BlockGlyphs, FontColor, PixelSink, Rgb, VisualizationOptions, WordFrequencies};
use tagcloud_layout::{LayoutConfig, LayoutEngine};
use tagcloud_render::{Canvas, CloudRenderer, HashPalette};

fn make_words(n: u32) -> WordFrequencies {
    (0..n).map(|i| (format!("w{}", i * 7919 % 1000), n - i)).collect()
}

fn bench_canvas_new(c: &mut Criterion) {
    c.bench_function("Canvas::new 1024x1024", |b| {
        b.iter(|| black_box(Canvas::new(black_box(1024), black_box(1024), Rgb::BLACK).unwrap()));
    });
}

fn bench_blend(c: &mut Criterion) {
    let mut canvas = Canvas::new(256, 256, Rgb::BLACK).unwrap();
    c.bench_function("Canvas::blend partial", |b| {
        b.iter(|| {
            for y in 0..64 {
                for x in 0..64 {
                    canvas.blend(black_box(x), black_box(y), Rgb::WHITE, 128);
                }
            }
        });
    });
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_placements");
    let options = VisualizationOptions {
        canvas_size: 0,
        font_color: FontColor::Random,
        ..Default::default()
    };
    let renderer = CloudRenderer::new(options.clone()).unwrap();

    for &count in &[25u32, 100] {
        let mut engine = LayoutEngine::new(BlockGlyphs::default(), LayoutConfig::default()).unwrap();
        let placements = engine.layout(&make_words(count), &options).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(count), &placements, |b, placements| {
            b.iter(|| {
                black_box(
                    renderer
                        .render(placements, &mut BlockGlyphs::default(), &mut HashPalette::default())
                        .unwrap(),
                )
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_canvas_new, bench_blend, bench_render);
criterion_main!(benches);
