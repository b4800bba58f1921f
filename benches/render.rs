use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{DynamicImage, Rgb, RgbImage};

use portrait_compositor::canvas::{darken, Placement, PortraitRenderer};
use portrait_compositor::config::CanvasConfig;

fn gradient(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    }))
}

fn bench_layout(c: &mut Criterion) {
    c.bench_function("fit_inside", |b| {
        b.iter(|| Placement::fit_inside(black_box(4032), black_box(3024), 1080, 1920))
    });
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(10);

    let source = gradient(1280, 720);
    let renderer = PortraitRenderer::new(CanvasConfig::default());

    group.bench_function("full_canvas", |b| {
        b.iter(|| renderer.render(black_box(&source)))
    });

    group.bench_function("background_only", |b| {
        b.iter(|| renderer.render_background(black_box(&source)))
    });

    group.bench_function("darken", |b| {
        let background = renderer.render_background(&source).unwrap();
        b.iter(|| {
            let mut canvas = background.clone();
            darken(&mut canvas, 0.7);
            canvas
        })
    });

    group.finish();
}

criterion_group!(benches, bench_layout, bench_render);
criterion_main!(benches);
