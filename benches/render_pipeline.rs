use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_imgview::core::{compute_crop, render_crop, Image};
use tui_imgview::engine::{Mode, Viewer};
use tui_imgview::term::{CellEncoder, LineBreak};
use tui_imgview::types::{Key, Rgb, TerminalGeometry, ViewState};

fn test_image() -> Image {
    Image::from_fn(1920, 1080, |x, y| Rgb::new((x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8))
}

fn bench_crop(c: &mut Criterion) {
    c.bench_function("compute_crop", |b| {
        b.iter(|| compute_crop(black_box(960), black_box(540), black_box(8.0), 1920, 1080, 200, 120))
    });
}

fn bench_resize(c: &mut Criterion) {
    let image = test_image();
    let crop = compute_crop(960, 540, 9.0, 1920, 1080, 200, 120);

    c.bench_function("render_crop_200x120", |b| {
        b.iter(|| render_crop(&image, black_box(crop), 200, 120).unwrap())
    });
}

fn bench_encode(c: &mut Criterion) {
    let image = test_image();
    let crop = compute_crop(960, 540, 9.0, 1920, 1080, 200, 120);
    let frame = render_crop(&image, crop, 200, 120).unwrap();
    let encoder = CellEncoder::new(200, LineBreak::CrLf);
    let mut out = Vec::with_capacity(1 << 20);

    c.bench_function("encode_200x60_cells", |b| {
        b.iter(|| {
            out.clear();
            encoder.encode_into(black_box(&frame), &mut out).unwrap();
        })
    });
}

fn bench_key_to_frame(c: &mut Criterion) {
    let image = test_image();
    let mut viewer = Viewer::new(
        &image,
        ViewState::new(960, 540, 9.0),
        TerminalGeometry::new(200, 61),
        Mode::Interactive,
    );

    c.bench_function("key_to_frame", |b| {
        b.iter(|| {
            viewer.handle_key(black_box(Key::Char('d')));
            viewer.encode_frame().unwrap().len()
        })
    });
}

criterion_group!(benches, bench_crop, bench_resize, bench_encode, bench_key_to_frame);
criterion_main!(benches);
