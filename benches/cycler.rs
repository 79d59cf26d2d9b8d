#![allow(clippy::unwrap_used)]
//! Benchmarks for image cycling and controller dispatch
//!
//! The loader returns a shared pre-decoded resource, so these measure the
//! cursor bookkeeping and the lock/dispatch path rather than decoding.

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gopher::controller::{Action, ViewController};
use gopher::cycler::{Cursor, ImageCycler, next_index};
use gopher::layout::LayoutMode;
use gopher::loader::{ImageReference, Resource, ResourceLoader, decode_image};
use parking_lot::Mutex;
use std::hint::black_box;
use std::io::Cursor as IoCursor;
use std::sync::Arc;

struct StaticLoader {
    resource: Resource,
}

impl ResourceLoader for StaticLoader {
    fn load(&self, _reference: &ImageReference) -> gopher::Result<Resource> {
        Ok(self.resource.clone())
    }
}

fn static_loader() -> StaticLoader {
    StaticLoader {
        resource: Resource {
            reference: ImageReference::new("static"),
            width: 16,
            height: 16,
            pixels: vec![128; 16 * 16 * 4],
        },
    }
}

fn references(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("https://example.com/gopher{i}.png"))
        .collect()
}

fn bench_next_index(c: &mut Criterion) {
    c.bench_function("next_index", |b| {
        b.iter(|| {
            let mut cursor = Cursor::NONE;
            for _ in 0..100 {
                cursor = Cursor::at(next_index(black_box(cursor), black_box(7)).unwrap());
            }
            black_box(cursor);
        });
    });
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");

    for count in [2, 16, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut cycler = ImageCycler::new(references(count), static_loader()).unwrap();
            b.iter(|| {
                let outcome = cycler.advance();
                black_box(outcome.cursor);
            });
        });
    }

    group.finish();
}

fn bench_locked_dispatch(c: &mut Criterion) {
    let cycler = ImageCycler::new(references(2), static_loader()).unwrap();
    let view = Arc::new(Mutex::new(ViewController::new(cycler, LayoutMode::Max)));

    c.bench_function("locked_dispatch_mixed", |b| {
        b.iter(|| {
            black_box(view.lock().dispatch(Action::AdvanceImage));
            black_box(view.lock().dispatch(Action::SelectLayout(LayoutMode::Padded)));
            black_box(view.lock().dispatch(Action::SelectLayout(LayoutMode::Max)));
        });
    });
}

fn bench_decode_png(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_png");
    let reference = ImageReference::new("bench.png");

    for side in [64u32, 512] {
        let img = image::RgbaImage::from_pixel(side, side, image::Rgba([1, 2, 3, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut IoCursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(side), &bytes, |b, bytes| {
            b.iter(|| {
                let resource = decode_image(&reference, black_box(bytes)).unwrap();
                black_box(resource.pixels.len());
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_next_index,
    bench_advance,
    bench_locked_dispatch,
    bench_decode_png
);
criterion_main!(benches);
