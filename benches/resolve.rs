//! Benchmarks for shape resolution, which sits on the render hot path.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::time::Duration;

use cursor_mini::{
    CursorShape, ShapeResolver,
    traits::CursorContext,
    types::{EditingMode, InputMode},
};

struct BenchApp {
    editing_mode: EditingMode,
    input_mode: InputMode,
}

impl CursorContext for BenchApp {
    fn editing_mode(&self) -> EditingMode {
        self.editing_mode
    }

    fn input_mode(&self) -> InputMode {
        self.input_mode
    }
}

fn benchmark_fixed(c: &mut Criterion) {
    let app = BenchApp {
        editing_mode: EditingMode::Emacs,
        input_mode: InputMode::Navigation,
    };
    let resolver = ShapeResolver::fixed(CursorShape::Beam);

    c.bench_function("resolve_fixed", |b| {
        b.iter(|| black_box(&resolver).resolve(black_box(&app)))
    });
}

fn benchmark_mode_adaptive(c: &mut Criterion) {
    let app = BenchApp {
        editing_mode: EditingMode::Vi,
        input_mode: InputMode::Insert,
    };
    let resolver = ShapeResolver::mode_adaptive();

    c.bench_function("resolve_mode_adaptive", |b| {
        b.iter(|| black_box(&resolver).resolve(black_box(&app)))
    });
}

fn benchmark_deferred(c: &mut Criterion) {
    let app = BenchApp {
        editing_mode: EditingMode::Vi,
        input_mode: InputMode::Replace,
    };
    // Producer plus normalization on every call, the worst case.
    let resolver = ShapeResolver::deferred(ShapeResolver::mode_adaptive);

    c.bench_function("resolve_deferred", |b| {
        b.iter(|| black_box(&resolver).resolve(black_box(&app)))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(100);
    targets = benchmark_fixed,
              benchmark_mode_adaptive,
              benchmark_deferred
}
criterion_main!(benches);
