//! Solver micro-benchmarks
//!
//! Measures full solves over wide, deep and mixed trees.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use trellis::shell::app_shell;
use trellis::{Direction, LayoutEngine, Padding, Rect, SizeSpec};

/// One container with `count` items cycling through every size kind.
fn wide_row(count: usize) -> LayoutEngine {
    let mut engine = LayoutEngine::new(Direction::Right, Padding::all(2.0));
    for i in 0..count {
        let spec = match i % 3 {
            0 => SizeSpec::Fixed(1.0),
            1 => SizeSpec::Percent(0.01),
            _ => SizeSpec::FlexWeight(1.0),
        };
        engine.add_item(spec).expect("add item");
    }
    engine
}

/// A chain of containers `depth` levels deep, alternating direction.
fn deep_chain(depth: usize) -> LayoutEngine {
    let mut engine = LayoutEngine::new(Direction::Down, Padding::zero());
    let mut parent = engine.add_item(SizeSpec::FlexWeight(1.0)).expect("add root item");
    for level in 0..depth {
        let direction = if level % 2 == 0 {
            Direction::Right
        } else {
            Direction::Down
        };
        let mut scope = engine
            .nest(parent.id(), direction, Padding::all(0.5))
            .expect("nest");
        scope.add_item(SizeSpec::Fixed(0.5)).expect("add fixed");
        parent = scope.add_item(SizeSpec::FlexWeight(1.0)).expect("add flex");
    }
    engine
}

fn bench_wide(c: &mut Criterion) {
    let mut group = c.benchmark_group("wide_row");
    for count in [10, 100, 1000] {
        let mut engine = wide_row(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| engine.solve(black_box(Rect::new(0.0, 0.0, 100_000.0, 100.0))))
        });
    }
    group.finish();
}

fn bench_deep(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep_chain");
    for depth in [8, 64, 256] {
        let mut engine = deep_chain(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, _| {
            b.iter(|| engine.solve(black_box(Rect::new(0.0, 0.0, 4096.0, 4096.0))))
        });
    }
    group.finish();
}

fn bench_shell(c: &mut Criterion) {
    let mut engine = app_shell(240.0, 12).expect("build shell");
    c.bench_function("app_shell_resize", |b| {
        let mut width = 1024.0;
        b.iter(|| {
            width = if width > 1900.0 { 1024.0 } else { width + 7.0 };
            engine.solve(black_box(Rect::new(0.0, 0.0, width, 900.0)))
        })
    });
}

criterion_group!(benches, bench_wide, bench_deep, bench_shell);
criterion_main!(benches);
