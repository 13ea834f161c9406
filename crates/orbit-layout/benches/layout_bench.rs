//! Benchmarks for the circular layout pass.
//!
//! Run with: cargo bench -p orbit-layout --bench layout_bench

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use orbit_layout::{ChildSpec, CircularLayout, MeasureConstraint, Rect, Sides};

fn make_children(count: usize) -> Vec<ChildSpec> {
    (0..count)
        .map(|i| {
            let side = 16 + (i % 7) as u32 * 4;
            let child = if i % 10 == 0 {
                ChildSpec::center(side * 2, side * 2)
            } else {
                ChildSpec::orbit(side, side)
            };
            let child = if i % 3 == 0 { child.rotated() } else { child };
            child.visible(i % 13 != 12)
        })
        .collect()
}

fn bench_full_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("circular/layout");
    let layout = CircularLayout::new().offset_angle(15.0).padding(Sides::all(8));

    for count in [4usize, 32, 256, 2048] {
        let children = make_children(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("exact", count), &children, |b, children| {
            b.iter(|| {
                black_box(layout.layout(
                    black_box(children),
                    MeasureConstraint::Exact(1024),
                    MeasureConstraint::Exact(768),
                    (0, 0),
                ))
            });
        });
        group.bench_with_input(
            BenchmarkId::new("unconstrained", count),
            &children,
            |b, children| {
                b.iter(|| {
                    black_box(layout.layout(
                        black_box(children),
                        MeasureConstraint::Unconstrained,
                        MeasureConstraint::Unconstrained,
                        (0, 0),
                    ))
                });
            },
        );
    }
    group.finish();
}

fn bench_place_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("circular/place");
    let layout = CircularLayout::new();

    for count in [32usize, 2048] {
        let children = make_children(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &children, |b, children| {
            b.iter_batched(
                || {
                    layout
                        .measure(
                            children,
                            MeasureConstraint::Exact(1024),
                            MeasureConstraint::Exact(1024),
                        )
                        .pass
                },
                |pass| black_box(layout.place(pass, Rect::new(0, 0, 1024, 1024))),
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_full_pass, bench_place_only);
criterion_main!(benches);
