//! Criterion benchmarks for crew reductions over large crews.

use std::sync::Arc;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use paintcrew_estimate::{Crew, Painter, ProportionalPainter, collaborative};
use paintcrew_types::Area;

/// Builds a crew of `size` painters with slightly varied rates.
fn crew_of(size: usize) -> Crew {
    (0..size)
        .map(|i| {
            let hours_per_sqm = 1.0 + (i % 7) as f64 * 0.25;
            let rate = 8.0 + (i % 5) as f64;
            Arc::new(ProportionalPainter::new(
                Duration::from_secs_f64(hours_per_sqm * 3600.0),
                rate,
            )) as _
        })
        .collect()
}

fn bench_reductions(c: &mut Criterion) {
    let area = Area::new(25.0).unwrap();
    let sizes: Vec<usize> = vec![10, 100, 1_000, 10_000];

    let mut group = c.benchmark_group("cheapest");
    for &size in &sizes {
        let crew = crew_of(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &crew, |b, crew| {
            b.iter(|| crew.cheapest(area).unwrap().estimate_compensation(area));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("collaborative");
    for &size in &sizes {
        let crew = crew_of(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &crew, |b, crew| {
            b.iter(|| collaborative(area, crew).unwrap().quote(area));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_reductions);
criterion_main!(benches);
