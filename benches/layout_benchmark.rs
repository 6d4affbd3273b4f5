//! Performance benchmarks for the resolver and layout engine.
//!
//! Run with: cargo bench --bench layout_benchmark

use country_timeline::layout::{layout, LayoutConfig, NoFlags};
use country_timeline::model::{CountryCode, ResidenceRow, VisitMap, VisitRecord, YearMonth};
use country_timeline::resolver::{legal_until_options, resolve};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Generate a visit map with `count` synthetic countries spread over the
/// subject's life.
fn generate_visits(count: usize) -> VisitMap {
    let mut visits = VisitMap::new();
    for i in 0..count {
        let code = format!(
            "{}{}",
            char::from(b'A' + (i / 26) as u8 % 26),
            char::from(b'A' + (i % 26) as u8)
        );
        let cc = CountryCode::new(&code);
        let date = YearMonth::new(1995 + (i % 30) as i32, 1 + (i % 12) as u32);
        visits.insert(cc.clone(), VisitRecord::new(cc, code, date));
    }
    visits
}

/// Generate `count` back-to-back residence rows covering the whole life.
fn generate_rows(count: usize) -> Vec<ResidenceRow> {
    let span_years = 35 / count.max(1) as i32;
    (0..count)
        .map(|i| {
            let from = YearMonth::new(1990 + i as i32 * span_years, 1);
            let until = YearMonth::new(1990 + (i as i32 + 1) * span_years, 1);
            ResidenceRow::new(CountryCode::new("FR"), from, until)
        })
        .collect()
}

fn bench_layout_typical(c: &mut Criterion) {
    let birth = YearMonth::new(1990, 1);
    let today = YearMonth::new(2025, 8);
    let visits = generate_visits(20);
    let rows = generate_rows(4);
    let available: Vec<CountryCode> = visits.keys().cloned().collect();
    let periods = resolve(birth, today, &rows, &available).periods(birth, today);
    let config = LayoutConfig::default();

    c.bench_function("layout_20_countries", |b| {
        b.iter(|| {
            let _ = black_box(layout(
                black_box(birth),
                black_box(&visits),
                black_box(&periods),
                &NoFlags,
                black_box(today),
                &config,
            ));
        })
    });
}

fn bench_layout_scaling(c: &mut Criterion) {
    let birth = YearMonth::new(1990, 1);
    let today = YearMonth::new(2025, 8);
    let config = LayoutConfig::default();
    let mut group = c.benchmark_group("layout_scaling");

    for size in [5, 20, 50, 150].iter() {
        let visits = generate_visits(*size);
        group.bench_with_input(BenchmarkId::new("countries", size), size, |b, _| {
            b.iter(|| {
                let _ = black_box(layout(
                    black_box(birth),
                    black_box(&visits),
                    &[],
                    &NoFlags,
                    black_box(today),
                    &config,
                ));
            })
        });
    }

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let birth = YearMonth::new(1990, 1);
    let today = YearMonth::new(2025, 8);
    let rows = generate_rows(8);
    let available: Vec<CountryCode> = vec![CountryCode::new("FR")];

    c.bench_function("resolve_8_rows", |b| {
        b.iter(|| {
            let _ = black_box(resolve(
                black_box(birth),
                black_box(today),
                black_box(&rows),
                &available,
            ));
        })
    });
}

fn bench_until_options(c: &mut Criterion) {
    // Worst case for the option filter: a month-by-month scan over a full
    // lifetime against several neighboring intervals.
    let birth = YearMonth::new(1990, 1);
    let today = YearMonth::new(2025, 8);
    let rows = generate_rows(8);

    c.bench_function("until_options_full_lifetime", |b| {
        b.iter(|| {
            let _ = black_box(legal_until_options(
                black_box(&rows),
                black_box(0),
                black_box(birth),
                black_box(today),
            ));
        })
    });
}

criterion_group!(
    benches,
    bench_layout_typical,
    bench_layout_scaling,
    bench_resolve,
    bench_until_options
);
criterion_main!(benches);
