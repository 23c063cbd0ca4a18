//! Benchmarks for column/row totals over a synthetic dense grid.

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use data_utils::{calculate_column_total, calculate_row_total};
use values::ArrayValues2D;

const ROWS: usize = 1_000;
const COLS: usize = 100;

fn synthetic_grid() -> ArrayValues2D {
    let rows: Vec<Vec<f64>> = (0..ROWS)
        .map(|r| (0..COLS).map(|c| (r * COLS + c) as f64 * 0.5).collect())
        .collect();
    ArrayValues2D::from_rows(rows).unwrap()
}

fn bench_totals(c: &mut Criterion) {
    let view = synthetic_grid();

    let mut group = c.benchmark_group("totals");
    group.throughput(Throughput::Elements(ROWS as u64));

    group.bench_function("column_total", |b| {
        b.iter(|| calculate_column_total(&view, COLS / 2).unwrap())
    });

    group.bench_function("row_total", |b| {
        b.iter(|| calculate_row_total(&view, ROWS / 2).unwrap())
    });

    group.bench_function("all_column_totals", |b| {
        b.iter(|| {
            (0..COLS)
                .map(|col| calculate_column_total(&view, col).unwrap())
                .sum::<f64>()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_totals);
criterion_main!(benches);
