use termgraph_core::normalize;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, black_box};

fn gen_rows(n: usize, series: usize) -> Vec<Vec<f64>> {
    (0..n)
        .map(|i| (0..series).map(|j| (i as f64 * 0.01 + j as f64).sin() * 1_000.0).collect())
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    for &n in &[10_000usize, 100_000usize] {
        for &series in &[1usize, 4usize] {
            let rows = gen_rows(n, series);
            group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}_s{series}")), &rows, |b, rows| {
                b.iter_batched(
                    || rows.clone(),
                    |r| { let _ = black_box(normalize(&r, 50.0)); },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
