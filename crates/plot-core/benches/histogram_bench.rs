use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, black_box};
use plot_core::{build_histogram, Binning, Histogram1D};

fn gen_values(n: usize) -> Vec<f64> {
    (0..n).map(|i| (i as f64 * 0.01).sin() * 8.0 + (i as f64 * 0.0001)).collect()
}

fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram_fill");
    for &n in &[100_000usize, 1_000_000usize] {
        let data = gen_values(n);
        for &bins in &[100usize, 1_000usize] {
            group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}_b{bins}")), &bins, |b, &bins| {
                b.iter_batched(
                    || Histogram1D::new("bench", Binning::new(bins, -10.0, 10.0).unwrap()),
                    |mut h| {
                        for &v in &data {
                            h.fill(v);
                        }
                        black_box(h.integral());
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let data = gen_values(500_000);
    c.bench_function("build_histogram_derived_edges", |b| {
        b.iter(|| black_box(build_histogram(&data, "bench", 200, None, None).unwrap()));
    });
}

criterion_group!(benches, bench_fill, bench_build);
criterion_main!(benches);
