use anyhow::Result;
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use plot_core::{build_histogram, build_series, compose, Cell, Graph, Histogram1D, Plottable, RenderOptions};

fn build_graph(n: usize) -> Graph {
    let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let y: Vec<f64> = (0..n).map(|i| (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001)).collect();
    build_series(&[x, y], "bench").unwrap()
}

fn build_hist(n: usize) -> Histogram1D {
    let values: Vec<f64> = (0..n).map(|i| (i as f64 * 0.37).sin() * 5.0).collect();
    build_histogram(&values, "bench", 100, None, None).unwrap()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    let opts = RenderOptions { width: 800, height: 500, draw_labels: false, ..RenderOptions::default() };
    for &n in &[10_000usize, 50_000usize] {
        group.bench_function(format!("xy_{n}"), |b| {
            let g = build_graph(n);
            let canvas = compose(vec![Cell::single(&g)], 1).unwrap().with_options(opts.clone());
            b.iter(|| -> Result<()> {
                let bytes = canvas.render_to_png_bytes()?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.bench_function("grid_2x2_overlay", |b| {
        let hs: Vec<Histogram1D> = (0..4).map(|i| build_hist(10_000 * (i + 1))).collect();
        let overlay: Vec<&dyn Plottable> = hs.iter().map(|h| h as &dyn Plottable).collect();
        let mut cells: Vec<Cell<'_>> = hs.iter().map(|h| Cell::single(h)).collect();
        cells[3] = Cell::overlay(overlay);
        let canvas = compose(cells, 2).unwrap().with_options(opts.clone());
        b.iter(|| -> Result<()> {
            black_box(canvas.render_to_png_bytes()?);
            Ok(())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
