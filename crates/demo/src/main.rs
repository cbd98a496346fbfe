// File: crates/demo/src/main.rs
// Summary: Demo fills gaussian histograms, decorates them from the default configurations and
// writes overlay/grid canvases (PNG + PDF) plus a CSV table. With a CSV argument it instead
// histograms every column of that table.

mod gauss;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plot_core::{
    build_histogram, column_histogram, compose, from_mapping, graph_from_histogram, to_mapping, Cell, ColumnMap,
    ConfigurationRegistry, Decorable, Histogram1D, Legend, NdcBox, Plottable, StyleApplier, StyleMenu, Table,
    TextBox,
};
use tracing_subscriber::EnvFilter;

const SAMPLES: usize = 1000;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let out = PathBuf::from("target/out");
    match std::env::args().nth(1) {
        Some(raw) => plot_table(Path::new(&raw), &out),
        None => check(&out),
    }
}

/// Four unit-width gaussians with means 0..3, overlaid and on a 2x2 grid.
fn check(out: &Path) -> Result<()> {
    let menu = StyleMenu::standard();
    let registry = ConfigurationRegistry::with_defaults(&menu);
    let mut applier = StyleApplier::new(&menu);
    let mut rng = gauss::Lcg::seed(42);

    let mut hists: Vec<Histogram1D> = (0..4)
        .map(|i| {
            let values = rng.samples(SAMPLES, i as f64, 1.0);
            build_histogram(&values, format!("gauss {i}"), 100, Some(-10.0), Some(10.0))
                .map(|h| h.with_axis_titles("x", "entries"))
        })
        .collect::<plot_core::Result<_>>()?;

    {
        let mut objects: Vec<&mut dyn Decorable> = hists.iter_mut().map(|h| h as &mut dyn Decorable).collect();
        applier.configure(&mut objects, &registry, None)?;
    }
    for h in &hists {
        tracing::info!(
            title = %h.title,
            color = applier.current_value(h, "color").unwrap_or("-"),
            max_bin = h.maximum(),
            "configured"
        );
    }

    let labels: Vec<String> = (0..hists.len()).map(|i| format!("mean {i}")).collect();
    let decorated: Vec<&dyn Decorable> = hists.iter().map(|h| h as &dyn Decorable).collect();
    let legend = Legend::from_objects(&decorated, &labels, "L")?.with_position(NdcBox::new(0.65, 0.6, 0.9, 0.88));
    let stats = TextBox::new([format!("{} entries each", SAMPLES)]).with_position(NdcBox::new(0.1, 0.8, 0.4, 0.9));

    let layers: Vec<&dyn Plottable> = hists.iter().map(|h| h as &dyn Plottable).collect();
    let mut overlay = compose(vec![Cell::overlay(layers)], 1)?;
    overlay.add_to_pad(0, &legend, None)?;
    overlay.add_to_pad(0, &stats, None)?;
    save_both(&overlay, out, "gauss_overlay")?;

    let points = graph_from_histogram(&hists[0])?;
    let mut cells: Vec<Cell<'_>> = hists[1..].iter().map(|h| Cell::with_option(h, "E")).collect();
    cells.insert(0, Cell::with_option(&points, "P"));
    let grid = compose(cells, 2)?;
    save_both(&grid, out, "gauss_grid")?;

    let mut mapping = ColumnMap::new();
    for h in &hists {
        mapping.insert(h.title.replace(' ', "_"), h.contents().to_vec());
    }
    let table = from_mapping(&mapping, "gauss_bins")?;
    let csv = out.join("gauss_bins.csv");
    table.save(&csv)?;
    let back = to_mapping(&Table::load(&csv)?, None)?;
    anyhow::ensure!(back == mapping, "table round trip changed values");
    tracing::info!(path = %csv.display(), columns = back.len(), "table round trip ok");
    Ok(())
}

/// One histogram per column of a CSV table, two per row.
fn plot_table(path: &Path, out: &Path) -> Result<()> {
    let table = Table::load(path).with_context(|| format!("failed to load table '{}'", path.display()))?;
    if table.entries() == 0 {
        anyhow::bail!("table '{}' has no rows", table.name());
    }
    tracing::info!(table = table.name(), rows = table.entries(), columns = table.labels().len(), "loaded");

    let menu = StyleMenu::standard();
    let registry = ConfigurationRegistry::with_defaults(&menu);
    let mut applier = StyleApplier::new(&menu);

    let mut hists = Vec::with_capacity(table.labels().len());
    for label in table.labels() {
        hists.push(column_histogram(&table, label, 50, None, None)?);
    }
    {
        let mut objects: Vec<&mut dyn Decorable> = hists.iter_mut().map(|h| h as &mut dyn Decorable).collect();
        applier.configure(&mut objects, &registry, None)?;
    }

    let cells: Vec<Cell<'_>> = hists.iter().map(|h| Cell::single(h)).collect();
    let canvas = compose(cells, 2)?;
    save_both(&canvas, out, table.name())
}

fn save_both(canvas: &plot_core::Canvas<'_>, out: &Path, stem: &str) -> Result<()> {
    for ext in ["png", "pdf"] {
        let path = out.join(format!("{stem}.{ext}"));
        canvas.save(&path).with_context(|| format!("failed to write '{}'", path.display()))?;
    }
    Ok(())
}
