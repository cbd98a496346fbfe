// File: crates/plot-core/src/graph.rs
// Summary: Point-series graphs (plain, symmetric and asymmetric errors), multi-graphs and builders.

use crate::bounds::Bounds;
use crate::decorate::{Decorable, DrawAttributes, Handle, ObjectId};
use crate::error::{Error, Result};
use crate::histogram::Histogram1D;

#[derive(Clone, Debug, PartialEq)]
pub enum ErrorBars {
    None,
    Symmetric { ex: Vec<f64>, ey: Vec<f64> },
    Asymmetric { ex_low: Vec<f64>, ex_high: Vec<f64>, ey_low: Vec<f64>, ey_high: Vec<f64> },
}

impl ErrorBars {
    /// `(x_low, x_high, y_low, y_high)` error extents of point `i`.
    pub fn at(&self, i: usize) -> Option<(f64, f64, f64, f64)> {
        match self {
            ErrorBars::None => None,
            ErrorBars::Symmetric { ex, ey } => Some((ex[i], ex[i], ey[i], ey[i])),
            ErrorBars::Asymmetric { ex_low, ex_high, ey_low, ey_high } => {
                Some((ex_low[i], ex_high[i], ey_low[i], ey_high[i]))
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct Graph {
    handle: Handle,
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    x: Vec<f64>,
    y: Vec<f64>,
    errors: ErrorBars,
    attributes: DrawAttributes,
}

impl Graph {
    /// Graph without error bars. `x` and `y` must have the same length.
    pub fn new(title: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        check_lengths(&[("x", x.as_slice()), ("y", y.as_slice())])?;
        Ok(Self {
            handle: Handle::new(),
            title: title.into(),
            x_title: String::new(),
            y_title: String::new(),
            x,
            y,
            errors: ErrorBars::None,
            attributes: DrawAttributes::default(),
        })
    }

    pub fn with_errors(mut self, errors: ErrorBars) -> Result<Self> {
        let n = self.len();
        let ok = |v: &Vec<f64>, name: &str| {
            if v.len() == n { Ok(()) } else {
                Err(Error::UnequalColumnLengths { column: name.to_string(), expected: n, found: v.len() })
            }
        };
        match &errors {
            ErrorBars::None => {}
            ErrorBars::Symmetric { ex, ey } => { ok(ex, "ex")?; ok(ey, "ey")?; }
            ErrorBars::Asymmetric { ex_low, ex_high, ey_low, ey_high } => {
                ok(ex_low, "ex_low")?;
                ok(ex_high, "ex_high")?;
                ok(ey_low, "ey_low")?;
                ok(ey_high, "ey_high")?;
            }
        }
        self.errors = errors;
        Ok(self)
    }

    pub fn with_axis_titles(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_title = x.into();
        self.y_title = y.into();
        self
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn errors(&self) -> &ErrorBars {
        &self.errors
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Extents including error bars.
    pub fn bounds(&self) -> Option<Bounds> {
        let corners = (0..self.len()).flat_map(|i| {
            let (x, y) = (self.x[i], self.y[i]);
            let (exl, exh, eyl, eyh) = self.errors.at(i).unwrap_or((0.0, 0.0, 0.0, 0.0));
            [(x - exl, y - eyl), (x + exh, y + eyh)]
        });
        Bounds::of_points(corners)
    }
}

impl Decorable for Graph {
    fn id(&self) -> ObjectId {
        self.handle.id()
    }
    fn attributes(&self) -> &DrawAttributes {
        &self.attributes
    }
    fn attributes_mut(&mut self) -> &mut DrawAttributes {
        &mut self.attributes
    }
}

fn check_lengths(columns: &[(&str, &[f64])]) -> Result<()> {
    let Some((_, first)) = columns.first() else { return Ok(()) };
    let expected = first.len();
    for (name, col) in columns {
        if col.len() != expected {
            return Err(Error::UnequalColumnLengths { column: name.to_string(), expected, found: col.len() });
        }
    }
    Ok(())
}

fn named<'a, C: AsRef<[f64]>>(names: &[&'static str], columns: &'a [C]) -> Vec<(&'static str, &'a [f64])> {
    names.iter().copied().zip(columns.iter().map(AsRef::as_ref)).collect()
}

/// Build a graph from parallel columns: `(x, y)` or `(x, y, x_error, y_error)`.
pub fn build_series<C: AsRef<[f64]>>(columns: &[C], title: &str) -> Result<Graph> {
    let cols = match columns.len() {
        2 => named(&["x", "y"], columns),
        4 => named(&["x", "y", "ex", "ey"], columns),
        n => return Err(Error::ArityError { expected: "2 (x, y) or 4 (x, y, ex, ey)", found: n }),
    };
    check_lengths(&cols)?;
    let graph = Graph::new(title, cols[0].1.to_vec(), cols[1].1.to_vec())?;
    if cols.len() == 4 {
        return graph.with_errors(ErrorBars::Symmetric { ex: cols[2].1.to_vec(), ey: cols[3].1.to_vec() });
    }
    Ok(graph)
}

/// Build a graph with asymmetric errors from `(x, y, ey_low, ey_high)` or
/// `(x, y, ey_low, ey_high, ex_low, ex_high)`; x errors default to zero.
pub fn build_asymmetric_series<C: AsRef<[f64]>>(columns: &[C], title: &str) -> Result<Graph> {
    let cols = match columns.len() {
        4 => named(&["x", "y", "ey_low", "ey_high"], columns),
        6 => named(&["x", "y", "ey_low", "ey_high", "ex_low", "ex_high"], columns),
        n => return Err(Error::ArityError { expected: "4 or 6", found: n }),
    };
    check_lengths(&cols)?;
    let n = cols[0].1.len();
    let (ex_low, ex_high) = if cols.len() == 6 {
        (cols[4].1.to_vec(), cols[5].1.to_vec())
    } else {
        (vec![0.0; n], vec![0.0; n])
    };
    Graph::new(title, cols[0].1.to_vec(), cols[1].1.to_vec())?.with_errors(ErrorBars::Asymmetric {
        ex_low,
        ex_high,
        ey_low: cols[2].1.to_vec(),
        ey_high: cols[3].1.to_vec(),
    })
}

/// One point per non-empty bin: x at the bin center with error width/sqrt(12),
/// y the bin content with its statistical error.
pub fn graph_from_histogram(h: &Histogram1D) -> Result<Graph> {
    let mut cols: [Vec<f64>; 4] = Default::default();
    let ex = h.bin_width() / 12f64.sqrt();
    for bin in 0..h.bins() {
        let y = h.bin_content(bin);
        if y == 0.0 {
            continue;
        }
        cols[0].push(h.bin_center(bin));
        cols[1].push(y);
        cols[2].push(ex);
        cols[3].push(h.bin_error(bin));
    }
    Ok(build_series(&cols, &h.title)?.with_axis_titles(h.x_title.clone(), h.y_title.clone()))
}

/// Ordered collection of graphs sharing one frame.
#[derive(Clone, Debug, Default)]
pub struct MultiGraph {
    pub title: String,
    graphs: Vec<Graph>,
}

impl MultiGraph {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), graphs: Vec::new() }
    }

    pub fn from_graphs(title: impl Into<String>, graphs: Vec<Graph>) -> Self {
        Self { title: title.into(), graphs }
    }

    pub fn add(&mut self, graph: Graph) {
        self.graphs.push(graph);
    }

    pub fn graphs(&self) -> &[Graph] {
        &self.graphs
    }

    pub fn graphs_mut(&mut self) -> &mut [Graph] {
        &mut self.graphs
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::union_all(self.graphs.iter().map(Graph::bounds))
    }
}
