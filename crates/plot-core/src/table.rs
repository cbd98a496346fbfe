// File: crates/plot-core/src/table.rs
// Summary: Column-major numeric tables ("trees"), conversion to/from column mappings, CSV persistence.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{Error, Result};
use crate::histogram::{build_histogram, Binning, Histogram1D, Histogram2D};

/// Column name -> ordered values.
pub type ColumnMap = BTreeMap<String, Vec<f64>>;

/// Named table of equal-length `f64` columns.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    name: String,
    labels: Vec<String>,
    columns: Vec<Vec<f64>>,
}

/// Borrowed view of one table row.
#[derive(Clone, Copy)]
pub struct Row<'t> {
    table: &'t Table,
    index: usize,
}

impl<'t> Row<'t> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn get(&self, column: &str) -> Option<f64> {
        let c = self.table.position(column)?;
        Some(self.table.columns[c][self.index])
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + 't {
        let index = self.index;
        self.table.columns.iter().map(move |c| c[index])
    }
}

impl Table {
    /// Empty table with no columns.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), labels: Vec::new(), columns: Vec::new() }
    }

    /// Append a column; every column must have the same length as the first.
    /// A column with an existing label replaces it in place.
    pub fn add_column(&mut self, label: impl Into<String>, values: Vec<f64>) -> Result<()> {
        let label = label.into();
        if let Some(first) = self.columns.first() {
            if first.len() != values.len() {
                return Err(Error::UnequalColumnLengths { column: label, expected: first.len(), found: values.len() });
            }
        }
        match self.position(&label) {
            Some(i) => self.columns[i] = values,
            None => {
                self.labels.push(label);
                self.columns.push(values);
            }
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of rows.
    pub fn entries(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    fn position(&self, column: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == column)
    }

    pub fn column(&self, column: &str) -> Result<&[f64]> {
        self.position(column)
            .map(|i| self.columns[i].as_slice())
            .ok_or_else(|| Error::UnknownColumn { table: self.name.clone(), column: column.to_string() })
    }

    /// Value of `column` in row `row`; `None` past the last row.
    pub fn value(&self, row: usize, column: &str) -> Result<Option<f64>> {
        Ok(self.column(column)?.get(row).copied())
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> + '_ {
        (0..self.entries()).map(move |index| Row { table: self, index })
    }

    /// Read a CSV file with a header row; the table is named after the file stem.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path.file_stem().and_then(|s| s.to_str()).unwrap_or("table");
        let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
        let labels: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();
        let mut columns: Vec<Vec<f64>> = vec![Vec::new(); labels.len()];

        for (row, rec) in rdr.records().enumerate() {
            let rec = rec?;
            for (c, label) in labels.iter().enumerate() {
                let raw = rec.get(c).unwrap_or("").trim();
                let v = raw.parse::<f64>().map_err(|_| Error::Parse {
                    row,
                    column: label.clone(),
                    value: raw.to_string(),
                })?;
                columns[c].push(v);
            }
        }

        tracing::info!(table = name, path = %path.display(), columns = labels.len(), "loaded table");
        Ok(Self { name: name.to_string(), labels, columns })
    }

    /// Write the table as CSV with a header row. Values are written in their
    /// shortest round-trip form, so `load` reproduces them exactly.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut wtr = csv::Writer::from_path(path)?;
        wtr.write_record(&self.labels)?;
        for row in self.rows() {
            wtr.write_record(row.values().map(|v| v.to_string()))?;
        }
        wtr.flush()?;
        tracing::info!(table = %self.name, path = %path.display(), rows = self.entries(), "saved table");
        Ok(())
    }
}

/// Column values of `table` keyed by column name; `None` selects every column.
pub fn to_mapping(table: &Table, columns: Option<&[&str]>) -> Result<ColumnMap> {
    let mut out = ColumnMap::new();
    match columns {
        Some(names) => {
            for &name in names {
                out.insert(name.to_string(), table.column(name)?.to_vec());
            }
        }
        None => {
            for (label, values) in table.labels.iter().zip(&table.columns) {
                out.insert(label.clone(), values.clone());
            }
        }
    }
    Ok(out)
}

/// Build a table whose columns are the mapping's keys (in key order).
pub fn from_mapping(mapping: &ColumnMap, name: impl Into<String>) -> Result<Table> {
    let mut table = Table::new(name);
    for (label, values) in mapping {
        table.add_column(label.clone(), values.clone())?;
    }
    tracing::debug!(table = %table.name, columns = table.labels.len(), rows = table.entries(), "table from mapping");
    Ok(table)
}

/// [`from_mapping`] followed by [`Table::save`] to `path`.
pub fn write_mapping(mapping: &ColumnMap, name: impl Into<String>, path: impl AsRef<Path>) -> Result<Table> {
    let table = from_mapping(mapping, name)?;
    table.save(path)?;
    Ok(table)
}

/// New table keeping only `columns` of `table`, in the given order.
pub fn reduce(table: &Table, columns: &[&str], name: impl Into<String>) -> Result<Table> {
    let mut out = Table::new(name);
    for &column in columns {
        out.add_column(column, table.column(column)?.to_vec())?;
    }
    tracing::info!(from = %table.name, to = %out.name, columns = ?columns, "reduced table");
    Ok(out)
}

/// Histogram of one column; edges default as in [`build_histogram`].
pub fn column_histogram(
    table: &Table,
    column: &str,
    bins: usize,
    low: Option<f64>,
    high: Option<f64>,
) -> Result<Histogram1D> {
    let values = table.column(column)?;
    Ok(build_histogram(values, column, bins, low, high)?.with_axis_titles(column, "entries"))
}

/// 2D histogram of `y` against `x`.
pub fn column_histogram2d(table: &Table, x: &str, y: &str, x_bins: Binning, y_bins: Binning) -> Result<Histogram2D> {
    let (xs, ys) = (table.column(x)?, table.column(y)?);
    let mut h = Histogram2D::new(format!("{y} vs {x}"), x_bins, y_bins).with_axis_titles(x, y);
    for (&a, &b) in xs.iter().zip(ys) {
        h.fill(a, b);
    }
    Ok(h)
}
