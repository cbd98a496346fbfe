// File: crates/plot-core/src/error.rs
// Summary: Crate-wide error type; every failure is raised to the caller at the point of detection.

use crate::registry::ConfigName;

/// Errors produced by the style registry, plot builders, canvas and table bridge.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown style category `{0}`")]
    UnknownCategory(String),

    #[error("no configuration named `{0}`")]
    UnknownConfiguration(ConfigName),

    #[error("`{value}` is not an allowed value for style category `{category}`")]
    InvalidStyleValue { category: String, value: String },

    /// The value is in the menu but the backend has no native translation for it.
    #[error("style `{category}={value}` has no backend translation")]
    UnsupportedValue { category: String, value: String },

    #[error("expected {expected}, got {found} column(s)")]
    ArityError { expected: &'static str, found: usize },

    #[error("column `{column}` has {found} values, expected {expected}")]
    UnequalColumnLengths { column: String, expected: usize, found: usize },

    #[error("cannot derive {0} from an empty input")]
    EmptyInput(&'static str),

    #[error("invalid binning: {bins} bins over [{low}, {high})")]
    InvalidBinning { bins: usize, low: f64, high: f64 },

    #[error("invalid canvas layout: {0}")]
    InvalidLayout(String),

    #[error("{objects} object(s) to configure but only {available} configuration(s) available")]
    NotEnoughConfigurations { objects: usize, available: usize },

    #[error("table `{table}` has no column `{column}`")]
    UnknownColumn { table: String, column: String },

    #[error("unsupported output format `{0}` (expected .png or .pdf)")]
    UnsupportedFormat(String),

    #[error("render failed: {0}")]
    Render(&'static str),

    #[error("row {row}, column `{column}`: cannot parse `{value}` as a number")]
    Parse { row: usize, column: String, value: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
