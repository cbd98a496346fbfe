// File: crates/plot-core/src/axis.rs
// Summary: Frame axis model with title, range and tick placement.

use crate::grid::nice_ticks;

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub title: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(title: impl Into<String>, min: f64, max: f64) -> Self {
        Self { title: title.into(), min, max }
    }

    /// Tick positions inside the axis range.
    pub fn ticks(&self, target: usize) -> Vec<f64> {
        nice_ticks(self.min, self.max, target)
    }
}
