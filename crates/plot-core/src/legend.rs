// File: crates/plot-core/src/legend.rs
// Summary: Pad annotations: legends keyed by decorated objects, and boxed text lines.
// Positions are normalized pad coordinates (0..1, origin bottom-left).

use std::fmt::Display;

use crate::decorate::{Decorable, DrawAttributes};
use crate::error::{Error, Result};
use crate::geometry::clamp;
use crate::render::DrawOption;

/// Normalized box inside a pad.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NdcBox {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl NdcBox {
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        let c = |v: f32| clamp(v, 0.0, 1.0);
        Self { x0: c(x0.min(x1)), y0: c(y0.min(y1)), x1: c(x0.max(x1)), y1: c(y0.max(y1)) }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    /// Snapshot of the object's attributes when it was added.
    pub attributes: DrawAttributes,
}

#[derive(Clone, Debug)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
    pub position: NdcBox,
    /// Which samples to draw next to each label (`P` marker, `L` line).
    pub option: DrawOption,
    pub text_size: f32,
}

impl Legend {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            position: NdcBox::new(0.6, 0.6, 0.8, 0.8),
            option: DrawOption::parse("PL"),
            text_size: 12.0,
        }
    }

    /// One entry per object, labelled by the matching element of `labels`.
    pub fn from_objects<L: Display>(objects: &[&dyn Decorable], labels: &[L], option: &str) -> Result<Self> {
        if objects.len() != labels.len() {
            return Err(Error::ArityError { expected: "one label per legend object", found: labels.len() });
        }
        let mut legend = Self::new().with_option(option);
        for (object, label) in objects.iter().zip(labels) {
            legend.add(*object, label.to_string());
        }
        Ok(legend)
    }

    pub fn add(&mut self, object: &dyn Decorable, label: impl Into<String>) {
        self.entries.push(LegendEntry { label: label.into(), attributes: *object.attributes() });
    }

    pub fn with_position(mut self, position: NdcBox) -> Self {
        self.position = position;
        self
    }

    pub fn with_option(mut self, option: &str) -> Self {
        self.option = DrawOption::parse(option);
        self
    }
}

impl Default for Legend {
    fn default() -> Self {
        Self::new()
    }
}

/// Boxed lines of free text.
#[derive(Clone, Debug)]
pub struct TextBox {
    pub lines: Vec<String>,
    pub position: NdcBox,
    pub text_size: f32,
}

impl TextBox {
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            position: NdcBox::new(0.6, 0.8, 0.9, 0.9),
            text_size: 12.0,
        }
    }

    pub fn with_position(mut self, position: NdcBox) -> Self {
        self.position = position;
        self
    }
}
