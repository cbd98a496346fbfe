// File: crates/plot-core/src/palette.rs
// Summary: Backend translation tables from symbolic style values to Skia-native drawing styles.

use std::collections::HashMap;

use skia_safe as skia;

use crate::error::{Error, Result};
use crate::menu::{COLOR, LINE, MARKER, WIDTH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
    Square,
    TriangleUp,
    Star,
    Cross,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineDash {
    Solid,
    Dashed,
    Dotted,
    DashDot,
    DashedShort,
}

impl LineDash {
    /// On/off dash intervals in pixels, scaled by stroke width. `None` for solid.
    pub fn intervals(self, width: f32) -> Option<Vec<f32>> {
        let w = width.max(1.0);
        let pattern: &[f32] = match self {
            LineDash::Solid => return None,
            LineDash::Dashed => &[12.0, 6.0],
            LineDash::Dotted => &[1.0, 4.0],
            LineDash::DashDot => &[12.0, 4.0, 1.0, 4.0],
            LineDash::DashedShort => &[5.0, 4.0],
        };
        Some(pattern.iter().map(|v| v * w).collect())
    }

    pub fn path_effect(self, width: f32) -> Option<skia::PathEffect> {
        self.intervals(width).and_then(|iv| skia::PathEffect::dash(&iv, 0.0))
    }
}

/// A translated style value, ready to be written into [`crate::DrawAttributes`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NativeStyle {
    Color(skia::Color),
    Marker(MarkerShape),
    Dash(LineDash),
    Width(f32),
}

/// Per-category lookup tables. A value missing from its table is an
/// [`Error::UnsupportedValue`], even when the menu allows it.
#[derive(Clone, Debug)]
pub struct Palette {
    colors: HashMap<String, skia::Color>,
    markers: HashMap<String, MarkerShape>,
    dashes: HashMap<String, LineDash>,
    widths: HashMap<String, f32>,
}

impl Palette {
    /// Empty palette; every lookup misses.
    pub fn empty() -> Self {
        Self { colors: HashMap::new(), markers: HashMap::new(), dashes: HashMap::new(), widths: HashMap::new() }
    }

    /// Complete translation of [`crate::StyleMenu::standard`].
    pub fn skia() -> Self {
        let mut p = Self::empty();
        p.colors.insert("black".into(), skia::Color::from_argb(255, 0, 0, 0));
        p.colors.insert("red".into(), skia::Color::from_argb(255, 255, 0, 0));
        p.colors.insert("blue".into(), skia::Color::from_argb(255, 0, 0, 255));
        p.colors.insert("violet".into(), skia::Color::from_argb(255, 204, 0, 255));
        p.colors.insert("orange".into(), skia::Color::from_argb(255, 255, 153, 0));

        p.markers.insert("circle".into(), MarkerShape::Circle);
        p.markers.insert("square".into(), MarkerShape::Square);
        p.markers.insert("triangle".into(), MarkerShape::TriangleUp);
        p.markers.insert("star".into(), MarkerShape::Star);
        p.markers.insert("cross".into(), MarkerShape::Cross);

        p.dashes.insert("full".into(), LineDash::Solid);
        p.dashes.insert("dashed".into(), LineDash::Dashed);
        p.dashes.insert("dotted".into(), LineDash::Dotted);
        p.dashes.insert("dash-dot".into(), LineDash::DashDot);
        p.dashes.insert("dashed-short".into(), LineDash::DashedShort);

        for w in 1..=4u8 {
            p.widths.insert(w.to_string(), f32::from(w));
        }
        p
    }

    pub fn with_color(mut self, name: impl Into<String>, color: skia::Color) -> Self {
        self.colors.insert(name.into(), color);
        self
    }

    pub fn with_marker(mut self, name: impl Into<String>, shape: MarkerShape) -> Self {
        self.markers.insert(name.into(), shape);
        self
    }

    pub fn with_dash(mut self, name: impl Into<String>, dash: LineDash) -> Self {
        self.dashes.insert(name.into(), dash);
        self
    }

    pub fn with_width(mut self, name: impl Into<String>, width: f32) -> Self {
        self.widths.insert(name.into(), width);
        self
    }

    /// Drop one translation, leaving a gap in the table.
    pub fn without(mut self, category: &str, value: &str) -> Self {
        match category {
            COLOR => { self.colors.remove(value); }
            MARKER => { self.markers.remove(value); }
            LINE => { self.dashes.remove(value); }
            WIDTH => { self.widths.remove(value); }
            _ => {}
        }
        self
    }

    pub fn translate(&self, category: &str, value: &str) -> Result<NativeStyle> {
        let hit = match category {
            COLOR => self.colors.get(value).copied().map(NativeStyle::Color),
            MARKER => self.markers.get(value).copied().map(NativeStyle::Marker),
            LINE => self.dashes.get(value).copied().map(NativeStyle::Dash),
            WIDTH => self.widths.get(value).copied().map(NativeStyle::Width),
            _ => None,
        };
        hit.ok_or_else(|| Error::UnsupportedValue { category: category.to_string(), value: value.to_string() })
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::skia()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_has_no_dash() {
        assert!(LineDash::Solid.intervals(2.0).is_none());
        assert_eq!(LineDash::Dashed.intervals(2.0), Some(vec![24.0, 12.0]));
    }

    #[test]
    fn gap_is_unsupported() {
        let p = Palette::skia().without(MARKER, "triangle");
        assert!(matches!(p.translate(MARKER, "triangle"), Err(Error::UnsupportedValue { .. })));
        assert_eq!(p.translate(MARKER, "star").unwrap(), NativeStyle::Marker(MarkerShape::Star));
    }
}
