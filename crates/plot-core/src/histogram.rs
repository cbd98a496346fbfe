// File: crates/plot-core/src/histogram.rs
// Summary: Fixed-width 1D and 2D histograms with under/overflow accounting and scaling helpers.
// Notes:
// - Bin ranges are half-open `[low, high)`: a value equal to `high` lands in overflow.
// - NaN fills count as underflow.

use crate::bounds::Bounds;
use crate::decorate::{Decorable, DrawAttributes, Handle, ObjectId};
use crate::error::{Error, Result};

/// Where a fill landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinSlot {
    Underflow,
    Bin(usize),
    Overflow,
}

/// Equal-width binning of one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Binning {
    pub bins: usize,
    pub low: f64,
    pub high: f64,
}

impl Binning {
    pub fn new(bins: usize, low: f64, high: f64) -> Result<Self> {
        if bins == 0 || !low.is_finite() || !high.is_finite() || high <= low {
            return Err(Error::InvalidBinning { bins, low, high });
        }
        Ok(Self { bins, low, high })
    }

    pub fn width(&self) -> f64 {
        (self.high - self.low) / self.bins as f64
    }

    pub fn slot(&self, x: f64) -> BinSlot {
        if !(x >= self.low) {
            return BinSlot::Underflow;
        }
        if x >= self.high {
            return BinSlot::Overflow;
        }
        let i = ((x - self.low) / self.width()).floor() as usize;
        BinSlot::Bin(i.min(self.bins - 1))
    }

    pub fn low_edge(&self, bin: usize) -> f64 {
        self.low + bin as f64 * self.width()
    }

    pub fn center(&self, bin: usize) -> f64 {
        self.low + (bin as f64 + 0.5) * self.width()
    }
}

#[derive(Clone, Debug)]
pub struct Histogram1D {
    handle: Handle,
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    binning: Binning,
    contents: Vec<f64>,
    sumw2: Vec<f64>,
    underflow: f64,
    overflow: f64,
    entries: u64,
    attributes: DrawAttributes,
}

impl Histogram1D {
    pub fn new(title: impl Into<String>, binning: Binning) -> Self {
        Self {
            handle: Handle::new(),
            title: title.into(),
            x_title: String::new(),
            y_title: String::new(),
            binning,
            contents: vec![0.0; binning.bins],
            sumw2: vec![0.0; binning.bins],
            underflow: 0.0,
            overflow: 0.0,
            entries: 0,
            attributes: DrawAttributes::default(),
        }
    }

    pub fn with_axis_titles(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_title = x.into();
        self.y_title = y.into();
        self
    }

    pub fn fill(&mut self, x: f64) -> BinSlot {
        self.fill_weighted(x, 1.0)
    }

    pub fn fill_weighted(&mut self, x: f64, w: f64) -> BinSlot {
        self.entries += 1;
        let slot = self.binning.slot(x);
        match slot {
            BinSlot::Underflow => self.underflow += w,
            BinSlot::Overflow => self.overflow += w,
            BinSlot::Bin(i) => {
                self.contents[i] += w;
                self.sumw2[i] += w * w;
            }
        }
        slot
    }

    pub fn binning(&self) -> Binning {
        self.binning
    }

    pub fn bins(&self) -> usize {
        self.binning.bins
    }

    pub fn low_edge(&self) -> f64 {
        self.binning.low
    }

    pub fn high_edge(&self) -> f64 {
        self.binning.high
    }

    pub fn bin_width(&self) -> f64 {
        self.binning.width()
    }

    pub fn bin_low_edge(&self, bin: usize) -> f64 {
        self.binning.low_edge(bin)
    }

    pub fn bin_center(&self, bin: usize) -> f64 {
        self.binning.center(bin)
    }

    /// Content of in-range bin `bin` (0-based); 0 outside the range.
    pub fn bin_content(&self, bin: usize) -> f64 {
        self.contents.get(bin).copied().unwrap_or(0.0)
    }

    /// Statistical error of `bin`: square root of the sum of squared weights.
    pub fn bin_error(&self, bin: usize) -> f64 {
        self.sumw2.get(bin).copied().unwrap_or(0.0).sqrt()
    }

    pub fn contents(&self) -> &[f64] {
        &self.contents
    }

    pub fn underflow(&self) -> f64 {
        self.underflow
    }

    pub fn overflow(&self) -> f64 {
        self.overflow
    }

    /// Number of fill calls, including under/overflow.
    pub fn entries(&self) -> u64 {
        self.entries
    }

    /// Sum of in-range bin contents.
    pub fn integral(&self) -> f64 {
        self.contents.iter().sum()
    }

    pub fn maximum(&self) -> f64 {
        self.contents.iter().copied().fold(0.0, f64::max)
    }

    /// Multiply every content (and flow) by `factor`; errors scale with it.
    pub fn scale(&mut self, factor: f64) {
        let f2 = factor * factor;
        self.contents.iter_mut().for_each(|c| *c *= factor);
        self.sumw2.iter_mut().for_each(|s| *s *= f2);
        self.underflow *= factor;
        self.overflow *= factor;
    }

    /// Scale so that each entry weighs `size / entries`.
    pub fn scale_to(&mut self, size: f64) -> Result<()> {
        if self.entries == 0 {
            return Err(Error::EmptyInput("a scale factor"));
        }
        self.scale(size / self.entries as f64);
        Ok(())
    }

    pub fn bounds(&self) -> Bounds {
        let top = (0..self.bins())
            .map(|i| self.bin_content(i) + self.bin_error(i))
            .fold(0.0, f64::max);
        let bottom = self.contents.iter().copied().fold(0.0, f64::min);
        Bounds::new(self.binning.low, self.binning.high, bottom, top)
    }
}

impl Decorable for Histogram1D {
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

/// Bin `values` into `bins` equal-width bins.
///
/// A missing `low` defaults to the minimum of `values`; a missing `high` to the
/// maximum padded by 1% of its magnitude (0.01 when the maximum is zero), so the
/// largest value stays in range.
pub fn build_histogram(
    values: &[f64],
    title: impl Into<String>,
    bins: usize,
    low: Option<f64>,
    high: Option<f64>,
) -> Result<Histogram1D> {
    let finite = || values.iter().copied().filter(|v| v.is_finite());
    let low = match low {
        Some(l) => l,
        None => finite().reduce(f64::min).ok_or(Error::EmptyInput("a low edge"))?,
    };
    let high = match high {
        Some(h) => h,
        None => {
            let max = finite().reduce(f64::max).ok_or(Error::EmptyInput("a high edge"))?;
            let pad = if max == 0.0 { 0.01 } else { 0.01 * max.abs() };
            max + pad
        }
    };

    let mut h = Histogram1D::new(title, Binning::new(bins, low, high)?);
    for &v in values {
        h.fill(v);
    }
    Ok(h)
}

/// Scale every histogram in `others` to the entry count of `reference`.
pub fn scale_to_reference(reference: &Histogram1D, others: &mut [Histogram1D]) -> Result<()> {
    let n = reference.entries() as f64;
    for h in others.iter_mut() {
        h.scale_to(n)?;
    }
    Ok(())
}

#[derive(Clone, Debug)]
pub struct Histogram2D {
    handle: Handle,
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    x: Binning,
    y: Binning,
    contents: Vec<f64>,
    outside: f64,
    entries: u64,
    attributes: DrawAttributes,
}

impl Histogram2D {
    pub fn new(title: impl Into<String>, x: Binning, y: Binning) -> Self {
        Self {
            handle: Handle::new(),
            title: title.into(),
            x_title: String::new(),
            y_title: String::new(),
            x,
            y,
            contents: vec![0.0; x.bins * y.bins],
            outside: 0.0,
            entries: 0,
            attributes: DrawAttributes::default(),
        }
    }

    pub fn with_axis_titles(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_title = x.into();
        self.y_title = y.into();
        self
    }

    /// Fill one point; points outside either range are only counted as `outside`.
    pub fn fill(&mut self, x: f64, y: f64) {
        self.entries += 1;
        match (self.x.slot(x), self.y.slot(y)) {
            (BinSlot::Bin(i), BinSlot::Bin(j)) => self.contents[j * self.x.bins + i] += 1.0,
            _ => self.outside += 1.0,
        }
    }

    pub fn x_binning(&self) -> Binning {
        self.x
    }

    pub fn y_binning(&self) -> Binning {
        self.y
    }

    pub fn bin_content(&self, ix: usize, iy: usize) -> f64 {
        if ix >= self.x.bins || iy >= self.y.bins {
            return 0.0;
        }
        self.contents[iy * self.x.bins + ix]
    }

    pub fn outside(&self) -> f64 {
        self.outside
    }

    pub fn entries(&self) -> u64 {
        self.entries
    }

    pub fn maximum(&self) -> f64 {
        self.contents.iter().copied().fold(0.0, f64::max)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x.low, self.x.high, self.y.low, self.y.high)
    }
}

impl Decorable for Histogram2D {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_are_half_open() {
        let b = Binning::new(4, 0.0, 4.0).unwrap();
        assert_eq!(b.slot(0.0), BinSlot::Bin(0));
        assert_eq!(b.slot(3.999), BinSlot::Bin(3));
        assert_eq!(b.slot(4.0), BinSlot::Overflow);
        assert_eq!(b.slot(-0.1), BinSlot::Underflow);
        assert_eq!(b.slot(f64::NAN), BinSlot::Underflow);
    }

    #[test]
    fn rejects_bad_binning() {
        assert!(Binning::new(0, 0.0, 1.0).is_err());
        assert!(Binning::new(3, 1.0, 1.0).is_err());
    }
}
