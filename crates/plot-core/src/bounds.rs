// File: crates/plot-core/src/bounds.rs
// Summary: Data-space extents of plot objects and autoscale helpers for pad frames.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self { x_min, x_max, y_min, y_max }
    }

    /// Extents of a set of points, ignoring non-finite coordinates.
    /// `None` when no finite point exists.
    pub fn of_points(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for (x, y) in points {
            if !x.is_finite() || !y.is_finite() { continue; }
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return None;
        }
        Some(Self { x_min, x_max, y_min, y_max })
    }

    pub fn union(self, other: Self) -> Self {
        Self {
            x_min: self.x_min.min(other.x_min),
            x_max: self.x_max.max(other.x_max),
            y_min: self.y_min.min(other.y_min),
            y_max: self.y_max.max(other.y_max),
        }
    }

    /// Union of every `Some` in `all`.
    pub fn union_all(all: impl IntoIterator<Item = Option<Self>>) -> Option<Self> {
        all.into_iter().flatten().reduce(Self::union)
    }

    /// Frame range: degenerate spans are widened to 1 and Y gets a 5% margin on
    /// both sides, except that a zero lower edge stays at zero.
    pub fn framed(self) -> Self {
        let mut b = self;
        if (b.x_max - b.x_min).abs() < 1e-9 { b.x_min -= 0.5; b.x_max += 0.5; }
        if (b.y_max - b.y_min).abs() < 1e-9 { b.y_max = b.y_min + 1.0; }
        let ym = (b.y_max - b.y_min) * 0.05;
        if b.y_min != 0.0 { b.y_min -= ym; }
        b.y_max += ym;
        b
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_non_finite() {
        let b = Bounds::of_points([(0.0, 1.0), (f64::NAN, 9.0), (2.0, -1.0)]).unwrap();
        assert_eq!(b, Bounds::new(0.0, 2.0, -1.0, 1.0));
        assert!(Bounds::of_points(std::iter::empty()).is_none());
    }

    #[test]
    fn framed_keeps_zero_floor() {
        let b = Bounds::new(0.0, 10.0, 0.0, 100.0).framed();
        assert_eq!(b.y_min, 0.0);
        assert!((b.y_max - 105.0).abs() < 1e-9);
    }
}
