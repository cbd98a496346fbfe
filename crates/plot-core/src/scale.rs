// File: crates/plot-core/src/scale.rs
// Summary: Linear data-to-pixel transforms for pad frames.

/// Maps `[v_lo, v_hi]` onto `[px_lo, px_hi]`. For a Y axis pass the frame bottom
/// as `px_lo` so larger values go up.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub px_lo: f32,
    pub px_hi: f32,
    pub v_lo: f64,
    pub v_hi: f64,
}

impl LinearScale {
    pub fn new(px_lo: f32, px_hi: f32, v_lo: f64, mut v_hi: f64) -> Self {
        if (v_hi - v_lo).abs() < 1e-12 { v_hi = v_lo + 1.0; }
        Self { px_lo, px_hi, v_lo, v_hi }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.v_lo) / (self.v_hi - self.v_lo);
        self.px_lo + t as f32 * (self.px_hi - self.px_lo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn y_scale_is_inverted() {
        let s = LinearScale::new(200.0, 0.0, 0.0, 10.0);
        assert_eq!(s.to_px(0.0), 200.0);
        assert_eq!(s.to_px(10.0), 0.0);
        assert_eq!(s.to_px(5.0), 100.0);
    }
}
