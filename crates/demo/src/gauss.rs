// File: crates/demo/src/gauss.rs
// Summary: Seeded LCG with Box-Muller normal samples for reproducible demo data.

#[derive(Clone)]
pub struct Lcg(u64);

impl Lcg {
    pub fn seed(seed: u64) -> Self {
        Self(seed)
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.0 = self.0.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 32) as u32
    }

    #[inline]
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX)
    }

    /// Normal sample with the given mean and standard deviation.
    pub fn gauss(&mut self, mean: f64, sigma: f64) -> f64 {
        let u1 = self.next_f64().max(f64::MIN_POSITIVE);
        let u2 = self.next_f64();
        mean + sigma * (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }

    pub fn samples(&mut self, n: usize, mean: f64, sigma: f64) -> Vec<f64> {
        (0..n).map(|_| self.gauss(mean, sigma)).collect()
    }
}
