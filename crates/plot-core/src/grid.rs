// File: crates/plot-core/src/grid.rs
// Summary: Grid/tick layout helpers.

/// Round tick positions (1/2/5 x 10^k spacing) covering `[min, max]`, aiming at
/// roughly `target` ticks.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let span = max - min;
    if !span.is_finite() || span <= 0.0 || target == 0 { return vec![min]; }
    let raw = span / target as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let step = (if norm < 1.5 { 1.0 } else if norm < 3.5 { 2.0 } else if norm < 7.5 { 5.0 } else { 10.0 }) * mag;

    let first = (min / step).ceil() * step;
    let mut out = Vec::new();
    let mut k = 0.0;
    loop {
        let v = first + k * step;
        if v > max + step * 1e-9 { break; }
        // snap -0.0 and float noise near zero
        out.push(if v.abs() < step * 1e-9 { 0.0 } else { v });
        k += 1.0;
    }
    out
}

/// Short tick label: integers without decimals, otherwise up to 3 significant decimals.
pub fn format_tick(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        let s = format!("{v:.3}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_are_round() {
        assert_eq!(nice_ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(nice_ticks(-10.0, 10.0, 4), vec![-10.0, -5.0, 0.0, 5.0, 10.0]);
    }

    #[test]
    fn tick_labels() {
        assert_eq!(format_tick(2.0), "2");
        assert_eq!(format_tick(0.25), "0.25");
    }
}
