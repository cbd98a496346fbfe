// File: crates/plot-core/src/theme.rs
// Summary: Light/Dark theming for canvas, frame and annotation colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub frame: skia::Color,
    pub grid: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub box_fill: skia::Color,
    pub box_border: skia::Color,
    /// Cell color of an empty / full 2D histogram bin; contents interpolate between them.
    pub cells_low: skia::Color,
    pub cells_high: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            frame: skia::Color::from_argb(255, 0, 0, 0),
            grid: skia::Color::from_argb(255, 225, 225, 230),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 60, 60, 70),
            title: skia::Color::from_argb(255, 0, 0, 0),
            box_fill: skia::Color::from_argb(255, 255, 255, 255),
            box_border: skia::Color::from_argb(255, 0, 0, 0),
            cells_low: skia::Color::from_argb(255, 230, 238, 255),
            cells_high: skia::Color::from_argb(255, 20, 40, 160),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            frame: skia::Color::from_argb(255, 180, 180, 190),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 235, 235, 245),
            box_fill: skia::Color::from_argb(255, 30, 30, 34),
            box_border: skia::Color::from_argb(255, 180, 180, 190),
            cells_low: skia::Color::from_argb(255, 30, 40, 70),
            cells_high: skia::Color::from_argb(255, 255, 230, 70),
        }
    }

    /// Linear blend between `cells_low` and `cells_high`; `t` is clamped to [0, 1].
    pub fn cell_color(&self, t: f64) -> skia::Color {
        let t = t.clamp(0.0, 1.0) as f32;
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        let (lo, hi) = (self.cells_low, self.cells_high);
        skia::Color::from_argb(255, mix(lo.r(), hi.r()), mix(lo.g(), hi.g()), mix(lo.b(), hi.b()))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
