// File: crates/plot-core/src/render.rs
// Summary: Skia painting of pad frames and plot objects; draw options and the Plottable trait.

use skia_safe as skia;

use crate::axis::Axis;
use crate::bounds::Bounds;
use crate::decorate::{Decorable, DrawAttributes};
use crate::geometry::RectI32;
use crate::graph::{ErrorBars, Graph, MultiGraph};
use crate::grid::format_tick;
use crate::histogram::{Histogram1D, Histogram2D};
use crate::legend::{Legend, NdcBox, TextBox};
use crate::palette::MarkerShape;
use crate::scale::LinearScale;
use crate::theme::Theme;

/// Parsed drawing option string.
///
/// Case-insensitive flags: `L` line, `P` markers, `E` error bars, `SAME` overlay
/// on an existing frame. Other letters (such as `A`) are accepted and ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawOption {
    pub line: bool,
    pub markers: bool,
    pub errors: bool,
    pub same: bool,
}

impl DrawOption {
    pub fn parse(s: &str) -> Self {
        let upper = s.to_ascii_uppercase();
        let same = upper.contains("SAME");
        let rest = upper.replace("SAME", "");
        Self { line: rest.contains('L'), markers: rest.contains('P'), errors: rest.contains('E'), same }
    }

    pub fn line() -> Self {
        Self { line: true, ..Self::default() }
    }

    fn has_style(&self) -> bool {
        self.line || self.markers || self.errors
    }

    /// Fall back to `default`'s style flags when none were given; `same` is kept.
    pub fn resolve(self, default: DrawOption) -> Self {
        if self.has_style() { self } else { Self { same: self.same, ..default } }
    }

    pub fn overlay(mut self) -> Self {
        self.same = true;
        self
    }
}

/// Anything that can be drawn into a canvas pad.
pub trait Plottable {
    fn title(&self) -> &str {
        ""
    }
    fn axis_titles(&self) -> (&str, &str) {
        ("", "")
    }
    /// Data extents; `None` for objects that do not define a frame.
    fn bounds(&self) -> Option<Bounds>;
    /// Annotations draw over a pad in normalized coordinates, outside the frame clip.
    fn is_annotation(&self) -> bool {
        false
    }
    fn default_option(&self) -> DrawOption {
        DrawOption::line()
    }
    fn paint(&self, painter: &Painter<'_>, option: DrawOption);
}

/// Drawing context of one pad.
pub struct Painter<'c> {
    pub canvas: &'c skia::Canvas,
    pub pad: RectI32,
    pub frame: RectI32,
    pub x: LinearScale,
    pub y: LinearScale,
    pub theme: &'c Theme,
    pub draw_labels: bool,
}

impl<'c> Painter<'c> {
    pub fn new(canvas: &'c skia::Canvas, pad: RectI32, frame: RectI32, bounds: Bounds, theme: &'c Theme, draw_labels: bool) -> Self {
        let x = LinearScale::new(frame.left as f32, frame.right as f32, bounds.x_min, bounds.x_max);
        let y = LinearScale::new(frame.bottom as f32, frame.top as f32, bounds.y_min, bounds.y_max);
        Self { canvas, pad, frame, x, y, theme, draw_labels }
    }

    #[inline]
    pub fn map(&self, x: f64, y: f64) -> (f32, f32) {
        (self.x.to_px(x), self.y.to_px(y))
    }

    /// Pixel rect of a normalized pad box (y grows upward in NDC).
    pub fn ndc(&self, b: &NdcBox) -> skia::Rect {
        let (w, h) = (self.pad.width() as f32, self.pad.height() as f32);
        let l = self.pad.left as f32;
        let bottom = self.pad.bottom as f32;
        skia::Rect::from_ltrb(l + b.x0 * w, bottom - b.y1 * h, l + b.x1 * w, bottom - b.y0 * h)
    }

    pub fn frame_rect(&self) -> skia::Rect {
        let f = self.frame;
        skia::Rect::from_ltrb(f.left as f32, f.top as f32, f.right as f32, f.bottom as f32)
    }

    pub fn polyline(&self, points: impl IntoIterator<Item = (f64, f64)>, attrs: &DrawAttributes) {
        let mut path = skia::Path::new();
        let mut started = false;
        for (x, y) in points {
            if !x.is_finite() || !y.is_finite() { continue; }
            let p = self.map(x, y);
            if started { path.line_to(p); } else { path.move_to(p); started = true; }
        }
        if started {
            self.canvas.draw_path(&path, &stroke_paint(attrs));
        }
    }

    pub fn markers(&self, points: impl IntoIterator<Item = (f64, f64)>, attrs: &DrawAttributes) {
        for (x, y) in points {
            if !x.is_finite() || !y.is_finite() { continue; }
            draw_marker(self.canvas, self.map(x, y), attrs);
        }
    }

    /// Cross-shaped error bar around `(x, y)` with `(x_low, x_high, y_low, y_high)` extents.
    pub fn error_bar(&self, x: f64, y: f64, e: (f64, f64, f64, f64), attrs: &DrawAttributes) {
        let (exl, exh, eyl, eyh) = e;
        let mut paint = stroke_paint(attrs);
        paint.set_path_effect(None::<skia::PathEffect>);
        paint.set_stroke_width(attrs.line_width.min(2.0));
        if eyl > 0.0 || eyh > 0.0 {
            self.canvas.draw_line(self.map(x, y - eyl), self.map(x, y + eyh), &paint);
        }
        if exl > 0.0 || exh > 0.0 {
            self.canvas.draw_line(self.map(x - exl, y), self.map(x + exh, y), &paint);
        }
    }

    pub fn text(&self, s: &str, origin: (f32, f32), size: f32, color: skia::Color) {
        if !self.draw_labels || s.is_empty() { return; }
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(color);
        let mut font = skia::Font::default();
        font.set_size(size);
        self.canvas.draw_str(s, origin, &font, &paint);
    }

    fn text_width(&self, s: &str, size: f32) -> f32 {
        let mut font = skia::Font::default();
        font.set_size(size);
        font.measure_str(s, None).0
    }

    /// Box with theme fill and border, used by legends and text boxes.
    fn annotation_box(&self, rect: skia::Rect) {
        let mut fill = skia::Paint::default();
        fill.set_color(self.theme.box_fill);
        fill.set_style(skia::paint::Style::Fill);
        self.canvas.draw_rect(rect, &fill);
        let mut border = skia::Paint::default();
        border.set_color(self.theme.box_border);
        border.set_style(skia::paint::Style::Stroke);
        border.set_stroke_width(1.0);
        self.canvas.draw_rect(rect, &border);
    }
}

// ---- helpers ----------------------------------------------------------------

pub(crate) fn stroke_paint(attrs: &DrawAttributes) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(attrs.line_width);
    paint.set_color(attrs.line_color);
    paint.set_path_effect(attrs.line_dash.path_effect(attrs.line_width));
    paint
}

fn draw_marker(canvas: &skia::Canvas, (px, py): (f32, f32), attrs: &DrawAttributes) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(attrs.marker_color);
    let r = attrs.marker_size.max(1.0);

    match attrs.marker {
        MarkerShape::Circle => {
            canvas.draw_circle((px, py), r, &paint);
        }
        MarkerShape::Square => {
            canvas.draw_rect(skia::Rect::from_ltrb(px - r, py - r, px + r, py + r), &paint);
        }
        MarkerShape::TriangleUp => {
            let mut path = skia::Path::new();
            path.move_to((px, py - r * 1.2));
            path.line_to((px + r * 1.1, py + r * 0.8));
            path.line_to((px - r * 1.1, py + r * 0.8));
            path.close();
            canvas.draw_path(&path, &paint);
        }
        MarkerShape::Star => {
            let mut path = skia::Path::new();
            for k in 0..10 {
                let radius = if k % 2 == 0 { r * 1.4 } else { r * 0.6 };
                let a = -std::f32::consts::FRAC_PI_2 + k as f32 * std::f32::consts::PI / 5.0;
                let p = (px + radius * a.cos(), py + radius * a.sin());
                if k == 0 { path.move_to(p); } else { path.line_to(p); }
            }
            path.close();
            canvas.draw_path(&path, &paint);
        }
        MarkerShape::Cross => {
            let t = r * 0.35;
            canvas.draw_rect(skia::Rect::from_ltrb(px - r, py - t, px + r, py + t), &paint);
            canvas.draw_rect(skia::Rect::from_ltrb(px - t, py - r, px + t, py + r), &paint);
        }
    }
}

/// Grid, frame, ticks, tick labels, axis titles and pad title.
pub(crate) fn draw_frame(p: &Painter<'_>, x_axis: &Axis, y_axis: &Axis, title: &str) {
    let f = p.frame;
    let (l, t, r, b) = (f.left as f32, f.top as f32, f.right as f32, f.bottom as f32);
    let x_ticks = x_axis.ticks(((f.width() / 80).max(2)) as usize);
    let y_ticks = y_axis.ticks(((f.height() / 50).max(2)) as usize);

    let mut grid = skia::Paint::default();
    grid.set_color(p.theme.grid);
    grid.set_anti_alias(true);
    grid.set_stroke_width(1.0);
    for &x in &x_ticks {
        let px = p.x.to_px(x);
        p.canvas.draw_line((px, t), (px, b), &grid);
    }
    for &y in &y_ticks {
        let py = p.y.to_px(y);
        p.canvas.draw_line((l, py), (r, py), &grid);
    }

    let mut frame = skia::Paint::default();
    frame.set_color(p.theme.frame);
    frame.set_anti_alias(true);
    frame.set_style(skia::paint::Style::Stroke);
    frame.set_stroke_width(1.5);
    p.canvas.draw_rect(p.frame_rect(), &frame);

    let mut tick = skia::Paint::default();
    tick.set_color(p.theme.tick);
    tick.set_stroke_width(1.0);
    for &x in &x_ticks {
        let px = p.x.to_px(x);
        p.canvas.draw_line((px, b), (px, b - 6.0), &tick);
        let label = format_tick(x);
        p.text(&label, (px - p.text_width(&label, 11.0) * 0.5, b + 14.0), 11.0, p.theme.tick);
    }
    for &y in &y_ticks {
        let py = p.y.to_px(y);
        p.canvas.draw_line((l, py), (l + 6.0, py), &tick);
        let label = format_tick(y);
        p.text(&label, (l - 4.0 - p.text_width(&label, 11.0), py + 4.0), 11.0, p.theme.tick);
    }

    p.text(&x_axis.title, (r - p.text_width(&x_axis.title, 13.0), b + 32.0), 13.0, p.theme.axis_label);
    if p.draw_labels && !y_axis.title.is_empty() {
        p.canvas.save();
        p.canvas.translate((p.pad.left as f32 + 14.0, t + p.text_width(&y_axis.title, 13.0)));
        p.canvas.rotate(-90.0, None);
        p.text(&y_axis.title, (0.0, 0.0), 13.0, p.theme.axis_label);
        p.canvas.restore();
    }

    let cx = (p.pad.left + p.pad.width() / 2) as f32;
    p.text(title, (cx - p.text_width(title, 15.0) * 0.5, p.pad.top as f32 + 20.0), 15.0, p.theme.title);
}

// ---- plot objects ------------------------------------------------------------

impl Plottable for Graph {
    fn title(&self) -> &str {
        &self.title
    }
    fn axis_titles(&self) -> (&str, &str) {
        (&self.x_title, &self.y_title)
    }
    fn bounds(&self) -> Option<Bounds> {
        Graph::bounds(self)
    }
    fn paint(&self, painter: &Painter<'_>, option: DrawOption) {
        let attrs = self.attributes();
        if !matches!(self.errors(), ErrorBars::None) {
            for (i, (x, y)) in self.points().enumerate() {
                if let Some(e) = self.errors().at(i) {
                    painter.error_bar(x, y, e, attrs);
                }
            }
        }
        if option.line && self.len() >= 2 {
            painter.polyline(self.points(), attrs);
        }
        if option.markers {
            painter.markers(self.points(), attrs);
        }
    }
}

impl Plottable for MultiGraph {
    fn title(&self) -> &str {
        &self.title
    }
    fn axis_titles(&self) -> (&str, &str) {
        self.graphs().first().map(|g| (g.x_title.as_str(), g.y_title.as_str())).unwrap_or(("", ""))
    }
    fn bounds(&self) -> Option<Bounds> {
        MultiGraph::bounds(self)
    }
    fn paint(&self, painter: &Painter<'_>, option: DrawOption) {
        for g in self.graphs() {
            g.paint(painter, option);
        }
    }
}

impl Plottable for Histogram1D {
    fn title(&self) -> &str {
        &self.title
    }
    fn axis_titles(&self) -> (&str, &str) {
        (&self.x_title, &self.y_title)
    }
    fn bounds(&self) -> Option<Bounds> {
        Some(Histogram1D::bounds(self))
    }
    fn paint(&self, painter: &Painter<'_>, option: DrawOption) {
        let attrs = self.attributes();
        if option.line {
            // outline: baseline -> bin tops -> baseline
            let mut pts = Vec::with_capacity(self.bins() * 2 + 2);
            pts.push((self.low_edge(), 0.0));
            for i in 0..self.bins() {
                let c = self.bin_content(i);
                pts.push((self.bin_low_edge(i), c));
                pts.push((self.bin_low_edge(i + 1), c));
            }
            pts.push((self.high_edge(), 0.0));
            painter.polyline(pts, attrs);
        }
        let centers = || (0..self.bins()).map(|i| (self.bin_center(i), self.bin_content(i)));
        if option.errors {
            for i in 0..self.bins() {
                let e = self.bin_error(i);
                painter.error_bar(self.bin_center(i), self.bin_content(i), (0.0, 0.0, e, e), attrs);
            }
        }
        if option.markers || option.errors {
            painter.markers(centers(), attrs);
        }
    }
}

impl Plottable for Histogram2D {
    fn title(&self) -> &str {
        &self.title
    }
    fn axis_titles(&self) -> (&str, &str) {
        (&self.x_title, &self.y_title)
    }
    fn bounds(&self) -> Option<Bounds> {
        Some(Histogram2D::bounds(self))
    }
    fn default_option(&self) -> DrawOption {
        DrawOption::default()
    }
    fn paint(&self, painter: &Painter<'_>, _option: DrawOption) {
        let max = self.maximum();
        if max <= 0.0 { return; }
        let (xb, yb) = (self.x_binning(), self.y_binning());
        let mut cell = skia::Paint::default();
        cell.set_style(skia::paint::Style::Fill);
        for iy in 0..yb.bins {
            for ix in 0..xb.bins {
                let c = self.bin_content(ix, iy);
                if c <= 0.0 { continue; }
                let (x0, y0) = painter.map(xb.low_edge(ix), yb.low_edge(iy));
                let (x1, y1) = painter.map(xb.low_edge(ix + 1), yb.low_edge(iy + 1));
                cell.set_color(painter.theme.cell_color(c / max));
                painter.canvas.draw_rect(skia::Rect::from_ltrb(x0, y1, x1, y0), &cell);
            }
        }
    }
}

impl Plottable for Legend {
    fn bounds(&self) -> Option<Bounds> {
        None
    }
    fn is_annotation(&self) -> bool {
        true
    }
    fn default_option(&self) -> DrawOption {
        self.option
    }
    fn paint(&self, painter: &Painter<'_>, _option: DrawOption) {
        let rect = painter.ndc(&self.position);
        painter.annotation_box(rect);
        if self.entries.is_empty() { return; }

        let row_h = rect.height() / self.entries.len() as f32;
        let sample_w = (rect.width() * 0.25).min(36.0);
        for (k, entry) in self.entries.iter().enumerate() {
            let cy = rect.top + row_h * (k as f32 + 0.5);
            let (sx0, sx1) = (rect.left + 6.0, rect.left + 6.0 + sample_w);
            if self.option.line {
                painter.canvas.draw_line((sx0, cy), (sx1, cy), &stroke_paint(&entry.attributes));
            }
            if self.option.markers {
                draw_marker(painter.canvas, ((sx0 + sx1) * 0.5, cy), &entry.attributes);
            }
            painter.text(&entry.label, (sx1 + 6.0, cy + self.text_size * 0.35), self.text_size, painter.theme.axis_label);
        }
    }
}

impl Plottable for TextBox {
    fn bounds(&self) -> Option<Bounds> {
        None
    }
    fn is_annotation(&self) -> bool {
        true
    }
    fn default_option(&self) -> DrawOption {
        DrawOption::default()
    }
    fn paint(&self, painter: &Painter<'_>, _option: DrawOption) {
        let rect = painter.ndc(&self.position);
        painter.annotation_box(rect);
        if self.lines.is_empty() { return; }
        let row_h = rect.height() / self.lines.len() as f32;
        for (k, line) in self.lines.iter().enumerate() {
            let cy = rect.top + row_h * (k as f32 + 0.5);
            let w = painter.text_width(line, self.text_size);
            painter.text(line, (rect.center_x() - w * 0.5, cy + self.text_size * 0.35), self.text_size, painter.theme.axis_label);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags_case_insensitively() {
        let o = DrawOption::parse("samePl");
        assert!(o.same && o.line && o.markers && !o.errors);
        assert_eq!(DrawOption::parse("AL"), DrawOption::line());
    }

    #[test]
    fn resolve_keeps_same() {
        let o = DrawOption::parse("same").resolve(DrawOption::line());
        assert!(o.same && o.line);
        let explicit = DrawOption::parse("E").resolve(DrawOption::line());
        assert!(explicit.errors && !explicit.line);
    }
}
