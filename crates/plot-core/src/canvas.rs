// File: crates/plot-core/src/canvas.rs
// Summary: Grid composition of plot objects into pads and headless rendering (PNG, RGBA, PDF).

use std::path::Path;

use skia_safe as skia;

use crate::axis::Axis;
use crate::bounds::Bounds;
use crate::error::{Error, Result};
use crate::geometry::RectI32;
use crate::render::{draw_frame, DrawOption, Painter, Plottable};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Margins of each pad's frame.
    pub insets: Insets,
    pub theme: Theme,
    /// Text (titles, tick labels, legend labels). Disable for pixel-stable output.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

/// One grid cell as requested by the caller.
pub enum Cell<'a> {
    Single(&'a dyn Plottable, Option<String>),
    /// Members after the first are drawn in overlay ("same") mode.
    Overlay(Vec<&'a dyn Plottable>, Option<String>),
}

impl<'a> Cell<'a> {
    pub fn single(object: &'a dyn Plottable) -> Self {
        Cell::Single(object, None)
    }

    pub fn with_option(object: &'a dyn Plottable, option: impl Into<String>) -> Self {
        Cell::Single(object, Some(option.into()))
    }

    pub fn overlay(objects: Vec<&'a dyn Plottable>) -> Self {
        Cell::Overlay(objects, None)
    }

    pub fn overlay_with_option(objects: Vec<&'a dyn Plottable>, option: impl Into<String>) -> Self {
        Cell::Overlay(objects, Some(option.into()))
    }
}

struct Layer<'a> {
    object: &'a dyn Plottable,
    option: DrawOption,
}

#[derive(Default)]
struct Pad<'a> {
    layers: Vec<Layer<'a>>,
}

impl<'a> Pad<'a> {
    fn push(&mut self, object: &'a dyn Plottable, option: Option<&str>) {
        let mut opt = option.map(DrawOption::parse).unwrap_or_default().resolve(object.default_option());
        if !self.layers.is_empty() || object.is_annotation() {
            opt = opt.overlay();
        }
        self.layers.push(Layer { object, option: opt });
    }

    fn frame_source(&self) -> Option<&'a dyn Plottable> {
        self.layers.iter().map(|l| l.object).find(|o| !o.is_annotation())
    }

    fn bounds(&self) -> Option<Bounds> {
        Bounds::union_all(self.layers.iter().map(|l| l.object.bounds()))
    }
}

/// Plot objects arranged in a `columns` x `rows` grid of pads.
pub struct Canvas<'a> {
    columns: usize,
    rows: usize,
    pads: Vec<Pad<'a>>,
    pub options: RenderOptions,
}

/// Arrange `cells` row-major into a grid of `columns` columns and
/// `ceil(cells / columns)` rows.
pub fn compose<'a>(cells: Vec<Cell<'a>>, columns: usize) -> Result<Canvas<'a>> {
    if columns == 0 {
        return Err(Error::InvalidLayout("a canvas needs at least one column".into()));
    }
    let rows = cells.len().div_ceil(columns);
    let mut pads = Vec::with_capacity(cells.len());
    for cell in cells {
        let mut pad = Pad::default();
        match cell {
            Cell::Single(object, option) => pad.push(object, option.as_deref()),
            Cell::Overlay(objects, option) => {
                for object in objects {
                    pad.push(object, option.as_deref());
                }
            }
        }
        pads.push(pad);
    }
    Ok(Canvas { columns, rows, pads, options: RenderOptions::default() })
}

impl<'a> Canvas<'a> {
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn pad_count(&self) -> usize {
        self.pads.len()
    }

    /// Number of objects drawn in pad `index`.
    pub fn layer_count(&self, index: usize) -> Option<usize> {
        self.pads.get(index).map(|p| p.layers.len())
    }

    /// Draw `object` on top of pad `index` in overlay mode (e.g. a legend).
    pub fn add_to_pad(&mut self, index: usize, object: &'a dyn Plottable, option: Option<&str>) -> Result<()> {
        let count = self.pads.len();
        let pad = self
            .pads
            .get_mut(index)
            .ok_or_else(|| Error::InvalidLayout(format!("pad {index} out of range ({count} pads)")))?;
        pad.push(object, option);
        if let Some(last) = pad.layers.last_mut() {
            last.option = last.option.overlay();
        }
        Ok(())
    }

    /// Paint every pad onto `canvas` with the canvas' render options.
    pub fn draw(&self, canvas: &skia::Canvas) {
        let opts = &self.options;
        canvas.clear(opts.theme.background);
        let full = RectI32::from_ltwh(0, 0, opts.width, opts.height);
        for (i, pad) in self.pads.iter().enumerate() {
            let rect = full.grid_cell(self.columns, self.rows, i);
            draw_pad(canvas, rect, pad, opts);
        }
    }

    fn raster(&self) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((self.options.width, self.options.height))
            .ok_or(Error::Render("failed to create raster surface"))?;
        self.draw(surface.canvas());
        Ok(surface)
    }

    pub fn render_to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut surface = self.raster()?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(Error::Render("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Unpremultiplied RGBA8 pixels: `(pixels, width, height, row_stride)`.
    pub fn render_to_rgba8(&self) -> Result<(Vec<u8>, i32, i32, usize)> {
        let (w, h) = (self.options.width, self.options.height);
        let mut surface = self.raster()?;
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(Error::Render("read pixels failed"));
        }
        Ok((pixels, w, h, stride))
    }

    /// Single-page PDF document.
    pub fn render_to_pdf_bytes(&self) -> Result<Vec<u8>> {
        let mut out: Vec<u8> = Vec::new();
        {
            let document = skia::pdf::new_document(&mut out, None);
            let mut page = document.begin_page((self.options.width as f32, self.options.height as f32), None);
            self.draw(page.canvas());
            page.end_page().close();
        }
        Ok(out)
    }

    /// Write the canvas to `path`; the extension picks the format (`.png` or `.pdf`).
    /// Parent directories are created. A failed write leaves the file in an
    /// undefined state and is reported, never retried.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
        let bytes = match ext.as_str() {
            "png" => self.render_to_png_bytes()?,
            "pdf" => self.render_to_pdf_bytes()?,
            other => return Err(Error::UnsupportedFormat(other.to_string())),
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        tracing::info!(path = %path.display(), pads = self.pads.len(), "saved canvas");
        Ok(())
    }
}

/// Free-function form of [`Canvas::save`].
pub fn save(canvas: &Canvas<'_>, path: impl AsRef<Path>) -> Result<()> {
    canvas.save(path)
}

// ---- helpers ----------------------------------------------------------------

fn draw_pad(canvas: &skia::Canvas, rect: RectI32, pad: &Pad<'_>, opts: &RenderOptions) {
    let frame = rect.inset(&opts.insets);
    let bounds = pad.bounds().map(Bounds::framed).unwrap_or_default();
    let painter = Painter::new(canvas, rect, frame, bounds, &opts.theme, opts.draw_labels);

    if let Some(first) = pad.frame_source() {
        let (xt, yt) = first.axis_titles();
        let x_axis = Axis::new(xt, bounds.x_min, bounds.x_max);
        let y_axis = Axis::new(yt, bounds.y_min, bounds.y_max);
        draw_frame(&painter, &x_axis, &y_axis, first.title());
    }

    canvas.save();
    canvas.clip_rect(painter.frame_rect(), skia::ClipOp::Intersect, true);
    for layer in pad.layers.iter().filter(|l| !l.object.is_annotation()) {
        layer.object.paint(&painter, layer.option);
    }
    canvas.restore();

    for layer in pad.layers.iter().filter(|l| l.object.is_annotation()) {
        layer.object.paint(&painter, layer.option);
    }
}
