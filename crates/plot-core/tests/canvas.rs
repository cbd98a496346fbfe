// File: crates/plot-core/tests/canvas.rs
// Purpose: Grid composition, overlay layering and headless output (PNG, RGBA, PDF, save).

use plot_core::{
    build_histogram, build_series, compose, Canvas, Cell, Decorable, Error, Graph, Legend, Plottable, RenderOptions,
    TextBox,
};

fn graph(title: &str) -> Graph {
    build_series(&[vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 0.5, 2.0]], title).unwrap()
}

fn small(canvas: Canvas<'_>) -> Canvas<'_> {
    canvas.with_options(RenderOptions { width: 320, height: 200, draw_labels: false, ..RenderOptions::default() })
}

#[test]
fn rows_are_ceiling_of_count_over_columns() {
    let gs: Vec<Graph> = (0..5).map(|i| graph(&format!("g{i}"))).collect();
    for (columns, rows) in [(1usize, 5usize), (2, 3), (3, 2), (5, 1), (8, 1)] {
        let cells = gs.iter().map(|g| Cell::single(g)).collect();
        let c = compose(cells, columns).unwrap();
        assert_eq!((c.columns(), c.rows(), c.pad_count()), (columns, rows, 5));
    }
}

#[test]
fn zero_columns_is_invalid() {
    let g = graph("g");
    assert!(matches!(compose(vec![Cell::single(&g)], 0), Err(Error::InvalidLayout(_))));
}

#[test]
fn empty_canvas_has_no_rows() {
    let c = compose(Vec::new(), 2).unwrap();
    assert_eq!((c.rows(), c.pad_count()), (0, 0));
    assert!(small(c).render_to_png_bytes().is_ok());
}

#[test]
fn overlay_keeps_every_member_in_one_pad() {
    let (a, b) = (graph("a"), graph("b"));
    let h = build_histogram(&[0.5, 1.5, 1.7], "h", 3, Some(0.0), Some(3.0)).unwrap();
    let legend = Legend::from_objects(&[&a as &dyn Decorable, &b], &["a", "b"], "L").unwrap();
    let objects: Vec<&dyn Plottable> = vec![&a, &b, &h];
    let mut c = compose(vec![Cell::overlay(objects), Cell::single(&a)], 2).unwrap();
    assert_eq!(c.layer_count(0), Some(3));
    assert_eq!(c.layer_count(1), Some(1));

    c.add_to_pad(0, &legend, None).unwrap();
    assert_eq!(c.layer_count(0), Some(4));
    assert!(matches!(c.add_to_pad(2, &legend, None), Err(Error::InvalidLayout(_))));
}

#[test]
fn legend_needs_one_label_per_object() {
    let a = graph("a");
    let err = Legend::from_objects(&[&a as &dyn Decorable], &["a", "b"], "PL").unwrap_err();
    assert!(matches!(err, Error::ArityError { found: 2, .. }));
}

#[test]
fn png_bytes_have_signature() {
    let g = graph("g");
    let text = TextBox::new(["mean = 1.0"]);
    let c = small(compose(vec![Cell::with_option(&g, "AP"), Cell::single(&text)], 2).unwrap());
    let bytes = c.render_to_png_bytes().expect("png");
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn rgba_buffer_matches_dimensions() {
    let g = graph("g");
    let c = small(compose(vec![Cell::single(&g)], 1).unwrap());
    let (px, w, h, stride) = c.render_to_rgba8().expect("rgba");
    assert_eq!((w, h), (320, 200));
    assert_eq!(px.len(), w as usize * h as usize * 4);
    assert_eq!(stride, w as usize * 4);
    // Opaque white background in the top-left corner.
    assert_eq!(&px[..4], &[255, 255, 255, 255]);
}

#[test]
fn pdf_bytes_have_header() {
    let g = graph("g");
    let c = small(compose(vec![Cell::single(&g)], 1).unwrap());
    let bytes = c.render_to_pdf_bytes().expect("pdf");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn save_picks_format_from_extension() {
    let g = graph("g");
    let c = small(compose(vec![Cell::single(&g)], 1).unwrap());
    let dir = std::path::PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("canvas");
    let png = dir.join("one.png");
    c.save(&png).expect("save png");
    let written = std::fs::read(&png).expect("read png");
    let img = image::load_from_memory(&written).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (320, 200));

    let txt = dir.join("one.txt");
    assert!(matches!(c.save(&txt), Err(Error::UnsupportedFormat(ext)) if ext == "txt"));
    assert!(!txt.exists());
}
