// File: crates/plot-core/src/lib.rs
// Summary: Core library entry point; exports the public API for styling, building and composing plots.

pub mod error;
pub mod menu;
pub mod registry;
pub mod palette;
pub mod decorate;
pub mod bounds;
pub mod histogram;
pub mod graph;
pub mod table;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod theme;
pub mod legend;
pub mod render;
pub mod canvas;

pub use error::{Error, Result};
pub use menu::StyleMenu;
pub use registry::{ConfigName, ConfigurationRegistry, StylePair};
pub use palette::{LineDash, MarkerShape, NativeStyle, Palette};
pub use decorate::{Decorable, DrawAttributes, Handle, ObjectId, StyleApplier};
pub use bounds::Bounds;
pub use histogram::{build_histogram, scale_to_reference, BinSlot, Binning, Histogram1D, Histogram2D};
pub use graph::{build_asymmetric_series, build_series, graph_from_histogram, ErrorBars, Graph, MultiGraph};
pub use table::{column_histogram, column_histogram2d, from_mapping, reduce, to_mapping, write_mapping, ColumnMap, Table};
pub use axis::Axis;
pub use theme::Theme;
pub use legend::{Legend, NdcBox, TextBox};
pub use render::{DrawOption, Plottable};
pub use canvas::{compose, save, Canvas, Cell, RenderOptions};
