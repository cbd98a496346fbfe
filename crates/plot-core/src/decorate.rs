// File: crates/plot-core/src/decorate.rs
// Summary: Decoration of plot objects: object handles, draw attributes and the style applier.
// Notes:
// - Decoration state (the last symbolic value applied per category) lives in a
//   side table owned by `StyleApplier`, keyed by the object's `ObjectId`.
// - Cloning a plot object allocates a fresh id, so a clone starts undecorated
//   even though its draw attributes are copied.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};

use skia_safe as skia;

use crate::error::{Error, Result};
use crate::menu::StyleMenu;
use crate::palette::{LineDash, MarkerShape, NativeStyle, Palette};
use crate::registry::{ConfigName, ConfigurationRegistry, StylePair};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a plot object in the decoration side table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl ObjectId {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Owned identity slot embedded in every plot object.
#[derive(Debug)]
pub struct Handle(ObjectId);

impl Handle {
    pub fn new() -> Self {
        Self(ObjectId(NEXT_ID.fetch_add(1, Ordering::Relaxed)))
    }

    pub fn id(&self) -> ObjectId {
        self.0
    }
}

impl Default for Handle {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Handle {
    fn clone(&self) -> Self {
        Self::new()
    }
}

/// Rendering attributes shared by every decorable plot object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawAttributes {
    pub line_color: skia::Color,
    pub marker_color: skia::Color,
    pub marker: MarkerShape,
    pub line_dash: LineDash,
    pub line_width: f32,
    pub marker_size: f32,
}

impl Default for DrawAttributes {
    fn default() -> Self {
        Self {
            line_color: skia::Color::from_argb(255, 0, 0, 0),
            marker_color: skia::Color::from_argb(255, 0, 0, 0),
            marker: MarkerShape::Circle,
            line_dash: LineDash::Solid,
            line_width: 2.0,
            marker_size: 4.0,
        }
    }
}

/// A plot object whose visual state can be decorated.
pub trait Decorable {
    fn id(&self) -> ObjectId;
    fn attributes(&self) -> &DrawAttributes;
    fn attributes_mut(&mut self) -> &mut DrawAttributes;
}

/// Recorded decoration: category -> last applied value.
pub type Decoration = BTreeMap<String, String>;

/// Applies symbolic styles to plot objects and remembers what was applied.
pub struct StyleApplier<'m> {
    menu: &'m StyleMenu,
    palette: Palette,
    decorations: HashMap<ObjectId, Decoration>,
}

impl<'m> StyleApplier<'m> {
    /// Applier translating through the default Skia palette.
    pub fn new(menu: &'m StyleMenu) -> Self {
        Self::with_palette(menu, Palette::skia())
    }

    pub fn with_palette(menu: &'m StyleMenu, palette: Palette) -> Self {
        Self { menu, palette, decorations: HashMap::new() }
    }

    pub fn menu(&self) -> &StyleMenu {
        self.menu
    }

    /// Validate, translate and apply one style setting, then record it.
    ///
    /// `color` sets both line and marker color; `marker` the marker shape;
    /// `line` the dash pattern; `width` the line width.
    pub fn apply_option<T: Decorable + ?Sized>(&mut self, object: &mut T, category: &str, value: &str) -> Result<()> {
        self.menu.validate(category, value)?;
        let native = self.palette.translate(category, value)?;

        let attrs = object.attributes_mut();
        match native {
            NativeStyle::Color(c) => {
                attrs.line_color = c;
                attrs.marker_color = c;
            }
            NativeStyle::Marker(m) => attrs.marker = m,
            NativeStyle::Dash(d) => attrs.line_dash = d,
            NativeStyle::Width(w) => attrs.line_width = w,
        }

        tracing::debug!(object = object.id().get(), category, value, "apply style option");
        self.decorations
            .entry(object.id())
            .or_default()
            .insert(category.to_string(), value.to_string());
        Ok(())
    }

    /// Apply `pairs` in order.
    ///
    /// Not atomic: the first failing pair aborts the remaining ones and the
    /// pairs already applied stay applied, so the object may be left partially
    /// decorated when an error is returned.
    pub fn apply_configuration<T: Decorable + ?Sized>(&mut self, object: &mut T, pairs: &[StylePair]) -> Result<()> {
        for (category, value) in pairs {
            self.apply_option(object, category, value)?;
        }
        Ok(())
    }

    /// Look up `name` in `registry` and apply it; same partial-failure rules as
    /// [`Self::apply_configuration`].
    pub fn apply_named<T: Decorable + ?Sized>(
        &mut self,
        object: &mut T,
        registry: &ConfigurationRegistry,
        name: &ConfigName,
    ) -> Result<()> {
        let pairs = registry.get(name)?;
        self.apply_configuration(object, pairs)
    }

    /// Give each object its own configuration: object `i` gets `names[i]`, or
    /// the registry's `i`-th configuration when `names` is `None`.
    ///
    /// Fails up front with [`Error::NotEnoughConfigurations`] when there are
    /// fewer configurations than objects. A failure while applying leaves
    /// earlier objects decorated.
    pub fn configure(
        &mut self,
        objects: &mut [&mut dyn Decorable],
        registry: &ConfigurationRegistry,
        names: Option<&[ConfigName]>,
    ) -> Result<()> {
        let names = names.unwrap_or_else(|| registry.names());
        if names.len() < objects.len() {
            return Err(Error::NotEnoughConfigurations { objects: objects.len(), available: names.len() });
        }
        for (object, name) in objects.iter_mut().zip(names) {
            self.apply_named(&mut **object, registry, name)?;
        }
        Ok(())
    }

    /// Last value applied for `category` on `object`, `None` if never applied.
    pub fn current_value<T: Decorable + ?Sized>(&self, object: &T, category: &str) -> Option<&str> {
        self.decorations.get(&object.id())?.get(category).map(String::as_str)
    }

    /// Full decoration state of `object`, `None` if it was never decorated.
    pub fn decoration<T: Decorable + ?Sized>(&self, object: &T) -> Option<&Decoration> {
        self.decorations.get(&object.id())
    }

    /// Drop the recorded decoration of `object`; its draw attributes are kept.
    pub fn forget<T: Decorable + ?Sized>(&mut self, object: &T) -> Option<Decoration> {
        self.decorations.remove(&object.id())
    }
}
