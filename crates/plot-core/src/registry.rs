// File: crates/plot-core/src/registry.rs
// Summary: Named, ordered bundles of (category, value) style settings, independent of rendering.

use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::menu::{StyleMenu, COLOR, LINE, MARKER, WIDTH};

/// One `(category, value)` style setting.
pub type StylePair = (String, String);

/// Identifier of a configuration: either a symbolic name or an integer slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConfigName {
    Index(usize),
    Named(String),
}

impl fmt::Display for ConfigName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigName::Index(i) => write!(f, "{i}"),
            ConfigName::Named(s) => f.write_str(s),
        }
    }
}

impl From<usize> for ConfigName {
    fn from(i: usize) -> Self {
        ConfigName::Index(i)
    }
}

impl From<&str> for ConfigName {
    fn from(s: &str) -> Self {
        ConfigName::Named(s.to_string())
    }
}

impl From<String> for ConfigName {
    fn from(s: String) -> Self {
        ConfigName::Named(s)
    }
}

/// Store of named configurations.
///
/// `names()` reports configurations in the order they were first defined;
/// redefining a name replaces its pairs but keeps its position.
#[derive(Clone, Debug, Default)]
pub struct ConfigurationRegistry {
    order: Vec<ConfigName>,
    configs: HashMap<ConfigName, Vec<StylePair>>,
}

impl ConfigurationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with integer-named configurations `0..N` that
    /// enumerate every marker x line x color combination of `menu`, each drawn
    /// with width `2`. Categories missing from the menu are left out of the pairs.
    pub fn with_defaults(menu: &StyleMenu) -> Self {
        let mut reg = Self::new();
        let values = |c: &str| menu.values_for(c).map(<[String]>::to_vec).unwrap_or_default();
        let (colors, markers, lines) = (values(COLOR), values(MARKER), values(LINE));
        let width = menu.contains(WIDTH, "2").then(|| (WIDTH.to_string(), "2".to_string()));

        let mut i = 0usize;
        for marker in &markers {
            for line in &lines {
                for color in &colors {
                    let mut pairs = vec![
                        (COLOR.to_string(), color.clone()),
                        (MARKER.to_string(), marker.clone()),
                        (LINE.to_string(), line.clone()),
                    ];
                    pairs.extend(width.clone());
                    reg.define(i, pairs);
                    i += 1;
                }
            }
        }
        reg
    }

    /// Store `pairs` under `name`, replacing any previous configuration of that
    /// name. Pairs are not checked against a menu here; invalid pairs surface
    /// when the configuration is applied. See [`Self::define_checked`].
    pub fn define<N, C, V>(&mut self, name: N, pairs: impl IntoIterator<Item = (C, V)>)
    where
        N: Into<ConfigName>,
        C: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        let pairs: Vec<StylePair> = pairs.into_iter().map(|(c, v)| (c.into(), v.into())).collect();
        tracing::debug!(config = %name, pairs = pairs.len(), "define configuration");
        if self.configs.insert(name.clone(), pairs).is_none() {
            self.order.push(name);
        }
    }

    /// Like [`Self::define`] but validates every pair against `menu` first.
    /// Nothing is stored when a pair is rejected.
    pub fn define_checked<N, C, V>(
        &mut self,
        name: N,
        pairs: impl IntoIterator<Item = (C, V)>,
        menu: &StyleMenu,
    ) -> Result<()>
    where
        N: Into<ConfigName>,
        C: Into<String>,
        V: Into<String>,
    {
        let pairs: Vec<StylePair> = pairs.into_iter().map(|(c, v)| (c.into(), v.into())).collect();
        for (category, value) in &pairs {
            menu.validate(category, value)?;
        }
        self.define(name, pairs);
        Ok(())
    }

    pub fn names(&self) -> &[ConfigName] {
        &self.order
    }

    pub fn get(&self, name: &ConfigName) -> Result<&[StylePair]> {
        self.configs
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::UnknownConfiguration(name.clone()))
    }

    pub fn contains(&self, name: &ConfigName) -> bool {
        self.configs.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
