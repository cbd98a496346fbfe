// File: crates/plot-core/src/menu.rs
// Summary: Immutable catalog of style categories and their allowed symbolic values.

use crate::error::{Error, Result};

pub const COLOR: &str = "color";
pub const MARKER: &str = "marker";
pub const LINE: &str = "line";
pub const WIDTH: &str = "width";

/// Category name -> ordered list of allowed values.
///
/// Built once at startup and passed by reference to whatever needs it; there is
/// no way to mutate a menu after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleMenu {
    entries: Vec<(String, Vec<String>)>,
}

impl StyleMenu {
    /// Build a menu from `(category, values)` entries. A repeated category keeps
    /// its first position and the last value list given for it.
    pub fn new<C, V, I>(entries: impl IntoIterator<Item = (C, I)>) -> Self
    where
        C: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = V>,
    {
        let mut out: Vec<(String, Vec<String>)> = Vec::new();
        for (category, values) in entries {
            let category = category.into();
            let values = values.into_iter().map(Into::into).collect();
            match out.iter_mut().find(|(c, _)| *c == category) {
                Some(slot) => slot.1 = values,
                None => out.push((category, values)),
            }
        }
        Self { entries: out }
    }

    /// The standard vocabulary: colors, markers, line dashes and line widths.
    pub fn standard() -> Self {
        Self::new([
            (COLOR, vec!["black", "red", "blue", "violet", "orange"]),
            (MARKER, vec!["circle", "square", "triangle", "star", "cross"]),
            (LINE, vec!["full", "dashed", "dotted", "dash-dot", "dashed-short"]),
            (WIDTH, vec!["1", "2", "3", "4"]),
        ])
    }

    /// Defined category names, in definition order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(c, _)| c.as_str())
    }

    pub fn values_for(&self, category: &str) -> Result<&[String]> {
        self.entries
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, v)| v.as_slice())
            .ok_or_else(|| Error::UnknownCategory(category.to_string()))
    }

    pub fn contains(&self, category: &str, value: &str) -> bool {
        self.values_for(category).is_ok_and(|vs| vs.iter().any(|v| v == value))
    }

    /// Check one `(category, value)` pair against the menu.
    pub fn validate(&self, category: &str, value: &str) -> Result<()> {
        if self.values_for(category)?.iter().any(|v| v == value) {
            Ok(())
        } else {
            Err(Error::InvalidStyleValue { category: category.to_string(), value: value.to_string() })
        }
    }
}

impl Default for StyleMenu {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_category_keeps_position() {
        let m = StyleMenu::new([("a", vec!["1"]), ("b", vec!["2"]), ("a", vec!["3"])]);
        assert_eq!(m.categories().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(m.values_for("a").unwrap(), &["3".to_string()]);
    }
}
