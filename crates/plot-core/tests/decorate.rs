// File: crates/plot-core/tests/decorate.rs
// Purpose: Style application: translation to draw attributes, recorded state and failure modes.

use plot_core::{
    build_series, ConfigName, ConfigurationRegistry, Decorable, Error, Graph, LineDash, MarkerShape, Palette,
    StyleApplier, StyleMenu,
};
use skia_safe as skia;

fn graph() -> Graph {
    build_series(&[vec![0.0, 1.0, 2.0], vec![1.0, 4.0, 9.0]], "g").unwrap()
}

#[test]
fn every_menu_pair_applies_and_is_recorded() {
    let menu = StyleMenu::standard();
    let mut applier = StyleApplier::new(&menu);
    let mut g = graph();
    for category in menu.categories() {
        for value in menu.values_for(category).unwrap() {
            applier.apply_option(&mut g, category, value).unwrap();
            assert_eq!(applier.current_value(&g, category), Some(value.as_str()));
        }
    }
}

#[test]
fn color_sets_line_and_marker_color() {
    let menu = StyleMenu::standard();
    let mut applier = StyleApplier::new(&menu);
    let mut g = graph();
    applier.apply_option(&mut g, "color", "red").unwrap();
    let red = skia::Color::from_argb(255, 255, 0, 0);
    assert_eq!(g.attributes().line_color, red);
    assert_eq!(g.attributes().marker_color, red);
}

#[test]
fn marker_line_and_width_translate() {
    let menu = StyleMenu::standard();
    let mut applier = StyleApplier::new(&menu);
    let mut g = graph();
    applier.apply_option(&mut g, "marker", "star").unwrap();
    applier.apply_option(&mut g, "line", "dotted").unwrap();
    applier.apply_option(&mut g, "width", "3").unwrap();
    assert_eq!(g.attributes().marker, MarkerShape::Star);
    assert_eq!(g.attributes().line_dash, LineDash::Dotted);
    assert_eq!(g.attributes().line_width, 3.0);
}

#[test]
fn never_decorated_object_has_no_value() {
    let menu = StyleMenu::standard();
    let applier = StyleApplier::new(&menu);
    let g = graph();
    assert_eq!(applier.current_value(&g, "color"), None);
    assert!(applier.decoration(&g).is_none());
}

#[test]
fn unknown_category_and_invalid_value_leave_object_untouched() {
    let menu = StyleMenu::standard();
    let mut applier = StyleApplier::new(&menu);
    let mut g = graph();
    let before = *g.attributes();

    assert!(matches!(applier.apply_option(&mut g, "size", "big"), Err(Error::UnknownCategory(_))));
    assert!(matches!(applier.apply_option(&mut g, "color", "green"), Err(Error::InvalidStyleValue { .. })));
    assert_eq!(*g.attributes(), before);
    assert_eq!(applier.current_value(&g, "color"), None);
}

#[test]
fn palette_gap_is_unsupported_value() {
    let menu = StyleMenu::standard();
    let mut applier = StyleApplier::with_palette(&menu, Palette::skia().without("color", "violet"));
    let mut g = graph();
    let err = applier.apply_option(&mut g, "color", "violet").unwrap_err();
    assert!(matches!(err, Error::UnsupportedValue { category, value } if category == "color" && value == "violet"));
    assert_eq!(applier.current_value(&g, "color"), None);
}

#[test]
fn later_configuration_wins_per_category() {
    let menu = StyleMenu::standard();
    let mut reg = ConfigurationRegistry::new();
    reg.define("A", [("color", "red"), ("marker", "circle")]);
    reg.define("B", [("color", "blue"), ("marker", "square")]);

    let mut applier = StyleApplier::new(&menu);
    let mut g = graph();
    applier.apply_named(&mut g, &reg, &"A".into()).unwrap();
    applier.apply_named(&mut g, &reg, &"B".into()).unwrap();

    assert_eq!(applier.current_value(&g, "color"), Some("blue"));
    assert_eq!(applier.current_value(&g, "marker"), Some("square"));
    assert_eq!(g.attributes().marker, MarkerShape::Square);
}

#[test]
fn configuration_failure_keeps_earlier_pairs() {
    let menu = StyleMenu::standard();
    let mut applier = StyleApplier::new(&menu);
    let mut g = graph();
    let pairs = vec![
        ("color".to_string(), "orange".to_string()),
        ("marker".to_string(), "hexagon".to_string()),
        ("line".to_string(), "dashed".to_string()),
    ];
    let err = applier.apply_configuration(&mut g, &pairs).unwrap_err();
    assert!(matches!(err, Error::InvalidStyleValue { .. }));
    assert_eq!(applier.current_value(&g, "color"), Some("orange"));
    assert_eq!(applier.current_value(&g, "line"), None);
    assert_eq!(g.attributes().line_dash, LineDash::Solid);
}

#[test]
fn unknown_configuration_name() {
    let menu = StyleMenu::standard();
    let reg = ConfigurationRegistry::new();
    let mut applier = StyleApplier::new(&menu);
    let mut g = graph();
    let err = applier.apply_named(&mut g, &reg, &ConfigName::Index(7)).unwrap_err();
    assert!(matches!(err, Error::UnknownConfiguration(ConfigName::Index(7))));
}

#[test]
fn configure_assigns_defaults_in_order() {
    let menu = StyleMenu::standard();
    let reg = ConfigurationRegistry::with_defaults(&menu);
    let mut applier = StyleApplier::new(&menu);
    let (mut a, mut b) = (graph(), graph());
    applier.configure(&mut [&mut a, &mut b], &reg, None).unwrap();
    assert_eq!(applier.current_value(&a, "color"), Some("black"));
    assert_eq!(applier.current_value(&b, "color"), Some("red"));
}

#[test]
fn configure_needs_one_configuration_per_object() {
    let menu = StyleMenu::standard();
    let mut reg = ConfigurationRegistry::new();
    reg.define("only", [("color", "blue")]);
    let mut applier = StyleApplier::new(&menu);
    let (mut a, mut b) = (graph(), graph());
    let err = applier.configure(&mut [&mut a, &mut b], &reg, None).unwrap_err();
    assert!(matches!(err, Error::NotEnoughConfigurations { objects: 2, available: 1 }));
    assert!(applier.decoration(&a).is_none());
}

#[test]
fn clone_starts_undecorated() {
    let menu = StyleMenu::standard();
    let mut applier = StyleApplier::new(&menu);
    let mut g = graph();
    applier.apply_option(&mut g, "color", "blue").unwrap();

    let copy = g.clone();
    assert_ne!(copy.id(), g.id());
    assert_eq!(copy.attributes().line_color, g.attributes().line_color);
    assert_eq!(applier.current_value(&copy, "color"), None);

    let forgotten = applier.forget(&g).unwrap();
    assert_eq!(forgotten.get("color").map(String::as_str), Some("blue"));
    assert_eq!(applier.current_value(&g, "color"), None);
}
