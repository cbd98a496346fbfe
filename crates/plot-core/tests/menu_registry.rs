// File: crates/plot-core/tests/menu_registry.rs
// Purpose: Style menu lookups and configuration registry definition/lookup order.

use plot_core::{ConfigName, ConfigurationRegistry, Error, StyleMenu};

#[test]
fn standard_menu_categories_in_order() {
    let menu = StyleMenu::standard();
    let cats: Vec<&str> = menu.categories().collect();
    assert_eq!(cats, vec!["color", "marker", "line", "width"]);
    assert_eq!(menu.values_for("color").unwrap().len(), 5);
    assert!(menu.contains("line", "dashed"));
    assert!(!menu.contains("line", "wavy"));
}

#[test]
fn validate_reports_unknown_category_and_value() {
    let menu = StyleMenu::standard();
    assert!(matches!(menu.validate("size", "big"), Err(Error::UnknownCategory(c)) if c == "size"));
    assert!(matches!(
        menu.validate("color", "green"),
        Err(Error::InvalidStyleValue { category, value }) if category == "color" && value == "green"
    ));
    menu.validate("marker", "star").expect("valid pair");
}

#[test]
fn define_then_get_returns_pairs_in_order() {
    let mut reg = ConfigurationRegistry::new();
    reg.define("data", [("color", "black"), ("marker", "circle")]);
    let pairs = reg.get(&"data".into()).unwrap();
    assert_eq!(pairs, &[("color".to_string(), "black".to_string()), ("marker".to_string(), "circle".to_string())]);
}

#[test]
fn names_follow_first_definition_and_redefine_replaces() {
    let mut reg = ConfigurationRegistry::new();
    reg.define("b", [("color", "red")]);
    reg.define(3usize, [("color", "blue")]);
    reg.define("a", [("color", "orange")]);
    reg.define("b", [("color", "violet")]);

    let names: Vec<String> = reg.names().iter().map(ToString::to_string).collect();
    assert_eq!(names, vec!["b", "3", "a"]);
    assert_eq!(reg.len(), 3);
    assert_eq!(reg.get(&"b".into()).unwrap()[0].1, "violet");
}

#[test]
fn unknown_configuration_is_an_error() {
    let reg = ConfigurationRegistry::new();
    assert!(reg.is_empty());
    let err = reg.get(&ConfigName::Named("missing".into())).unwrap_err();
    assert!(matches!(err, Error::UnknownConfiguration(ConfigName::Named(n)) if n == "missing"));
}

#[test]
fn lazy_define_accepts_invalid_pairs_but_checked_define_rejects() {
    let menu = StyleMenu::standard();
    let mut reg = ConfigurationRegistry::new();
    reg.define("odd", [("color", "green")]);
    assert!(reg.contains(&"odd".into()));

    let err = reg.define_checked("strict", [("color", "green")], &menu).unwrap_err();
    assert!(matches!(err, Error::InvalidStyleValue { .. }));
    assert!(!reg.contains(&"strict".into()));

    reg.define_checked("ok", [("color", "red"), ("width", "3")], &menu).unwrap();
    assert!(reg.contains(&"ok".into()));
}

#[test]
fn defaults_enumerate_every_combination() {
    let menu = StyleMenu::standard();
    let reg = ConfigurationRegistry::with_defaults(&menu);
    assert_eq!(reg.len(), 125);
    assert_eq!(reg.names()[0], ConfigName::Index(0));

    // Color varies fastest, then line, then marker.
    let first = reg.get(&0usize.into()).unwrap();
    assert!(first.contains(&("color".to_string(), "black".to_string())));
    assert!(first.contains(&("marker".to_string(), "circle".to_string())));
    assert!(first.contains(&("width".to_string(), "2".to_string())));
    let second = reg.get(&1usize.into()).unwrap();
    assert!(second.contains(&("color".to_string(), "red".to_string())));
    let sixth = reg.get(&5usize.into()).unwrap();
    assert!(sixth.contains(&("line".to_string(), "dashed".to_string())));

    for name in reg.names() {
        for (c, v) in reg.get(name).unwrap() {
            menu.validate(c, v).expect("default pairs are valid");
        }
    }
}
