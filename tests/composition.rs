//! Integration tests for rule composition and class minting.
//!
//! Tests that go through the process-wide registry use names unique to this
//! file, since minted names are never released.

use serde_json::json;
use stylish::{
    css, css_class, css_class_with, css_values, style, ClassError, ClassName, ClassRegistry,
    Composable, Rule, Rules, Style, Value,
};

fn rules(value: serde_json::Value) -> Rules {
    serde_json::from_value(value).expect("valid rule tree")
}

// =========================================================================
// style / append
// =========================================================================

#[test]
fn test_append_equals_shallow_merge() {
    let a = rules(json!({
        ".a": {"color": "red"},
        "@media print": {".a": {"display": "none"}}
    }));
    let b = rules(json!({
        "@media print": {".b": {"display": "block"}},
        ".b": {"margin": 0}
    }));

    let set = style(a).append(b);

    assert_eq!(
        serde_json::to_value(set.rules()).unwrap(),
        json!({
            ".a": {"color": "red"},
            "@media print": {".b": {"display": "block"}},
            ".b": {"margin": 0}
        })
    );
}

#[test]
fn test_append_chain_later_wins() {
    let set = style(rules(json!({".k": {"margin": 1}})))
        .append(rules(json!({".k": {"margin": 2}, ".b": {"margin": 2}})))
        .append(rules(json!({".k": {"margin": 3}})));

    assert_eq!(
        serde_json::to_value(set.rules()).unwrap(),
        json!({".k": {"margin": 3}, ".b": {"margin": 2}})
    );
}

// =========================================================================
// class minting
// =========================================================================

#[test]
fn test_class_default_style_is_empty() {
    let empty = css_class("it-empty").unwrap();
    assert_eq!(empty.rules(), &Rules::new().add(".it-empty", Style::new()));
    assert_eq!(serde_json::to_value(empty.rules()).unwrap(), json!({".it-empty": {}}));
}

#[test]
fn test_class_with_empty_tree_matches_default() {
    let empty = css_class_with("it-empty-tree", Rules::new()).unwrap();
    assert_eq!(empty.rules(), &rules(json!({".it-empty-tree": {}})));

    let back = rules(serde_json::to_value(empty.rules()).unwrap());
    assert_eq!(&back, empty.rules());
}

#[test]
fn test_class_append_merges_at_top_level() {
    let btn = css_class("it-btn").unwrap();
    let set = btn.append(Style::new().set("color", "red"));

    assert_eq!(
        set.rules(),
        &Rules::new()
            .add(".it-btn", Style::new())
            .add("color", Value::from("red"))
    );
    assert_eq!(
        serde_json::to_value(set.rules()).unwrap(),
        json!({".it-btn": {}, "color": "red"})
    );
}

#[test]
fn test_class_append_keeps_class_entry_first() {
    let card = css_class_with("it-card", Style::new().set("padding", 16)).unwrap();
    let set = card
        .append(rules(json!({"@media (max-width: 600px)": {".it-card": {"padding": 8}}})))
        .append(rules(json!({".it-card:hover": {"outline": "none"}})));

    assert_eq!(
        set.rules().selectors().collect::<Vec<_>>(),
        vec![".it-card", "@media (max-width: 600px)", ".it-card:hover"]
    );
}

#[test]
fn test_class_duplicate_rejected_process_wide() {
    let first = css_class("it-dup");
    assert!(first.is_ok());

    let second = css_class_with("it-dup", Style::new().set("color", "blue"));
    assert_eq!(
        second.unwrap_err(),
        ClassError::DuplicateClassName {
            name: "it-dup".to_string()
        }
    );
}

#[test]
fn test_class_distinct_names_independent() {
    let one = css_class("it-one").unwrap();
    let two = css_class("it-two").unwrap();

    let combined = one.append(two.rules().clone());
    assert_eq!(
        combined.rules().selectors().collect::<Vec<_>>(),
        vec![".it-one", ".it-two"]
    );
}

#[test]
fn test_class_with_nested_rules_not_flattened() {
    let nested = rules(json!({
        "&:hover": {"color": "red"},
        "@media print": {"&": {"display": "none"}}
    }));
    let link = css_class_with("it-link", nested.clone()).unwrap();

    assert_eq!(link.styles(), Some(&Rule::Nested(nested)));
    assert_eq!(link.rules().len(), 1);
}

#[test]
fn test_class_name_from_minted_class() {
    let mut registry = ClassRegistry::new();
    let chip = registry.class("chip").unwrap();

    let name = ClassName::from(&chip);
    assert_eq!(name, ClassName::Named("chip".into()));
    assert_eq!(name.selector(), chip.selector());
    assert!(registry.contains(name));
    assert!(registry.contains("chip"));
}

#[test]
fn test_facade_class_uses_process_registry() {
    let tag = css::class("it-facade").unwrap();
    assert_eq!(tag.class_name(), "it-facade");
    assert!(stylish::is_class_minted("it-facade"));
    assert!(css::class_with("it-facade", Style::new()).is_err());
}

// =========================================================================
// values
// =========================================================================

#[test]
fn test_values_scenarios() {
    assert_eq!(css_values([0]), "0");
    assert_eq!(css_values([10]), "10px");
    assert_eq!(css_values!(10, "solid", "red"), "10px solid red");
    assert_eq!(css_values(["10%"]), "10%");
    assert_eq!(css::values(["-5px"]), "-5px");
}

#[test]
fn test_values_inside_style() {
    let border = Style::new().set("border", css_values!(1, "solid", "#ccc"));
    assert_eq!(border.get("border"), Some(&Value::from("1px solid #ccc")));
}
