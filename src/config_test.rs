#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_selectors_match_site_markup() {
    let cfg = Config::default();
    assert_eq!(cfg.selectors.nav_toggle, ".nav-toggle");
    assert_eq!(cfg.selectors.nav_menu, ".nav-menu");
    assert_eq!(cfg.selectors.header, ".header");
    assert_eq!(cfg.selectors.theme_toggle, "#theme-toggle");
    assert_eq!(cfg.selectors.anchor_links, ".nav-link[href^=\"#\"]");
    assert_eq!(cfg.selectors.sections, "section[id]");
    assert!(cfg.selectors.reveal_targets.contains(".research-card"));
    assert!(cfg.selectors.reveal_targets.contains(".publication-card"));
    // Abstracts sit inside publication cards and are never revealed on their own.
    assert!(!cfg.selectors.reveal_targets.contains(".publication-abstract"));
}

#[test]
fn default_offsets_and_reveal_options() {
    let cfg = Config::default();
    assert_eq!(cfg.scroll_lookahead_px, 100.0);
    assert_eq!(cfg.header_hide_after_px, 100.0);
    assert_eq!(cfg.reveal_threshold, 0.1);
    assert_eq!(cfg.reveal_root_margin, "0px 0px -50px 0px");
    assert_eq!(cfg.theme_storage_key, "theme");
    assert!(cfg.inject_styles);
}

#[test]
fn default_class_names() {
    let classes = ClassNames::default();
    assert_eq!(classes.active, "active");
    assert_eq!(classes.reveal, "animate-in");
    assert_eq!(classes.dark, "dark-mode");
    assert_eq!(classes.light, "light-mode");
}

// =============================================================
// from_json
// =============================================================

#[test]
fn empty_object_yields_defaults() {
    let cfg = Config::from_json("{}").unwrap();
    assert_eq!(cfg, Config::default());
}

#[test]
fn partial_override_keeps_other_fields() {
    let cfg = Config::from_json(r##"{"scrollLookaheadPx": 80, "selectors": {"header": "#top"}}"##).unwrap();
    assert_eq!(cfg.scroll_lookahead_px, 80.0);
    assert_eq!(cfg.selectors.header, "#top");
    assert_eq!(cfg.selectors.nav_menu, ".nav-menu");
    assert_eq!(cfg.header_hide_after_px, 100.0);
}

#[test]
fn class_override() {
    let cfg = Config::from_json(r#"{"classes": {"dark": "theme-dark"}}"#).unwrap();
    assert_eq!(cfg.classes.dark, "theme-dark");
    assert_eq!(cfg.classes.light, "light-mode");
}

#[test]
fn invalid_json_is_config_error() {
    let err = Config::from_json("{not json").unwrap_err();
    assert!(matches!(err, crate::Error::Config(_)));
}

#[test]
fn wrong_field_type_is_config_error() {
    let err = Config::from_json(r#"{"injectStyles": "yes"}"#).unwrap_err();
    assert!(matches!(err, crate::Error::Config(_)));
}

// =============================================================
// log_level
// =============================================================

#[test]
fn log_level_parses_known_names() {
    let cfg = Config::from_json(r#"{"logLevel": "debug"}"#).unwrap();
    assert_eq!(cfg.log_level(), log::Level::Debug);
}

#[test]
fn log_level_falls_back_to_info() {
    let cfg = Config::from_json(r#"{"logLevel": "loud"}"#).unwrap();
    assert_eq!(cfg.log_level(), log::Level::Info);
}

// =============================================================
// Reveal options
// =============================================================

#[test]
fn out_of_range_threshold_falls_back_to_default() {
    let cfg = Config::from_json(r#"{"revealThreshold": 2}"#).unwrap();
    assert_eq!(cfg.reveal_threshold, 0.1);
    let cfg = Config::from_json(r#"{"revealThreshold": -0.5}"#).unwrap();
    assert_eq!(cfg.reveal_threshold, 0.1);
}

#[test]
fn unitless_root_margin_falls_back_to_default() {
    let cfg = Config::from_json(r#"{"revealRootMargin": "50", "revealThreshold": 0.5}"#).unwrap();
    assert_eq!(cfg.reveal_root_margin, "0px 0px -50px 0px");
    assert_eq!(cfg.reveal_threshold, 0.5);
}

#[test]
fn valid_reveal_options_are_kept() {
    let cfg = Config::from_json(r#"{"revealRootMargin": "10px 5%", "revealThreshold": 1}"#).unwrap();
    assert_eq!(cfg.reveal_root_margin, "10px 5%");
    assert_eq!(cfg.reveal_threshold, 1.0);
}

#[test]
fn hand_built_config_is_repaired() {
    let cfg = Config { reveal_threshold: f64::NAN, reveal_root_margin: String::new(), ..Config::default() };
    let cfg = cfg.with_valid_reveal_options();
    assert_eq!(cfg.reveal_threshold, 0.1);
    assert_eq!(cfg.reveal_root_margin, "0px 0px -50px 0px");
}

#[test]
fn root_margin_syntax() {
    assert!(is_valid_root_margin("0"));
    assert!(is_valid_root_margin("0px 0px -50px 0px"));
    assert!(is_valid_root_margin(" 12.5% -3px "));
    assert!(!is_valid_root_margin(""));
    assert!(!is_valid_root_margin("50"));
    assert!(!is_valid_root_margin("10em"));
    assert!(!is_valid_root_margin("1px 2px 3px 4px 5px"));
    assert!(!is_valid_root_margin("px"));
}

// =============================================================
// Embedded block
// =============================================================

#[test]
fn missing_block_yields_defaults_without_error() {
    let (cfg, err) = Config::from_embedded(None);
    assert_eq!(cfg, Config::default());
    assert!(err.is_none());
}

#[test]
fn block_overrides_are_applied() {
    let (cfg, err) = Config::from_embedded(Some(r#"{"injectStyles": false}"#));
    assert!(!cfg.inject_styles);
    assert!(err.is_none());
}

#[test]
fn malformed_block_yields_defaults_and_error() {
    let (cfg, err) = Config::from_embedded(Some("{oops"));
    assert_eq!(cfg, Config::default());
    assert!(matches!(err, Some(crate::Error::Config(_))));
}
