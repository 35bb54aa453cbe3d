#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// env_parse
// =============================================================

#[test]
fn env_parse_missing_returns_default() {
    let val: f64 = env_parse("__ROOMPLAN_TEST_MISSING_KEY__", 42.0);
    assert_eq!(val, 42.0);
}

#[test]
fn env_parse_present_valid() {
    unsafe { std::env::set_var("__ROOMPLAN_TEST_VALID__", " 35.5 ") };
    let val: f64 = env_parse("__ROOMPLAN_TEST_VALID__", 0.0);
    assert_eq!(val, 35.5);
    unsafe { std::env::remove_var("__ROOMPLAN_TEST_VALID__") };
}

#[test]
fn env_parse_present_invalid_returns_default() {
    unsafe { std::env::set_var("__ROOMPLAN_TEST_INVALID__", "twenty") };
    let val: f64 = env_parse("__ROOMPLAN_TEST_INVALID__", 7.0);
    assert_eq!(val, 7.0);
    unsafe { std::env::remove_var("__ROOMPLAN_TEST_INVALID__") };
}

// =============================================================
// within_or
// =============================================================

#[test]
fn within_or_keeps_values_in_range() {
    assert_eq!(within_or(10.0, 1.0, 20.0), 10.0);
    assert_eq!(within_or(1.0, 1.0, 20.0), 1.0);
    assert_eq!(within_or(16_384.0, 1.0, 20.0), 16_384.0);
}

#[test]
fn within_or_rejects_zero_negative_and_nan() {
    assert_eq!(within_or(0.0, 1.0, 20.0), 20.0);
    assert_eq!(within_or(-5.0, 1.0, 20.0), 20.0);
    assert_eq!(within_or(f64::NAN, 1.0, 20.0), 20.0);
    assert_eq!(within_or(f64::INFINITY, 1.0, 20.0), 20.0);
}

#[test]
fn within_or_rejects_tiny_and_huge_values() {
    assert_eq!(within_or(0.000_001, MIN_GRID_SIZE, 20.0), 20.0);
    assert_eq!(within_or(1e-14, MIN_GRID_SIZE, 20.0), 20.0);
    assert_eq!(within_or(16_385.0, 1.0, 800.0), 800.0);
}

// =============================================================
// EditorConfig
// =============================================================

#[test]
fn default_matches_constants() {
    let config = EditorConfig::default();
    assert_eq!(config.storage_key, "roomLayout");
    assert_eq!(config.grid_size, 20.0);
    assert_eq!(config.canvas_width, 800.0);
    assert_eq!(config.canvas_height, 600.0);
}

// Single test so the shared ROOMPLAN_* variables are never mutated concurrently.
#[test]
fn from_env_reads_overrides_and_falls_back() {
    unsafe {
        std::env::remove_var("ROOMPLAN_STORAGE_KEY");
        std::env::remove_var("ROOMPLAN_GRID_SIZE");
        std::env::remove_var("ROOMPLAN_CANVAS_WIDTH");
        std::env::remove_var("ROOMPLAN_CANVAS_HEIGHT");
    }
    assert_eq!(EditorConfig::from_env(), EditorConfig::default());

    unsafe {
        std::env::set_var("ROOMPLAN_STORAGE_KEY", "kitchen");
        std::env::set_var("ROOMPLAN_GRID_SIZE", "25");
        std::env::set_var("ROOMPLAN_CANVAS_WIDTH", "1024");
        std::env::set_var("ROOMPLAN_CANVAS_HEIGHT", "768");
    }
    let config = EditorConfig::from_env();
    assert_eq!(config.storage_key, "kitchen");
    assert_eq!(config.grid_size, 25.0);
    assert_eq!(config.canvas_width, 1024.0);
    assert_eq!(config.canvas_height, 768.0);

    unsafe {
        std::env::set_var("ROOMPLAN_STORAGE_KEY", "   ");
        std::env::set_var("ROOMPLAN_GRID_SIZE", "-4");
        std::env::set_var("ROOMPLAN_CANVAS_WIDTH", "wide");
    }
    let config = EditorConfig::from_env();
    assert_eq!(config.storage_key, "roomLayout");
    assert_eq!(config.grid_size, 20.0);
    assert_eq!(config.canvas_width, 800.0);

    unsafe {
        std::env::set_var("ROOMPLAN_GRID_SIZE", "0.000001");
        std::env::set_var("ROOMPLAN_CANVAS_HEIGHT", "1e9");
    }
    let config = EditorConfig::from_env();
    assert_eq!(config.grid_size, 20.0);
    assert_eq!(config.canvas_height, 600.0);

    unsafe {
        std::env::remove_var("ROOMPLAN_STORAGE_KEY");
        std::env::remove_var("ROOMPLAN_GRID_SIZE");
        std::env::remove_var("ROOMPLAN_CANVAS_WIDTH");
        std::env::remove_var("ROOMPLAN_CANVAS_HEIGHT");
    }
}
