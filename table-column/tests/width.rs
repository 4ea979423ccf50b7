//! Tests for width parsing and resolution.

use table_column::column::{
    ColumnConfig, ColumnType, WidthResolver, WidthSpec, column_starts, parse_min_width,
    parse_width,
};

fn resolve(column: ColumnConfig, width: Option<u32>, min_width: Option<u32>) -> ColumnConfig {
    WidthResolver::default().resolve(column, width, min_width)
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_width_number() {
    assert_eq!(parse_width(Some(&WidthSpec::Px(120))), Some(120));
}

#[test]
fn test_parse_width_string_with_unit() {
    assert_eq!(parse_width(Some(&WidthSpec::from("120px"))), Some(120));
    assert_eq!(parse_width(Some(&WidthSpec::from(" 42"))), Some(42));
}

#[test]
fn test_parse_width_unparsable() {
    assert_eq!(parse_width(Some(&WidthSpec::from("auto"))), None);
    assert_eq!(parse_width(Some(&WidthSpec::from(""))), None);
    assert_eq!(parse_width(None), None);
}

#[test]
fn test_parse_min_width_unparsable_is_absent() {
    assert_eq!(parse_min_width(Some(&WidthSpec::from("wide"))), None);
    assert_eq!(parse_min_width(Some(&WidthSpec::from("0"))), None);
    assert_eq!(parse_min_width(Some(&WidthSpec::from("64"))), Some(64));
}

#[test]
fn test_width_spec_deserializes_number_or_string() {
    let px: WidthSpec = serde_json::from_str("90").unwrap();
    let raw: WidthSpec = serde_json::from_str("\"90px\"").unwrap();
    assert_eq!(px, WidthSpec::Px(90));
    assert_eq!(raw, WidthSpec::Raw("90px".to_string()));
}

// ============================================================================
// Resolution
// ============================================================================

#[test]
fn test_no_widths_defaults_to_minimum() {
    let column = resolve(ColumnConfig::new("c", ColumnType::Default), None, None);
    assert_eq!(column.width, None);
    assert_eq!(column.min_width, Some(80));
    assert_eq!(column.real_width, 80);
}

#[test]
fn test_width_wins_over_min_width() {
    let column = resolve(ColumnConfig::new("c", ColumnType::Default), Some(150), Some(100));
    assert_eq!(column.width, Some(150));
    assert_eq!(column.min_width, Some(100));
    assert_eq!(column.real_width, 150);
}

#[test]
fn test_width_only_keeps_default_minimum() {
    let column = resolve(ColumnConfig::new("c", ColumnType::Default), Some(120), None);
    assert_eq!(column.width, Some(120));
    assert_eq!(column.min_width, Some(80));
    assert_eq!(column.real_width, 120);
}

#[test]
fn test_min_width_only_clears_stale_width() {
    // Selection starts with width 48; a lone min-width must not keep it.
    let starts = column_starts("c", &ColumnType::Selection);
    assert_eq!(starts.width, Some(48));

    let column = resolve(starts, None, Some(100));
    assert_eq!(column.width, None);
    assert_eq!(column.min_width, Some(100));
    assert_eq!(column.real_width, 100);
}

#[test]
fn test_starts_survive_without_declared_widths() {
    let column = resolve(column_starts("c", &ColumnType::Index), None, None);
    assert_eq!(column.width, Some(48));
    assert_eq!(column.min_width, Some(48));
    assert_eq!(column.real_width, 48);
}

#[test]
fn test_zero_width_counts_as_absent() {
    let column = resolve(ColumnConfig::new("c", ColumnType::Default), Some(0), None);
    assert_eq!(column.width, None);
    assert_eq!(column.real_width, 80);
}

#[test]
fn test_custom_default_minimum() {
    let column =
        WidthResolver::new(60).resolve(ColumnConfig::new("c", ColumnType::Default), None, None);
    assert_eq!(column.min_width, Some(60));
    assert_eq!(column.real_width, 60);
}
