//! Tests for per-type forced properties and default classes.

use serde_json::json;
use table_column::column::{
    Align, CellScope, ColumnConfig, ColumnProps, ColumnType, ForcedProps, ForcedPropsResolver,
    ForcedTable, HeaderScope, IndexMethod, RenderCell, column_starts, default_class_name,
};
use table_column::node::Node;
use table_column::style::Namespace;

fn configured(props: ColumnProps) -> ColumnConfig {
    column_starts("t_column_1", &props.column_type).merge_props(&props)
}

// ============================================================================
// Forced values
// ============================================================================

#[test]
fn test_selection_forces_sortable_and_resizable() {
    let column = configured(
        ColumnProps::new()
            .column_type(ColumnType::Selection)
            .sortable(true)
            .resizable(true),
    );
    let column = ForcedPropsResolver::default().resolve(column);

    assert!(!column.sortable);
    assert!(!column.resizable);
    assert!(column.render_header.is_some());
    assert!(column.render_cell.is_some());
}

#[test]
fn test_default_type_is_untouched() {
    let column = configured(ColumnProps::new().sortable(true).class_name("mine"));
    let column = ForcedPropsResolver::default().resolve(column);

    assert!(column.sortable);
    assert_eq!(column.class_name.as_deref(), Some("mine"));
    assert!(column.render_header.is_none());
    assert!(column.render_cell.is_none());
}

#[test]
fn test_unknown_type_gets_nothing() {
    let column_type: ColumnType = "rating".parse().unwrap();
    assert_eq!(column_type, ColumnType::Custom("rating".to_string()));

    let column = configured(ColumnProps::new().column_type(column_type.clone()).sortable(true));
    let column = ForcedPropsResolver::default().resolve(column);

    assert!(column.sortable);
    assert_eq!(column.class_name, None);
    assert_eq!(default_class_name(&column_type), None);
}

#[test]
fn test_forced_align_overrides_user_align() {
    let table = ForcedTable::empty().with(
        ColumnType::Selection,
        ForcedProps {
            align: Some(Align::Center),
            ..Default::default()
        },
    );
    let resolver = ForcedPropsResolver::new(table, Namespace::default());
    let column = configured(
        ColumnProps::new()
            .column_type(ColumnType::Selection)
            .align(Align::Left),
    );
    assert_eq!(column.align_class.as_deref(), Some("is-left"));

    let column = resolver.resolve(column);
    assert_eq!(column.align, Some(Align::Center));
    assert_eq!(column.align_class.as_deref(), Some("is-center"));
    assert_eq!(column.header_align_class.as_deref(), Some("is-center"));
}

#[test]
fn test_forced_renderer_replaces_user_renderer() {
    let column = configured(
        ColumnProps::new()
            .column_type(ColumnType::Index)
            .render_cell(RenderCell::new(|_| Node::text("user"))),
    );
    let column = ForcedPropsResolver::default().resolve(column);

    let row = json!({});
    let render = column.render_cell.as_ref().unwrap();
    let out = render.call(&CellScope::new(&row, &column).row_index(4));
    assert_eq!(out.text_content(), "5");
}

#[test]
fn test_index_offset_and_custom_numbering() {
    let row = json!({});

    let column = ForcedPropsResolver::default().resolve(configured(
        ColumnProps::new()
            .column_type(ColumnType::Index)
            .index(IndexMethod::Offset(10)),
    ));
    let scope = CellScope::new(&row, &column).row_index(4);
    let out = column.render_cell.as_ref().unwrap().call(&scope);
    assert_eq!(out.text_content(), "14");

    let column = ForcedPropsResolver::default().resolve(configured(
        ColumnProps::new()
            .column_type(ColumnType::Index)
            .index(IndexMethod::custom(|i| (i as i64) * 2)),
    ));
    let scope = CellScope::new(&row, &column).row_index(4);
    let out = column.render_cell.as_ref().unwrap().call(&scope);
    assert_eq!(out.text_content(), "8");
}

#[test]
fn test_index_header_falls_back_to_hash() {
    let column = ForcedPropsResolver::default()
        .resolve(configured(ColumnProps::new().column_type(ColumnType::Index)));
    let header = column.render_header.as_ref().unwrap().call(&HeaderScope::new(&column));
    assert_eq!(header, Node::text("#"));
}

#[test]
fn test_selection_checkbox_reflects_state() {
    let column = ForcedPropsResolver::default()
        .resolve(configured(ColumnProps::new().column_type(ColumnType::Selection)));
    let row = json!({});

    let checked = column
        .render_cell
        .as_ref()
        .unwrap()
        .call(&CellScope::new(&row, &column).selected(true));
    let el = checked.as_element().unwrap();
    assert!(el.has_class("el-checkbox"));
    assert!(el.has_class("is-checked"));

    let header = column
        .render_header
        .as_ref()
        .unwrap()
        .call(&HeaderScope::new(&column).all_selected(false));
    assert!(!header.as_element().unwrap().has_class("is-checked"));
}

// ============================================================================
// Default classes
// ============================================================================

#[test]
fn test_forced_class_is_appended() {
    let column = configured(
        ColumnProps::new()
            .column_type(ColumnType::Selection)
            .class_name("mine"),
    );
    let column = ForcedPropsResolver::default().resolve(column);
    assert_eq!(
        column.class_name.as_deref(),
        Some("mine el-table-column--selection")
    );
}

#[test]
fn test_forced_class_set_when_none() {
    let column = ForcedPropsResolver::default()
        .resolve(configured(ColumnProps::new().column_type(ColumnType::Selection)));
    assert_eq!(column.class_name.as_deref(), Some("el-table-column--selection"));
}

#[test]
fn test_forced_class_uses_namespace() {
    let resolver = ForcedPropsResolver::builtin(Namespace::new("ui", "table"));
    let column = resolver.resolve(configured(ColumnProps::new().column_type(ColumnType::Expand)));
    assert_eq!(column.class_name.as_deref(), Some("ui-table__expand-column"));
}

// ============================================================================
// Alignment classes
// ============================================================================

#[test]
fn test_header_align_falls_back_to_align() {
    let column = configured(ColumnProps::new().align(Align::Right));
    assert_eq!(column.align_class.as_deref(), Some("is-right"));
    assert_eq!(column.header_align_class.as_deref(), Some("is-right"));
}

#[test]
fn test_header_align_uses_own_class() {
    let column = configured(
        ColumnProps::new()
            .align(Align::Right)
            .header_align(Align::Center),
    );
    assert_eq!(column.header_align_class.as_deref(), Some("is-center"));
}

#[test]
fn test_no_align_no_classes() {
    let column = configured(ColumnProps::new());
    assert_eq!(column.align_class, None);
    assert_eq!(column.header_align_class, None);
}
