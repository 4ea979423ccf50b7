//! Tests for the full column registration pipeline.

use std::collections::HashMap;

use serde_json::json;
use simplelog::{Config, LevelFilter, TestLogger};
use table_column::column::{
    Align, AncestorKind, CellScope, ColumnConfig, ColumnProps, ColumnSlots, ColumnType,
    HeaderScope, InstanceTree, RegisterContext, SubColumnRegistrar, TableColumn,
};
use table_column::config::RenderConfig;
use table_column::error::ColumnError;
use table_column::instance::InstanceId;
use table_column::node::Node;
use table_column::owner::TableOwner;
use table_column::store::{TableStore, TreeNode};

struct Fixture {
    owner: TableOwner,
    tree: InstanceTree,
    table: InstanceId,
    registrar: SubColumnRegistrar,
    config: RenderConfig,
}

impl Fixture {
    fn new(store: Option<TableStore>) -> Self {
        let _ = TestLogger::init(LevelFilter::Trace, Config::default());
        let owner = TableOwner::with_id("tbl", store);
        let tree = InstanceTree::new();
        let table = tree.insert(
            AncestorKind::Table {
                table_id: "tbl".to_string(),
            },
            None,
        );
        Self {
            owner,
            tree,
            table,
            registrar: SubColumnRegistrar::new(),
            config: RenderConfig::default(),
        }
    }

    fn ctx(&self) -> RegisterContext<'_> {
        RegisterContext::new(&self.owner, &self.tree, &self.registrar, &self.config)
    }

    fn mount(&self, parent: InstanceId, props: ColumnProps) -> TableColumn {
        let key = self.tree.insert(AncestorKind::OpaqueWrapper, Some(parent));
        TableColumn::new(key, props)
    }

    fn register(&self, column: &TableColumn) -> ColumnConfig {
        column.register(&ColumnSlots::new(), &self.ctx()).unwrap()
    }
}

// ============================================================================
// Identity
// ============================================================================

#[test]
fn test_top_level_column_registers_under_table() {
    let fx = Fixture::new(None);
    let name = fx.mount(fx.table, ColumnProps::new().label("Name"));
    let column = fx.register(&name);

    assert!(column.id.starts_with("tbl_column_"));
    assert_eq!(name.column_id(), column.id);
    assert!(!name.is_sub_column());
    assert_eq!(
        fx.tree.kind_of(name.key()),
        Some(AncestorKind::ColumnContainer {
            column_id: column.id.clone()
        })
    );
}

#[test]
fn test_column_ids_are_unique() {
    let fx = Fixture::new(None);
    let a = fx.register(&fx.mount(fx.table, ColumnProps::new()));
    let b = fx.register(&fx.mount(fx.table, ColumnProps::new()));
    assert_ne!(a.id, b.id);
}

#[test]
fn test_nested_column_registers_under_group() {
    let fx = Fixture::new(None);
    let group = fx.mount(fx.table, ColumnProps::new().label("Address"));
    let group_config = fx.register(&group);

    let wrapper = fx.tree.insert(AncestorKind::OpaqueWrapper, Some(group.key()));
    let city = fx.mount(wrapper, ColumnProps::new().label("City"));
    let city_config = fx.register(&city);

    assert!(city.is_sub_column());
    assert!(city_config.id.starts_with(&format!("{}_column_", group_config.id)));
}

#[test]
fn test_sub_columns_keep_sibling_order() {
    let fx = Fixture::new(None);
    let group = fx.mount(fx.table, ColumnProps::new().label("Address"));
    let mut group_config = fx.register(&group);

    let street = fx.mount(group.key(), ColumnProps::new().label("Street"));
    let city = fx.mount(group.key(), ColumnProps::new().label("City"));
    let zip = fx.mount(group.key(), ColumnProps::new().label("Zip"));
    let siblings = [street.key(), city.key(), zip.key()];

    // Registration order differs from declaration order.
    for column in [&zip, &street, &city] {
        let config = fx.register(column);
        column.attach_to(&mut group_config, config, &siblings);
    }

    let labels: Vec<_> = group_config
        .children
        .iter()
        .map(|c| c.label.as_deref().unwrap_or_default())
        .collect();
    assert_eq!(labels, vec!["Street", "City", "Zip"]);

    let city_id = city.column_id();
    assert_eq!(
        group_config.find(&city_id).and_then(|c| c.label.as_deref()),
        Some("City")
    );
}

#[test]
fn test_sub_columns_keep_order_for_any_arrival() {
    let fx = Fixture::new(None);
    let group = fx.mount(fx.table, ColumnProps::new().label("Address"));
    let mut group_config = fx.register(&group);

    let street = fx.mount(group.key(), ColumnProps::new().label("Street"));
    let city = fx.mount(group.key(), ColumnProps::new().label("City"));
    let zip = fx.mount(group.key(), ColumnProps::new().label("Zip"));
    let siblings = [street.key(), city.key(), zip.key()];

    for column in [&zip, &city, &street] {
        let config = fx.register(column);
        column.attach_to(&mut group_config, config, &siblings);
    }

    let labels: Vec<_> = group_config
        .children
        .iter()
        .map(|c| c.label.as_deref().unwrap_or_default())
        .collect();
    assert_eq!(labels, vec!["Street", "City", "Zip"]);
}

#[test]
fn test_unlisted_sub_column_goes_last() {
    let fx = Fixture::new(None);
    let group = fx.mount(fx.table, ColumnProps::new().label("Address"));
    let mut group_config = fx.register(&group);

    let street = fx.mount(group.key(), ColumnProps::new().label("Street"));
    let extra = fx.mount(group.key(), ColumnProps::new().label("Extra"));
    let zip = fx.mount(group.key(), ColumnProps::new().label("Zip"));
    let siblings = [street.key(), zip.key()];

    for column in [&extra, &zip, &street] {
        let config = fx.register(column);
        column.attach_to(&mut group_config, config, &siblings);
    }

    let labels: Vec<_> = group_config
        .children
        .iter()
        .map(|c| c.label.as_deref().unwrap_or_default())
        .collect();
    assert_eq!(labels, vec!["Street", "Zip", "Extra"]);
}

#[test]
fn test_column_outside_any_table_uses_owner_id() {
    let fx = Fixture::new(None);
    let key = fx.tree.insert(AncestorKind::OpaqueWrapper, None);
    let orphan = TableColumn::new(key, ColumnProps::new());
    let column = fx.register(&orphan);
    assert!(column.id.starts_with("tbl_column_"));
    assert!(!orphan.is_sub_column());
}

// ============================================================================
// Resolution
// ============================================================================

#[test]
fn test_default_column_resolves_minimum_width() {
    let fx = Fixture::new(None);
    let column = fx.register(&fx.mount(fx.table, ColumnProps::new()));

    assert_eq!(column.width, None);
    assert_eq!(column.min_width, Some(80));
    assert_eq!(column.real_width, 80);
    assert!(column.render_header.is_some());
    assert!(column.render_cell.is_some());
}

#[test]
fn test_declared_string_width() {
    let fx = Fixture::new(None);
    let column = fx.register(&fx.mount(fx.table, ColumnProps::new().width("140px")));
    assert_eq!(column.width, Some(140));
    assert_eq!(column.real_width, 140);
}

#[test]
fn test_selection_column() {
    let fx = Fixture::new(None);
    let props = ColumnProps::new()
        .column_type(ColumnType::Selection)
        .sortable(true)
        .class_name("pick");
    let column = fx.register(&fx.mount(fx.table, props));

    assert_eq!(column.width, Some(48));
    assert_eq!(column.real_width, 48);
    assert!(!column.sortable);
    assert_eq!(column.class_name.as_deref(), Some("pick el-table-column--selection"));

    let header = column.render_header.as_ref().unwrap().call(&HeaderScope::new(&column));
    assert!(header.as_element().unwrap().has_class("el-checkbox"));
}

#[test]
fn test_selection_user_width_and_min_width() {
    let fx = Fixture::new(None);
    let wide = fx.register(&fx.mount(
        fx.table,
        ColumnProps::new().column_type(ColumnType::Selection).width(60),
    ));
    assert_eq!(wide.width, Some(60));
    assert_eq!(wide.real_width, 60);

    let min_only = fx.register(&fx.mount(
        fx.table,
        ColumnProps::new().column_type(ColumnType::Selection).min_width(100),
    ));
    assert_eq!(min_only.width, None);
    assert_eq!(min_only.real_width, 100);
}

#[test]
fn test_expand_column_installs_expanded_row() {
    let fx = Fixture::new(None);
    let expand = fx.mount(fx.table, ColumnProps::new().column_type(ColumnType::Expand));
    let slots = ColumnSlots::new().default_slot(|_| vec![Node::text("more")]);
    let column = expand.register(&slots, &fx.ctx()).unwrap();

    let row = json!({});
    let scope = CellScope::new(&row, &column);
    assert_eq!(fx.owner.expanded_row(&scope), Some(vec![Node::text("more")]));
    assert_eq!(
        column.class_name.as_deref(),
        Some("el-table__expand-column")
    );
}

#[test]
fn test_namespace_from_config() {
    let mut fx = Fixture::new(None);
    fx.config = RenderConfig::new().namespace("ui");
    let props = ColumnProps::new().show_overflow_tooltip(true).width(50);
    let column = fx.register(&fx.mount(fx.table, props));

    let row = json!({});
    let out = column.render_cell.as_ref().unwrap().call(&CellScope::new(&row, &column));
    let cell = out.as_element().unwrap();
    assert!(cell.has_class("ui-tooltip"));
    assert_eq!(cell.style.width(), Some("49px"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut fx = Fixture::new(None);
    fx.config = RenderConfig::new().namespace("  ");
    let column = fx.mount(fx.table, ColumnProps::new());

    let err = column.register(&ColumnSlots::new(), &fx.ctx()).unwrap_err();
    assert!(matches!(err, ColumnError::InvalidConfig(_)));
    assert_eq!(column.column_id(), "");
}

// ============================================================================
// Reactivity
// ============================================================================

#[test]
fn test_tree_mode_follows_store_after_registration() {
    let store = TableStore::new();
    let fx = Fixture::new(Some(store.clone()));
    let column = fx.register(&fx.mount(fx.table, ColumnProps::new().property("name")));

    let row = json!({ "name": "root" });
    let render = |column: &ColumnConfig| {
        let out = column.render_cell.as_ref().unwrap().call(&CellScope::new(&row, column));
        out.as_element().unwrap().children[0].clone()
    };
    assert_eq!(render(&column), Node::Empty);

    store.set_tree_data(Some(HashMap::from([(
        "root".to_string(),
        TreeNode::default(),
    )])));
    assert!(matches!(render(&column), Node::Fragment(_)));
}

#[test]
fn test_align_classes_follow_props() {
    let fx = Fixture::new(None);
    let price = fx.mount(fx.table, ColumnProps::new().align(Align::Right));
    let mut column = fx.register(&price);
    assert_eq!(price.real_align().as_deref(), Some("is-right"));
    assert_eq!(column.header_align_class.as_deref(), Some("is-right"));

    price.update_props(|props| {
        props.align = Some(Align::Left);
        props.header_align = Some(Align::Center);
    });
    price.refresh(&mut column);

    assert_eq!(column.align_class.as_deref(), Some("is-left"));
    assert_eq!(column.header_align_class.as_deref(), Some("is-center"));
}

#[test]
fn test_props_data_collects_groups() {
    let fx = Fixture::new(None);
    let column = fx.mount(
        fx.table,
        ColumnProps::new().label("Price").property("price").width(90),
    );

    let data = column.props_data(&[&["label", "property"], &["width", "align", "bogus"]]);
    assert_eq!(
        serde_json::Value::Object(data),
        json!({
            "label": "Price",
            "property": "price",
            "width": 90,
            "align": null,
            "bogus": null,
        })
    );
}

#[test]
fn test_render_config_deserializes_with_defaults() {
    let config: RenderConfig = serde_json::from_str(r#"{ "namespace": "ui" }"#).unwrap();
    assert_eq!(config.namespace, "ui");
    assert_eq!(config.default_min_width, 80);
    assert!(config.warn_on_header_override);
    assert!(config.validate().is_ok());
}
