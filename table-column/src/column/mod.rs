//! Column configuration resolution.
//!
//! A column goes through these stages when it registers with its table:
//!
//! - [`column_starts`] + [`ColumnProps`] → a fresh [`ColumnConfig`]
//! - [`ForcedPropsResolver`] → per-type forced values and default class
//! - [`WidthResolver`] → `width`, `min_width`, `real_width`
//! - [`CellRendererBuilder`] → `render_header` and `render_cell`
//!
//! [`TableColumn::register`] runs the whole pipeline. At draw time the
//! installed cell renderer links any nested column descriptors it produced
//! back to its column through the [`SubColumnRegistrar`].
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use table_column::column::{
//!     AncestorKind, CellScope, ColumnProps, ColumnSlots, InstanceTree, RegisterContext,
//!     SubColumnRegistrar, TableColumn,
//! };
//! use table_column::config::RenderConfig;
//! use table_column::owner::TableOwner;
//!
//! let owner = TableOwner::with_id("users", None);
//! let tree = InstanceTree::new();
//! let table = tree.insert(AncestorKind::Table { table_id: "users".into() }, None);
//! let key = tree.insert(AncestorKind::OpaqueWrapper, Some(table));
//!
//! let registrar = SubColumnRegistrar::new();
//! let config = RenderConfig::default();
//! let ctx = RegisterContext::new(&owner, &tree, &registrar, &config);
//!
//! let name = TableColumn::new(key, ColumnProps::new().label("Name").property("name"));
//! let column = name.register(&ColumnSlots::new(), &ctx).unwrap();
//! assert_eq!(column.real_width, 80);
//!
//! let row = json!({ "name": "Ada" });
//! let cell = column.render_cell.as_ref().unwrap().call(&CellScope::new(&row, &column));
//! assert_eq!(cell.text_content(), "Ada");
//! ```

mod config;
mod defaults;
mod forced;
mod props;
mod registrar;
mod render;
mod scope;
mod table_column;
mod tree;
mod types;
mod width;

pub use config::{ColumnConfig, resolve_header_align_class};
pub use defaults::{DefaultTreePrefix, TreePrefix, default_render_cell, row_value};
pub use forced::{
    ForcedProps, ForcedPropsResolver, ForcedTable, column_starts, default_class_name,
};
pub use props::{ColumnProps, column_el_index};
pub use registrar::{ColumnRef, SubColumnRegistrar};
pub use render::CellRendererBuilder;
pub use scope::{
    CellScope, CellSlot, ColumnSlots, ExpandedRenderer, HeaderScope, HeaderSlot, RenderCell,
    RenderHeader,
};
pub use table_column::{RegisterContext, TableColumn};
pub use tree::{Ancestor, AncestorKind, InstanceTree, RenderTree, TreeLinkResolver};
pub use types::{Align, ColumnType, Formatter, IndexMethod, WidthSpec};
pub use width::{WidthResolver, parse_min_width, parse_width};
