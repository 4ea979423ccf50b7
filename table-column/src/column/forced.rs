//! Per-type starting values and forced properties.

use std::collections::HashMap;

use log::trace;

use crate::style::Namespace;

use super::ColumnConfig;
use super::defaults;
use super::scope::{RenderCell, RenderHeader};
use super::types::{Align, ColumnType};

/// Width every built-in special column starts with.
const SPECIAL_COLUMN_WIDTH: u32 = 48;

/// Starting configuration for a column of `column_type`.
///
/// Declared props are merged over this, so starts are defaults, not forced.
pub fn column_starts(id: impl Into<String>, column_type: &ColumnType) -> ColumnConfig {
    let mut column = ColumnConfig::new(id, column_type.clone());
    if matches!(
        column_type,
        ColumnType::Selection | ColumnType::Expand | ColumnType::Index
    ) {
        column.width = Some(SPECIAL_COLUMN_WIDTH);
        column.min_width = Some(SPECIAL_COLUMN_WIDTH);
        column.real_width = SPECIAL_COLUMN_WIDTH;
    }
    column
}

/// Un-prefixed default class for a column type, if it has one.
pub fn default_class_name(column_type: &ColumnType) -> Option<&'static str> {
    match column_type {
        ColumnType::Selection => Some("table-column--selection"),
        ColumnType::Expand => Some("table__expand-column"),
        _ => None,
    }
}

/// Values a column type imposes regardless of what the user declared.
///
/// Unset fields leave the column untouched.
#[derive(Debug, Clone, Default)]
pub struct ForcedProps {
    pub render_header: Option<RenderHeader>,
    pub render_cell: Option<RenderCell>,
    pub sortable: Option<bool>,
    pub resizable: Option<bool>,
    pub align: Option<Align>,
    pub header_align: Option<Align>,
}

impl ForcedProps {
    fn apply(&self, column: &mut ColumnConfig) {
        if let Some(render) = &self.render_header {
            column.render_header = Some(render.clone());
        }
        if let Some(render) = &self.render_cell {
            column.render_cell = Some(render.clone());
        }
        if let Some(sortable) = self.sortable {
            column.sortable = sortable;
        }
        if let Some(resizable) = self.resizable {
            column.resizable = resizable;
        }
        if let Some(align) = self.align {
            column.align = Some(align);
            column.align_class = Some(align.class());
        }
        if let Some(header_align) = self.header_align {
            column.header_align = Some(header_align);
        }
        if self.align.is_some() || self.header_align.is_some() {
            column.header_align_class =
                super::config::resolve_header_align_class(column.header_align, column.align);
        }
    }
}

/// Lookup table from column type to forced properties.
#[derive(Debug, Clone, Default)]
pub struct ForcedTable {
    entries: HashMap<ColumnType, ForcedProps>,
}

impl ForcedTable {
    /// An empty table: no type forces anything.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in entries for `selection`, `index` and `expand`.
    pub fn builtin(ns: &Namespace) -> Self {
        Self::empty()
            .with(
                ColumnType::Selection,
                ForcedProps {
                    render_header: Some(defaults::selection_header(ns.clone())),
                    render_cell: Some(defaults::selection_cell(ns.clone())),
                    sortable: Some(false),
                    resizable: Some(false),
                    ..Default::default()
                },
            )
            .with(
                ColumnType::Index,
                ForcedProps {
                    render_header: Some(defaults::index_header()),
                    render_cell: Some(defaults::index_cell()),
                    sortable: Some(false),
                    ..Default::default()
                },
            )
            .with(
                ColumnType::Expand,
                ForcedProps {
                    render_header: Some(defaults::expand_header()),
                    render_cell: Some(defaults::expand_cell(ns.clone())),
                    sortable: Some(false),
                    resizable: Some(false),
                    ..Default::default()
                },
            )
    }

    /// Replace the entry for `column_type`.
    pub fn with(mut self, column_type: ColumnType, forced: ForcedProps) -> Self {
        self.entries.insert(column_type, forced);
        self
    }

    pub fn get(&self, column_type: &ColumnType) -> Option<&ForcedProps> {
        self.entries.get(column_type)
    }
}

/// Applies forced properties and the type's default class to a column.
#[derive(Debug, Clone)]
pub struct ForcedPropsResolver {
    table: ForcedTable,
    ns: Namespace,
}

impl ForcedPropsResolver {
    pub fn new(table: ForcedTable, ns: Namespace) -> Self {
        Self { table, ns }
    }

    /// Resolver with the built-in table.
    pub fn builtin(ns: Namespace) -> Self {
        Self::new(ForcedTable::builtin(&ns), ns)
    }

    pub fn resolve(&self, mut column: ColumnConfig) -> ColumnConfig {
        if let Some(forced) = self.table.get(&column.column_type) {
            trace!("{}: applying forced props for '{}'", column.id, column.column_type);
            forced.apply(&mut column);
        }

        if let Some(class) = default_class_name(&column.column_type) {
            let forced_class = self.ns.prefixed(class);
            column.class_name = Some(match column.class_name.take() {
                Some(existing) if !existing.is_empty() => format!("{existing} {forced_class}"),
                _ => forced_class,
            });
        }
        column
    }
}

impl Default for ForcedPropsResolver {
    fn default() -> Self {
        Self::builtin(Namespace::default())
    }
}
