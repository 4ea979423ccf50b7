//! Resolved column configuration.

use super::props::ColumnProps;
use super::scope::{RenderCell, RenderHeader};
use super::types::{Align, ColumnType, Formatter, IndexMethod};

/// The resolved, mutable descriptor for one table column.
///
/// Created from [`ColumnProps`] when the column registers with its table,
/// then completed in place by the forced-props, width and render resolvers.
#[derive(Debug, Clone, Default)]
pub struct ColumnConfig {
    /// Unique identifier, stable for the column's lifetime.
    pub id: String,
    pub column_type: ColumnType,
    pub label: Option<String>,
    pub property: Option<String>,
    pub column_key: Option<String>,

    pub width: Option<u32>,
    pub min_width: Option<u32>,
    /// Effective width: `width`, else `min_width`, else the default minimum.
    pub real_width: u32,

    pub align: Option<Align>,
    pub header_align: Option<Align>,
    /// Derived class for `align` (`is-left`).
    pub align_class: Option<String>,
    /// Derived class for `header_align`, falling back to `align_class`.
    pub header_align_class: Option<String>,

    /// Space-separated classes. Forced classes are appended, never replacing.
    pub class_name: Option<String>,
    pub label_class_name: Option<String>,

    pub sortable: bool,
    pub resizable: bool,
    pub show_overflow_tooltip: bool,
    pub formatter: Option<Formatter>,
    pub index: Option<IndexMethod>,

    pub render_header: Option<RenderHeader>,
    pub render_cell: Option<RenderCell>,

    /// Sub-columns of a grouped column, in render order.
    pub children: Vec<ColumnConfig>,

    /// Declared position among the parent's sub-columns.
    el_index: Option<usize>,
    header_overridden: bool,
    renders_installed: bool,
}

impl ColumnConfig {
    pub fn new(id: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            id: id.into(),
            column_type,
            resizable: true,
            ..Default::default()
        }
    }

    /// Merge declared props over `self` (which holds the per-type starts).
    ///
    /// Width props are not copied here; they go through width resolution.
    pub fn merge_props(mut self, props: &ColumnProps) -> Self {
        self.column_type = props.column_type.clone();
        self.label = props.label.clone().or(self.label);
        self.property = props.property.clone().or(self.property);
        self.column_key = props.column_key.clone().or(self.column_key);
        self.align = props.align.or(self.align);
        self.header_align = props.header_align.or(self.header_align);
        self.align_class = self.align.map(Align::class);
        self.header_align_class = resolve_header_align_class(self.header_align, self.align);
        self.class_name = props.class_name.clone().or(self.class_name);
        self.label_class_name = props.label_class_name.clone().or(self.label_class_name);
        self.sortable = props.sortable.unwrap_or(self.sortable);
        self.resizable = props.resizable.unwrap_or(self.resizable);
        self.show_overflow_tooltip = props.show_overflow_tooltip;
        self.formatter = props.formatter.clone().or(self.formatter);
        self.index = props.index.clone().or(self.index);
        if props.render_header.is_some() {
            self.render_header = props.render_header.clone();
            self.header_overridden = true;
        }
        if props.render_cell.is_some() {
            self.render_cell = props.render_cell.clone();
        }
        self
    }

    /// Whether the header renderer came from the user rather than a resolver.
    pub fn header_overridden(&self) -> bool {
        self.header_overridden
    }

    /// Whether header and cell renderers have been installed.
    pub fn renders_installed(&self) -> bool {
        self.renders_installed
    }

    pub(crate) fn mark_renders_installed(&mut self) {
        self.renders_installed = true;
    }

    /// Insert a sub-column by its declared position among its siblings.
    ///
    /// Children keep declaration order whatever order they arrive in.
    /// Children without a position go last, in arrival order.
    pub fn insert_child(&mut self, mut child: ColumnConfig, index: Option<usize>) {
        child.el_index = index;
        let at = self
            .children
            .iter()
            .position(|existing| match (index, existing.el_index) {
                (Some(index), Some(other)) => other > index,
                (Some(_), None) => true,
                (None, _) => false,
            });
        match at {
            Some(at) => self.children.insert(at, child),
            None => self.children.push(child),
        }
    }

    /// Depth-first search for a column by id, including `self`.
    pub fn find(&self, id: &str) -> Option<&ColumnConfig> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}

/// Header alignment class: `is-<header_align>`, else the `align` class.
pub fn resolve_header_align_class(
    header_align: Option<Align>,
    align: Option<Align>,
) -> Option<String> {
    header_align.or(align).map(Align::class)
}
