//! Draw-time scopes and the render functions that consume them.

use std::sync::Arc;

use serde_json::Value;

use crate::node::Node;
use crate::store::TreeNode;

use super::ColumnConfig;

/// Everything a cell renderer can see for one (row, column) pair.
#[derive(Debug, Clone, Copy)]
pub struct CellScope<'a> {
    pub row: &'a Value,
    /// Index of the row in the current data set.
    pub row_index: usize,
    pub column: &'a ColumnConfig,
    /// Index of the column among the visible leaf columns.
    pub cell_index: usize,
    /// Tree metadata for this row, when the table renders hierarchical data.
    pub tree_node: Option<&'a TreeNode>,
    pub expanded: bool,
    pub selected: bool,
}

impl<'a> CellScope<'a> {
    pub fn new(row: &'a Value, column: &'a ColumnConfig) -> Self {
        Self {
            row,
            row_index: 0,
            column,
            cell_index: 0,
            tree_node: None,
            expanded: false,
            selected: false,
        }
    }

    pub fn row_index(mut self, row_index: usize) -> Self {
        self.row_index = row_index;
        self
    }

    pub fn cell_index(mut self, cell_index: usize) -> Self {
        self.cell_index = cell_index;
        self
    }

    pub fn tree_node(mut self, tree_node: &'a TreeNode) -> Self {
        self.tree_node = Some(tree_node);
        self
    }

    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

/// Everything a header renderer can see.
#[derive(Debug, Clone, Copy)]
pub struct HeaderScope<'a> {
    pub column: &'a ColumnConfig,
    pub column_index: usize,
    /// Whether every selectable row is currently selected.
    pub all_selected: bool,
}

impl<'a> HeaderScope<'a> {
    pub fn new(column: &'a ColumnConfig) -> Self {
        Self {
            column,
            column_index: 0,
            all_selected: false,
        }
    }

    pub fn column_index(mut self, column_index: usize) -> Self {
        self.column_index = column_index;
        self
    }

    pub fn all_selected(mut self, all_selected: bool) -> Self {
        self.all_selected = all_selected;
        self
    }
}

macro_rules! render_fn {
    ($(#[$meta:meta])* $name:ident, $scope:ident, $out:ty) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name(Arc<dyn Fn(&$scope<'_>) -> $out + Send + Sync>);

        impl $name {
            pub fn new(f: impl Fn(&$scope<'_>) -> $out + Send + Sync + 'static) -> Self {
                Self(Arc::new(f))
            }

            pub fn call(&self, scope: &$scope<'_>) -> $out {
                (self.0)(scope)
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(concat!(stringify!($name), "(..)"))
            }
        }
    };
}

render_fn!(
    /// Produces the content of a header cell.
    RenderHeader,
    HeaderScope,
    Node
);

render_fn!(
    /// Produces the content of a body cell.
    RenderCell,
    CellScope,
    Node
);

render_fn!(
    /// Scoped content supplied for the header of a column.
    HeaderSlot,
    HeaderScope,
    Vec<Node>
);

render_fn!(
    /// Scoped content supplied for the cells of a column.
    CellSlot,
    CellScope,
    Vec<Node>
);

render_fn!(
    /// Renders the expanded panel below a row. `None` when the expand
    /// column has no content slot.
    ExpandedRenderer,
    CellScope,
    Option<Vec<Node>>
);

/// Slot content declared on a column.
#[derive(Debug, Clone, Default)]
pub struct ColumnSlots {
    /// Per-cell content.
    pub default: Option<CellSlot>,
    /// Header content.
    pub header: Option<HeaderSlot>,
}

impl ColumnSlots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_slot(
        mut self,
        f: impl Fn(&CellScope<'_>) -> Vec<Node> + Send + Sync + 'static,
    ) -> Self {
        self.default = Some(CellSlot::new(f));
        self
    }

    pub fn header_slot(
        mut self,
        f: impl Fn(&HeaderScope<'_>) -> Vec<Node> + Send + Sync + 'static,
    ) -> Self {
        self.header = Some(HeaderSlot::new(f));
        self
    }
}
