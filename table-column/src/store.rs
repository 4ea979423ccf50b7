//! The slice of the table's row store that column rendering reads.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::state::{Memo, State};

/// Tree metadata for one row of hierarchical data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TreeNode {
    /// Nesting depth, 0 for top-level rows.
    pub level: u32,
    /// Left indentation in pixels.
    pub indent: u32,
    /// `None` when the row cannot be expanded.
    pub expanded: Option<bool>,
    pub loading: bool,
    pub loaded: bool,
    /// Set for lazy rows known to have no children.
    pub no_lazy_children: bool,
    /// Row keys of direct children.
    pub children: Vec<String>,
}

/// Row key → tree metadata.
pub type TreeData = HashMap<String, TreeNode>;

/// Hierarchical mode is on iff tree data exists and has at least one entry.
pub fn is_hierarchical(tree_data: Option<&TreeData>) -> bool {
    tree_data.is_some_and(|data| !data.is_empty())
}

/// Reactive states held by the table store.
#[derive(Debug, Clone, Default)]
pub struct StoreStates {
    pub tree_data: State<Option<TreeData>>,
}

/// The table's row-data store.
#[derive(Debug, Clone, Default)]
pub struct TableStore {
    pub states: StoreStates,
}

impl TableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the tree-data mapping.
    pub fn set_tree_data(&self, tree_data: Option<TreeData>) {
        self.states.tree_data.set(tree_data);
    }

    pub fn is_hierarchical(&self) -> bool {
        self.states
            .tree_data
            .with(|tree_data| is_hierarchical(tree_data.as_ref()))
    }

    /// Hierarchical flag, recomputed whenever the tree data changes.
    pub fn hierarchical_memo(&self) -> Memo<bool> {
        let store = self.clone();
        Memo::new(vec![self.states.tree_data.tracker()], move || {
            store.is_hierarchical()
        })
    }
}
