//! The table a column registers with.

use std::sync::atomic::{AtomicUsize, Ordering};

use log::debug;

use crate::column::{CellScope, ExpandedRenderer};
use crate::node::Node;
use crate::state::{Memo, State};
use crate::store::TableStore;

/// The owning table, as seen by its columns.
#[derive(Debug, Clone)]
pub struct TableOwner {
    table_id: String,
    store: Option<TableStore>,
    render_expanded: State<Option<ExpandedRenderer>>,
}

impl TableOwner {
    /// Create an owner with a generated id (`el-table_<n>`).
    pub fn new(store: Option<TableStore>) -> Self {
        static SEED: AtomicUsize = AtomicUsize::new(1);
        let id = format!("el-table_{}", SEED.fetch_add(1, Ordering::SeqCst));
        Self::with_id(id, store)
    }

    pub fn with_id(table_id: impl Into<String>, store: Option<TableStore>) -> Self {
        Self {
            table_id: table_id.into(),
            store,
            render_expanded: State::new(None),
        }
    }

    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    pub fn store(&self) -> Option<&TableStore> {
        self.store.as_ref()
    }

    /// Hierarchical flag of the store. Constant `false` without a store.
    pub fn hierarchical(&self) -> Memo<bool> {
        match &self.store {
            Some(store) => store.hierarchical_memo(),
            None => Memo::constant(false),
        }
    }

    /// Install the renderer for expanded rows.
    pub fn set_render_expanded(&self, renderer: ExpandedRenderer) {
        debug!("{}: installing expanded-row renderer", self.table_id);
        self.render_expanded.set(Some(renderer));
    }

    pub fn render_expanded(&self) -> Option<ExpandedRenderer> {
        self.render_expanded.get()
    }

    /// Render the expanded panel for a row, if an expand column provided one.
    pub fn expanded_row(&self, scope: &CellScope<'_>) -> Option<Vec<Node>> {
        self.render_expanded().and_then(|render| render.call(scope))
    }
}
