//! Ancestor discovery over the mixed render tree.
//!
//! A column's structural parent is not necessarily a table or a column:
//! wrapper components (layout boxes, conditionals, user components) can sit
//! in between. Discovery walks upward until it meets a node that carries a
//! table or column identity.

use std::collections::{HashMap, HashSet};

use log::trace;

use crate::instance::InstanceId;
use crate::state::State;

use super::registrar::SubColumnRegistrar;

/// What an ancestor node is, as far as column discovery cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AncestorKind {
    /// A table, identified by its table id.
    Table { table_id: String },
    /// A column that can hold sub-columns, identified by its column id.
    ColumnContainer { column_id: String },
    /// Any other node. Traversal continues through it.
    OpaqueWrapper,
}

impl AncestorKind {
    /// Tables and columns end the walk.
    pub fn is_anchor(&self) -> bool {
        !matches!(self, Self::OpaqueWrapper)
    }

    /// Table id or column id, whichever this node carries.
    pub fn identity(&self) -> Option<&str> {
        match self {
            Self::Table { table_id } => Some(table_id),
            Self::ColumnContainer { column_id } => Some(column_id),
            Self::OpaqueWrapper => None,
        }
    }
}

/// One step up the tree: the parent node and what it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ancestor {
    pub id: InstanceId,
    pub kind: AncestorKind,
}

impl Ancestor {
    pub fn new(id: InstanceId, kind: AncestorKind) -> Self {
        Self { id, kind }
    }
}

/// Read access to the physical render tree.
pub trait RenderTree {
    /// The structural parent of `node`, or `None` at the root.
    fn parent_of(&self, node: InstanceId) -> Option<Ancestor>;

    /// Record that `node` is a column with the given id. Called once the
    /// column has registered, so later descendants can discover it.
    fn mark_column(&self, node: InstanceId, column_id: &str) {
        let _ = (node, column_id);
    }
}

#[derive(Debug, Clone)]
struct TreeEntry {
    kind: AncestorKind,
    parent: Option<InstanceId>,
}

/// A simple arena-backed [`RenderTree`].
#[derive(Debug, Clone, Default)]
pub struct InstanceTree {
    entries: State<HashMap<InstanceId, TreeEntry>>,
}

impl InstanceTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node under `parent` and return its id.
    pub fn insert(&self, kind: AncestorKind, parent: Option<InstanceId>) -> InstanceId {
        let id = InstanceId::new();
        self.insert_with_id(id, kind, parent);
        id
    }

    /// Add a node with a caller-chosen id.
    pub fn insert_with_id(&self, id: InstanceId, kind: AncestorKind, parent: Option<InstanceId>) {
        self.entries.update(|entries| {
            entries.insert(id, TreeEntry { kind, parent });
        });
    }

    pub fn kind_of(&self, node: InstanceId) -> Option<AncestorKind> {
        self.entries
            .with(|entries| entries.get(&node).map(|entry| entry.kind.clone()))
    }
}

impl RenderTree for InstanceTree {
    fn parent_of(&self, node: InstanceId) -> Option<Ancestor> {
        self.entries.with(|entries| {
            let parent = entries.get(&node)?.parent?;
            let kind = entries.get(&parent)?.kind.clone();
            Some(Ancestor::new(parent, kind))
        })
    }

    fn mark_column(&self, node: InstanceId, column_id: &str) {
        self.entries.update(|entries| {
            if let Some(entry) = entries.get_mut(&node) {
                entry.kind = AncestorKind::ColumnContainer {
                    column_id: column_id.to_string(),
                };
            }
        });
    }
}

/// Walks from a column instance to its nearest table or column ancestor.
///
/// Each step prefers the physical parent; the logical parent recorded by the
/// [`SubColumnRegistrar`] is consulted only when a node has no physical
/// parent (content rendered into a cell is detached from its column).
pub struct TreeLinkResolver<'a> {
    tree: &'a dyn RenderTree,
    logical: Option<&'a SubColumnRegistrar>,
}

impl<'a> TreeLinkResolver<'a> {
    pub fn new(tree: &'a dyn RenderTree) -> Self {
        Self {
            tree,
            logical: None,
        }
    }

    pub fn with_logical_parents(mut self, registrar: &'a SubColumnRegistrar) -> Self {
        self.logical = Some(registrar);
        self
    }

    fn step(&self, node: InstanceId) -> Option<Ancestor> {
        self.tree
            .parent_of(node)
            .or_else(|| self.logical.and_then(|registrar| registrar.logical_parent(node)))
    }

    /// The nearest ancestor of `start` carrying a table or column identity.
    pub fn column_or_table_parent(&self, start: InstanceId) -> Option<Ancestor> {
        let mut visited = HashSet::from([start]);
        let mut current = self.step(start);

        while let Some(ancestor) = current {
            if ancestor.kind.is_anchor() {
                trace!("{start}: anchored at {} ({:?})", ancestor.id, ancestor.kind);
                return Some(ancestor);
            }
            if !visited.insert(ancestor.id) {
                return None;
            }
            current = self.step(ancestor.id);
        }
        None
    }
}
