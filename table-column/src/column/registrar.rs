//! Logical-parent links for column descriptors rendered inside cells.

use std::collections::HashMap;

use log::trace;

use crate::instance::InstanceId;
use crate::node::Node;
use crate::state::State;

use super::tree::{Ancestor, AncestorKind};

/// The column currently rendering, as recorded against its rendered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    pub instance: InstanceId,
    pub column_id: String,
}

impl ColumnRef {
    pub fn new(instance: InstanceId, column_id: impl Into<String>) -> Self {
        Self {
            instance,
            column_id: column_id.into(),
        }
    }
}

/// Lookup table from a rendered column instance to its logical parent column.
///
/// Entries are plain ids: a link never keeps the parent alive. Clones share
/// the same table.
#[derive(Debug, Clone, Default)]
pub struct SubColumnRegistrar {
    links: State<HashMap<InstanceId, ColumnRef>>,
}

impl SubColumnRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Link every column descriptor among `children` to `parent`.
    ///
    /// `children` may be a single node or a fragment; only its top-level
    /// nodes are inspected. Re-tagging an existing link is a no-op.
    pub fn tag(&self, children: &Node, parent: &ColumnRef) {
        for child in children.top_level() {
            let Node::Component(component) = child else {
                continue;
            };
            if !component.is_table_column() {
                continue;
            }
            let Some(instance) = component.instance else {
                continue;
            };
            if self.parent_of(instance).as_ref() == Some(parent) {
                continue;
            }
            trace!("{instance}: logical parent is column '{}'", parent.column_id);
            self.links.update(|links| {
                links.insert(instance, parent.clone());
            });
        }
    }

    /// The column `instance` was last rendered under.
    pub fn parent_of(&self, instance: InstanceId) -> Option<ColumnRef> {
        self.links.with(|links| links.get(&instance).cloned())
    }

    /// The logical parent as an ancestor step for tree discovery.
    pub fn logical_parent(&self, instance: InstanceId) -> Option<Ancestor> {
        self.parent_of(instance).map(|parent| {
            Ancestor::new(
                parent.instance,
                AncestorKind::ColumnContainer {
                    column_id: parent.column_id,
                },
            )
        })
    }

    /// Drop the link for an unmounted instance.
    pub fn forget(&self, instance: InstanceId) {
        self.links.update(|links| {
            links.remove(&instance);
        });
    }

    pub fn len(&self) -> usize {
        self.links.with(HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
