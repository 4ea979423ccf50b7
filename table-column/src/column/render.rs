//! Header and cell render functions for a resolved column.
//!
//! Cell content is composed in this order of precedence:
//! 1. the content slot, when it renders anything besides placeholders;
//! 2. the pre-existing cell renderer (user or forced);
//! 3. the table's default cell renderer.
//!
//! The result is wrapped in a `cell` container preceded by the tree-indent
//! prefix. Expand columns skip all of this and only wrap their renderer.

use std::sync::Arc;

use log::{debug, warn};

use crate::error::ColumnError;
use crate::node::{Element, Node};
use crate::owner::TableOwner;
use crate::state::Memo;
use crate::style::{Namespace, Style};

use super::ColumnConfig;
use super::defaults::{DefaultTreePrefix, TreePrefix, default_render_cell};
use super::registrar::{ColumnRef, SubColumnRegistrar};
use super::scope::{
    CellScope, ColumnSlots, ExpandedRenderer, HeaderScope, RenderCell, RenderHeader,
};
use super::types::ColumnType;

/// Pixels taken off the tooltip cell width for the cell's border.
const TOOLTIP_WIDTH_INSET: u32 = 1;

/// Builds and installs `render_header` / `render_cell` for one column.
pub struct CellRendererBuilder {
    column: ColumnRef,
    hierarchical: Memo<bool>,
    registrar: SubColumnRegistrar,
    tree_prefix: Arc<dyn TreePrefix>,
    ns: Namespace,
    warn_on_header_override: bool,
}

impl CellRendererBuilder {
    pub fn new(column: ColumnRef, hierarchical: Memo<bool>, registrar: SubColumnRegistrar) -> Self {
        Self {
            column,
            hierarchical,
            registrar,
            tree_prefix: Arc::new(DefaultTreePrefix::default()),
            ns: Namespace::default(),
            warn_on_header_override: true,
        }
    }

    /// Use a different class-name namespace. Also resets the tree prefix to
    /// the default one under that namespace.
    pub fn namespace(mut self, ns: Namespace) -> Self {
        self.tree_prefix = Arc::new(DefaultTreePrefix::new(ns.clone()));
        self.ns = ns;
        self
    }

    pub fn tree_prefix(mut self, tree_prefix: Arc<dyn TreePrefix>) -> Self {
        self.tree_prefix = tree_prefix;
        self
    }

    pub fn warn_on_header_override(mut self, warn: bool) -> Self {
        self.warn_on_header_override = warn;
        self
    }

    /// Install both renderers on `column`. Runs once per column.
    pub fn build(
        &self,
        mut column: ColumnConfig,
        slots: &ColumnSlots,
        owner: &TableOwner,
    ) -> Result<ColumnConfig, ColumnError> {
        if column.renders_installed() {
            return Err(ColumnError::RendersInstalled {
                column_id: column.id.clone(),
            });
        }

        if column.header_overridden() {
            if self.warn_on_header_override {
                warn!(
                    "TableColumn '{}': comparing to render_header, the header slot is easier \
                     to use. We recommend using the header slot.",
                    column.id
                );
            }
        } else if let Some(render) = self.header_renderer(&column, slots) {
            column.render_header = Some(render);
        }

        if column.column_type == ColumnType::Expand {
            column.render_cell = Some(self.expand_renderer(&column));
            owner.set_render_expanded(self.expanded_row_renderer(slots));
        } else {
            column.render_cell = Some(self.cell_renderer(&column, slots));
        }

        debug!("{}: renderers installed", column.id);
        column.mark_renders_installed();
        Ok(column)
    }

    /// Generated header: header slot output, else the column's label.
    ///
    /// Selection columns get none; their header is the forced checkbox.
    pub fn header_renderer(
        &self,
        column: &ColumnConfig,
        slots: &ColumnSlots,
    ) -> Option<RenderHeader> {
        if column.column_type == ColumnType::Selection {
            return None;
        }
        let slot = slots.header.clone();
        Some(RenderHeader::new(move |scope: &HeaderScope<'_>| match &slot {
            Some(slot) => Node::fragment(slot.call(scope)),
            None => Node::text(scope.column.label.clone().unwrap_or_default()),
        }))
    }

    /// Expand columns: the existing renderer's output inside a `cell` div.
    pub fn expand_renderer(&self, column: &ColumnConfig) -> RenderCell {
        let origin = column
            .render_cell
            .clone()
            .unwrap_or_else(|| RenderCell::new(default_render_cell));
        RenderCell::new(move |scope: &CellScope<'_>| {
            Element::div().class("cell").child(origin.call(scope)).into()
        })
    }

    /// Expanded-row panel: the content slot, or `None` without one.
    pub fn expanded_row_renderer(&self, slots: &ColumnSlots) -> ExpandedRenderer {
        let slot = slots.default.clone();
        ExpandedRenderer::new(move |scope: &CellScope<'_>| {
            slot.as_ref().map(|slot| slot.call(scope))
        })
    }

    /// Cell renderer for every non-expand column.
    pub fn cell_renderer(&self, column: &ColumnConfig, slots: &ColumnSlots) -> RenderCell {
        let origin = column
            .render_cell
            .clone()
            .unwrap_or_else(|| RenderCell::new(default_render_cell));
        let slot = slots.default.clone();
        let show_overflow_tooltip = column.show_overflow_tooltip;
        let tooltip_class = self.ns.prefixed("tooltip");
        let hierarchical = self.hierarchical.clone();
        let tree_prefix = Arc::clone(&self.tree_prefix);
        let registrar = self.registrar.clone();
        let current = self.column.clone();

        RenderCell::new(move |scope: &CellScope<'_>| {
            let children = match &slot {
                Some(slot) => {
                    let nodes = slot.call(scope);
                    if nodes.iter().any(|node| !node.is_placeholder()) {
                        Node::fragment(nodes)
                    } else {
                        origin.call(scope)
                    }
                }
                None => origin.call(scope),
            };

            let in_tree_cell = hierarchical.get()
                && scope.cell_index == 0
                && scope.column.column_type != ColumnType::Selection;
            let prefix = if in_tree_cell {
                tree_prefix.prefix(scope, true)
            } else {
                Node::Empty
            };

            let mut cell = Element::div().class("cell");
            if show_overflow_tooltip {
                let width = match scope.column.real_width {
                    0 => scope.column.width.unwrap_or(0),
                    real => real,
                };
                cell = cell
                    .class(tooltip_class.clone())
                    .style(Style::new().width_px(width.saturating_sub(TOOLTIP_WIDTH_INSET)));
            }

            registrar.tag(&children, &current);
            cell.children(vec![prefix, children]).into()
        })
    }
}
