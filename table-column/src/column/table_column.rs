//! A mounted column instance and its registration with the owning table.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::debug;
use serde_json::{Map, Value};

use crate::config::RenderConfig;
use crate::error::ColumnError;
use crate::instance::InstanceId;
use crate::owner::TableOwner;
use crate::state::{Memo, State};

use super::ColumnConfig;
use super::config::resolve_header_align_class;
use super::defaults::{DefaultTreePrefix, TreePrefix};
use super::forced::{ForcedPropsResolver, ForcedTable, column_starts};
use super::props::{ColumnProps, column_el_index};
use super::registrar::{ColumnRef, SubColumnRegistrar};
use super::render::CellRendererBuilder;
use super::scope::ColumnSlots;
use super::tree::{AncestorKind, RenderTree, TreeLinkResolver};
use super::types::Align;
use super::width::{WidthResolver, parse_min_width, parse_width};

static COLUMN_ID_SEED: AtomicUsize = AtomicUsize::new(1);

/// Collaborators a column needs while registering.
pub struct RegisterContext<'a> {
    pub owner: &'a TableOwner,
    pub tree: &'a dyn RenderTree,
    pub registrar: &'a SubColumnRegistrar,
    pub config: &'a RenderConfig,
    /// Overrides the built-in forced table when set.
    pub forced: Option<&'a ForcedTable>,
    /// Overrides the default tree prefix when set.
    pub tree_prefix: Option<Arc<dyn TreePrefix>>,
}

impl<'a> RegisterContext<'a> {
    pub fn new(
        owner: &'a TableOwner,
        tree: &'a dyn RenderTree,
        registrar: &'a SubColumnRegistrar,
        config: &'a RenderConfig,
    ) -> Self {
        Self {
            owner,
            tree,
            registrar,
            config,
            forced: None,
            tree_prefix: None,
        }
    }

    pub fn forced(mut self, forced: &'a ForcedTable) -> Self {
        self.forced = Some(forced);
        self
    }

    pub fn tree_prefix(mut self, tree_prefix: Arc<dyn TreePrefix>) -> Self {
        self.tree_prefix = Some(tree_prefix);
        self
    }
}

/// A column component mounted in the render tree.
///
/// Holds the declared props reactively together with the fields derived
/// from them. [`TableColumn::register`] turns it into a [`ColumnConfig`].
#[derive(Debug, Clone)]
pub struct TableColumn {
    key: InstanceId,
    props: State<ColumnProps>,
    column_id: State<String>,
    is_sub_column: State<bool>,
    real_align: Memo<Option<String>>,
    real_header_align: Memo<Option<String>>,
}

impl TableColumn {
    pub fn new(key: InstanceId, props: ColumnProps) -> Self {
        let props = State::new(props);

        let source = props.clone();
        let real_align = Memo::new(vec![props.tracker()], move || {
            source.with(|p| p.align.map(Align::class))
        });

        let source = props.clone();
        let real_header_align = Memo::new(vec![props.tracker()], move || {
            source.with(|p| resolve_header_align_class(p.header_align, p.align))
        });

        Self {
            key,
            props,
            column_id: State::new(String::new()),
            is_sub_column: State::new(false),
            real_align,
            real_header_align,
        }
    }

    pub fn key(&self) -> InstanceId {
        self.key
    }

    /// Assigned column id; empty until registered.
    pub fn column_id(&self) -> String {
        self.column_id.get()
    }

    /// Whether this column is nested under another column.
    pub fn is_sub_column(&self) -> bool {
        self.is_sub_column.get()
    }

    pub fn real_align(&self) -> Option<String> {
        self.real_align.get()
    }

    pub fn real_header_align(&self) -> Option<String> {
        self.real_header_align.get()
    }

    pub fn props(&self) -> ColumnProps {
        self.props.get()
    }

    /// Change declared props. Derived fields follow on next read.
    pub fn update_props(&self, f: impl FnOnce(&mut ColumnProps)) {
        self.props.update(f);
    }

    /// Collect groups of prop keys into one JSON object.
    pub fn props_data(&self, groups: &[&[&str]]) -> Map<String, Value> {
        self.props.with(|props| props.props_data(groups))
    }

    /// Resolve this column against its table.
    ///
    /// Discovers the nearest table/column ancestor, assigns the id, builds the
    /// config from per-type starts and props, then applies forced props,
    /// widths and renderers in that order.
    pub fn register(
        &self,
        slots: &ColumnSlots,
        ctx: &RegisterContext<'_>,
    ) -> Result<ColumnConfig, ColumnError> {
        ctx.config.validate()?;

        let parent = TreeLinkResolver::new(ctx.tree)
            .with_logical_parents(ctx.registrar)
            .column_or_table_parent(self.key);
        let is_sub_column = matches!(
            parent.as_ref().map(|p| &p.kind),
            Some(AncestorKind::ColumnContainer { .. })
        );
        let prefix = parent
            .as_ref()
            .and_then(|p| p.kind.identity())
            .unwrap_or(ctx.owner.table_id());
        let id = format!(
            "{prefix}_column_{}",
            COLUMN_ID_SEED.fetch_add(1, Ordering::SeqCst)
        );
        debug!("{}: registering column '{id}' (sub-column: {is_sub_column})", self.key);

        let props = self.props.get();
        let ns = ctx.config.table_ns();

        let mut column = column_starts(id.clone(), &props.column_type).merge_props(&props);
        column.align_class = self.real_align.get();
        column.header_align_class = self.real_header_align.get();

        let forced = match ctx.forced {
            Some(table) => ForcedPropsResolver::new(table.clone(), ns.clone()),
            None => ForcedPropsResolver::builtin(ns.clone()),
        };
        let column = forced.resolve(column);

        let column = WidthResolver::new(ctx.config.default_min_width).resolve(
            column,
            parse_width(props.width.as_ref()),
            parse_min_width(props.min_width.as_ref()),
        );

        let tree_prefix = ctx
            .tree_prefix
            .clone()
            .unwrap_or_else(|| Arc::new(DefaultTreePrefix::new(ns.clone())));
        let column = CellRendererBuilder::new(
            ColumnRef::new(self.key, id.clone()),
            ctx.owner.hierarchical(),
            ctx.registrar.clone(),
        )
        .namespace(ns)
        .tree_prefix(tree_prefix)
        .warn_on_header_override(ctx.config.warn_on_header_override)
        .build(column, slots, ctx.owner)?;

        ctx.tree.mark_column(self.key, &id);
        self.column_id.set(id);
        self.is_sub_column.set(is_sub_column);
        Ok(column)
    }

    /// Re-sync label and alignment after props changed.
    pub fn refresh(&self, column: &mut ColumnConfig) {
        self.props.with(|props| {
            column.label = props.label.clone();
            column.align = props.align;
            column.header_align = props.header_align;
        });
        column.align_class = self.real_align.get();
        column.header_align_class = self.real_header_align.get();
    }

    /// Insert this column's config into its parent at its sibling position.
    pub fn attach_to(
        &self,
        parent: &mut ColumnConfig,
        column: ColumnConfig,
        siblings: &[InstanceId],
    ) {
        parent.insert_child(column, column_el_index(siblings, self.key));
    }
}
