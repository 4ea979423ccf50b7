//! Built-in renderers: the default cell, per-type cells and headers, and
//! the tree-indent prefix.

use serde_json::Value;

use crate::node::{Component, Element, Node};
use crate::style::{Namespace, Style};

use super::scope::{CellScope, HeaderScope, RenderCell, RenderHeader};

/// Look up a dot path (`user.address.city`) in a row.
pub fn row_value<'a>(row: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(row, |value, key| match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// The table's standard cell content: the formatted or stringified value at
/// the column's property path.
pub fn default_render_cell(scope: &CellScope<'_>) -> Node {
    let value = scope
        .column
        .property
        .as_deref()
        .and_then(|path| row_value(scope.row, path));

    let text = match &scope.column.formatter {
        Some(formatter) => formatter.format(
            scope.row,
            scope.column,
            value.unwrap_or(&Value::Null),
            scope.row_index,
        ),
        None => display_value(value),
    };
    Node::text(text)
}

fn checkbox(ns: &Namespace, checked: bool) -> Node {
    let mut el = Element::span().class(ns.prefixed("checkbox"));
    if checked {
        el = el.class(ns.is("checked"));
    }
    el.into()
}

pub(crate) fn selection_header(ns: Namespace) -> RenderHeader {
    RenderHeader::new(move |scope: &HeaderScope<'_>| checkbox(&ns, scope.all_selected))
}

pub(crate) fn selection_cell(ns: Namespace) -> RenderCell {
    RenderCell::new(move |scope: &CellScope<'_>| checkbox(&ns, scope.selected))
}

pub(crate) fn index_header() -> RenderHeader {
    RenderHeader::new(|scope: &HeaderScope<'_>| {
        Node::text(scope.column.label.clone().unwrap_or_else(|| "#".to_string()))
    })
}

pub(crate) fn index_cell() -> RenderCell {
    RenderCell::new(|scope: &CellScope<'_>| {
        let shown = match &scope.column.index {
            Some(method) => method.display(scope.row_index),
            None => scope.row_index as i64 + 1,
        };
        Element::div().child(Node::text(shown.to_string())).into()
    })
}

pub(crate) fn expand_header() -> RenderHeader {
    RenderHeader::new(|scope: &HeaderScope<'_>| {
        Node::text(scope.column.label.clone().unwrap_or_default())
    })
}

pub(crate) fn expand_cell(ns: Namespace) -> RenderCell {
    RenderCell::new(move |scope: &CellScope<'_>| {
        let mut icon = Element::div().class(ns.e("expand-icon"));
        if scope.expanded {
            icon = icon.class(ns.em("expand-icon", "expanded"));
        }
        icon.child(Component::new("Icon").child(Component::new("ArrowRight")))
            .into()
    })
}

/// Builds the indentation and expand-icon prefix placed before the content
/// of the first data cell of hierarchical rows.
pub trait TreePrefix: Send + Sync {
    /// `create_placeholder` asks for a placeholder when the row carries no
    /// tree metadata. Returns [`Node::Empty`] when there is nothing to show.
    fn prefix(&self, scope: &CellScope<'_>, create_placeholder: bool) -> Node;
}

/// Standard tree prefix: indent span, then expand icon or placeholder.
#[derive(Debug, Clone, Default)]
pub struct DefaultTreePrefix {
    ns: Namespace,
}

impl DefaultTreePrefix {
    pub fn new(ns: Namespace) -> Self {
        Self { ns }
    }
}

impl TreePrefix for DefaultTreePrefix {
    fn prefix(&self, scope: &CellScope<'_>, create_placeholder: bool) -> Node {
        let ns = &self.ns;
        let Some(tree_node) = scope.tree_node else {
            if create_placeholder {
                let placeholder = Element::span().class(ns.e("placeholder"));
                return Node::fragment(vec![Node::Element(placeholder)]);
            }
            return Node::Empty;
        };

        let mut parts: Vec<Node> = Vec::new();
        if tree_node.indent > 0 {
            parts.push(
                Element::span()
                    .class(ns.e("indent"))
                    .style(Style::new().padding_left_px(tree_node.indent))
                    .into(),
            );
        }

        match tree_node.expanded {
            Some(expanded) if !tree_node.no_lazy_children => {
                let mut icon = Element::div().class(ns.e("expand-icon"));
                if expanded {
                    icon = icon.class(ns.em("expand-icon", "expanded"));
                }
                let mut glyph = Component::new("Icon");
                if tree_node.loading {
                    glyph = glyph.class(ns.is("loading")).child(Component::new("Loading"));
                } else {
                    glyph = glyph.child(Component::new("ArrowRight"));
                }
                parts.push(icon.child(glyph).into());
            }
            _ => parts.push(Element::span().class(ns.e("placeholder")).into()),
        }
        Node::fragment(parts)
    }
}
