//! Declared column configuration, before resolution.

use serde_json::{Map, Value};

use crate::instance::InstanceId;

use super::scope::{RenderCell, RenderHeader};
use super::types::{Align, ColumnType, Formatter, IndexMethod, WidthSpec};

/// Props a column is declared with.
///
/// # Examples
///
/// ```
/// use table_column::column::{Align, ColumnProps};
///
/// let props = ColumnProps::new()
///     .label("Name")
///     .property("user.name")
///     .width(120)
///     .align(Align::Center)
///     .show_overflow_tooltip(true);
/// assert_eq!(props.prop("label"), Some("Name".into()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ColumnProps {
    pub column_type: ColumnType,
    pub label: Option<String>,
    /// Dot path into the row (`user.name`).
    pub property: Option<String>,
    pub column_key: Option<String>,
    pub width: Option<WidthSpec>,
    pub min_width: Option<WidthSpec>,
    pub align: Option<Align>,
    pub header_align: Option<Align>,
    pub class_name: Option<String>,
    pub label_class_name: Option<String>,
    pub sortable: Option<bool>,
    pub resizable: Option<bool>,
    pub show_overflow_tooltip: bool,
    pub formatter: Option<Formatter>,
    pub index: Option<IndexMethod>,
    /// User header renderer. Superseded by the header slot.
    pub render_header: Option<RenderHeader>,
    /// User cell renderer, used when the content slot renders nothing.
    pub render_cell: Option<RenderCell>,
}

impl ColumnProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column_type(mut self, column_type: ColumnType) -> Self {
        self.column_type = column_type;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn property(mut self, property: impl Into<String>) -> Self {
        self.property = Some(property.into());
        self
    }

    pub fn column_key(mut self, key: impl Into<String>) -> Self {
        self.column_key = Some(key.into());
        self
    }

    pub fn width(mut self, width: impl Into<WidthSpec>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn min_width(mut self, min_width: impl Into<WidthSpec>) -> Self {
        self.min_width = Some(min_width.into());
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn header_align(mut self, align: Align) -> Self {
        self.header_align = Some(align);
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn label_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.label_class_name = Some(class_name.into());
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = Some(sortable);
        self
    }

    pub fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = Some(resizable);
        self
    }

    pub fn show_overflow_tooltip(mut self, show: bool) -> Self {
        self.show_overflow_tooltip = show;
        self
    }

    pub fn formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    pub fn index(mut self, index: IndexMethod) -> Self {
        self.index = Some(index);
        self
    }

    pub fn render_header(mut self, render: RenderHeader) -> Self {
        self.render_header = Some(render);
        self
    }

    pub fn render_cell(mut self, render: RenderCell) -> Self {
        self.render_cell = Some(render);
        self
    }

    /// JSON view of a scalar prop. Function-valued and unknown keys yield `None`.
    pub fn prop(&self, key: &str) -> Option<Value> {
        let value = match key {
            "type" => Value::from(self.column_type.as_str()),
            "label" => opt_string(&self.label),
            "property" | "prop" => opt_string(&self.property),
            "columnKey" => opt_string(&self.column_key),
            "width" => opt_width(&self.width),
            "minWidth" => opt_width(&self.min_width),
            "align" => self.align.map_or(Value::Null, |a| a.as_str().into()),
            "headerAlign" => self.header_align.map_or(Value::Null, |a| a.as_str().into()),
            "className" => opt_string(&self.class_name),
            "labelClassName" => opt_string(&self.label_class_name),
            "sortable" => self.sortable.map_or(Value::Null, Value::from),
            "resizable" => self.resizable.map_or(Value::Null, Value::from),
            "showOverflowTooltip" => Value::from(self.show_overflow_tooltip),
            _ => return None,
        };
        Some(value)
    }

    /// Collect several groups of prop keys into one JSON object.
    ///
    /// Later groups overwrite earlier ones for repeated keys. Keys without a
    /// scalar value are recorded as `null`.
    pub fn props_data(&self, groups: &[&[&str]]) -> Map<String, Value> {
        let mut data = Map::new();
        for group in groups {
            for key in *group {
                data.insert((*key).to_string(), self.prop(key).unwrap_or(Value::Null));
            }
        }
        data
    }
}

fn opt_string(value: &Option<String>) -> Value {
    value.as_deref().map_or(Value::Null, Value::from)
}

fn opt_width(value: &Option<WidthSpec>) -> Value {
    match value {
        Some(WidthSpec::Px(px)) => Value::from(*px),
        Some(WidthSpec::Raw(raw)) => Value::from(raw.as_str()),
        None => Value::Null,
    }
}

/// Position of `child` among `siblings`, if present.
pub fn column_el_index(siblings: &[InstanceId], child: InstanceId) -> Option<usize> {
    siblings.iter().position(|sibling| *sibling == child)
}
