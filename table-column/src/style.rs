//! Inline styles and namespaced class names.

use std::collections::BTreeMap;

/// Inline style attached to an element.
///
/// Properties are kept in a sorted map so rendered output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    properties: BTreeMap<String, String>,
}

impl Style {
    /// Create a new empty style
    pub const fn new() -> Self {
        Self {
            properties: BTreeMap::new(),
        }
    }

    /// Set an arbitrary property
    pub fn set(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(property.into(), value.into());
        self
    }

    /// Set `width` in pixels
    pub fn width_px(self, width: u32) -> Self {
        self.set("width", format!("{width}px"))
    }

    /// Set `padding-left` in pixels
    pub fn padding_left_px(self, padding: u32) -> Self {
        self.set("padding-left", format!("{padding}px"))
    }

    /// Get a property value
    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties.get(property).map(String::as_str)
    }

    /// Get the `width` property
    pub fn width(&self) -> Option<&str> {
        self.get("width")
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Builds BEM-style class names under a namespace and block.
///
/// With the default namespace `el` and block `table`:
/// - `b()` → `el-table`
/// - `e("placeholder")` → `el-table__placeholder`
/// - `em("expand-icon", "expanded")` → `el-table__expand-icon--expanded`
/// - `is("loading")` → `is-loading`
/// - `prefixed("tooltip")` → `el-tooltip`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    namespace: String,
    block: String,
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new("el", "table")
    }
}

impl Namespace {
    pub fn new(namespace: impl Into<String>, block: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            block: block.into(),
        }
    }

    /// The bare namespace (e.g. `el`).
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn b(&self) -> String {
        format!("{}-{}", self.namespace, self.block)
    }

    pub fn e(&self, element: &str) -> String {
        format!("{}__{}", self.b(), element)
    }

    pub fn em(&self, element: &str, modifier: &str) -> String {
        format!("{}--{}", self.e(element), modifier)
    }

    pub fn is(&self, state: &str) -> String {
        format!("is-{state}")
    }

    /// Prefix an arbitrary class with the namespace only.
    pub fn prefixed(&self, class: &str) -> String {
        format!("{}-{}", self.namespace, class)
    }
}
