//! Render configuration shared by all columns of a table.

use serde::Deserialize;

use crate::error::ColumnError;
use crate::style::Namespace;

/// Minimum width applied when a column declares neither width nor min-width.
pub const DEFAULT_MIN_WIDTH: u32 = 80;

/// Table-wide settings consulted while resolving columns.
///
/// Deserializable so hosts can keep it alongside the rest of their settings;
/// missing fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Class-name namespace (`el` → `el-table__placeholder`).
    pub namespace: String,

    /// Minimum width for columns without width or min-width.
    pub default_min_width: u32,

    /// Log an advisory when a column overrides its header renderer.
    pub warn_on_header_override: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            namespace: "el".to_string(),
            default_min_width: DEFAULT_MIN_WIDTH,
            warn_on_header_override: true,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the class-name namespace.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set the fallback minimum width.
    pub fn default_min_width(mut self, width: u32) -> Self {
        self.default_min_width = width;
        self
    }

    /// Silence the header override advisory.
    pub fn quiet(mut self) -> Self {
        self.warn_on_header_override = false;
        self
    }

    pub fn validate(&self) -> Result<(), ColumnError> {
        if self.namespace.trim().is_empty() {
            return Err(ColumnError::InvalidConfig(
                "namespace must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Class-name builder for the table block.
    pub fn table_ns(&self) -> Namespace {
        Namespace::new(self.namespace.clone(), "table")
    }
}
