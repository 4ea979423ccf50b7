//! Declarative value types shared by column props and resolved configs.

use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ColumnConfig;

/// Column type. Determines starts, forced properties and default class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    #[default]
    Default,
    Selection,
    Index,
    Expand,
    /// Any other type name. Gets no built-in behavior.
    #[serde(untagged)]
    Custom(String),
}

impl ColumnType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Default => "default",
            Self::Selection => "selection",
            Self::Index => "index",
            Self::Expand => "expand",
            Self::Custom(name) => name,
        }
    }
}

impl FromStr for ColumnType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "" | "default" => Self::Default,
            "selection" => Self::Selection,
            "index" => Self::Index,
            "expand" => Self::Expand,
            other => Self::Custom(other.to_string()),
        })
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }

    /// Derived class token, e.g. `is-center`.
    pub fn class(self) -> String {
        format!("is-{}", self.as_str())
    }
}

/// A declared width: either a number of pixels or a raw string such as
/// `"120"` or `"120px"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WidthSpec {
    Px(u32),
    Raw(String),
}

impl From<u32> for WidthSpec {
    fn from(width: u32) -> Self {
        Self::Px(width)
    }
}

impl From<&str> for WidthSpec {
    fn from(width: &str) -> Self {
        Self::Raw(width.to_string())
    }
}

impl From<String> for WidthSpec {
    fn from(width: String) -> Self {
        Self::Raw(width)
    }
}

type FormatFn = dyn Fn(&Value, &ColumnConfig, &Value, usize) -> String + Send + Sync;

/// Formats a cell value: `(row, column, value, row_index) -> text`.
#[derive(Clone)]
pub struct Formatter(Arc<FormatFn>);

impl Formatter {
    pub fn new(
        f: impl Fn(&Value, &ColumnConfig, &Value, usize) -> String + Send + Sync + 'static,
    ) -> Self {
        Self(Arc::new(f))
    }

    pub fn format(
        &self,
        row: &Value,
        column: &ColumnConfig,
        value: &Value,
        index: usize,
    ) -> String {
        (self.0)(row, column, value, index)
    }
}

impl std::fmt::Debug for Formatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Formatter(..)")
    }
}

/// How an index column numbers its rows.
#[derive(Clone)]
pub enum IndexMethod {
    /// Display `row_index + offset`.
    Offset(i64),
    /// Display whatever the function returns for the row index.
    Custom(Arc<dyn Fn(usize) -> i64 + Send + Sync>),
}

impl IndexMethod {
    pub fn custom(f: impl Fn(usize) -> i64 + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    pub fn display(&self, row_index: usize) -> i64 {
        match self {
            Self::Offset(offset) => row_index as i64 + offset,
            Self::Custom(f) => f(row_index),
        }
    }
}

impl std::fmt::Debug for IndexMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Offset(offset) => f.debug_tuple("Offset").field(offset).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
