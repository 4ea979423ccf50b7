//! Column resolution errors.

use thiserror::Error;

/// Errors raised while configuring or registering a column.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnError {
    /// Header and cell renderers were already installed on this column.
    #[error("renderers already installed on column '{column_id}'")]
    RendersInstalled { column_id: String },

    /// Render configuration failed validation.
    #[error("invalid render configuration: {0}")]
    InvalidConfig(String),
}
