//! Width parsing and effective-width resolution.

use super::ColumnConfig;
use super::types::WidthSpec;
use crate::config::DEFAULT_MIN_WIDTH;

/// Parse a declared width into pixels.
///
/// Strings are read up to the first non-digit (`"120px"` → 120). Strings
/// without leading digits parse to `None`.
pub fn parse_width(spec: Option<&WidthSpec>) -> Option<u32> {
    match spec? {
        WidthSpec::Px(px) => Some(*px),
        WidthSpec::Raw(raw) => leading_int(raw),
    }
}

/// Parse a declared minimum width into pixels.
///
/// Blank and unparsable strings yield `None`; the resolver then applies the
/// default minimum without treating the value as a supplied minimum.
pub fn parse_min_width(spec: Option<&WidthSpec>) -> Option<u32> {
    parse_width(spec).filter(|w| *w > 0)
}

fn leading_int(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let digits: &str = trimmed
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(trimmed, |(end, _)| &trimmed[..end]);
    digits.parse().ok()
}

/// Resolves `width`, `min_width` and `real_width` on a column.
#[derive(Debug, Clone, Copy)]
pub struct WidthResolver {
    default_min_width: u32,
}

impl Default for WidthResolver {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_WIDTH)
    }
}

impl WidthResolver {
    pub fn new(default_min_width: u32) -> Self {
        Self { default_min_width }
    }

    /// Apply already-parsed widths. A width of zero counts as absent.
    ///
    /// When only a minimum is supplied the column's width is cleared, so a
    /// width carried over from the type's starts never outlives it.
    pub fn resolve(
        &self,
        mut column: ColumnConfig,
        width: Option<u32>,
        min_width: Option<u32>,
    ) -> ColumnConfig {
        let width = width.filter(|w| *w > 0);
        let min_width = min_width.filter(|w| *w > 0);

        if let Some(width) = width {
            column.width = Some(width);
        }
        if let Some(min_width) = min_width {
            column.min_width = Some(min_width);
        }
        if width.is_none() && min_width.is_some() {
            column.width = None;
        }
        if column.min_width.is_none_or(|w| w == 0) {
            column.min_width = Some(self.default_min_width);
        }
        column.real_width = column
            .width
            .or(column.min_width)
            .unwrap_or(self.default_min_width);
        column
    }
}
