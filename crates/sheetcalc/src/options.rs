//! Spreadsheet configuration

use sheetcalc_formula::EvaluationOptions;

/// Options for a [`Spreadsheet`](crate::Spreadsheet)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetOptions {
    /// Limits applied to every formula evaluation
    pub evaluation: EvaluationOptions,
    /// Layout of the plain-text grid
    pub render: RenderOptions,
}

/// Layout of the plain-text grid produced by
/// [`Spreadsheet::render`](crate::Spreadsheet::render)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Width of the leading row-number column (default: 5)
    pub row_label_width: usize,
    /// Minimum width of each cell column (default: 10)
    pub column_width: usize,
    /// Shown for cells without a value (default: "-")
    pub empty_marker: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            row_label_width: 5,
            column_width: 10,
            empty_marker: "-".to_string(),
        }
    }
}
