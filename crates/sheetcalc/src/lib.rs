//! # sheetcalc
//!
//! A single-sheet formula engine.
//!
//! Cells are addressed in A1 notation and hold numbers, text or a formula.
//! Formulas are evaluated again on every read, so a formula cell always
//! reflects the current contents of the cells it reads.
//!
//! ## Features
//!
//! - Literal values, coerced to numbers where they parse as one
//! - Formulas: `SUM`, `AVERAGE`, `MIN`, `MAX` over a range, `SQRT` of a
//!   cell, a bare reference, or one `+ - * /` operation
//! - Self-references and cycles are rejected when a formula is written
//! - Dependents are tracked so removed cells stay readable as placeholders
//! - Serde-friendly records of every stored cell
//! - Plain-text grid rendering
//!
//! ## Example
//!
//! ```rust
//! use sheetcalc::prelude::*;
//!
//! let mut sheet = Spreadsheet::new();
//! sheet.set_cell("A1", Some("10"), None).unwrap();
//! sheet.set_cell("A2", Some("30"), None).unwrap();
//! sheet.set_cell("A3", None, Some("=AVERAGE(A1:A2)")).unwrap();
//!
//! assert_eq!(sheet.get_cell_value("A3"), FormulaValue::Number(20.0));
//! assert_eq!(sheet.sum("A1", "A2").unwrap(), 40.0);
//! ```

pub mod display;
pub mod options;
pub mod prelude;
pub mod record;
pub mod spreadsheet;

pub use options::{RenderOptions, SheetOptions};
pub use record::{CellRecord, SheetRecords};
pub use spreadsheet::{Cell, Formula, Spreadsheet};

// Re-export core types
pub use sheetcalc_core::{
    expand_range, CellAddress, CellRange, CellValue, Error, Result, MAX_COLS, MAX_RANGE_CELLS,
    MAX_ROWS,
};

// Re-export formula types
pub use sheetcalc_formula::{
    parse_formula, Aggregate, CellError, EvaluationOptions, FormulaError, FormulaExpr,
    FormulaResult, FormulaValue,
};

/// Check whether `text` is a well-formed cell address such as `B12`
pub fn is_valid_address(text: &str) -> bool {
    CellAddress::is_valid(text)
}
