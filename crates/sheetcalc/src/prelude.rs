//! Prelude module - common imports for sheetcalc users
//!
//! ```rust
//! use sheetcalc::prelude::*;
//! ```

pub use crate::{
    // Addressing
    CellAddress,
    CellRange,
    // Values
    CellError,
    CellValue,
    FormulaValue,
    // Errors
    FormulaError,
    FormulaResult,
    // Main types
    SheetOptions,
    Spreadsheet,
};
