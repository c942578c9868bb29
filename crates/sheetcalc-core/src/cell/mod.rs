//! Cell-related types and utilities
//!
//! This module contains:
//! - [`CellAddress`] - A cell's location (e.g., "A1")
//! - [`CellRange`] - A range of cells (e.g., "A1:B10")
//! - [`CellValue`] - The literal stored in a cell

mod address;
mod range;
mod value;

pub use address::CellAddress;
pub use range::{expand_range, CellRange, CellRangeIterator};
pub use value::CellValue;
