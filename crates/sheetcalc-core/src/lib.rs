//! # sheetcalc-core
//!
//! Core data structures for the sheetcalc formula engine.
//!
//! This crate provides the leaf types used throughout sheetcalc:
//! - [`CellAddress`] - A1-style addresses and the bijective base-26 column codec
//! - [`CellRange`] - Inclusive rectangular ranges, expanded column-major
//! - [`CellValue`] - The literal content of a cell (number, text or empty)
//!
//! ## Example
//!
//! ```rust
//! use sheetcalc_core::{expand_range, CellAddress};
//!
//! assert!(CellAddress::is_valid("AA10"));
//! assert_eq!(CellAddress::index_to_column(26), "AA");
//!
//! let cells = expand_range("A1", "B2").unwrap();
//! assert_eq!(cells, vec!["A1", "A2", "B1", "B2"]);
//! ```

pub mod cell;
pub mod error;

// Re-exports for convenience
pub use cell::{expand_range, CellAddress, CellRange, CellRangeIterator, CellValue};
pub use error::{Error, Result};

/// Maximum number of rows in a sheet
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a sheet (A to XFD)
pub const MAX_COLS: u32 = 16_384;

/// Maximum number of cells a single range may cover
pub const MAX_RANGE_CELLS: u64 = MAX_ROWS as u64;
