//! Cell range type and range expansion

use super::CellAddress;
use crate::error::{Error, Result};
use crate::MAX_RANGE_CELLS;
use std::fmt;
use std::str::FromStr;

/// A range of cells (e.g., "A1:B10")
///
/// Unlike a normalized rectangle, the corners are kept as written: a range
/// whose end lies left of or above its start is rejected rather than flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    /// Start address (top-left)
    pub start: CellAddress,
    /// End address (bottom-right)
    pub end: CellAddress,
}

impl CellRange {
    /// Create a new cell range, checking that `end` does not precede `start`
    /// and that the range covers at most [`MAX_RANGE_CELLS`] cells
    pub fn new(start: CellAddress, end: CellAddress) -> Result<Self> {
        if end.col < start.col || end.row < start.row {
            return Err(Error::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        let range = Self { start, end };
        let cells = range.cell_count();
        if cells > MAX_RANGE_CELLS {
            return Err(Error::RangeTooLarge {
                range: range.to_a1_string(),
                cells,
                limit: MAX_RANGE_CELLS,
            });
        }
        Ok(range)
    }

    /// Create a single-cell range
    pub fn single(addr: CellAddress) -> Self {
        Self {
            start: addr,
            end: addr,
        }
    }

    /// Build a range from two textual corners
    pub fn from_corners(start: &str, end: &str) -> Result<Self> {
        let start = CellAddress::parse(start)?;
        let end = CellAddress::parse(end)?;
        Self::new(start, end)
    }

    /// Parse a range from A1:B10 notation (a lone address is a one-cell range)
    pub fn parse(s: &str) -> Result<Self> {
        match s.split_once(':') {
            Some((start, end)) => Self::from_corners(start, end),
            None => Ok(Self::single(CellAddress::parse(s)?)),
        }
    }

    /// Check if a cell is within this range
    pub fn contains(&self, addr: &CellAddress) -> bool {
        addr.row >= self.start.row
            && addr.row <= self.end.row
            && addr.col >= self.start.col
            && addr.col <= self.end.col
    }

    /// Get the number of rows in the range
    pub fn row_count(&self) -> u32 {
        self.end.row - self.start.row + 1
    }

    /// Get the number of columns in the range
    pub fn col_count(&self) -> u32 {
        self.end.col - self.start.col + 1
    }

    /// Get the total number of cells in the range
    pub fn cell_count(&self) -> u64 {
        self.row_count() as u64 * self.col_count() as u64
    }

    /// Iterate over all cell addresses in the range (column by column)
    pub fn cells(&self) -> CellRangeIterator {
        CellRangeIterator {
            range: *self,
            current_col: self.start.col,
            current_row: self.start.row,
            remaining: self.cell_count(),
        }
    }

    /// Format as A1:B10 string
    pub fn to_a1_string(&self) -> String {
        format!("{}:{}", self.start, self.end)
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Iterator over cells in a range, outer loop over columns, inner over rows
pub struct CellRangeIterator {
    range: CellRange,
    current_col: u32,
    current_row: u32,
    remaining: u64,
}

impl Iterator for CellRangeIterator {
    type Item = CellAddress;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let addr = CellAddress::new(self.current_col, self.current_row);
        self.remaining -= 1;

        // Move to next cell
        if self.current_row == self.range.end.row {
            self.current_row = self.range.start.row;
            self.current_col += 1;
        } else {
            self.current_row += 1;
        }

        Some(addr)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CellRangeIterator {}

/// Expand the range between two textual corners into its member addresses
///
/// Members come out column-major: `("A1", "B2")` yields A1, A2, B1, B2.
pub fn expand_range(start: &str, end: &str) -> Result<Vec<String>> {
    let range = CellRange::from_corners(start, end)?;
    Ok(range.cells().map(|addr| addr.to_a1_string()).collect())
}
