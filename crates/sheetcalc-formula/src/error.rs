//! Formula error types

use crate::evaluator::CellError;
use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur during formula parsing or evaluation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormulaError {
    /// Malformed cell address
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Range whose end precedes its start
    #[error("Invalid cell range: {end} precedes {start}")]
    InvalidRange { start: String, end: String },

    /// Range covering more cells than a formula may read
    #[error("Cell range {range} covers {cells} cells, more than the limit of {limit}")]
    RangeTooLarge { range: String, cells: u64, limit: u64 },

    /// Right operand of `/` is zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Formula does not have one of the supported shapes
    #[error("Malformed formula: {0}")]
    MalformedFormula(String),

    /// A formula reads the cell it is assigned to
    #[error("Cell {0} references itself")]
    SelfReference(String),

    /// A cell was reached again while it was still being evaluated
    #[error("Cyclic reference through cell {0}")]
    CyclicReference(String),

    /// Arithmetic or SQRT operand did not resolve to a number
    #[error("Operand {0} is not numeric")]
    NonNumericOperand(String),

    /// SQRT of a negative number
    #[error("Cannot take the square root of {0}")]
    NegativeSquareRoot(f64),

    /// Evaluation nested deeper than the configured limit
    #[error("Evaluation depth limit of {0} exceeded")]
    DepthLimitExceeded(usize),
}

impl FormulaError {
    /// Whether this failure rejects a formula write outright
    ///
    /// Value-level failures (division by zero, non-numeric operands, negative
    /// square roots) depend on the current operand values and can go away
    /// after another write, so a formula producing them is still stored.
    pub fn is_structural(&self) -> bool {
        !matches!(
            self,
            FormulaError::DivisionByZero
                | FormulaError::NonNumericOperand(_)
                | FormulaError::NegativeSquareRoot(_)
        )
    }

    /// The error sentinel shown in place of a value for this failure
    pub fn cell_error(&self) -> CellError {
        match self {
            FormulaError::DivisionByZero => CellError::Div0,
            FormulaError::NonNumericOperand(_) => CellError::Value,
            FormulaError::NegativeSquareRoot(_) => CellError::Num,
            FormulaError::MalformedFormula(_) => CellError::Name,
            FormulaError::InvalidAddress(_)
            | FormulaError::InvalidRange { .. }
            | FormulaError::RangeTooLarge { .. }
            | FormulaError::DepthLimitExceeded(_) => CellError::Ref,
            FormulaError::SelfReference(_) | FormulaError::CyclicReference(_) => CellError::Cycle,
        }
    }
}

impl From<sheetcalc_core::Error> for FormulaError {
    fn from(err: sheetcalc_core::Error) -> Self {
        match err {
            sheetcalc_core::Error::InvalidAddress(text) => FormulaError::InvalidAddress(text),
            sheetcalc_core::Error::InvalidRange { start, end } => {
                FormulaError::InvalidRange { start, end }
            }
            sheetcalc_core::Error::RangeTooLarge {
                range,
                cells,
                limit,
            } => FormulaError::RangeTooLarge {
                range,
                cells,
                limit,
            },
        }
    }
}
