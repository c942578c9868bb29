//! Math functions

use crate::error::{FormulaError, FormulaResult};
use crate::evaluator::FormulaValue;
use sheetcalc_core::CellAddress;

/// SQRT(cell) - square root of a non-negative number
///
/// `source` names the operand in the error raised for a non-numeric value.
pub fn fn_sqrt(value: &FormulaValue, source: &CellAddress) -> FormulaResult<f64> {
    match value {
        FormulaValue::Number(n) if *n >= 0.0 => Ok(n.sqrt()),
        FormulaValue::Number(n) => Err(FormulaError::NegativeSquareRoot(*n)),
        _ => Err(FormulaError::NonNumericOperand(source.to_string())),
    }
}
