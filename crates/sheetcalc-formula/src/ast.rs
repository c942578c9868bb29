//! Formula Abstract Syntax Tree types

use crate::functions::Aggregate;
use sheetcalc_core::{CellAddress, CellRange};
use std::fmt;

/// Formula expression AST
///
/// The grammar is deliberately small: a top-level formula is an aggregate
/// call, a SQRT call, a bare reference, or exactly one binary operation
/// between two operands. `Number` and `CellRef` only appear on their own or
/// as operands.
#[derive(Debug, Clone, PartialEq)]
pub enum FormulaExpr {
    /// Numeric literal
    Number(f64),
    /// Single cell reference
    CellRef(CellAddress),
    /// Binary operation
    BinaryOp {
        op: BinaryOperator,
        left: Box<FormulaExpr>,
        right: Box<FormulaExpr>,
    },
    /// SUM/AVERAGE/MIN/MAX over a range
    Aggregate { function: Aggregate, range: CellRange },
    /// SQRT of a single cell
    Sqrt(CellAddress),
}

impl FormulaExpr {
    /// The immediate dependency set of this expression
    ///
    /// Addresses come out in first-appearance order without duplicates: the
    /// single address, the operand addresses, or every member of the range.
    pub fn references(&self) -> Vec<CellAddress> {
        let mut refs = Vec::new();
        self.collect_references(&mut refs);
        refs
    }

    fn collect_references(&self, refs: &mut Vec<CellAddress>) {
        fn push(refs: &mut Vec<CellAddress>, addr: CellAddress) {
            if !refs.contains(&addr) {
                refs.push(addr);
            }
        }

        match self {
            FormulaExpr::Number(_) => {}
            FormulaExpr::CellRef(addr) | FormulaExpr::Sqrt(addr) => push(refs, *addr),
            // Range members are distinct and aggregates only appear at the top
            FormulaExpr::Aggregate { range, .. } => refs.extend(range.cells()),
            FormulaExpr::BinaryOp { left, right, .. } => {
                left.collect_references(refs);
                right.collect_references(refs);
            }
        }
    }
}

impl fmt::Display for FormulaExpr {
    /// Canonical source form, without the leading `=`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormulaExpr::Number(n) => write!(f, "{}", n),
            FormulaExpr::CellRef(addr) => write!(f, "{}", addr),
            FormulaExpr::BinaryOp { op, left, right } => write!(f, "{}{}{}", left, op, right),
            FormulaExpr::Aggregate { function, range } => write!(f, "{}({})", function, range),
            FormulaExpr::Sqrt(addr) => write!(f, "{}({})", crate::functions::SQRT, addr),
        }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    /// The source character for this operator
    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
