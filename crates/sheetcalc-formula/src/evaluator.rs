//! Formula evaluator
//!
//! Evaluates formula ASTs to produce values. Cell contents are pulled through
//! a [`CellResolver`] on every evaluation, so results always reflect the
//! current state of the store.

use crate::ast::{BinaryOperator, FormulaExpr};
use crate::error::{FormulaError, FormulaResult};
use crate::functions::{math, Aggregate};
use ahash::AHashSet;
use sheetcalc_core::{CellAddress, CellRange, CellValue};
use std::fmt;

/// Value types produced by evaluation
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormulaValue {
    #[default]
    Empty,
    Number(f64),
    Text(String),
    Error(CellError),
}

impl FormulaValue {
    /// Convert to number, if this is one
    ///
    /// Text is never coerced and empty is not zero: both count as
    /// non-numeric for arithmetic and are skipped by aggregates.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FormulaValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Check if this is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, FormulaValue::Empty)
    }
}

impl fmt::Display for FormulaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormulaValue::Empty => Ok(()),
            FormulaValue::Number(n) => write!(f, "{}", n),
            FormulaValue::Text(s) => write!(f, "{}", s),
            FormulaValue::Error(e) => write!(f, "{}", e),
        }
    }
}

impl From<CellValue> for FormulaValue {
    fn from(value: CellValue) -> Self {
        match value {
            CellValue::Empty => FormulaValue::Empty,
            CellValue::Number(n) => FormulaValue::Number(n),
            CellValue::Text(s) => FormulaValue::Text(s),
        }
    }
}

impl From<FormulaValue> for CellValue {
    /// Error values have no literal form and become empty
    fn from(value: FormulaValue) -> Self {
        match value {
            FormulaValue::Empty | FormulaValue::Error(_) => CellValue::Empty,
            FormulaValue::Number(n) => CellValue::Number(n),
            FormulaValue::Text(s) => CellValue::Text(s),
        }
    }
}

impl From<f64> for FormulaValue {
    fn from(n: f64) -> Self {
        FormulaValue::Number(n)
    }
}

impl From<Option<f64>> for FormulaValue {
    fn from(n: Option<f64>) -> Self {
        n.map(FormulaValue::Number).unwrap_or_default()
    }
}

/// Error sentinels reported in place of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellError {
    /// #DIV/0! - Division by zero
    Div0,
    /// #VALUE! - Non-numeric operand
    Value,
    /// #NUM! - Invalid numeric argument
    Num,
    /// #NAME? - Formula could not be understood
    Name,
    /// #REF! - Invalid reference
    Ref,
    /// #CYCLE! - Formula reaches itself
    Cycle,
}

impl CellError {
    /// Get the display string for this error
    pub fn as_str(&self) -> &'static str {
        match self {
            CellError::Div0 => "#DIV/0!",
            CellError::Value => "#VALUE!",
            CellError::Num => "#NUM!",
            CellError::Name => "#NAME?",
            CellError::Ref => "#REF!",
            CellError::Cycle => "#CYCLE!",
        }
    }
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Options for formula evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationOptions {
    /// Maximum number of formula cells nested in one evaluation (default: 512)
    pub max_depth: usize,
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        Self { max_depth: 512 }
    }
}

/// What a store holds at an address
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellSource<'a> {
    /// No cell at this address
    Missing,
    /// A literal cell
    Literal(&'a CellValue),
    /// A formula cell, evaluated afresh on every read
    Formula(&'a FormulaExpr),
}

/// Access to cell contents during evaluation
///
/// Implementors only look addresses up; [`resolve`] does the recursion into
/// formula cells and guards it against cycles.
pub trait CellResolver {
    fn lookup(&self, address: &CellAddress) -> CellSource<'_>;
}

/// State threaded through one evaluation
///
/// Tracks the active evaluation path: every formula cell currently being
/// evaluated. Reaching one of them again is a cycle.
#[derive(Debug, Default)]
pub struct EvaluationContext {
    options: EvaluationOptions,
    path: AHashSet<CellAddress>,
    depth: usize,
}

impl EvaluationContext {
    /// Create a new evaluation context
    pub fn new(options: EvaluationOptions) -> Self {
        Self {
            options,
            path: AHashSet::new(),
            depth: 0,
        }
    }

    /// Create a context for evaluating the formula about to be stored in
    /// `target`, which counts as already on the path
    pub fn for_target(options: EvaluationOptions, target: CellAddress) -> Self {
        let mut ctx = Self::new(options);
        ctx.path.insert(target);
        ctx.depth = 1;
        ctx
    }

    /// Whether `address` is on the active path
    pub fn is_active(&self, address: &CellAddress) -> bool {
        self.path.contains(address)
    }

    /// Evaluate the formula of the cell at `address`
    ///
    /// Fails with [`FormulaError::CyclicReference`] when `address` is already
    /// being evaluated further up the path.
    pub fn evaluate_cell<R: CellResolver + ?Sized>(
        &mut self,
        address: CellAddress,
        expr: &FormulaExpr,
        resolver: &R,
    ) -> FormulaResult<FormulaValue> {
        if self.depth >= self.options.max_depth {
            return Err(FormulaError::DepthLimitExceeded(self.options.max_depth));
        }
        if !self.path.insert(address) {
            return Err(FormulaError::CyclicReference(address.to_string()));
        }

        self.depth += 1;
        log::trace!("evaluating {} = {} at depth {}", address, expr, self.depth);
        let result = evaluate(expr, resolver, self);
        self.depth -= 1;
        self.path.remove(&address);

        result
    }
}

/// Resolve the current value of the cell at `address`
///
/// Missing cells are empty, literal cells yield their content and formula
/// cells are evaluated. Any cell on the active path, literal or not, closes
/// a cycle.
pub fn resolve<R: CellResolver + ?Sized>(
    address: &CellAddress,
    resolver: &R,
    ctx: &mut EvaluationContext,
) -> FormulaResult<FormulaValue> {
    if ctx.is_active(address) {
        return Err(FormulaError::CyclicReference(address.to_string()));
    }

    match resolver.lookup(address) {
        CellSource::Missing => Ok(FormulaValue::Empty),
        CellSource::Literal(value) => Ok(value.clone().into()),
        CellSource::Formula(expr) => ctx.evaluate_cell(*address, expr, resolver),
    }
}

/// Evaluate a formula expression
pub fn evaluate<R: CellResolver + ?Sized>(
    expr: &FormulaExpr,
    resolver: &R,
    ctx: &mut EvaluationContext,
) -> FormulaResult<FormulaValue> {
    match expr {
        FormulaExpr::Number(n) => Ok(FormulaValue::Number(*n)),

        // A bare reference is an alias: the referenced value as-is
        FormulaExpr::CellRef(addr) => resolve(addr, resolver, ctx),

        FormulaExpr::BinaryOp { op, left, right } => {
            evaluate_binary_op(*op, left, right, resolver, ctx).map(FormulaValue::Number)
        }

        FormulaExpr::Aggregate { function, range } => {
            evaluate_aggregate(*function, range, resolver, ctx)
        }

        FormulaExpr::Sqrt(addr) => {
            let value = resolve(addr, resolver, ctx)?;
            math::fn_sqrt(&value, addr).map(FormulaValue::Number)
        }
    }
}

/// Evaluate a binary operation
fn evaluate_binary_op<R: CellResolver + ?Sized>(
    op: BinaryOperator,
    left: &FormulaExpr,
    right: &FormulaExpr,
    resolver: &R,
    ctx: &mut EvaluationContext,
) -> FormulaResult<f64> {
    let left = evaluate_operand(left, resolver, ctx)?;
    let right = evaluate_operand(right, resolver, ctx)?;

    match op {
        BinaryOperator::Add => Ok(left + right),
        BinaryOperator::Subtract => Ok(left - right),
        BinaryOperator::Multiply => Ok(left * right),
        BinaryOperator::Divide => {
            if right == 0.0 {
                Err(FormulaError::DivisionByZero)
            } else {
                Ok(left / right)
            }
        }
    }
}

/// Evaluate an arithmetic operand, which must produce a number
fn evaluate_operand<R: CellResolver + ?Sized>(
    expr: &FormulaExpr,
    resolver: &R,
    ctx: &mut EvaluationContext,
) -> FormulaResult<f64> {
    match expr {
        FormulaExpr::Number(n) => Ok(*n),
        FormulaExpr::CellRef(addr) => resolve(addr, resolver, ctx)?
            .as_number()
            .ok_or_else(|| FormulaError::NonNumericOperand(addr.to_string())),
        other => Err(FormulaError::MalformedFormula(format!(
            "unsupported operand {}",
            other
        ))),
    }
}

/// Evaluate an aggregate over a range
///
/// Only members that resolve to numbers take part; text and empty members
/// are skipped. Errors raised while resolving a member still propagate.
fn evaluate_aggregate<R: CellResolver + ?Sized>(
    function: Aggregate,
    range: &CellRange,
    resolver: &R,
    ctx: &mut EvaluationContext,
) -> FormulaResult<FormulaValue> {
    let numbers = collect_numbers(range, resolver, ctx)?;
    Ok(function.apply(&numbers).into())
}

/// Resolve every member of `range` and keep the numeric ones
pub fn collect_numbers<R: CellResolver + ?Sized>(
    range: &CellRange,
    resolver: &R,
    ctx: &mut EvaluationContext,
) -> FormulaResult<Vec<f64>> {
    let mut numbers = Vec::new();
    for addr in range.cells() {
        if let Some(n) = resolve(&addr, resolver, ctx)?.as_number() {
            numbers.push(n);
        }
    }
    Ok(numbers)
}
