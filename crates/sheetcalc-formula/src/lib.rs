//! # sheetcalc-formula
//!
//! Formula parser and evaluator for sheetcalc.
//!
//! This crate provides:
//! - Formula parsing (text → AST) for the supported shapes: aggregates over a
//!   range, SQRT of a cell, a bare reference, or one binary operation
//! - Formula evaluation (AST → value) against a [`CellResolver`], with a
//!   cycle guard on the active evaluation path
//! - Dependency back-links between cells
//!
//! ## Example
//!
//! ```rust
//! use sheetcalc_core::{CellAddress, CellValue};
//! use sheetcalc_formula::{
//!     evaluate, parse_formula, CellResolver, CellSource, EvaluationContext, FormulaValue,
//! };
//!
//! struct One(CellValue);
//!
//! impl CellResolver for One {
//!     fn lookup(&self, _address: &CellAddress) -> CellSource<'_> {
//!         CellSource::Literal(&self.0)
//!     }
//! }
//!
//! let ast = parse_formula("=A1*2").unwrap();
//! let mut ctx = EvaluationContext::default();
//! let result = evaluate(&ast, &One(CellValue::Number(21.0)), &mut ctx).unwrap();
//! assert_eq!(result, FormulaValue::Number(42.0));
//! ```

pub mod ast;
pub mod dependency;
pub mod error;
pub mod evaluator;
pub mod functions;
pub mod parser;

pub use ast::{BinaryOperator, FormulaExpr};
pub use dependency::DependencyGraph;
pub use error::{FormulaError, FormulaResult};
pub use evaluator::{
    collect_numbers, evaluate, resolve, CellError, CellResolver, CellSource, EvaluationContext,
    EvaluationOptions, FormulaValue,
};
pub use functions::Aggregate;
pub use parser::parse_formula;
