//! The cell store
//!
//! A [`Spreadsheet`] owns every cell of a single sheet, keyed by address, and
//! orchestrates writes, reads and removals:
//!
//! - writing a formula parses it, rejects self-references and cycles, links
//!   the cell into the dependents of everything it reads and caches a first
//!   result
//! - reading a formula cell always evaluates it again against the current
//!   contents of the store; the cache is never trusted
//! - removing a cell unlinks its formula and keeps an empty placeholder
//!   while other formulas still read it
//!
//! ```rust
//! use sheetcalc::{FormulaValue, Spreadsheet};
//!
//! let mut sheet = Spreadsheet::new();
//! sheet.set_cell("A1", Some("5"), None).unwrap();
//! sheet.set_cell("B1", None, Some("A1*2")).unwrap();
//! assert_eq!(sheet.get_cell_value("B1"), FormulaValue::Number(10.0));
//!
//! sheet.set_cell("A1", Some("7"), None).unwrap();
//! assert_eq!(sheet.get_cell_value("B1"), FormulaValue::Number(14.0));
//! ```

use crate::options::SheetOptions;
use ahash::{AHashMap, AHashSet};
use sheetcalc_core::{CellAddress, CellRange, CellValue};
use sheetcalc_formula::{
    collect_numbers, evaluate, parse_formula, resolve, Aggregate, CellResolver, CellSource,
    DependencyGraph, EvaluationContext, FormulaError, FormulaExpr, FormulaResult, FormulaValue,
};

/// A formula as written, together with its parsed form
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    text: String,
    expr: FormulaExpr,
}

impl Formula {
    /// Parse formula text
    pub fn parse(text: &str) -> FormulaResult<Self> {
        let expr = parse_formula(text)?;
        Ok(Self {
            text: text.trim().to_string(),
            expr,
        })
    }

    /// Source text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Parsed expression
    pub fn expr(&self) -> &FormulaExpr {
        &self.expr
    }

    /// The cells this formula reads
    pub fn references(&self) -> Vec<CellAddress> {
        self.expr.references()
    }
}

/// A single cell
///
/// For formula cells the content is the result cached at write time; reads
/// through [`Spreadsheet::get_cell_value`] evaluate the formula again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    pub(crate) content: CellValue,
    pub(crate) formula: Option<Formula>,
}

impl Cell {
    /// Literal content, or the cached result of the formula
    pub fn content(&self) -> &CellValue {
        &self.content
    }

    /// The formula, if any
    pub fn formula(&self) -> Option<&Formula> {
        self.formula.as_ref()
    }

    /// Check if the cell contains a formula
    pub fn is_formula(&self) -> bool {
        self.formula.is_some()
    }

    /// An empty cell without formula, kept only because something reads it
    pub fn is_placeholder(&self) -> bool {
        self.formula.is_none() && self.content.is_empty()
    }
}

/// A single sheet of cells
#[derive(Debug, Clone, Default)]
pub struct Spreadsheet {
    pub(crate) cells: AHashMap<CellAddress, Cell>,
    pub(crate) dependencies: DependencyGraph,
    pub(crate) options: SheetOptions,
}

impl Spreadsheet {
    /// Create an empty spreadsheet with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty spreadsheet with custom options
    pub fn with_options(options: SheetOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Options in effect
    pub fn options(&self) -> &SheetOptions {
        &self.options
    }

    /// Check whether `text` is a well-formed cell address
    pub fn is_valid_address(text: &str) -> bool {
        CellAddress::is_valid(text)
    }

    /// Expand the range between two corners into its member addresses
    pub fn expand_range(start: &str, end: &str) -> sheetcalc_core::Result<Vec<String>> {
        sheetcalc_core::expand_range(start, end)
    }

    // === Writes ===

    /// Write a cell
    ///
    /// A `value` is stored as a number when it parses as one and as text
    /// otherwise. A `formula` takes precedence over a value given in the same
    /// call. With neither, the cell is emptied.
    ///
    /// Fails with `InvalidAddress` for a malformed address and, for formulas,
    /// with `MalformedFormula`, `InvalidRange`, `SelfReference` or
    /// `CyclicReference`; the store is left unchanged on failure. A formula
    /// whose current result is an error (say a division by zero) is still
    /// stored.
    ///
    /// A cycle already present in the store (only possible through
    /// [`from_records`](Self::from_records)) fails every formula write that
    /// reads into it, with `CyclicReference` naming a cell on that cycle.
    pub fn set_cell(
        &mut self,
        address: &str,
        value: Option<&str>,
        formula: Option<&str>,
    ) -> FormulaResult<()> {
        let addr = CellAddress::parse(address)?;

        match (value, formula) {
            (_, Some(formula)) => self.write_formula(addr, formula),
            (Some(value), None) => {
                self.write_value(addr, CellValue::coerce(value));
                Ok(())
            }
            (None, None) => {
                self.write_value(addr, CellValue::Empty);
                Ok(())
            }
        }
    }

    /// Write a literal value, replacing any formula
    pub fn set_value<V: Into<CellValue>>(&mut self, address: &str, value: V) -> FormulaResult<()> {
        let addr = CellAddress::parse(address)?;
        self.write_value(addr, value.into());
        Ok(())
    }

    /// Write a formula
    pub fn set_formula(&mut self, address: &str, formula: &str) -> FormulaResult<()> {
        let addr = CellAddress::parse(address)?;
        self.write_formula(addr, formula)
    }

    fn write_value(&mut self, addr: CellAddress, value: CellValue) {
        log::debug!("set {} = {} ({})", addr, value, value.type_name());

        self.unlink_formula(&addr);
        let cell = self.cells.entry(addr).or_default();
        cell.content = value;
        cell.formula = None;
    }

    fn write_formula(&mut self, addr: CellAddress, text: &str) -> FormulaResult<()> {
        let formula = Formula::parse(text)?;
        let references = formula.references();

        if references.contains(&addr) {
            return Err(FormulaError::SelfReference(addr.to_string()));
        }

        if self.reaches(&references, &addr) {
            log::debug!("rejected formula {} = {}: cycle", addr, formula.text());
            return Err(FormulaError::CyclicReference(addr.to_string()));
        }

        let mut ctx = EvaluationContext::for_target(self.options.evaluation.clone(), addr);
        let cached = match evaluate(formula.expr(), self, &mut ctx) {
            Ok(value) => value,
            Err(err) if err.is_structural() => {
                log::debug!("rejected formula {} = {}: {}", addr, formula.text(), err);
                return Err(err);
            }
            Err(err) => {
                log::debug!("formula {} = {} stored with error: {}", addr, formula.text(), err);
                FormulaValue::Error(err.cell_error())
            }
        };

        log::debug!("set {} = {} ({} references)", addr, formula.text(), references.len());

        self.unlink_formula(&addr);
        self.dependencies.link(addr, &references);
        for reference in &references {
            self.cells.entry(*reference).or_default();
        }

        let cell = self.cells.entry(addr).or_default();
        cell.content = cached.into();
        cell.formula = Some(formula);

        Ok(())
    }

    /// Whether `target` is reachable from `references` through formula cells
    fn reaches(&self, references: &[CellAddress], target: &CellAddress) -> bool {
        let mut stack = references.to_vec();
        let mut seen = AHashSet::new();

        while let Some(addr) = stack.pop() {
            if addr == *target {
                return true;
            }
            if !seen.insert(addr) {
                continue;
            }
            if let Some(formula) = self.cells.get(&addr).and_then(|cell| cell.formula.as_ref()) {
                stack.extend(formula.references());
            }
        }

        false
    }

    /// Drop the back-links of the formula currently stored at `addr`, along
    /// with the placeholders nothing reads any more
    fn unlink_formula(&mut self, addr: &CellAddress) {
        let references = match self.cells.get(addr).and_then(|cell| cell.formula.as_ref()) {
            Some(formula) => formula.references(),
            None => return,
        };

        self.dependencies.unlink(addr, &references);
        for reference in &references {
            let orphaned = self
                .cells
                .get(reference)
                .map_or(false, |cell| cell.is_placeholder())
                && !self.dependencies.has_dependents(reference);
            if orphaned {
                self.cells.remove(reference);
            }
        }
    }

    /// Clear a cell
    ///
    /// The cell's formula is unlinked and its content reset. The entry stays
    /// as an empty placeholder while other formulas read it, otherwise it is
    /// dropped. Removing an absent cell does nothing.
    pub fn remove_cell(&mut self, address: &str) -> FormulaResult<()> {
        let addr = CellAddress::parse(address)?;
        if !self.cells.contains_key(&addr) {
            return Ok(());
        }

        log::debug!("remove {}", addr);
        self.unlink_formula(&addr);

        if self.dependencies.has_dependents(&addr) {
            self.cells.insert(addr, Cell::default());
        } else {
            self.cells.remove(&addr);
        }

        Ok(())
    }

    /// Remove every cell
    pub fn clear(&mut self) {
        self.cells.clear();
        self.dependencies.clear();
    }

    // === Reads ===

    /// Current value of a cell
    ///
    /// Absent cells are empty. Formula cells are evaluated against the
    /// current store. Failures never escape: an invalid address or a failed
    /// evaluation comes back as [`FormulaValue::Error`].
    pub fn get_cell_value(&self, address: &str) -> FormulaValue {
        match self.try_get_cell_value(address) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("reading {} failed: {}", address, err);
                FormulaValue::Error(err.cell_error())
            }
        }
    }

    /// Current value of a cell, surfacing evaluation failures
    pub fn try_get_cell_value(&self, address: &str) -> FormulaResult<FormulaValue> {
        let addr = CellAddress::parse(address)?;
        self.value_at(&addr)
    }

    /// Current value of the cell at a parsed address
    pub fn value_at(&self, addr: &CellAddress) -> FormulaResult<FormulaValue> {
        let mut ctx = EvaluationContext::new(self.options.evaluation.clone());
        resolve(addr, self, &mut ctx)
    }

    /// The stored cell, if any
    pub fn cell(&self, address: &str) -> Option<&Cell> {
        let addr = CellAddress::parse(address).ok()?;
        self.cells.get(&addr)
    }

    /// The stored cell at a parsed address, if any
    pub fn cell_at(&self, addr: &CellAddress) -> Option<&Cell> {
        self.cells.get(addr)
    }

    /// Check if a cell is stored (placeholders included)
    pub fn contains(&self, address: &str) -> bool {
        self.cell(address).is_some()
    }

    /// Number of stored cells, placeholders included
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if no cell is stored
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over stored cells in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&CellAddress, &Cell)> {
        self.cells.iter()
    }

    /// Stored addresses in column-major order
    pub fn addresses(&self) -> Vec<CellAddress> {
        let mut addresses: Vec<CellAddress> = self.cells.keys().copied().collect();
        addresses.sort();
        addresses
    }

    /// Cells whose formula reads the given cell
    pub fn dependents_of(&self, address: &str) -> FormulaResult<Vec<CellAddress>> {
        let addr = CellAddress::parse(address)?;
        Ok(self.dependencies.dependents(&addr))
    }

    /// Largest row number (1-based) holding a value or formula, 0 if none
    pub fn max_row(&self) -> u32 {
        self.occupied()
            .map(|addr| addr.row_number())
            .max()
            .unwrap_or(0)
    }

    /// Largest column index (0-based) holding a value or formula
    pub fn max_col_index(&self) -> Option<u32> {
        self.occupied().map(|addr| addr.col).max()
    }

    fn occupied(&self) -> impl Iterator<Item = &CellAddress> {
        self.cells
            .iter()
            .filter(|(_, cell)| !cell.is_placeholder())
            .map(|(addr, _)| addr)
    }

    // === Aggregates over ranges ===

    /// Sum of the numeric cells in a range, 0 when there are none
    pub fn sum(&self, start: &str, end: &str) -> FormulaResult<f64> {
        Ok(self.aggregate(Aggregate::Sum, start, end)?.unwrap_or(0.0))
    }

    /// Mean of the numeric cells in a range
    pub fn average(&self, start: &str, end: &str) -> FormulaResult<Option<f64>> {
        self.aggregate(Aggregate::Average, start, end)
    }

    /// Smallest numeric cell in a range
    pub fn min(&self, start: &str, end: &str) -> FormulaResult<Option<f64>> {
        self.aggregate(Aggregate::Min, start, end)
    }

    /// Largest numeric cell in a range
    pub fn max(&self, start: &str, end: &str) -> FormulaResult<Option<f64>> {
        self.aggregate(Aggregate::Max, start, end)
    }

    /// Apply an aggregate to a range; text and empty cells are skipped
    pub fn aggregate(
        &self,
        function: Aggregate,
        start: &str,
        end: &str,
    ) -> FormulaResult<Option<f64>> {
        let range = CellRange::from_corners(start, end)?;
        let mut ctx = EvaluationContext::new(self.options.evaluation.clone());
        let numbers = collect_numbers(&range, self, &mut ctx)?;
        Ok(function.apply(&numbers))
    }
}

impl CellResolver for Spreadsheet {
    fn lookup(&self, address: &CellAddress) -> CellSource<'_> {
        match self.cells.get(address) {
            None => CellSource::Missing,
            Some(Cell {
                formula: Some(formula),
                ..
            }) => CellSource::Formula(formula.expr()),
            Some(cell) => CellSource::Literal(&cell.content),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sheetcalc_formula::CellError;

    fn addr(s: &str) -> CellAddress {
        CellAddress::parse(s).unwrap()
    }

    #[test]
    fn test_set_get_cell() {
        let mut sheet = Spreadsheet::new();

        sheet.set_cell("A1", Some("10"), None).unwrap();
        assert_eq!(sheet.get_cell_value("A1"), FormulaValue::Number(10.0));
        sheet.set_cell("B1", Some("20"), None).unwrap();
        assert_eq!(sheet.get_cell_value("B1"), FormulaValue::Number(20.0));
        sheet.set_cell("A1", Some("30"), None).unwrap();
        assert_eq!(sheet.get_cell_value("A1"), FormulaValue::Number(30.0));
        sheet.set_cell("C1", Some("Hello"), None).unwrap();
        assert_eq!(sheet.get_cell_value("C1"), FormulaValue::Text("Hello".into()));
        sheet.set_cell("D1", None, None).unwrap();
        assert_eq!(sheet.get_cell_value("D1"), FormulaValue::Empty);
    }

    #[test]
    fn test_invalid_address() {
        let mut sheet = Spreadsheet::new();

        assert!(matches!(
            sheet.set_cell("1A", Some("1"), None),
            Err(FormulaError::InvalidAddress(_))
        ));
        assert!(matches!(
            sheet.remove_cell("a1"),
            Err(FormulaError::InvalidAddress(_))
        ));
        assert_eq!(sheet.get_cell_value("A 1"), FormulaValue::Error(CellError::Ref));
        assert!(sheet.is_empty());
    }

    #[test]
    fn test_absent_cell_is_empty() {
        let sheet = Spreadsheet::new();
        assert_eq!(sheet.get_cell_value("Q42"), FormulaValue::Empty);
        assert!(!sheet.contains("Q42"));
    }

    #[test]
    fn test_formula_links_dependents() {
        let mut sheet = Spreadsheet::new();
        sheet.set_value("A1", 1).unwrap();
        sheet.set_formula("C1", "A1+B1").unwrap();

        // B1 was never written but now exists as a placeholder
        assert!(sheet.cell("B1").unwrap().is_placeholder());
        assert_eq!(sheet.dependents_of("A1").unwrap(), vec![addr("C1")]);
        assert_eq!(sheet.dependents_of("B1").unwrap(), vec![addr("C1")]);
    }

    #[test]
    fn test_overwrite_formula_relinks() {
        let mut sheet = Spreadsheet::new();
        sheet.set_formula("C1", "A1+B1").unwrap();
        sheet.set_formula("C1", "B1*2").unwrap();

        assert!(sheet.dependents_of("A1").unwrap().is_empty());
        assert_eq!(sheet.dependents_of("B1").unwrap(), vec![addr("C1")]);

        sheet.set_value("C1", 3).unwrap();
        assert!(sheet.dependents_of("B1").unwrap().is_empty());
        assert!(!sheet.cell("C1").unwrap().is_formula());
    }

    #[test]
    fn test_self_reference_is_rejected() {
        let mut sheet = Spreadsheet::new();
        sheet.set_value("A1", 4).unwrap();

        assert_eq!(
            sheet.set_formula("A1", "A1+1"),
            Err(FormulaError::SelfReference("A1".into()))
        );
        assert_eq!(
            sheet.set_formula("A2", "SUM(A1:A3)"),
            Err(FormulaError::SelfReference("A2".into()))
        );
        // Nothing changed
        assert_eq!(sheet.get_cell_value("A1"), FormulaValue::Number(4.0));
        assert!(!sheet.contains("A2"));
    }

    #[test]
    fn test_rejected_cycle_leaves_store_unchanged() {
        let mut sheet = Spreadsheet::new();
        sheet.set_formula("A1", "B1+1").unwrap();
        sheet.set_value("B1", 1).unwrap();

        assert_eq!(
            sheet.set_formula("B1", "A1+1"),
            Err(FormulaError::CyclicReference("B1".into()))
        );
        assert_eq!(sheet.get_cell_value("B1"), FormulaValue::Number(1.0));
        assert_eq!(sheet.get_cell_value("A1"), FormulaValue::Number(2.0));
        assert!(sheet.dependents_of("A1").unwrap().is_empty());
    }

    #[test]
    fn test_cycle_behind_value_error_is_rejected() {
        let mut sheet = Spreadsheet::new();
        sheet.set_value("B1", "text").unwrap();
        sheet.set_formula("A1", "C1+1").unwrap();

        // B1 is not numeric, so evaluation alone would stop before reaching A1
        assert_eq!(
            sheet.set_formula("C1", "B1+A1"),
            Err(FormulaError::CyclicReference("C1".into()))
        );
        assert!(sheet.cell("C1").unwrap().is_placeholder());
    }

    #[test]
    fn test_value_error_is_stored() {
        let mut sheet = Spreadsheet::new();
        sheet.set_value("A1", 3).unwrap();

        sheet.set_formula("B1", "A1/0").unwrap();
        assert_eq!(sheet.try_get_cell_value("B1"), Err(FormulaError::DivisionByZero));
        assert_eq!(sheet.get_cell_value("B1"), FormulaValue::Error(CellError::Div0));
        assert_eq!(sheet.cell("B1").unwrap().content(), &CellValue::Empty);
    }

    #[test]
    fn test_malformed_formula_is_rejected() {
        let mut sheet = Spreadsheet::new();
        assert!(matches!(
            sheet.set_formula("A1", "B1+C1+D1"),
            Err(FormulaError::MalformedFormula(_))
        ));
        assert!(sheet.is_empty());
    }

    #[test]
    fn test_formula_wins_over_value() {
        let mut sheet = Spreadsheet::new();
        sheet.set_value("A1", 2).unwrap();
        sheet.set_cell("B1", Some("99"), Some("A1*5")).unwrap();
        assert_eq!(sheet.get_cell_value("B1"), FormulaValue::Number(10.0));
    }

    #[test]
    fn test_cached_content() {
        let mut sheet = Spreadsheet::new();
        sheet.set_value("A1", 2).unwrap();
        sheet.set_formula("B1", "A1+1").unwrap();
        assert_eq!(sheet.cell("B1").unwrap().content(), &CellValue::Number(3.0));
        assert_eq!(sheet.cell("B1").unwrap().formula().unwrap().text(), "A1+1");
    }

    #[test]
    fn test_remove_cell() {
        let mut sheet = Spreadsheet::new();
        sheet.set_value("A1", 10).unwrap();
        sheet.remove_cell("A1").unwrap();
        assert!(!sheet.contains("A1"));
        assert_eq!(sheet.get_cell_value("A1"), FormulaValue::Empty);

        // Absent cells are fine
        sheet.remove_cell("Z9").unwrap();
    }

    #[test]
    fn test_remove_keeps_placeholder_for_dependents() {
        let mut sheet = Spreadsheet::new();
        sheet.set_value("A1", 10).unwrap();
        sheet.set_formula("B1", "A1").unwrap();

        sheet.remove_cell("A1").unwrap();
        assert!(sheet.cell("A1").unwrap().is_placeholder());
        assert_eq!(sheet.dependents_of("A1").unwrap(), vec![addr("B1")]);
        assert_eq!(sheet.get_cell_value("B1"), FormulaValue::Empty);
    }

    #[test]
    fn test_remove_formula_unlinks() {
        let mut sheet = Spreadsheet::new();
        sheet.set_value("A1", 10).unwrap();
        sheet.set_formula("B1", "A1*2").unwrap();

        sheet.remove_cell("B1").unwrap();
        assert!(!sheet.contains("B1"));
        assert!(sheet.dependents_of("A1").unwrap().is_empty());
    }

    #[test]
    fn test_removing_formula_drops_orphaned_placeholders() {
        let mut sheet = Spreadsheet::new();
        sheet.set_formula("Z1", "SUM(A1:C100)").unwrap();
        assert_eq!(sheet.len(), 301);

        sheet.remove_cell("Z1").unwrap();
        assert!(sheet.is_empty());
        assert!(sheet.to_records().is_empty());
    }

    #[test]
    fn test_overwriting_formula_keeps_shared_placeholders() {
        let mut sheet = Spreadsheet::new();
        sheet.set_value("A1", 1).unwrap();
        sheet.set_formula("C1", "A1+B1").unwrap();
        sheet.set_formula("C2", "B1*2").unwrap();
        sheet.set_formula("C3", "D1+E1").unwrap();

        // B1 is still read by C2, D1 and E1 are read by nothing
        sheet.set_value("C1", 5).unwrap();
        sheet.set_value("C3", 6).unwrap();
        assert!(sheet.cell("B1").unwrap().is_placeholder());
        assert!(!sheet.contains("D1"));
        assert!(!sheet.contains("E1"));
        // Cells holding a value are never dropped
        assert_eq!(sheet.get_cell_value("A1"), FormulaValue::Number(1.0));

        // Rewriting a formula with an overlapping reference keeps the placeholder
        sheet.set_formula("C2", "B1+F1").unwrap();
        assert!(sheet.cell("B1").unwrap().is_placeholder());
        assert_eq!(sheet.dependents_of("B1").unwrap(), vec![addr("C2")]);
    }

    #[test]
    fn test_loaded_cycle_blocks_formulas_reading_it() {
        use crate::record::{CellRecord, SheetRecords};

        let mut records = SheetRecords::new();
        for (cell, formula) in [("A1", "B1"), ("B1", "A1")] {
            records.insert(
                addr(cell),
                CellRecord {
                    formula: Some(formula.into()),
                    ..CellRecord::default()
                },
            );
        }
        let mut sheet = Spreadsheet::from_records(&records).unwrap();

        assert!(matches!(
            sheet.set_formula("C1", "A1+1"),
            Err(FormulaError::CyclicReference(_))
        ));
        assert!(!sheet.contains("C1"));
        assert_eq!(sheet.get_cell_value("A1"), FormulaValue::Error(CellError::Cycle));
    }

    #[test]
    fn test_clear() {
        let mut sheet = Spreadsheet::new();
        sheet.set_value("A1", 1).unwrap();
        sheet.set_formula("B1", "A1+1").unwrap();

        sheet.clear();
        assert!(sheet.is_empty());
        assert!(sheet.dependents_of("A1").unwrap().is_empty());
    }

    #[test]
    fn test_max_row_and_col() {
        let mut sheet = Spreadsheet::new();
        assert_eq!(sheet.max_row(), 0);
        assert_eq!(sheet.max_col_index(), None);

        sheet.set_value("A1", 10).unwrap();
        sheet.set_value("A2", 20).unwrap();
        sheet.set_value("A3", 30).unwrap();
        assert_eq!(sheet.max_row(), 3);

        sheet.set_value("B1", 20).unwrap();
        sheet.set_value("C1", 30).unwrap();
        assert_eq!(sheet.max_col_index(), Some(2));

        // Placeholders do not widen the grid
        sheet.set_formula("A4", "SUM(B5:F9)").unwrap();
        assert!(sheet.cell("F9").unwrap().is_placeholder());
        assert_eq!(sheet.max_row(), 4);
        assert_eq!(sheet.max_col_index(), Some(2));
    }

    #[test]
    fn test_addresses_are_column_major() {
        let mut sheet = Spreadsheet::new();
        sheet.set_value("B1", 1).unwrap();
        sheet.set_value("A2", 1).unwrap();
        sheet.set_value("A1", 1).unwrap();
        assert_eq!(sheet.addresses(), vec![addr("A1"), addr("A2"), addr("B1")]);
    }
}
