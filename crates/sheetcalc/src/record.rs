//! Plain records of a spreadsheet's cells
//!
//! A [`SheetRecords`] map holds, for every stored cell, its literal content
//! or cached formula result, the formula text and the cells that read it.
//! It derives serde, so any serde format can carry a sheet.

use crate::options::SheetOptions;
use crate::spreadsheet::{Cell, Formula, Spreadsheet};
use serde::{Deserialize, Serialize};
use sheetcalc_core::{CellAddress, CellValue};
use sheetcalc_formula::FormulaResult;
use std::collections::BTreeMap;

/// One stored cell
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CellRecord {
    /// Literal content, or the result cached when the formula was written
    #[serde(default)]
    pub value: CellValue,
    /// Formula text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    /// Cells whose formula reads this one
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependents: Vec<CellAddress>,
}

/// Every stored cell by address, in column-major order
pub type SheetRecords = BTreeMap<CellAddress, CellRecord>;

impl Spreadsheet {
    /// Snapshot every stored cell, placeholders included
    pub fn to_records(&self) -> SheetRecords {
        self.cells
            .iter()
            .map(|(addr, cell)| {
                let record = CellRecord {
                    value: cell.content.clone(),
                    formula: cell.formula.as_ref().map(|f| f.text().to_string()),
                    dependents: self.dependencies.dependents(addr),
                };
                (*addr, record)
            })
            .collect()
    }

    /// Rebuild a spreadsheet from records
    pub fn from_records(records: &SheetRecords) -> FormulaResult<Self> {
        Self::from_records_with_options(records, SheetOptions::default())
    }

    /// Rebuild a spreadsheet from records with custom options
    ///
    /// Formulas are parsed again and cached values are kept as recorded.
    /// Dependents are taken as recorded; cells a formula reads but that are
    /// missing from the records come back as placeholders.
    pub fn from_records_with_options(
        records: &SheetRecords,
        options: SheetOptions,
    ) -> FormulaResult<Self> {
        let mut sheet = Spreadsheet::with_options(options);

        for (addr, record) in records {
            let formula = record
                .formula
                .as_deref()
                .map(Formula::parse)
                .transpose()?;

            sheet.dependencies.seed(*addr, record.dependents.iter().copied());
            sheet.cells.insert(
                *addr,
                Cell {
                    content: record.value.clone(),
                    formula,
                },
            );
        }

        let referenced: Vec<CellAddress> = sheet
            .cells
            .values()
            .filter_map(|cell| cell.formula.as_ref())
            .flat_map(|formula| formula.references())
            .collect();
        for addr in referenced {
            sheet.cells.entry(addr).or_default();
        }

        log::debug!("loaded {} cells from records", sheet.len());
        Ok(sheet)
    }
}
