//! Example: Build a small sheet with formulas and print it

use sheetcalc::prelude::*;

fn main() -> FormulaResult<()> {
    let mut sheet = Spreadsheet::new();

    // Data rows
    sheet.set_cell("A1", Some("100"), None)?;
    sheet.set_cell("A2", Some("200"), None)?;
    sheet.set_cell("A3", Some("350"), None)?;

    // Formulas
    sheet.set_cell("B1", None, Some("=A1*2"))?;
    sheet.set_cell("B2", None, Some("=SUM(A1:A3)"))?;
    sheet.set_cell("B3", None, Some("=AVERAGE(A1:A3)"))?;
    sheet.set_cell("C1", None, Some("=SQRT(A1)"))?;

    println!("{}", sheet);

    // Formulas are evaluated on read, so they follow their inputs
    sheet.set_cell("A1", Some("400"), None)?;
    println!();
    println!("{}", sheet);

    // Writes that would close a cycle are refused
    if let Err(err) = sheet.set_cell("A1", None, Some("=B1+1")) {
        println!();
        println!("Rejected: {}", err);
    }

    Ok(())
}
