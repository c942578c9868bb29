//! Plain-text grid of evaluated values

use crate::options::RenderOptions;
use crate::spreadsheet::Spreadsheet;
use sheetcalc_core::CellAddress;
use sheetcalc_formula::FormulaValue;
use std::fmt;

impl Spreadsheet {
    /// Evaluated values of every row from 1 to [`max_row`](Self::max_row),
    /// each spanning columns A to the last occupied column
    ///
    /// Failed evaluations show up as [`FormulaValue::Error`].
    pub fn value_rows(&self) -> Vec<Vec<FormulaValue>> {
        let Some(max_col) = self.max_col_index() else {
            return Vec::new();
        };

        (0..self.max_row())
            .map(|row| {
                (0..=max_col)
                    .map(|col| {
                        let addr = CellAddress::new(col, row);
                        self.value_at(&addr)
                            .unwrap_or_else(|err| FormulaValue::Error(err.cell_error()))
                    })
                    .collect()
            })
            .collect()
    }

    /// Render the sheet as a text grid
    ///
    /// ```rust
    /// use sheetcalc::Spreadsheet;
    ///
    /// let mut sheet = Spreadsheet::new();
    /// sheet.set_value("A1", 10).unwrap();
    /// sheet.set_value("B1", 20).unwrap();
    ///
    /// assert_eq!(
    ///     sheet.render(),
    ///     "     A          B         \n\
    ///      --------------------------\n\
    ///      1    10.0       20.0      "
    /// );
    /// ```
    pub fn render(&self) -> String {
        let Some(max_col) = self.max_col_index() else {
            return String::new();
        };
        let opts = &self.options.render;

        let columns: Vec<String> = (0..=max_col)
            .map(|col| pad(&CellAddress::index_to_column(col), opts.column_width))
            .collect();
        let header = format!("{}{}", " ".repeat(opts.row_label_width), columns.join(" "));

        let separator = "-".repeat(header.chars().count());
        let mut lines = vec![header, separator];

        for (row, values) in self.value_rows().iter().enumerate() {
            let cells: Vec<String> = values
                .iter()
                .map(|value| pad(&format_value(value, opts), opts.column_width))
                .collect();
            lines.push(format!(
                "{}{}",
                pad(&(row + 1).to_string(), opts.row_label_width),
                cells.join(" ")
            ));
        }

        lines.join("\n")
    }
}

impl fmt::Display for Spreadsheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn pad(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}

/// Numbers always carry a decimal point
fn format_value(value: &FormulaValue, opts: &RenderOptions) -> String {
    match value {
        FormulaValue::Empty => opts.empty_marker.clone(),
        FormulaValue::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
            format!("{:.1}", n)
        }
        FormulaValue::Number(n) => n.to_string(),
        FormulaValue::Text(s) => s.clone(),
        FormulaValue::Error(e) => e.as_str().to_string(),
    }
}
