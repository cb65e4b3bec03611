use std::path::Path;

use crate::error::{ExpenseError, Result};
use crate::models::Expense;

const HEADER: [&str; 5] = ["id", "date", "category", "amount", "note"];

/// Write `records` as CSV, header first. Returns the number of rows written.
pub(crate) fn write_csv(path: &Path, records: &[Expense]) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(HEADER)?;
    for expense in records {
        writer.write_record([
            expense.id.to_string(),
            expense.date.clone(),
            expense.category.clone(),
            format!("{:.2}", expense.amount),
            expense.note_or_empty().to_string(),
        ])?;
    }
    writer
        .flush()
        .map_err(|e| ExpenseError::Export(format!("{}: {e}", path.display())))?;
    Ok(records.len())
}

#[cfg(test)]
mod tests;
