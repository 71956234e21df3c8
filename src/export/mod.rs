use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::models::{Category, Transaction};
use crate::session::DATE_FORMAT;

const HEADER: [&str; 6] = ["id", "date", "description", "category", "kind", "amount"];

pub(crate) struct CsvExporter;

impl CsvExporter {
    /// Write `transactions` as CSV, one row per transaction in log order.
    /// Returns the number of rows written.
    pub(crate) fn write<W: Write>(
        writer: W,
        categories: &[Category],
        transactions: &[Transaction],
    ) -> Result<usize> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(HEADER)
            .context("Failed to write CSV header")?;

        for txn in transactions {
            let category = Category::find_by_id(categories, txn.category_id)
                .map(|c| c.name.as_str())
                .unwrap_or("");
            wtr.write_record([
                txn.id.to_string().as_str(),
                txn.date.format(DATE_FORMAT).to_string().as_str(),
                txn.description.as_str(),
                category,
                txn.kind.as_str(),
                txn.amount.to_string().as_str(),
            ])
            .with_context(|| format!("Failed to write transaction {}", txn.id))?;
        }

        wtr.flush().context("Failed to flush CSV output")?;
        Ok(transactions.len())
    }

    pub(crate) fn export_to_path(
        path: &Path,
        categories: &[Category],
        transactions: &[Transaction],
    ) -> Result<usize> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create export file: {}", path.display()))?;
        let count = Self::write(file, categories, transactions)?;
        info!(count, path = %path.display(), "Exported transactions");
        Ok(count)
    }
}

/// Default export file name for a given day, relative to the working directory.
pub(crate) fn default_export_path(today: chrono::NaiveDate) -> String {
    format!("budgetkat-export-{}.csv", today.format(DATE_FORMAT))
}

/// Expand a leading `~/` to the user's home directory.
pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}
