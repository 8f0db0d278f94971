//! CSV encoding for export tables

use std::io::Write;

use anyhow::{Context, Result};

use crate::model::Table;

/// Serialize a table as CSV: header row first, then every data row.
///
/// Quoting and escaping are delegated to the csv writer. The writer is
/// flexible so degenerate zero-column tables still serialize.
pub fn write_table<W: Write>(table: &Table, writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(writer);

    csv_writer
        .write_record(&table.header)
        .context("Failed to write CSV header")?;

    for (idx, row) in table.rows.iter().enumerate() {
        csv_writer
            .write_record(row)
            .with_context(|| format!("Failed to write CSV row {}", idx + 1))?;
    }

    csv_writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Serialize a table into an in-memory CSV byte stream, ready for upload
pub fn encode_table(table: &Table) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_table(table, &mut buffer)?;
    Ok(buffer)
}
