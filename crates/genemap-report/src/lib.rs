//! genemap-report — CSV table I/O and the enrichment merge.
//!
//! The input table survives the merge column-for-column and row-for-row; the
//! five enrichment columns are appended on the right, left-joined on the
//! identifier column. Rows whose identifier matched no record keep empty
//! cells.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use genemap_common::error::{GenemapError, Result};
use genemap_common::EnrichmentRecord;

/// Column headers appended to the input table by the merge.
pub const ENRICHMENT_HEADERS: [&str; 5] =
    ["TITLE", "UNIPROT_ID", "GENE_NAME", "PROTEIN_NAME", "ORGANISM"];

/// An in-memory CSV table: the header row plus data rows.
#[derive(Debug, Clone)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Index of a named column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

/// Read a CSV file into memory.
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader
        .headers()?
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }

    debug!("Read {} rows from {:?}", rows.len(), path);
    Ok(Table { headers, rows })
}

/// The identifier list for a batch: the named column's cells, trimmed, with
/// empty cells skipped.
pub fn id_column_values(table: &Table, column: &str) -> Result<Vec<String>> {
    let idx = table.column_index(column).ok_or_else(|| {
        GenemapError::Column(format!(
            "'{}' not present in the input table. Available columns: {:?}",
            column, table.headers
        ))
    })?;

    Ok(table
        .rows
        .iter()
        .filter_map(|row| row.get(idx))
        .map(|cell| cell.trim().to_string())
        .filter(|cell| !cell.is_empty())
        .collect())
}

/// Left-join enrichment records onto the table by the identifier column.
///
/// Every input row survives in its original position; the enrichment columns
/// stay empty where no record matched.
pub fn merge_enrichment(
    table: &Table,
    column: &str,
    records: &[EnrichmentRecord],
) -> Result<Table> {
    let idx = table.column_index(column).ok_or_else(|| {
        GenemapError::Column(format!(
            "'{}' not present in the input table. Available columns: {:?}",
            column, table.headers
        ))
    })?;

    let by_id: HashMap<&str, &EnrichmentRecord> =
        records.iter().map(|r| (r.pdb_id.as_str(), r)).collect();

    let mut headers = table.headers.clone();
    headers.extend(ENRICHMENT_HEADERS.iter().map(|h| h.to_string()));

    let mut rows = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let mut merged = row.clone();
        // Short rows pad out to the header width before the joined columns
        merged.resize(table.headers.len(), String::new());

        let record = row
            .get(idx)
            .map(|cell| cell.trim())
            .and_then(|id| by_id.get(id));

        match record {
            Some(r) => {
                merged.push(r.title.clone().unwrap_or_default());
                merged.push(r.uniprot_id.clone().unwrap_or_default());
                merged.push(r.gene_name.clone().unwrap_or_default());
                merged.push(r.protein_name.clone().unwrap_or_default());
                merged.push(r.organism.clone().unwrap_or_default());
            }
            None => {
                merged.extend(std::iter::repeat(String::new()).take(ENRICHMENT_HEADERS.len()));
            }
        }

        rows.push(merged);
    }

    Ok(Table { headers, rows })
}

/// Write a table to a CSV file.
pub fn write_table<P: AsRef<Path>>(path: P, table: &Table) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    info!("Wrote {} rows to {:?}", table.rows.len(), path);
    Ok(())
}
