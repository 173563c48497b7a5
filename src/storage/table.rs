//! In-memory CSV table used as the payload of table reads and writes.
//!
//! Values are kept as strings; column types are never inferred.

use crate::error::{EmptyCsvSnafu, RaggedRowSnafu, Result};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use snafu::ensure;

/// Rows of string fields under a header row of column names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table, rejecting rows whose width differs from the header.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        for (index, row) in rows.iter().enumerate() {
            ensure!(
                row.len() == headers.len(),
                RaggedRowSnafu {
                    row: index + 1,
                    expected: headers.len(),
                    found: row.len(),
                }
            );
        }
        Ok(Self { headers, rows })
    }

    /// Parse comma-delimited text whose first record holds the column names.
    pub fn from_csv(data: &[u8]) -> Result<Self> {
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(data);

        let headers = record_to_vec(reader.headers()?);
        ensure!(!headers.is_empty(), EmptyCsvSnafu);

        let mut rows = Vec::new();
        for record in reader.records() {
            rows.push(record_to_vec(&record?));
        }

        Ok(Self { headers, rows })
    }

    /// Serialize to comma-delimited text with the header row first and no
    /// index column.
    pub fn to_csv(&self) -> Result<Vec<u8>> {
        let mut writer = WriterBuilder::new().from_writer(Vec::new());
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        let data = writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))?;
        Ok(data)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// All values of the first column named `name`.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.headers.iter().position(|h| h == name)?;
        Some(self.rows.iter().map(|row| row[index].as_str()).collect())
    }
}

fn record_to_vec(record: &StringRecord) -> Vec<String> {
    record.iter().map(str::to_string).collect()
}
