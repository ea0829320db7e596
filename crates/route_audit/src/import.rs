//! CSV input adapters for the three tables.
//!
//! Edges and people are comma-delimited and loaded whole (the lookup tables
//! need random access). The route table is colon-delimited and read as a
//! lazy row stream, since it may be arbitrarily larger than memory.
//!
//! Edges and people files may identify rows with an explicit `id` column;
//! when it is absent the 0-based row position is the id, matching how the
//! upstream simulation pipeline writes these tables.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use crate::error::AuditError;
use crate::tables::{EdgeLengthTable, EdgeRecord, ReferenceDistanceTable};

/// One row of the colon-delimited route table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouteRow {
    /// Person id.
    pub p: u64,
    /// Serialized route, `[e1,e2,...,en,]`.
    pub route: String,
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|header| header.trim() == name)
}

fn parse_u64(
    record: &csv::StringRecord,
    idx: usize,
    column: &'static str,
    row: usize,
) -> Result<u64, AuditError> {
    let value = record.get(idx).unwrap_or("").trim();
    value.parse().map_err(|_| AuditError::InvalidField {
        column,
        value: value.to_string(),
        row,
    })
}

fn parse_f64(
    record: &csv::StringRecord,
    idx: usize,
    column: &'static str,
    row: usize,
) -> Result<f64, AuditError> {
    let value = record.get(idx).unwrap_or("").trim();
    value.parse().map_err(|_| AuditError::InvalidField {
        column,
        value: value.to_string(),
        row,
    })
}

/// Load the edges table into an [`EdgeLengthTable`].
///
/// # Errors
///
/// Fails when the file is unreadable, the `length` column is missing, or
/// any cell fails to parse.
pub fn load_edge_lengths(path: impl AsRef<Path>) -> Result<EdgeLengthTable, AuditError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let length_idx = column_index(&headers, "length").ok_or(AuditError::MissingColumn {
        table: "edges",
        column: "length",
    })?;
    let id_idx = column_index(&headers, "id");

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let id = match id_idx {
            Some(idx) => parse_u64(&record, idx, "id", row)?,
            None => row as u64,
        };
        let length = parse_f64(&record, length_idx, "length", row)?;
        records.push(EdgeRecord { id, length });
    }

    Ok(EdgeLengthTable::from_records(records))
}

/// Load the people table into a [`ReferenceDistanceTable`].
///
/// # Errors
///
/// Fails when the file is unreadable, the `distance` column is missing, or
/// any cell fails to parse.
pub fn load_reference_distances(
    path: impl AsRef<Path>,
) -> Result<ReferenceDistanceTable, AuditError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let distance_idx = column_index(&headers, "distance").ok_or(AuditError::MissingColumn {
        table: "people",
        column: "distance",
    })?;
    let id_idx = column_index(&headers, "id");

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let id = match id_idx {
            Some(idx) => parse_u64(&record, idx, "id", row)?,
            None => row as u64,
        };
        let distance = parse_f64(&record, distance_idx, "distance", row)?;
        records.push((id, distance));
    }

    Ok(ReferenceDistanceTable::from_records(records))
}

/// Streaming reader over the colon-delimited route table.
///
/// Forward-only and one row at a time; restarting means reopening the file.
#[derive(Debug)]
pub struct RouteReader {
    reader: csv::Reader<File>,
}

impl RouteReader {
    /// Open the route table and check that the `p` and `route` columns are
    /// present before any rows are consumed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AuditError> {
        let mut reader = csv::ReaderBuilder::new().delimiter(b':').from_path(path)?;
        let headers = reader.headers()?;
        for column in ["p", "route"] {
            if !headers.iter().any(|header| header.trim() == column) {
                return Err(AuditError::MissingColumn {
                    table: "routes",
                    column,
                });
            }
        }
        Ok(Self { reader })
    }
}

impl IntoIterator for RouteReader {
    type Item = Result<RouteRow, AuditError>;
    type IntoIter = RouteRows;

    fn into_iter(self) -> RouteRows {
        RouteRows {
            inner: self.reader.into_deserialize(),
        }
    }
}

/// Iterator of route rows produced by [`RouteReader`].
pub struct RouteRows {
    inner: csv::DeserializeRecordsIntoIter<File, RouteRow>,
}

impl Iterator for RouteRows {
    type Item = Result<RouteRow, AuditError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|result| result.map_err(AuditError::from))
    }
}
