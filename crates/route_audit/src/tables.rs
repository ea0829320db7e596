//! In-memory lookup tables built once before reconciliation starts.
//!
//! Both tables are fully materialized up front because the comparison loop
//! needs random access: one edge-length lookup per edge per route, one
//! reference-distance lookup per person. After construction they are
//! read-only for the rest of the run.

use std::collections::HashMap;

use crate::error::AuditError;

/// One row of the edges table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRecord {
    pub id: u64,
    pub length: f64,
}

/// Edge id to edge length, for the whole road network.
#[derive(Debug, Clone, Default)]
pub struct EdgeLengthTable {
    lengths: HashMap<u64, f64>,
}

impl EdgeLengthTable {
    pub fn from_records(records: impl IntoIterator<Item = EdgeRecord>) -> Self {
        Self {
            lengths: records
                .into_iter()
                .map(|record| (record.id, record.length))
                .collect(),
        }
    }

    /// Length of the given edge. A missing id is an error, never a default:
    /// a route referencing an unknown edge means the inputs disagree about
    /// the network itself.
    pub fn lookup(&self, edge_id: u64) -> Result<f64, AuditError> {
        self.lengths
            .get(&edge_id)
            .copied()
            .ok_or(AuditError::EdgeNotFound(edge_id))
    }

    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }
}

/// Person id to the distance already recorded for that person, treated as
/// ground truth to validate the route-derived sums against.
#[derive(Debug, Clone, Default)]
pub struct ReferenceDistanceTable {
    distances: HashMap<u64, f64>,
}

impl ReferenceDistanceTable {
    pub fn from_records(records: impl IntoIterator<Item = (u64, f64)>) -> Self {
        Self {
            distances: records.into_iter().collect(),
        }
    }

    pub fn lookup(&self, person_id: u64) -> Result<f64, AuditError> {
        self.distances
            .get(&person_id)
            .copied()
            .ok_or(AuditError::PersonNotFound(person_id))
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_lookup() {
        let table = EdgeLengthTable::from_records([
            EdgeRecord { id: 0, length: 5.0 },
            EdgeRecord { id: 1, length: 3.0 },
        ]);

        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup(0).unwrap(), 5.0);
        assert_eq!(table.lookup(1).unwrap(), 3.0);
    }

    #[test]
    fn test_edge_lookup_missing_id_fails() {
        let table = EdgeLengthTable::from_records([EdgeRecord { id: 0, length: 5.0 }]);

        match table.lookup(42) {
            Err(AuditError::EdgeNotFound(42)) => {}
            other => panic!("expected EdgeNotFound(42), got {other:?}"),
        }
    }

    #[test]
    fn test_reference_lookup() {
        let table = ReferenceDistanceTable::from_records([(7, 8.0)]);

        assert_eq!(table.lookup(7).unwrap(), 8.0);
        match table.lookup(8) {
            Err(AuditError::PersonNotFound(8)) => {}
            other => panic!("expected PersonNotFound(8), got {other:?}"),
        }
    }

    #[test]
    fn test_empty_tables() {
        assert!(EdgeLengthTable::default().is_empty());
        assert!(ReferenceDistanceTable::default().is_empty());
    }
}
