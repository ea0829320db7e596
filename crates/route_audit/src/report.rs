//! Incremental comparison-report writer.

use std::fs::File;
use std::path::Path;

use crate::error::AuditError;
use crate::reconcile::ComparisonRow;

/// Header of the comparison report.
pub const REPORT_HEADER: [&str; 3] = ["person_id", "distance_sum_of_edges", "distance_people_info"];

/// Writes comparison rows to a CSV report as they are produced.
///
/// Each row is flushed immediately, so everything emitted before an abort
/// or a discrepancy halt is on disk. There is no flag column marking
/// discrepant rows; consumers compare the two distance columns themselves.
pub struct ReportWriter {
    writer: csv::Writer<File>,
}

impl ReportWriter {
    /// Create (or truncate) the report file and write the header.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, AuditError> {
        let file = File::create(path)?;
        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(REPORT_HEADER)?;
        writer.flush()?;
        Ok(Self { writer })
    }

    /// Append one comparison row and flush it.
    pub fn write_row(&mut self, row: &ComparisonRow) -> Result<(), AuditError> {
        self.writer.write_record([
            row.person_id.to_string(),
            row.distance_sum_of_edges.to_string(),
            row.distance_reference.to_string(),
        ])?;
        self.writer.flush()?;
        Ok(())
    }
}
