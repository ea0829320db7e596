use std::fmt;

/// Errors encountered while loading tables or reconciling distances.
///
/// Every variant is fatal: the run aborts and any report rows already
/// flushed stay on disk. A distance discrepancy is not an error — it is a
/// data-level finding reported through
/// [`TerminationReason`](crate::TerminationReason).
#[derive(Debug)]
pub enum AuditError {
    /// A route referenced an edge id with no row in the edges table.
    EdgeNotFound(u64),
    /// The route source named a person with no row in the people table.
    PersonNotFound(u64),
    /// A route string does not follow the `[e1,e2,...,en,]` convention.
    MalformedRoute(String),
    /// An input table is missing a required column.
    MissingColumn { table: &'static str, column: &'static str },
    /// A table cell could not be parsed as a number.
    InvalidField {
        column: &'static str,
        value: String,
        row: usize,
    },
    Csv(csv::Error),
    Io(std::io::Error),
}

impl fmt::Display for AuditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditError::EdgeNotFound(id) => {
                write!(f, "edge {id} not present in the edges table")
            }
            AuditError::PersonNotFound(id) => {
                write!(f, "person {id} not present in the people table")
            }
            AuditError::MalformedRoute(raw) => {
                write!(f, "malformed route string: {raw:?}")
            }
            AuditError::MissingColumn { table, column } => {
                write!(f, "{table} table is missing the required column {column:?}")
            }
            AuditError::InvalidField { column, value, row } => {
                write!(f, "row {row}: cannot parse {column:?} value {value:?} as a number")
            }
            AuditError::Csv(err) => write!(f, "csv error: {err}"),
            AuditError::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for AuditError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AuditError::Csv(err) => Some(err),
            AuditError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<csv::Error> for AuditError {
    fn from(err: csv::Error) -> Self {
        AuditError::Csv(err)
    }
}

impl From<std::io::Error> for AuditError {
    fn from(err: std::io::Error) -> Self {
        AuditError::Io(err)
    }
}
