use std::path::PathBuf;

/// Default people table, relative to the working directory.
pub const DEFAULT_PEOPLE_FILE: &str = "../0_people5to12.csv";

/// Default route table, relative to the working directory.
pub const DEFAULT_ROUTE_FILE: &str = "../0_route5to12.csv";

/// Default comparison report path.
pub const DEFAULT_OUTPUT_FILE: &str = "distance_merge.csv";

/// Configuration for one reconciliation run.
///
/// All paths and switches are explicit; there is no hidden global state.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Edges table (comma-delimited, `length` column required).
    pub edges_file: PathBuf,
    /// People table (comma-delimited, `distance` column required).
    pub people_file: PathBuf,
    /// Route table (colon-delimited, `p` and `route` columns).
    pub route_file: PathBuf,
    /// Stop as soon as the two distances disagree for some person. Useful
    /// for testing without waiting for the whole network to be processed.
    pub stop_if_discrepancy_found: bool,
    /// Comparison report destination.
    pub output_file: PathBuf,
    /// Replace an existing report. When false and the output file exists,
    /// the run is skipped without touching it.
    pub overwrite: bool,
    /// Display a progress bar while processing routes.
    pub show_progress: bool,
}

impl AuditConfig {
    /// Build a configuration with the documented defaults for everything
    /// except the edges table, which has no sensible default location.
    pub fn new(edges_file: impl Into<PathBuf>) -> Self {
        Self {
            edges_file: edges_file.into(),
            people_file: PathBuf::from(DEFAULT_PEOPLE_FILE),
            route_file: PathBuf::from(DEFAULT_ROUTE_FILE),
            stop_if_discrepancy_found: true,
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            overwrite: false,
            show_progress: true,
        }
    }
}
