//! Reconciliation of per-person trip distances against road-network routes.
//!
//! A simulated trip carries two independently derived distances: the value
//! recorded in the people table, and the sum of the lengths of the network
//! edges that make up the person's assigned route. This crate streams the
//! route table, recomputes the edge-sum distance for every person, compares
//! it against the recorded value, and writes one comparison row per person
//! to a CSV report.
//!
//! # Quick Start
//!
//! ```no_run
//! use route_audit::{run, AuditConfig, RunOutcome};
//!
//! let mut config = AuditConfig::new("edges.csv");
//! config.stop_if_discrepancy_found = true;
//!
//! match run(&config).unwrap() {
//!     RunOutcome::Completed => println!("all distances agree"),
//!     RunOutcome::DiscrepancyFound(person_id) => {
//!         println!("person {person_id} disagrees");
//!     }
//!     RunOutcome::SkippedExistingOutput => println!("output already exists"),
//! }
//! ```
//!
//! # Architecture
//!
//! - [`tables`]: in-memory edge-length and reference-distance lookup tables
//! - [`route`]: bracketed route-string decoding
//! - [`reconcile`]: the lazy comparison loop over the route source
//! - [`import`]: CSV loading for the three inputs, streaming for routes
//! - [`report`]: incremental comparison-report writer
//! - [`runner`]: end-to-end orchestration with progress reporting
//!
//! The two lookup tables are fully materialized before reconciliation starts;
//! the route table is never held in memory as a whole, so memory use is
//! bounded by the tables plus one route row at a time.

pub mod config;
pub mod error;
pub mod import;
pub mod reconcile;
pub mod report;
pub mod route;
pub mod runner;
pub mod tables;

pub use config::AuditConfig;
pub use error::AuditError;
pub use import::{load_edge_lengths, load_reference_distances, RouteReader, RouteRow};
pub use reconcile::{ComparisonRow, Reconciliation, TerminationReason};
pub use report::ReportWriter;
pub use route::decode_route;
pub use runner::{run, RunOutcome};
pub use tables::{EdgeLengthTable, EdgeRecord, ReferenceDistanceTable};
