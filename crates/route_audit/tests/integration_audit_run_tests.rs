//! End-to-end runs over real files in a temporary directory.

use std::path::{Path, PathBuf};

use route_audit::{run, AuditConfig, AuditError, RunOutcome};
use tempfile::TempDir;

const EDGES: &str = "id,length\n0,5\n1,3\n";

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Config over fixture files, quiet and overwriting so repeated runs in a
/// test do not trip the existing-output check.
fn fixture_config(dir: &TempDir, people: &str, routes: &str) -> AuditConfig {
    let mut config = AuditConfig::new(write_file(dir, "edges.csv", EDGES));
    config.people_file = write_file(dir, "people.csv", people);
    config.route_file = write_file(dir, "routes.csv", routes);
    config.output_file = dir.path().join("distance_merge.csv");
    config.overwrite = true;
    config.show_progress = false;
    config
}

fn report_contents(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn matching_distances_complete_normally() {
    let dir = TempDir::new().unwrap();
    let config = fixture_config(&dir, "distance\n8\n", "p:route\n0:[0,1,]\n");

    let outcome = run(&config).unwrap();
    assert_eq!(outcome, RunOutcome::Completed);
    assert_eq!(
        report_contents(&config.output_file),
        "person_id,distance_sum_of_edges,distance_people_info\n0,8,8\n"
    );
}

#[test]
fn discrepancy_halts_after_offending_row() {
    let dir = TempDir::new().unwrap();
    let config = fixture_config(
        &dir,
        "id,distance\n7,8\n9,3\n",
        "p:route\n7:[0,]\n9:[1,]\n",
    );

    let outcome = run(&config).unwrap();
    assert_eq!(outcome, RunOutcome::DiscrepancyFound(7));
    // Person 9's row never appears: the halt cuts the stream after person 7.
    assert_eq!(
        report_contents(&config.output_file),
        "person_id,distance_sum_of_edges,distance_people_info\n7,5,8\n"
    );
}

#[test]
fn continue_on_discrepancy_processes_every_person() {
    let dir = TempDir::new().unwrap();
    let mut config = fixture_config(
        &dir,
        "id,distance\n7,8\n9,3\n",
        "p:route\n7:[0,]\n9:[1,]\n",
    );
    config.stop_if_discrepancy_found = false;

    let outcome = run(&config).unwrap();
    assert_eq!(outcome, RunOutcome::Completed);
    assert_eq!(
        report_contents(&config.output_file),
        "person_id,distance_sum_of_edges,distance_people_info\n7,5,8\n9,3,3\n"
    );
}

#[test]
fn reruns_are_byte_identical() {
    let dir = TempDir::new().unwrap();
    let mut config = fixture_config(
        &dir,
        "id,distance\n7,8\n9,3\n",
        "p:route\n7:[0,1,]\n9:[1,]\n",
    );
    config.stop_if_discrepancy_found = false;

    run(&config).unwrap();
    let first = report_contents(&config.output_file);
    run(&config).unwrap();
    let second = report_contents(&config.output_file);
    assert_eq!(first, second);
}

#[test]
fn empty_route_counts_as_zero_distance() {
    let dir = TempDir::new().unwrap();
    let config = fixture_config(&dir, "distance\n0\n", "p:route\n0:[]\n");

    let outcome = run(&config).unwrap();
    assert_eq!(outcome, RunOutcome::Completed);
    assert_eq!(
        report_contents(&config.output_file),
        "person_id,distance_sum_of_edges,distance_people_info\n0,0,0\n"
    );
}

#[test]
fn unknown_edge_aborts_and_keeps_earlier_rows() {
    let dir = TempDir::new().unwrap();
    let config = fixture_config(
        &dir,
        "id,distance\n7,8\n9,3\n",
        "p:route\n7:[0,1,]\n9:[99,]\n",
    );

    match run(&config) {
        Err(AuditError::EdgeNotFound(99)) => {}
        other => panic!("expected EdgeNotFound(99), got {other:?}"),
    }
    // Person 7's row was flushed before the abort; no row for person 9.
    assert_eq!(
        report_contents(&config.output_file),
        "person_id,distance_sum_of_edges,distance_people_info\n7,8,8\n"
    );
}

#[test]
fn unknown_person_aborts() {
    let dir = TempDir::new().unwrap();
    let config = fixture_config(&dir, "id,distance\n7,8\n", "p:route\n12:[0,]\n");

    match run(&config) {
        Err(AuditError::PersonNotFound(12)) => {}
        other => panic!("expected PersonNotFound(12), got {other:?}"),
    }
}

#[test]
fn malformed_route_aborts() {
    let dir = TempDir::new().unwrap();
    let config = fixture_config(&dir, "id,distance\n7,8\n", "p:route\n7:[0,1]\n");

    match run(&config) {
        Err(AuditError::MalformedRoute(raw)) => assert_eq!(raw, "[0,1]"),
        other => panic!("expected MalformedRoute, got {other:?}"),
    }
}

#[test]
fn existing_output_is_not_clobbered_without_overwrite() {
    let dir = TempDir::new().unwrap();
    let mut config = fixture_config(&dir, "distance\n8\n", "p:route\n0:[0,1,]\n");
    config.overwrite = false;
    std::fs::write(&config.output_file, "precious data\n").unwrap();

    let outcome = run(&config).unwrap();
    assert_eq!(outcome, RunOutcome::SkippedExistingOutput);
    assert_eq!(report_contents(&config.output_file), "precious data\n");
}

#[test]
fn missing_input_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let mut config = fixture_config(&dir, "distance\n8\n", "p:route\n0:[0,1,]\n");
    config.edges_file = dir.path().join("no_such_edges.csv");

    assert!(run(&config).is_err());
    // The report was never created.
    assert!(!config.output_file.exists());
}
