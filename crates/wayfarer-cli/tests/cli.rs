use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const WAYPOINTS_JSON: &str = r#"[
    {"id": 1, "name": "Dublin", "latitude": 53.3498, "longitude": -6.2603},
    {"id": 2, "name": "Cork", "latitude": 51.8985, "longitude": -8.4756},
    {"id": 3, "name": "Galway", "latitude": 53.2707, "longitude": -9.0568},
    {"id": 4, "name": "Reykjavik", "latitude": 64.1466, "longitude": -21.9426}
]"#;

const EDGES_JSON: &str = r#"[
    {"start": 1, "end": 2, "transport": "train", "distance": 266.0},
    {"start": 1, "end": 3, "transport": "bus", "distance": 208.0},
    {"start": 3, "end": 2, "transport": "car", "distance": 200.0}
]"#;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write");
    file
}

fn wayfarer() -> (Command, NamedTempFile, NamedTempFile) {
    let waypoints = write_temp(WAYPOINTS_JSON);
    let edges = write_temp(EDGES_JSON);

    let mut cmd = Command::cargo_bin("wayfarer-cli").expect("binary exists");
    cmd.arg("--waypoints")
        .arg(waypoints.path())
        .arg("--edges")
        .arg(edges.path());
    (cmd, waypoints, edges)
}

#[test]
fn route_prints_best_route_and_alternative() {
    let (mut cmd, _waypoints, _edges) = wayfarer();

    cmd.args(["route", "--from", "Dublin", "--to", "Cork"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Best route:"))
        .stdout(predicate::str::contains("Dublin -> Cork by Train"))
        .stdout(predicate::str::contains("Alternatives:"));
}

#[test]
fn route_as_json_is_parseable() {
    let (mut cmd, _waypoints, _edges) = wayfarer();

    let output = cmd
        .args(["route", "--from", "Dublin", "--to", "Galway", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let routes: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert!(routes.as_array().map(|r| !r.is_empty()).unwrap_or(false));
}

#[test]
fn unknown_waypoint_suggests_the_closest_name() {
    let (mut cmd, _waypoints, _edges) = wayfarer();

    cmd.args(["route", "--from", "Dubiln", "--to", "Cork"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown waypoint name: Dubiln"))
        .stderr(predicate::str::contains("Dublin"));
}

#[test]
fn disconnected_destination_reports_no_route() {
    let (mut cmd, _waypoints, _edges) = wayfarer();

    cmd.args(["route", "--from", "Dublin", "--to", "Reykjavik"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "no route found between Dublin and Reykjavik",
        ));
}

#[test]
fn waypoints_lists_the_catalog() {
    let (mut cmd, _waypoints, _edges) = wayfarer();

    cmd.arg("waypoints")
        .assert()
        .success()
        .stdout(predicate::str::contains("- Dublin"))
        .stdout(predicate::str::contains("- Reykjavik"));
}
