//! `herald fanout` specs

use crate::prelude::*;

#[test]
fn every_service_processes_every_user() {
    Project::fast().herald().args(&["fanout"]).passes().stdout_eq(
        "published 3 user.created events
email: processed 3 (joao_silva, maria_santos, pedro_oliveira)
analytics: processed 3 (joao_silva, maria_santos, pedro_oliveira)
notifications: processed 3 (joao_silva, maria_santos, pedro_oliveira)",
    );
}

#[test]
fn user_count_is_configurable() {
    Project::fast()
        .herald()
        .args(&["fanout", "--users", "5"])
        .passes()
        .stdout_has("published 5 user.created events")
        .stdout_has("email: processed 5");
}

#[test]
fn json_output_lists_services() {
    let out = Project::fast()
        .herald()
        .args(&["--output", "json", "fanout", "--users", "1"])
        .passes();
    let json = out.json();
    assert_eq!(json["published"], 1);
    assert_eq!(json["services"].as_array().unwrap().len(), 3);
    assert_eq!(json["services"][0]["processed"][0], "joao_silva");
}

#[test]
fn logs_go_to_stderr() {
    Project::fast()
        .herald()
        .args(&["--log-level", "info", "fanout", "--users", "1"])
        .passes()
        .stdout_lacks("processing user")
        .stderr_has("processing user");
}
