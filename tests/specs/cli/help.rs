//! Help output specs

use crate::prelude::*;

#[test]
fn help_lists_every_scenario() {
    let out = herald().args(&["--help"]).passes();
    for command in ["fanout", "async", "cancel", "partial", "burst", "config"] {
        assert!(out.stdout.contains(command), "missing {command}");
    }
}

#[test]
fn cancel_help_shows_duration_flags() {
    herald()
        .args(&["cancel", "--help"])
        .passes()
        .stdout_has("--timeout")
        .stdout_has("--delay");
}

#[test]
fn version_prints_name() {
    herald().args(&["--version"]).passes().stdout_has("herald");
}
