//! CLI error specs

use crate::prelude::*;

#[test]
fn unknown_command_fails() {
    herald().args(&["replay"]).fails();
}

#[test]
fn missing_config_file_names_path() {
    let temp = Project::empty();
    let missing = temp.path().join("absent.toml");
    herald()
        .args(&["--config", missing.to_str().unwrap(), "fanout"])
        .fails()
        .stderr_has("absent.toml");
}

#[test]
fn unknown_config_key_is_rejected() {
    let temp = Project::empty();
    temp.file("herald.toml", "[bus]\nretries = 3\n");
    temp.herald().args(&["config"]).fails();
}

#[test]
fn zero_pool_workers_are_rejected() {
    let temp = Project::empty();
    temp.file(
        "herald.toml",
        "[bus.dispatch]\nmode = \"pool\"\nworkers = 0\nbacklog = 8\n",
    );
    temp.herald().args(&["burst"]).fails().stderr_has("workers");
}

#[test]
fn bad_duration_flag_fails() {
    herald().args(&["cancel", "--timeout", "soon"]).fails();
}
