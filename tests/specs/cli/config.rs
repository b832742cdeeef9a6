//! `herald config` specs

use crate::prelude::*;

#[test]
fn defaults_are_printed_as_toml() {
    herald()
        .args(&["config"])
        .passes()
        .stdout_has("[bus]")
        .stdout_has("default_capacity = 100")
        .stdout_has("mode = \"per_delivery\"")
        .stdout_has("work_delay = \"100ms\"");
}

#[test]
fn file_values_override_defaults() {
    let temp = Project::empty();
    temp.file(
        "herald.toml",
        r#"
[bus]
default_capacity = 8
publish_timeout = "2s"

[bus.dispatch]
mode = "pool"
workers = 3
backlog = 16
"#,
    );

    let out = temp.herald().args(&["config", "--output", "json"]).passes();
    let json = out.json();
    assert_eq!(json["bus"]["default_capacity"], 8);
    assert_eq!(json["bus"]["publish_timeout"], "2s");
    assert_eq!(json["bus"]["dispatch"]["mode"], "pool");
    assert_eq!(json["bus"]["dispatch"]["workers"], 3);
}

#[test]
fn log_flags_override_file() {
    let temp = Project::empty();
    temp.file("herald.toml", "[log]\nlevel = \"warn\"\n");
    temp.herald()
        .args(&["--log-level", "debug", "--log-format", "json", "config"])
        .passes()
        .stdout_has("level = \"debug\"")
        .stdout_has("format = \"json\"");
}
