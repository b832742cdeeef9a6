//! `herald async` specs

use crate::prelude::*;

#[test]
fn producer_continues_while_event_is_processed() {
    Project::fast().herald().args(&["async"]).passes().stdout_eq(
        "published heavy.task asynchronously
producer completed 3 tasks without waiting
heavy_processor: processed 1",
    );
}

#[test]
fn pool_dispatch_delivers_too() {
    let temp = Project::empty();
    temp.file(
        "herald.toml",
        r#"
[bus.dispatch]
mode = "pool"
workers = 2
backlog = 8

[demo]
work_delay = "0ms"
publish_interval = "0ms"
"#,
    );
    temp.herald()
        .args(&["async"])
        .passes()
        .stdout_has("heavy_processor: processed 1");
}
