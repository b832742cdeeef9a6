//! `herald cancel` specs

use crate::prelude::*;

#[test]
fn expired_deadline_fails_publish() {
    Project::fast()
        .herald()
        .args(&["cancel", "--timeout", "10ms", "--delay", "50ms"])
        .passes()
        .stdout_eq(
            "publish of cancellable.task failed: context deadline exceeded
subscriber received 0",
        );
}

#[test]
fn publish_before_deadline_succeeds() {
    Project::fast()
        .herald()
        .args(&["cancel", "--timeout", "5s", "--delay", "0s"])
        .passes()
        .stdout_eq(
            "published cancellable.task
subscriber received 1",
        );
}

#[test]
fn json_output_carries_error_text() {
    let out = Project::fast()
        .herald()
        .args(&[
            "--output", "json", "cancel", "--timeout", "10ms", "--delay", "50ms",
        ])
        .passes();
    let json = out.json();
    assert_eq!(json["published"], false);
    assert_eq!(json["error"], "context deadline exceeded");
}
