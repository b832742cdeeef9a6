//! `herald partial` specs

use crate::prelude::*;

#[test]
fn cancel_midway_reaches_only_earlier_subscribers() {
    Project::fast().herald().args(&["partial"]).passes().stdout_eq(
        "publish of partial.task stopped: context canceled
subscriber 1 (capacity 10): received
subscriber 2 (capacity 1): missed
subscriber 3 (capacity 10): missed",
    );
}
