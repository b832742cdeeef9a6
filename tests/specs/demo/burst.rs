//! `herald burst` specs

use crate::prelude::*;

#[test]
fn undrained_queue_keeps_only_capacity() {
    Project::fast()
        .herald()
        .args(&["burst"])
        .passes()
        .stdout_eq("received 2 of 5 (3 dropped, capacity 2)");
}

#[test]
fn larger_capacity_keeps_everything() {
    Project::fast()
        .herald()
        .args(&["burst", "--events", "4", "--capacity", "10"])
        .passes()
        .stdout_has("received 4 of 4 (0 dropped");
}
