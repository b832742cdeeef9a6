// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User events published by the demo scenarios

use herald_core::Event;
use serde::Serialize;

pub const USER_CREATED: &str = "user.created";

/// A new user account was created
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserCreated {
    pub user_id: u64,
    pub username: String,
    pub email: String,
}

impl Event for UserCreated {
    fn name(&self) -> &str {
        USER_CREATED
    }
}

const SAMPLE_NAMES: &[&str] = &[
    "joao_silva",
    "maria_santos",
    "pedro_oliveira",
    "ana_costa",
    "lucas_pereira",
];

/// `count` users with ids starting at 1; names cycle when count exceeds the samples
pub fn sample_users(count: usize) -> Vec<UserCreated> {
    (0..count)
        .map(|i| {
            let base = SAMPLE_NAMES[i % SAMPLE_NAMES.len()];
            let username = if i < SAMPLE_NAMES.len() {
                base.to_string()
            } else {
                format!("{}_{}", base, i / SAMPLE_NAMES.len())
            };
            UserCreated {
                user_id: i as u64 + 1,
                email: format!("{}@example.com", username.replace('_', ".")),
                username,
            }
        })
        .collect()
}
