// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event bus configuration
//!
//! Loaded from the `[bus]` table of a TOML file; every key is optional.

use crate::context::Context;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default capacity of queues created by `EventBus::subscribe_queue`
pub const DEFAULT_CAPACITY: usize = 100;

/// How `publish_async` schedules its delivery attempts
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DispatchMode {
    /// One spawned task per endpoint per publish
    #[default]
    PerDelivery,
    /// Fixed workers draining a bounded job queue; attempts that do not fit
    /// in the backlog are dropped
    ///
    /// Workers take jobs one at a time from a shared receiver. Attempts never
    /// block, so `workers` mostly bounds how many run between yields and
    /// `backlog` is the setting that decides drops.
    Pool { workers: usize, backlog: usize },
}

/// Bus tunables
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BusConfig {
    /// Capacity of queues the bus creates on a consumer's behalf
    pub default_capacity: usize,
    /// Deadline applied to contexts built by [`BusConfig::publish_context`]
    #[serde(with = "humantime_serde", skip_serializing_if = "Option::is_none")]
    pub publish_timeout: Option<Duration>,
    pub dispatch: DispatchMode,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            default_capacity: DEFAULT_CAPACITY,
            publish_timeout: None,
            dispatch: DispatchMode::default(),
        }
    }
}

impl BusConfig {
    /// Parse and validate a config from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_capacity == 0 {
            return Err(ConfigError::Invalid(
                "default_capacity must be at least 1".into(),
            ));
        }
        if let DispatchMode::Pool { workers, backlog } = self.dispatch {
            if workers == 0 {
                return Err(ConfigError::Invalid("pool workers must be at least 1".into()));
            }
            if backlog == 0 {
                return Err(ConfigError::Invalid("pool backlog must be at least 1".into()));
            }
        }
        Ok(())
    }

    /// Context for one publish call, bounded by `publish_timeout` if set
    pub fn publish_context(&self) -> Context {
        self.publish_context_under(&Context::background())
    }

    /// Like [`BusConfig::publish_context`], but derived from `parent` so
    /// cancelling the parent also ends the publish
    pub fn publish_context_under(&self, parent: &Context) -> Context {
        match self.publish_timeout {
            Some(timeout) => parent.child_with_timeout(timeout),
            None => parent.child(),
        }
    }

    pub fn with_dispatch(mut self, dispatch: DispatchMode) -> Self {
        self.dispatch = dispatch;
        self
    }

    pub fn with_publish_timeout(mut self, timeout: Duration) -> Self {
        self.publish_timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
#[path = "bus_tests.rs"]
mod tests;
