// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod async_publish;
pub mod burst;
pub mod cancel;
pub mod config;
pub mod fanout;
pub mod partial;

use crate::config::AppConfig;
use herald_core::{Context, EventBus};

/// What every scenario runs against
pub struct DemoEnv {
    pub config: AppConfig,
    /// Cancelled on Ctrl-C
    pub root: Context,
}

impl DemoEnv {
    /// A fresh bus for one scenario, built from the `[bus]` config
    pub fn bus(&self) -> anyhow::Result<EventBus> {
        Ok(EventBus::from_config(&self.config.bus)?)
    }

    /// Context for a single publish: child of the root, bounded by
    /// `publish_timeout` when configured
    pub fn publish_context(&self) -> Context {
        self.config.bus.publish_context_under(&self.root)
    }
}
