// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `herald cancel` - publishing with a context whose deadline has passed

use super::DemoEnv;
use anyhow::Result;
use clap::Args;
use herald_core::BaseEvent;
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use tracing::{info, warn};

const CANCELLABLE_TASK: &str = "cancellable.task";

#[derive(Args)]
pub struct CancelArgs {
    /// Deadline of the publish context
    #[arg(long, default_value = "500ms", value_parser = humantime::parse_duration)]
    pub timeout: Duration,

    /// How long the producer waits before publishing
    #[arg(long, default_value = "600ms", value_parser = humantime::parse_duration)]
    pub delay: Duration,
}

#[derive(Debug, Serialize)]
pub struct CancelReport {
    pub topic: String,
    pub published: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub received: usize,
}

impl fmt::Display for CancelReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            Some(error) => writeln!(f, "publish of {} failed: {}", self.topic, error)?,
            None => writeln!(f, "published {}", self.topic)?,
        }
        write!(f, "subscriber received {}", self.received)
    }
}

pub async fn handle(args: CancelArgs, env: &DemoEnv) -> Result<CancelReport> {
    let bus = env.bus()?;
    let mut rx = bus.subscribe_queue(CANCELLABLE_TASK);

    let ctx = env.root.child_with_timeout(args.timeout);
    info!(
        timeout = %humantime::format_duration(args.timeout),
        delay = %humantime::format_duration(args.delay),
        "waiting before publish"
    );
    tokio::time::sleep(args.delay).await;

    let error = match bus.publish(&ctx, BaseEvent::new(CANCELLABLE_TASK).shared()).await {
        Ok(()) => {
            info!(topic = CANCELLABLE_TASK, "event published successfully");
            None
        }
        Err(e) => {
            warn!(topic = CANCELLABLE_TASK, error = %e, "event publishing cancelled");
            Some(e.to_string())
        }
    };

    drop(bus);
    let mut received = 0;
    while rx.recv().await.is_some() {
        received += 1;
    }

    Ok(CancelReport {
        topic: CANCELLABLE_TASK.to_string(),
        published: error.is_none(),
        error,
        received,
    })
}
