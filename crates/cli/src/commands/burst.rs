// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `herald burst` - async publishing into a queue nobody drains

use super::DemoEnv;
use anyhow::Result;
use clap::Args;
use herald_core::{endpoint, BaseEvent};
use serde::Serialize;
use std::fmt;
use tracing::info;

const TOPIC: &str = "burst.task";

#[derive(Args)]
pub struct BurstArgs {
    /// Events to publish
    #[arg(long, default_value = "5")]
    pub events: usize,

    /// Queue capacity of the lone subscriber
    #[arg(long, default_value = "2")]
    pub capacity: usize,
}

#[derive(Debug, Serialize)]
pub struct BurstReport {
    pub topic: String,
    pub published: usize,
    pub capacity: usize,
    pub received: usize,
    pub dropped: usize,
}

impl fmt::Display for BurstReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "received {} of {} ({} dropped, capacity {})",
            self.received, self.published, self.dropped, self.capacity
        )
    }
}

pub async fn handle(args: BurstArgs, env: &DemoEnv) -> Result<BurstReport> {
    let bus = env.bus()?;
    let (tx, mut rx) = endpoint(args.capacity);
    bus.subscribe(TOPIC, tx);

    for n in 1..=args.events {
        bus.publish_async(&env.root, BaseEvent::new(TOPIC).shared());
        info!(event_number = n, "published without waiting");
        tokio::time::sleep(env.config.demo.publish_interval).await;
    }

    // Give pending deliveries a chance to land, then stop accepting so
    // slots freed while draining are not refilled
    tokio::time::sleep(env.config.demo.work_delay).await;
    rx.close();
    drop(bus);

    let mut received = 0;
    while rx.recv().await.is_some() {
        received += 1;
    }
    info!(received, published = args.events, "burst drained");

    Ok(BurstReport {
        topic: TOPIC.to_string(),
        published: args.events,
        capacity: args.capacity.max(1),
        received,
        dropped: args.events.saturating_sub(received),
    })
}
