// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `herald partial` - cancelling a publish midway through fan-out
//!
//! The second subscriber's queue is already full, so the publish blocks on
//! it after reaching the first. Cancelling then leaves the first subscriber
//! with the event and the rest without it.

use super::DemoEnv;
use anyhow::{bail, Result};
use herald_core::{endpoint, BaseEvent, EventReceiver};
use serde::Serialize;
use std::fmt;
use tracing::{info, warn};

const TOPIC: &str = "partial.task";
const CAPACITIES: [usize; 3] = [10, 1, 10];

#[derive(Debug, Serialize)]
pub struct SubscriberReport {
    pub subscriber: usize,
    pub capacity: usize,
    pub received: bool,
}

#[derive(Debug, Serialize)]
pub struct PartialReport {
    pub topic: String,
    pub error: Option<String>,
    pub subscribers: Vec<SubscriberReport>,
}

impl fmt::Display for PartialReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            Some(error) => write!(f, "publish of {} stopped: {}", self.topic, error)?,
            None => write!(f, "publish of {} completed", self.topic)?,
        }
        for sub in &self.subscribers {
            let status = if sub.received { "received" } else { "missed" };
            write!(
                f,
                "\nsubscriber {} (capacity {}): {}",
                sub.subscriber, sub.capacity, status
            )?;
        }
        Ok(())
    }
}

pub async fn handle(env: &DemoEnv) -> Result<PartialReport> {
    let bus = env.bus()?;
    let mut receivers: Vec<EventReceiver> = Vec::with_capacity(CAPACITIES.len());
    for capacity in CAPACITIES {
        let (tx, rx) = endpoint(capacity);
        bus.subscribe(TOPIC, tx);
        receivers.push(rx);
    }

    // Fill every queue with one event; the capacity-1 queue is now full
    bus.publish(&env.root, BaseEvent::new(TOPIC).shared()).await?;
    let mut first = receivers.remove(0);
    first.try_recv()?;

    let ctx = env.root.child();
    let publisher = {
        let bus = bus.clone();
        let ctx = ctx.clone();
        tokio::spawn(async move { bus.publish(&ctx, BaseEvent::new(TOPIC).shared()).await })
    };

    if first.recv().await.is_none() {
        bail!("first subscriber closed before the event arrived");
    }
    info!(subscriber = 1, "event received, cancelling publish");
    ctx.cancel();

    let error = match publisher.await? {
        Ok(()) => None,
        Err(e) => {
            warn!(topic = TOPIC, error = %e, "publish cancelled midway");
            Some(e.to_string())
        }
    };
    drop(bus);

    let mut subscribers = vec![SubscriberReport {
        subscriber: 1,
        capacity: CAPACITIES[0],
        received: true,
    }];
    for (index, mut rx) in receivers.into_iter().enumerate() {
        // Skip the event queued before the publish under test
        let mut queued = 0;
        while rx.recv().await.is_some() {
            queued += 1;
        }
        subscribers.push(SubscriberReport {
            subscriber: index + 2,
            capacity: CAPACITIES[index + 1],
            received: queued > 1,
        });
    }

    Ok(PartialReport {
        topic: TOPIC.to_string(),
        error,
        subscribers,
    })
}
