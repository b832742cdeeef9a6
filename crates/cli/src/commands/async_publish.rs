// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `herald async` - fire-and-forget publish to a slow consumer

use super::DemoEnv;
use anyhow::Result;
use clap::Args;
use herald_core::BaseEvent;
use serde::Serialize;
use std::fmt;
use tracing::info;

const HEAVY_TASK: &str = "heavy.task";

#[derive(Args)]
pub struct AsyncArgs {
    /// Tasks the producer runs while the event is processed
    #[arg(long, default_value = "3")]
    pub tasks: usize,
}

#[derive(Debug, Serialize)]
pub struct AsyncReport {
    pub topic: String,
    pub producer_tasks: usize,
    pub processed: usize,
}

impl fmt::Display for AsyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "published {} asynchronously", self.topic)?;
        writeln!(f, "producer completed {} tasks without waiting", self.producer_tasks)?;
        write!(f, "heavy_processor: processed {}", self.processed)
    }
}

pub async fn handle(args: AsyncArgs, env: &DemoEnv) -> Result<AsyncReport> {
    let bus = env.bus()?;
    let mut rx = bus.subscribe_queue(HEAVY_TASK);
    let work_delay = env.config.demo.work_delay;

    let consumer = tokio::spawn(async move {
        let mut processed = 0;
        while let Some(event) = rx.recv().await {
            info!(service = "heavy_processor", topic = event.name(), "heavy processing started");
            tokio::time::sleep(work_delay).await;
            info!(service = "heavy_processor", topic = event.name(), "heavy processing completed");
            processed += 1;
        }
        processed
    });

    info!(topic = HEAVY_TASK, mode = "async", "publishing heavy task");
    bus.publish_async(&env.root, BaseEvent::new(HEAVY_TASK).shared());
    info!("continuing execution without waiting");

    for task in 1..=args.tasks {
        tokio::time::sleep(env.config.demo.publish_interval).await;
        info!(task_number = task, total_tasks = args.tasks, "concurrent task completed");
    }

    drop(bus);
    let processed = consumer.await?;

    Ok(AsyncReport {
        topic: HEAVY_TASK.to_string(),
        producer_tasks: args.tasks,
        processed,
    })
}
