// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `herald fanout` - one topic, several consuming services

use super::DemoEnv;
use crate::users::{sample_users, UserCreated, USER_CREATED};
use anyhow::Result;
use clap::Args;
use herald_core::TypedReceiver;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{info, warn};

const SERVICES: &[&str] = &["email", "analytics", "notifications"];

#[derive(Args)]
pub struct FanoutArgs {
    /// Number of users to create
    #[arg(long, default_value = "3")]
    pub users: usize,
}

#[derive(Debug, Serialize)]
pub struct ServiceReport {
    pub service: String,
    pub processed: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct FanoutReport {
    pub topic: String,
    pub published: usize,
    pub services: Vec<ServiceReport>,
}

impl fmt::Display for FanoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "published {} {} events", self.published, self.topic)?;
        for service in &self.services {
            write!(
                f,
                "\n{}: processed {} ({})",
                service.service,
                service.processed.len(),
                service.processed.join(", ")
            )?;
        }
        Ok(())
    }
}

pub async fn handle(args: FanoutArgs, env: &DemoEnv) -> Result<FanoutReport> {
    let bus = env.bus()?;
    let capacity = bus.default_capacity();

    let mut consumers = Vec::with_capacity(SERVICES.len());
    for &service in SERVICES {
        let rx = bus.subscribe_typed::<UserCreated>(USER_CREATED, capacity)?;
        consumers.push(spawn_service(service, rx, env.config.demo.work_delay));
    }

    let users = sample_users(args.users);
    info!(
        topic = USER_CREATED,
        total_users = users.len(),
        "publishing user creation events"
    );

    for user in users.iter().cloned() {
        let (user_id, username) = (user.user_id, user.username.clone());
        bus.publish(&env.publish_context(), Arc::new(user)).await?;
        info!(topic = USER_CREATED, user_id, username = %username, "event published");
        tokio::time::sleep(env.config.demo.publish_interval).await;
    }

    // Dropping the bus releases its senders so consumers finish after draining
    drop(bus);

    let mut services = Vec::with_capacity(consumers.len());
    for consumer in consumers {
        services.push(consumer.await?);
    }

    Ok(FanoutReport {
        topic: USER_CREATED.to_string(),
        published: users.len(),
        services,
    })
}

fn spawn_service(
    service: &'static str,
    mut rx: TypedReceiver<UserCreated>,
    work_delay: Duration,
) -> JoinHandle<ServiceReport> {
    tokio::spawn(async move {
        let mut processed = Vec::new();
        while let Some(next) = rx.recv().await {
            match next {
                Ok(user) => {
                    info!(
                        service,
                        user_id = user.user_id,
                        username = %user.username,
                        "processing user"
                    );
                    tokio::time::sleep(work_delay).await;
                    processed.push(user.username.clone());
                }
                Err(e) => warn!(service, error = %e, "skipping undecodable event"),
            }
        }
        ServiceReport {
            service: service.to_string(),
            processed,
        }
    })
}
