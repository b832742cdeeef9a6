// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fire-and-forget delivery for `EventBus::publish_async`
//!
//! Each endpoint gets exactly one non-blocking attempt. Attempts run either
//! on their own task or on a fixed pool of workers fed by a bounded job
//! queue. Whichever runs them, a full queue, a closed queue or a done
//! context drops the event without telling anyone.

use super::registry::EventSender;
use crate::config::DispatchMode;
use crate::context::Context;
use crate::error::ConfigError;
use crate::event::SharedEvent;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::{mpsc, Mutex};
use tokio::sync::mpsc::error::TrySendError;

/// Result of one delivery attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered,
    /// Context was done at the instant of the attempt
    Cancelled,
    /// Endpoint queue had no room
    Full,
    /// Consumer dropped its receiver
    Closed,
}

/// One pending attempt to place an event on one endpoint
pub struct Delivery {
    pub ctx: Context,
    pub endpoint: EventSender,
    pub event: SharedEvent,
}

impl Delivery {
    /// Single non-blocking attempt
    pub fn attempt(self) -> DeliveryOutcome {
        if self.ctx.is_done() {
            tracing::trace!(topic = self.event.name(), "dropped: context done");
            return DeliveryOutcome::Cancelled;
        }

        match self.endpoint.try_send(self.event) {
            Ok(()) => DeliveryOutcome::Delivered,
            Err(TrySendError::Full(event)) => {
                tracing::trace!(topic = event.name(), "dropped: endpoint full");
                DeliveryOutcome::Full
            }
            Err(TrySendError::Closed(event)) => {
                tracing::trace!(topic = event.name(), "dropped: endpoint closed");
                DeliveryOutcome::Closed
            }
        }
    }
}

/// Schedules delivery attempts according to the configured mode
#[derive(Clone)]
pub enum Dispatcher {
    PerDelivery,
    Pool(WorkerPool),
}

impl Dispatcher {
    pub fn from_mode(mode: &DispatchMode) -> Result<Self, ConfigError> {
        match mode {
            DispatchMode::PerDelivery => Ok(Dispatcher::PerDelivery),
            DispatchMode::Pool { workers, backlog } => {
                Ok(Dispatcher::Pool(WorkerPool::start(*workers, *backlog)?))
            }
        }
    }

    /// Hand a delivery off without waiting for it
    pub fn dispatch(&self, delivery: Delivery) {
        match self {
            Dispatcher::PerDelivery => match Handle::try_current() {
                Ok(handle) => {
                    handle.spawn(async move {
                        delivery.attempt();
                    });
                }
                // No runtime to spawn on; the attempt never blocks, so run it here
                Err(_) => {
                    delivery.attempt();
                }
            },
            Dispatcher::Pool(pool) => {
                pool.submit(delivery);
            }
        }
    }
}

/// Fixed set of workers draining a bounded job queue
#[derive(Clone)]
pub struct WorkerPool {
    jobs: mpsc::Sender<Delivery>,
    workers: usize,
}

impl WorkerPool {
    /// Spawn `workers` tasks on the current runtime
    ///
    /// Workers exit once every clone of the pool has been dropped and the
    /// backlog is drained.
    pub fn start(workers: usize, backlog: usize) -> Result<Self, ConfigError> {
        if workers == 0 || backlog == 0 {
            return Err(ConfigError::Invalid(
                "worker pool needs at least one worker and a backlog of at least one".into(),
            ));
        }
        let handle = Handle::try_current().map_err(|_| ConfigError::NoRuntime)?;

        let (jobs, rx) = mpsc::channel(backlog);
        let rx = Arc::new(Mutex::new(rx));
        for worker in 0..workers {
            handle.spawn(worker_loop(worker, Arc::clone(&rx)));
        }
        tracing::debug!(workers, backlog, "started delivery worker pool");

        Ok(Self { jobs, workers })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Queue a delivery; returns false and drops it if the backlog is full
    pub fn submit(&self, delivery: Delivery) -> bool {
        match self.jobs.try_send(delivery) {
            Ok(()) => true,
            Err(TrySendError::Full(delivery)) => {
                tracing::trace!(topic = delivery.event.name(), "dropped: pool backlog full");
                false
            }
            Err(TrySendError::Closed(_)) => false,
        }
    }
}

// The receiver lock is held only while waiting for the next job; the
// attempt runs after the guard is released.
async fn worker_loop(worker: usize, jobs: Arc<Mutex<mpsc::Receiver<Delivery>>>) {
    loop {
        let next = jobs.lock().await.recv().await;
        match next {
            Some(delivery) => {
                delivery.attempt();
            }
            None => break,
        }
    }
    tracing::trace!(worker, "delivery worker stopped");
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
