// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event bus for routing events to subscribers
//!
//! Two delivery protocols share one registry:
//! - [`EventBus::publish`] waits for queue capacity at each endpoint in
//!   registration order and stops at the first wait the context cuts short.
//!   Endpoints already served keep the event.
//! - [`EventBus::publish_async`] returns at once; each endpoint gets one
//!   non-blocking attempt and misses are dropped silently.

use super::decode::{SchemaRegistry, TypedReceiver};
use super::dispatch::{Delivery, Dispatcher};
use super::registry::{endpoint, EventReceiver, EventSender, SubscriptionRegistry};
use crate::config::BusConfig;
use crate::context::Context;
use crate::error::{ConfigError, PublishError, SchemaError};
use crate::event::{Event, SharedEvent};
use std::sync::Arc;
use tokio::sync::mpsc::error::TrySendError;

/// In-process publish/subscribe bus
///
/// Clones share the same registry.
#[derive(Clone)]
pub struct EventBus {
    registry: Arc<SubscriptionRegistry>,
    schemas: Arc<SchemaRegistry>,
    dispatcher: Dispatcher,
    default_capacity: usize,
}

impl EventBus {
    /// Bus with default settings and per-delivery async dispatch
    pub fn new() -> Self {
        Self {
            registry: Arc::new(SubscriptionRegistry::new()),
            schemas: Arc::new(SchemaRegistry::new()),
            dispatcher: Dispatcher::PerDelivery,
            default_capacity: BusConfig::default().default_capacity,
        }
    }

    /// Bus built from configuration
    ///
    /// Pool dispatch spawns its workers here, so it needs a running runtime.
    pub fn from_config(config: &BusConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            registry: Arc::new(SubscriptionRegistry::new()),
            schemas: Arc::new(SchemaRegistry::new()),
            dispatcher: Dispatcher::from_mode(&config.dispatch)?,
            default_capacity: config.default_capacity,
        })
    }

    /// Register an endpoint for a topic
    pub fn subscribe(&self, topic: impl Into<String>, endpoint: EventSender) {
        let topic = topic.into();
        tracing::debug!(topic = %topic, "subscribed endpoint");
        self.registry.subscribe(topic, endpoint);
    }

    /// Create an endpoint with the configured default capacity and register it
    pub fn subscribe_queue(&self, topic: impl Into<String>) -> EventReceiver {
        let (tx, rx) = endpoint(self.default_capacity);
        self.subscribe(topic, tx);
        rx
    }

    /// Subscribe expecting `T` payloads on `topic`
    pub fn subscribe_typed<T: Event>(
        &self,
        topic: impl Into<String>,
        capacity: usize,
    ) -> Result<TypedReceiver<T>, SchemaError> {
        let topic = topic.into();
        self.schemas.declare::<T>(&topic)?;

        let (tx, rx) = endpoint(capacity);
        self.subscribe(topic.clone(), tx);
        Ok(TypedReceiver::new(topic, rx))
    }

    /// Deliver to every subscriber of the event's topic, waiting for room
    ///
    /// Returns the context's failure if it is already done, or if it ends
    /// while waiting on an endpoint; that endpoint and the ones after it
    /// do not receive the event.
    pub async fn publish(&self, ctx: &Context, event: SharedEvent) -> Result<(), PublishError> {
        if let Some(err) = ctx.err() {
            return Err(err);
        }

        let endpoints = self.registry.resolve(event.name());
        tracing::debug!(
            topic = event.name(),
            subscribers = endpoints.len(),
            "publishing event"
        );

        for (index, endpoint) in endpoints.iter().enumerate() {
            let pending = match endpoint.try_send(Arc::clone(&event)) {
                Ok(()) => continue,
                Err(TrySendError::Closed(_)) => {
                    tracing::trace!(
                        topic = event.name(),
                        endpoint = index,
                        "skipped closed endpoint"
                    );
                    continue;
                }
                Err(TrySendError::Full(pending)) => pending,
            };

            // Queue is full: wait for room unless the context ends first
            tokio::select! {
                biased;
                err = ctx.cancelled() => {
                    tracing::debug!(
                        topic = event.name(),
                        endpoint = index,
                        "publish cancelled while waiting for capacity"
                    );
                    return Err(err);
                }
                sent = endpoint.send(pending) => {
                    if sent.is_err() {
                        tracing::trace!(
                            topic = event.name(),
                            endpoint = index,
                            "skipped closed endpoint"
                        );
                    }
                }
            }
        }

        Ok(())
    }

    /// Offer the event to every subscriber without waiting
    ///
    /// Never reports an outcome: a full queue, a closed queue or a done
    /// context drops the event for that endpoint only.
    pub fn publish_async(&self, ctx: &Context, event: SharedEvent) {
        let endpoints = self.registry.resolve(event.name());
        tracing::debug!(
            topic = event.name(),
            subscribers = endpoints.len(),
            "publishing event asynchronously"
        );

        for endpoint in endpoints.iter() {
            self.dispatcher.dispatch(Delivery {
                ctx: ctx.clone(),
                endpoint: endpoint.clone(),
                event: Arc::clone(&event),
            });
        }
    }

    /// Number of endpoints registered for a topic
    pub fn subscriber_count(&self, topic: &str) -> usize {
        self.registry.subscriber_count(topic)
    }

    /// Topics with at least one subscriber, sorted
    pub fn topics(&self) -> Vec<String> {
        self.registry.topics()
    }

    pub fn default_capacity(&self) -> usize {
        self.default_capacity
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "bus_tests.rs"]
mod tests;
