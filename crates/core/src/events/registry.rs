// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Topic to endpoint registry
//!
//! Topics match exactly and case-sensitively. Lists are append-only and keep
//! registration order. Readers get an `Arc` snapshot so delivery never runs
//! under the lock.

use crate::event::SharedEvent;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tokio::sync::mpsc;

/// Sending half of a subscriber endpoint, held by the bus
pub type EventSender = mpsc::Sender<SharedEvent>;
/// Receiving half of a subscriber endpoint, owned by the consumer
pub type EventReceiver = mpsc::Receiver<SharedEvent>;

/// Create a bounded subscriber endpoint
///
/// A capacity of 0 is clamped to 1.
pub fn endpoint(capacity: usize) -> (EventSender, EventReceiver) {
    mpsc::channel(capacity.max(1))
}

/// Point-in-time view of one topic's subscribers
pub type Snapshot = Arc<Vec<EventSender>>;

/// Registry of subscriber endpoints per topic
#[derive(Default)]
pub struct SubscriptionRegistry {
    topics: RwLock<HashMap<String, Snapshot>>,
}

impl SubscriptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an endpoint to a topic's subscriber list
    ///
    /// The same endpoint registered twice is delivered to twice.
    pub fn subscribe(&self, topic: impl Into<String>, endpoint: EventSender) {
        let mut topics = self.topics.write().unwrap_or_else(|e| e.into_inner());
        let list = topics.entry(topic.into()).or_default();
        // Snapshots still held by in-flight publishes keep the old list
        Arc::make_mut(list).push(endpoint);
    }

    /// Current subscribers of a topic, in registration order
    pub fn resolve(&self, topic: &str) -> Snapshot {
        self.topics
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(topic)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of endpoints registered under a topic
    pub fn subscriber_count(&self, topic: &str) -> usize {
        self.topics
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(topic)
            .map_or(0, |list| list.len())
    }

    /// All topics with at least one subscriber, sorted
    pub fn topics(&self) -> Vec<String> {
        let mut topics: Vec<String> = self
            .topics
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .keys()
            .cloned()
            .collect();
        topics.sort();
        topics
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
