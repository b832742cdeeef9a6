// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event types carried by the bus

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// An event shared between every endpoint it is delivered to
pub type SharedEvent = Arc<dyn Event>;

/// Type-erasure hooks used for checked downcasts.
///
/// Implemented for every `Send + Sync + 'static` type; there is no need to
/// implement it by hand.
pub trait AsAny: Any + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl<T: Any + Send + Sync> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

/// A value published on the bus.
///
/// The topic name is the only identity an event has. Everything else is
/// payload owned by the implementing type.
pub trait Event: AsAny + fmt::Debug {
    /// Topic this event is routed under (exact, case-sensitive match)
    fn name(&self) -> &str;
}

/// An event with a topic and no payload
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BaseEvent {
    pub name: String,
}

impl BaseEvent {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Wrap into a [`SharedEvent`] ready for publishing
    pub fn shared(self) -> SharedEvent {
        Arc::new(self)
    }
}

impl Event for BaseEvent {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Borrow the concrete payload of a shared event, if it is a `T`
pub fn downcast_ref<T: Event>(event: &SharedEvent) -> Option<&T> {
    AsAny::as_any(event.as_ref()).downcast_ref::<T>()
}

/// Recover the concrete payload of a shared event, if it is a `T`
///
/// On mismatch the original event is handed back unchanged.
pub fn downcast<T: Event>(event: SharedEvent) -> Result<Arc<T>, SharedEvent> {
    let original = Arc::clone(&event);
    AsAny::into_any(event)
        .downcast::<T>()
        .map_err(|_| original)
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
