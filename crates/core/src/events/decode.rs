// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Topic-keyed payload declarations and typed receivers
//!
//! A consumer declares the payload type it expects on a topic when it
//! subscribes. Conflicting declarations are refused up front, and the
//! receiver decodes with a checked downcast instead of assuming the type.

use super::registry::EventReceiver;
use crate::error::{DecodeError, SchemaError};
use crate::event::{self, Event, SharedEvent};
use std::any::{type_name, TypeId};
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::{Arc, RwLock};
use tokio::sync::mpsc::error::TryRecvError;

/// The payload type declared for a topic
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PayloadSchema {
    type_id: TypeId,
    type_name: &'static str,
}

impl PayloadSchema {
    pub fn of<T: Event>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

/// Declared payload types, one per topic
#[derive(Default)]
pub struct SchemaRegistry {
    schemas: RwLock<HashMap<String, PayloadSchema>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `topic` carries `T`
    ///
    /// Re-declaring the same type is a no-op; a different type is refused.
    pub fn declare<T: Event>(&self, topic: &str) -> Result<(), SchemaError> {
        let requested = PayloadSchema::of::<T>();
        let mut schemas = self.schemas.write().unwrap_or_else(|e| e.into_inner());

        match schemas.get(topic) {
            Some(declared) if *declared != requested => Err(SchemaError::Conflict {
                topic: topic.to_string(),
                declared: declared.type_name,
                requested: requested.type_name,
            }),
            Some(_) => Ok(()),
            None => {
                schemas.insert(topic.to_string(), requested);
                Ok(())
            }
        }
    }

    pub fn get(&self, topic: &str) -> Option<PayloadSchema> {
        self.schemas
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(topic)
            .copied()
    }
}

/// Receiver that yields decoded `T` payloads for one topic
pub struct TypedReceiver<T> {
    topic: String,
    rx: EventReceiver,
    _payload: PhantomData<fn() -> T>,
}

impl<T: Event> TypedReceiver<T> {
    pub fn new(topic: impl Into<String>, rx: EventReceiver) -> Self {
        Self {
            topic: topic.into(),
            rx,
            _payload: PhantomData,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Wait for the next event
    ///
    /// Returns `None` once every sender is gone and the queue is empty.
    pub async fn recv(&mut self) -> Option<Result<Arc<T>, DecodeError>> {
        let event = self.rx.recv().await?;
        Some(self.decode(event))
    }

    /// Take the next event if one is queued
    pub fn try_recv(&mut self) -> Result<Result<Arc<T>, DecodeError>, TryRecvError> {
        let event = self.rx.try_recv()?;
        Ok(self.decode(event))
    }

    /// Give back the untyped receiver
    pub fn into_inner(self) -> EventReceiver {
        self.rx
    }

    fn decode(&self, event: SharedEvent) -> Result<Arc<T>, DecodeError> {
        event::downcast::<T>(event).map_err(|original| DecodeError::UnexpectedPayload {
            topic: self.topic.clone(),
            expected: type_name::<T>(),
            received: original.name().to_string(),
        })
    }
}

#[cfg(test)]
#[path = "decode_tests.rs"]
mod tests;
