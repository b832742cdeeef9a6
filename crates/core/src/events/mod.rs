// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event routing
//!
//! This module provides:
//! - `EventBus` - Fan events out to the endpoints subscribed to their topic
//! - `SubscriptionRegistry` - Topic to endpoint lists, append-only
//! - `Dispatcher` - Scheduling of fire-and-forget delivery attempts
//! - `TypedReceiver` - Checked decoding of a topic's declared payload type

mod bus;
mod decode;
mod dispatch;
mod registry;

pub use bus::EventBus;
pub use decode::{PayloadSchema, SchemaRegistry, TypedReceiver};
pub use dispatch::{Delivery, DeliveryOutcome, Dispatcher, WorkerPool};
pub use registry::{endpoint, EventReceiver, EventSender, Snapshot, SubscriptionRegistry};
