// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! herald-core: in-process publish/subscribe event bus
//!
//! This crate provides:
//! - Topic-keyed registry of bounded subscriber queues
//! - Synchronous publish that waits for capacity and honours cancellation
//! - Fire-and-forget publish with per-delivery or pooled dispatch
//! - Typed receivers that decode a topic's declared payload type

pub mod config;
pub mod context;
pub mod error;
pub mod event;
pub mod events;

// Re-exports
pub use config::{BusConfig, DispatchMode};
pub use context::Context;
pub use error::{ConfigError, DecodeError, PublishError, SchemaError};
pub use event::{BaseEvent, Event, SharedEvent};
pub use events::{endpoint, EventBus, EventReceiver, EventSender, TypedReceiver};
