// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the event bus

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a synchronous publish
///
/// Both variants are cancellation failures; they differ only in what ended
/// the context.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PublishError {
    #[error("context canceled")]
    Canceled,
    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

impl PublishError {
    /// Kind check for callers that branch on "the context ended" without
    /// caring whether it was cancelled or timed out
    ///
    /// True for every variant today; match on the variant to tell the causes
    /// apart.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, PublishError::Canceled | PublishError::DeadlineExceeded)
    }
}

/// Errors loading or applying bus configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error("worker pool dispatch requires a running tokio runtime")]
    NoRuntime,
}

/// A topic was declared with two different payload types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("topic {topic} carries {declared}, cannot subscribe as {requested}")]
    Conflict {
        topic: String,
        declared: &'static str,
        requested: &'static str,
    },
}

/// A typed receiver got an event it cannot decode
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("expected {expected} on topic {topic}, got event named {received}")]
    UnexpectedPayload {
        topic: String,
        expected: &'static str,
        received: String,
    },
}
