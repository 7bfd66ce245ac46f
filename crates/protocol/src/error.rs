//! Error types for the lanedrag-protocol crate.
//!
//! This module defines all error types that can occur when working with
//! protocol types, such as board (de)serialization and task lookups.

use thiserror::Error;

/// Errors that can occur during protocol operations.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Failed to serialize a protocol type to JSON.
    #[error("failed to serialize to JSON: {0}")]
    SerializationFailed(#[source] serde_json::Error),

    /// Failed to deserialize a protocol type from JSON.
    #[error("failed to deserialize from JSON: {0}")]
    DeserializationFailed(#[source] serde_json::Error),

    /// A task with the given ID was not found.
    #[error("task not found: {0}")]
    TaskNotFound(uuid::Uuid),

    /// A status label did not match any known status.
    #[error("unknown task status: {0}")]
    UnknownStatus(String),
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
