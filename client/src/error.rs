//! Error types for the todo API client.
//!
//! # Design
//! Two failure classes cross the module boundary: transport failures (the
//! exchange never completed) and application-level failures (the backend
//! answered with a non-success status). `Api` displays its message alone so
//! a backend-supplied `message` field surfaces to callers verbatim; when the
//! backend sends no usable message the gateway synthesizes one embedding the
//! status code. Serialization problems on either side get their own
//! variants for debugging.

use std::fmt;

/// Errors returned by `TodoApi` operations.
#[derive(Debug)]
pub enum ApiError {
    /// The backend responded with a status outside the 2xx range.
    ///
    /// `message` is the backend's `message` field when the error body
    /// carried one, otherwise a synthesized string containing the status.
    Api { status: u16, message: String },

    /// The exchange could not be completed — connection refused, DNS
    /// failure, or the response body could not be read.
    Transport(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// A success response body could not be deserialized into the expected
    /// type.
    Deserialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Api { message, .. } => write!(f, "{message}"),
            ApiError::Transport(msg) => write!(f, "request failed: {msg}"),
            ApiError::Serialization(msg) => write!(f, "serialization failed: {msg}"),
            ApiError::Deserialization(msg) => write!(f, "deserialization failed: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
