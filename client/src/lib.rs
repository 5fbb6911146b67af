//! Synchronous data-access layer for the todo REST backend.
//!
//! # Overview
//! A thin wrapper around four fixed HTTP endpoints plus two pure shape
//! transformers. [`TodoApi`] issues the network calls; conversions between
//! the backend's `value`/`isCompleted` naming and the application's
//! `text`/`completed` naming live in `transform` and are invoked by
//! callers, not wired into the client.
//!
//! # Design
//! - The base URL is injected at construction so tests can point the client
//!   at a mock endpoint; there is no global configuration.
//! - All options funnel through one gateway with a deterministic merge rule
//!   and one place that interprets status codes.
//! - Failures propagate unchanged to the caller after diagnostic logging;
//!   there is no retry, caching, or cancellation.

pub mod client;
pub mod error;
pub mod http;
pub mod transform;
pub mod types;

pub use client::TodoApi;
pub use error::ApiError;
pub use http::{Gateway, HttpMethod, RequestOptions};
pub use types::{BackendTodo, FrontendTodo, NewTodo, TodoId};
