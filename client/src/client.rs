//! The four todo operations, each a thin delegation to the request gateway.
//!
//! # Design
//! `TodoApi` holds only a [`Gateway`] and carries no state between calls.
//! Each operation pairs a fixed endpoint template with a method and an
//! optional body; everything else (URL composition, header defaults, status
//! interpretation, logging) lives in the gateway. No client-side validation
//! of `value` or `id` is performed — the backend is the sole authority on
//! validity, and ids are interpolated into paths verbatim.

use crate::error::ApiError;
use crate::http::{Gateway, HttpMethod, RequestOptions};
use crate::types::{BackendTodo, NewTodo, TodoId};

/// Synchronous client for the todo backend.
///
/// Construct with the full base URL (origin plus `/api` prefix). Every
/// operation issues exactly one blocking HTTP exchange and returns when it
/// settles; independent calls are not ordered relative to each other.
#[derive(Debug, Clone)]
pub struct TodoApi {
    gateway: Gateway,
}

impl TodoApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            gateway: Gateway::new(base_url),
        }
    }

    /// Fetch all todos.
    pub fn list_todos(&self) -> Result<Vec<BackendTodo>, ApiError> {
        self.gateway.request("/get-todo", RequestOptions::default())
    }

    /// Create a todo that starts out not completed.
    pub fn add_todo(&self, value: &str) -> Result<BackendTodo, ApiError> {
        self.add_todo_with_status(value, false)
    }

    /// Create a todo with an explicit completion flag.
    pub fn add_todo_with_status(
        &self,
        value: &str,
        is_completed: bool,
    ) -> Result<BackendTodo, ApiError> {
        let payload = NewTodo {
            value: value.to_string(),
            is_completed,
        };
        let body =
            serde_json::to_string(&payload).map_err(|e| ApiError::Serialization(e.to_string()))?;
        self.gateway.request(
            "/add-todo",
            RequestOptions {
                method: Some(HttpMethod::Post),
                body: Some(body),
                ..Default::default()
            },
        )
    }

    /// Flip the completion status of a todo.
    ///
    /// No status value is sent; what "update" means (toggle vs. set) is
    /// owned by the backend.
    pub fn update_todo_status(&self, id: &TodoId) -> Result<BackendTodo, ApiError> {
        self.gateway.request(
            &format!("/update-todo/{id}"),
            RequestOptions {
                method: Some(HttpMethod::Post),
                ..Default::default()
            },
        )
    }

    /// Delete a todo. Returns the backend's confirmation object as raw
    /// JSON — its shape is backend-owned and not part of this contract.
    pub fn delete_todo(&self, id: &TodoId) -> Result<serde_json::Value, ApiError> {
        self.gateway.request(
            &format!("/del-todo/{id}"),
            RequestOptions {
                method: Some(HttpMethod::Post),
                ..Default::default()
            },
        )
    }

    pub fn base_url(&self) -> &str {
        self.gateway.base_url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let api = TodoApi::new("http://localhost:3000/api/");
        assert_eq!(api.base_url(), "http://localhost:3000/api");
    }

    #[test]
    fn add_todo_payload_defaults_completed_false() {
        let payload = NewTodo {
            value: "x".to_string(),
            is_completed: false,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["value"], "x");
        assert_eq!(json["isCompleted"], false);
        assert!(json.get("id").is_none());
    }
}
