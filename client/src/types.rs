//! Wire and application DTOs for the todo API.
//!
//! # Design
//! The backend speaks camelCase JSON with `value`/`isCompleted` field names;
//! the application side uses `text`/`completed`. Both shapes are defined
//! here, with the renames handled by the transformers in `transform`.
//! Ids are backend-assigned and opaque — some deployments hand out integers,
//! others strings — so `TodoId` accepts either and never inspects the value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque backend-assigned identifier.
///
/// The client never parses or validates ids; it only echoes them back into
/// URL paths. Callers must ensure an id contains no characters that would
/// corrupt a path — no escaping is performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodoId {
    Number(i64),
    Text(String),
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoId::Number(n) => write!(f, "{n}"),
            TodoId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for TodoId {
    fn from(n: i64) -> Self {
        TodoId::Number(n)
    }
}

impl From<&str> for TodoId {
    fn from(s: &str) -> Self {
        TodoId::Text(s.to_string())
    }
}

impl From<String> for TodoId {
    fn from(s: String) -> Self {
        TodoId::Text(s)
    }
}

/// A todo item as returned by the backend.
///
/// Timestamps are backend-assigned; `createdAt` is immutable after creation
/// and `updatedAt` changes on every mutation. They are optional because the
/// client trusts whatever shape the backend sends and some responses omit
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendTodo {
    pub id: TodoId,
    pub value: String,
    pub is_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Request payload for creating a new todo.
///
/// Deliberately has no `id` or timestamp fields — those are not
/// backend-settable on write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub value: String,
    #[serde(default)]
    pub is_completed: bool,
}

/// A todo item in the shape the calling application works with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontendTodo {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}
