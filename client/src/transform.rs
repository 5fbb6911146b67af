//! Shape transformers between backend and application record shapes.
//!
//! # Design
//! Pure field renames, no value transformation: `value`↔`text` and
//! `isCompleted`↔`completed`, with `id`/`createdAt`/`updatedAt` passed
//! through in one direction and dropped in the other (they are not
//! backend-settable on write). The two conversions are exact inverses on
//! the fields they share. Nothing here is wired into `TodoApi`
//! automatically — callers convert where they need to.

use crate::types::{BackendTodo, FrontendTodo, NewTodo};

impl From<BackendTodo> for FrontendTodo {
    fn from(todo: BackendTodo) -> Self {
        FrontendTodo {
            id: todo.id,
            text: todo.value,
            completed: todo.is_completed,
            created_at: todo.created_at,
            updated_at: todo.updated_at,
        }
    }
}

impl From<&FrontendTodo> for NewTodo {
    fn from(todo: &FrontendTodo) -> Self {
        NewTodo {
            value: todo.text.clone(),
            is_completed: todo.completed,
        }
    }
}
