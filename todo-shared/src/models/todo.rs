//! Todo model
//!
//! The single entity of the system: a task description with a completion
//! flag and a creation timestamp.
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE todos (
//!     id BIGSERIAL PRIMARY KEY,
//!     task TEXT NOT NULL,
//!     completed BOOLEAN NOT NULL DEFAULT FALSE,
//!     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
//! );
//! ```
//!
//! # Lifecycle
//!
//! - `id` and `created_at` are assigned by the database on insert and never change
//! - Only `task` and `completed` are mutable
//! - Rows are hard-deleted
//!
//! # Example
//!
//! ```
//! use todo_shared::models::todo::{NewTodo, TodoInput};
//!
//! let input = TodoInput {
//!     task: "Buy milk".to_string(),
//!     completed: None,
//! };
//!
//! let new_todo = NewTodo::from(input);
//! assert!(!new_todo.completed);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted todo row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    /// Database-assigned identifier, never reused
    pub id: i64,

    /// Task description (never empty)
    pub task: String,

    /// Whether the task is done
    pub completed: bool,

    /// When the row was inserted
    pub created_at: DateTime<Utc>,
}

/// A todo that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    pub task: String,
    pub completed: bool,
}

/// Argument of [`TodoRepository::save`](crate::repository::TodoRepository::save)
///
/// `New` is inserted, `Existing` has its mutable fields written back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveTodo {
    New(NewTodo),
    Existing(Todo),
}

impl From<NewTodo> for SaveTodo {
    fn from(todo: NewTodo) -> Self {
        SaveTodo::New(todo)
    }
}

impl From<Todo> for SaveTodo {
    fn from(todo: Todo) -> Self {
        SaveTodo::Existing(todo)
    }
}

/// Service input for creating or replacing a todo
///
/// `completed: None` means the caller did not set the flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoInput {
    pub task: String,

    #[serde(default)]
    pub completed: Option<bool>,
}

impl TodoInput {
    /// Completion flag with the unset case resolved to `false`
    pub fn completed_or_default(&self) -> bool {
        self.completed.unwrap_or(false)
    }
}

impl From<TodoInput> for NewTodo {
    fn from(input: TodoInput) -> Self {
        NewTodo {
            completed: input.completed_or_default(),
            task: input.task,
        }
    }
}

impl Todo {
    /// Overwrites the mutable fields from `input`
    ///
    /// `id` and `created_at` are left untouched.
    pub fn apply(&mut self, input: TodoInput) {
        self.completed = input.completed_or_default();
        self.task = input.task;
    }
}
