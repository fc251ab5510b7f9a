//! In-memory todo store for tests
//!
//! Mirrors the PostgreSQL store closely enough for handler and service
//! tests:
//!
//! - ids come from a shared counter that is never rewound, so ids are not
//!   reused even when a transaction rolls back
//! - writes are staged per transaction and applied on `commit`
//! - reads see committed rows plus the transaction's own staged writes
//!
//! Enabled for other crates with the `test-utils` feature:
//!
//! ```toml
//! [dev-dependencies]
//! todo-shared = { path = "../todo-shared", features = ["test-utils"] }
//! ```

use super::{RepositoryError, RepositoryResult, TodoRepository, TodoStore, TodoTransaction};
use crate::models::todo::{SaveTodo, Todo};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct MemoryState {
    rows: Vec<Todo>,
    last_id: i64,
}

fn lock(state: &Mutex<MemoryState>) -> MutexGuard<'_, MemoryState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Store keeping committed rows in a shared vector
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoStore {
    state: Arc<Mutex<MemoryState>>,
}

impl InMemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed rows in id order
    pub fn committed(&self) -> Vec<Todo> {
        lock(&self.state).rows.clone()
    }
}

#[async_trait]
impl TodoStore for InMemoryTodoStore {
    async fn begin(&self) -> RepositoryResult<Box<dyn TodoTransaction>> {
        Ok(Box::new(InMemoryTodoTransaction {
            state: Arc::clone(&self.state),
            pending: Vec::new(),
        }))
    }
}

#[derive(Debug, Clone)]
enum PendingWrite {
    Insert(Todo),
    Update(Todo),
    Delete(i64),
}

fn apply(rows: &mut Vec<Todo>, write: &PendingWrite) {
    match write {
        PendingWrite::Insert(todo) => {
            rows.push(todo.clone());
            rows.sort_by_key(|row| row.id);
        }
        PendingWrite::Update(todo) => {
            // Rows deleted by another transaction stay deleted
            if let Some(row) = rows.iter_mut().find(|row| row.id == todo.id) {
                row.task = todo.task.clone();
                row.completed = todo.completed;
            }
        }
        PendingWrite::Delete(id) => rows.retain(|row| row.id != *id),
    }
}

/// Transaction over an [`InMemoryTodoStore`]
#[derive(Debug)]
pub struct InMemoryTodoTransaction {
    state: Arc<Mutex<MemoryState>>,
    pending: Vec<PendingWrite>,
}

impl InMemoryTodoTransaction {
    fn view(&self) -> Vec<Todo> {
        let mut rows = lock(&self.state).rows.clone();
        for write in &self.pending {
            apply(&mut rows, write);
        }
        rows
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoTransaction {
    async fn find_all(&mut self) -> RepositoryResult<Vec<Todo>> {
        Ok(self.view())
    }

    async fn find_by_id(&mut self, id: i64) -> RepositoryResult<Option<Todo>> {
        Ok(self.view().into_iter().find(|todo| todo.id == id))
    }

    async fn save(&mut self, todo: SaveTodo) -> RepositoryResult<Todo> {
        match todo {
            SaveTodo::New(new_todo) => {
                let id = {
                    let mut state = lock(&self.state);
                    state.last_id += 1;
                    state.last_id
                };

                let todo = Todo {
                    id,
                    task: new_todo.task,
                    completed: new_todo.completed,
                    created_at: Utc::now(),
                };
                self.pending.push(PendingWrite::Insert(todo.clone()));
                Ok(todo)
            }
            SaveTodo::Existing(existing) => {
                let mut stored = self
                    .find_by_id(existing.id)
                    .await?
                    .ok_or(RepositoryError::RowMissing(existing.id))?;

                stored.task = existing.task;
                stored.completed = existing.completed;
                self.pending.push(PendingWrite::Update(stored.clone()));
                Ok(stored)
            }
        }
    }

    async fn delete(&mut self, todo: &Todo) -> RepositoryResult<()> {
        self.pending.push(PendingWrite::Delete(todo.id));
        Ok(())
    }
}

#[async_trait]
impl TodoTransaction for InMemoryTodoTransaction {
    async fn commit(self: Box<Self>) -> RepositoryResult<()> {
        let mut state = lock(&self.state);
        for write in &self.pending {
            apply(&mut state.rows, write);
        }
        Ok(())
    }
}
