//! Todo service
//!
//! Business rules on top of the repository: defaulting of `completed` and
//! existence checks. Each operation runs in its own transaction, committed
//! before the operation returns.
//!
//! Not-found is reported through the return value (`None` / `false`); the
//! service never fails because an id is unknown.

use crate::models::todo::{NewTodo, SaveTodo, Todo, TodoInput};
use crate::repository::{
    RepositoryError, RepositoryResult, TodoRepository, TodoStore, TodoTransaction,
};
use std::sync::Arc;
use tracing::debug;

/// Todo use-cases
#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn TodoStore>,
}

impl TodoService {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    /// All todos in creation order
    pub async fn get_all_todos(&self) -> RepositoryResult<Vec<Todo>> {
        let mut tx = self.store.begin().await?;
        let todos = tx.find_all().await?;
        tx.commit().await?;
        Ok(todos)
    }

    pub async fn get_todo_by_id(&self, id: i64) -> RepositoryResult<Option<Todo>> {
        let mut tx = self.store.begin().await?;
        let todo = tx.find_by_id(id).await?;
        tx.commit().await?;
        Ok(todo)
    }

    /// Creates a todo, `completed` defaults to `false` when unset
    pub async fn create_todo(&self, input: TodoInput) -> RepositoryResult<Todo> {
        let mut tx = self.store.begin().await?;
        let todo = tx.save(SaveTodo::New(NewTodo::from(input))).await?;
        tx.commit().await?;

        debug!(id = todo.id, "Created todo");
        Ok(todo)
    }

    /// Replaces task and completion flag of an existing todo
    ///
    /// Returns `None` when no todo has this id.
    pub async fn update_todo(&self, id: i64, input: TodoInput) -> RepositoryResult<Option<Todo>> {
        let mut tx = self.store.begin().await?;

        let Some(mut todo) = tx.find_by_id(id).await? else {
            return Ok(None);
        };

        todo.apply(input);
        let todo = match tx.save(SaveTodo::Existing(todo)).await {
            Ok(todo) => todo,
            // Deleted between lookup and write
            Err(RepositoryError::RowMissing(_)) => return Ok(None),
            Err(err) => return Err(err),
        };
        tx.commit().await?;

        debug!(id, "Updated todo");
        Ok(Some(todo))
    }

    /// Deletes a todo, `false` when no todo has this id
    pub async fn delete_todo(&self, id: i64) -> RepositoryResult<bool> {
        let mut tx = self.store.begin().await?;

        let Some(todo) = tx.find_by_id(id).await? else {
            return Ok(false);
        };

        tx.delete(&todo).await?;
        tx.commit().await?;

        debug!(id, "Deleted todo");
        Ok(true)
    }
}
