//! Todo repository
//!
//! The repository translates domain operations into storage queries. Its four
//! operations live on a transaction handle: a [`TodoStore`] begins a
//! [`TodoTransaction`], the caller runs repository calls on it and commits.
//! Dropping a transaction without committing rolls it back.
//!
//! Not-found is never an error here: `find_by_id` returns `None`, and the
//! caller decides what absence means.
//!
//! # Implementations
//!
//! - `postgres`: [`PgTodoStore`](postgres::PgTodoStore), backed by `sqlx`
//! - `memory`: `InMemoryTodoStore`, for tests (`test-utils` feature)
//!
//! # Example
//!
//! ```no_run
//! use todo_shared::repository::{
//!     postgres::PgTodoStore, RepositoryError, TodoRepository, TodoStore, TodoTransaction,
//! };
//! use sqlx::PgPool;
//!
//! # async fn example(pool: PgPool) -> Result<(), RepositoryError> {
//! let store = PgTodoStore::new(pool);
//!
//! let mut tx = store.begin().await?;
//! let todos = tx.find_all().await?;
//! tx.commit().await?;
//!
//! println!("{} todos", todos.len());
//! # Ok(())
//! # }
//! ```

use crate::models::todo::{SaveTodo, Todo};
use async_trait::async_trait;

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
pub mod postgres;

/// Repository error type
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Underlying database failure (connection, constraint, protocol)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An update targeted a row that no longer exists
    #[error("Todo {0} no longer exists")]
    RowMissing(i64),
}

/// Repository result type alias
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository operations over the `todos` table
#[async_trait]
pub trait TodoRepository: Send {
    /// Returns every todo in creation order (ascending id)
    async fn find_all(&mut self) -> RepositoryResult<Vec<Todo>>;

    /// Point lookup, `None` when no row has this id
    async fn find_by_id(&mut self, id: i64) -> RepositoryResult<Option<Todo>>;

    /// Inserts a new todo or writes back the mutable fields of an existing one
    ///
    /// Inserting assigns `id` and `created_at`. Updating touches only `task`
    /// and `completed`. There is no conflict detection.
    async fn save(&mut self, todo: SaveTodo) -> RepositoryResult<Todo>;

    /// Removes the row
    ///
    /// Deleting a row that is already gone is not an error at this layer.
    async fn delete(&mut self, todo: &Todo) -> RepositoryResult<()>;
}

/// A unit of work on which repository operations run
#[async_trait]
pub trait TodoTransaction: TodoRepository {
    /// Makes every write of this transaction durable
    async fn commit(self: Box<Self>) -> RepositoryResult<()>;
}

/// Factory for transactions
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Starts a new transaction
    async fn begin(&self) -> RepositoryResult<Box<dyn TodoTransaction>>;
}
