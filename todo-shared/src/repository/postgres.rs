//! PostgreSQL todo store
//!
//! Every [`PgTodoTransaction`] owns one `sqlx` transaction checked out from
//! the pool. Queries run on that connection; `commit` ends it, dropping the
//! handle rolls it back.

use super::{RepositoryError, RepositoryResult, TodoRepository, TodoStore, TodoTransaction};
use crate::models::todo::{SaveTodo, Todo};
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

/// Store backed by a PostgreSQL connection pool
#[derive(Debug, Clone)]
pub struct PgTodoStore {
    pool: PgPool,
}

impl PgTodoStore {
    /// Creates a store over an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoStore for PgTodoStore {
    async fn begin(&self) -> RepositoryResult<Box<dyn TodoTransaction>> {
        let tx = self.pool.begin().await?;
        Ok(Box::new(PgTodoTransaction { tx }))
    }
}

/// One open database transaction
pub struct PgTodoTransaction {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl TodoRepository for PgTodoTransaction {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&mut self) -> RepositoryResult<Vec<Todo>> {
        let todos = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, task, completed, created_at
            FROM todos
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&mut *self.tx)
        .await?;

        Ok(todos)
    }

    #[tracing::instrument(skip(self), level = "debug")]
    async fn find_by_id(&mut self, id: i64) -> RepositoryResult<Option<Todo>> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, task, completed, created_at
            FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.tx)
        .await?;

        Ok(todo)
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn save(&mut self, todo: SaveTodo) -> RepositoryResult<Todo> {
        match todo {
            SaveTodo::New(new_todo) => {
                let todo = sqlx::query_as::<_, Todo>(
                    r#"
                    INSERT INTO todos (task, completed)
                    VALUES ($1, $2)
                    RETURNING id, task, completed, created_at
                    "#,
                )
                .bind(new_todo.task)
                .bind(new_todo.completed)
                .fetch_one(&mut *self.tx)
                .await?;

                tracing::debug!(id = todo.id, "Inserted todo");
                Ok(todo)
            }
            SaveTodo::Existing(existing) => {
                let id = existing.id;
                let todo = sqlx::query_as::<_, Todo>(
                    r#"
                    UPDATE todos
                    SET task = $2, completed = $3
                    WHERE id = $1
                    RETURNING id, task, completed, created_at
                    "#,
                )
                .bind(id)
                .bind(existing.task)
                .bind(existing.completed)
                .fetch_optional(&mut *self.tx)
                .await?;

                todo.ok_or(RepositoryError::RowMissing(id))
            }
        }
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = todo.id))]
    async fn delete(&mut self, todo: &Todo) -> RepositoryResult<()> {
        sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(todo.id)
            .execute(&mut *self.tx)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl TodoTransaction for PgTodoTransaction {
    async fn commit(self: Box<Self>) -> RepositoryResult<()> {
        let PgTodoTransaction { tx } = *self;
        tx.commit().await?;
        Ok(())
    }
}
