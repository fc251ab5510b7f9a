//! Sample data for local development
//!
//! [`seed_sample_todos`] replaces the contents of the store with a fixed set
//! of todos in a single transaction. Existing rows are deleted one by one
//! through the repository, so ids keep increasing and are never reused.

use crate::models::todo::{NewTodo, SaveTodo, Todo};
use crate::repository::{RepositoryResult, TodoRepository, TodoStore, TodoTransaction};
use tracing::info;

/// Sample todos as `(task, completed)`
pub const SAMPLE_TODOS: &[(&str, bool)] = &[
    ("Set up the project", true),
    ("Implement the API endpoints", true),
    ("Connect the frontend", true),
    ("Write unit tests", false),
    ("Write documentation", false),
];

/// Deletes every todo and inserts [`SAMPLE_TODOS`]
///
/// Returns the inserted todos in insertion order.
pub async fn seed_sample_todos(store: &dyn TodoStore) -> RepositoryResult<Vec<Todo>> {
    let mut tx = store.begin().await?;

    let existing = tx.find_all().await?;
    for todo in &existing {
        tx.delete(todo).await?;
    }
    info!(count = existing.len(), "Removed existing todos");

    let mut inserted = Vec::with_capacity(SAMPLE_TODOS.len());
    for (task, completed) in SAMPLE_TODOS {
        let todo = tx
            .save(SaveTodo::New(NewTodo {
                task: (*task).to_string(),
                completed: *completed,
            }))
            .await?;
        inserted.push(todo);
    }

    tx.commit().await?;

    info!(count = inserted.len(), "Inserted sample todos");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::memory::InMemoryTodoStore;

    #[tokio::test]
    async fn test_seed_replaces_existing_rows() {
        let store = InMemoryTodoStore::new();

        let mut tx = store.begin().await.unwrap();
        let old = tx
            .save(SaveTodo::New(NewTodo {
                task: "old".to_string(),
                completed: false,
            }))
            .await
            .unwrap();
        tx.commit().await.unwrap();

        let inserted = seed_sample_todos(&store).await.unwrap();

        let committed = store.committed();
        assert_eq!(committed, inserted);
        assert_eq!(committed.len(), SAMPLE_TODOS.len());
        assert!(committed.iter().all(|todo| todo.id > old.id));
        assert_eq!(committed.iter().filter(|todo| todo.completed).count(), 3);
    }
}
