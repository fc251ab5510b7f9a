//! Database models for the todo service
//!
//! # Models
//!
//! - `todo`: todo rows, unsaved todos and service input
//!
//! # Example
//!
//! ```no_run
//! use todo_shared::models::todo::{NewTodo, SaveTodo};
//! use todo_shared::repository::{
//!     postgres::PgTodoStore, TodoRepository, TodoStore, TodoTransaction,
//! };
//! use sqlx::PgPool;
//!
//! # async fn example(pool: PgPool) -> Result<(), Box<dyn std::error::Error>> {
//! let store = PgTodoStore::new(pool);
//! let mut tx = store.begin().await?;
//!
//! let todo = tx
//!     .save(SaveTodo::New(NewTodo {
//!         task: "Write docs".to_string(),
//!         completed: false,
//!     }))
//!     .await?;
//! tx.commit().await?;
//!
//! println!("created todo {}", todo.id);
//! # Ok(())
//! # }
//! ```

pub mod todo;
