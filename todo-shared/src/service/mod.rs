//! Service layer
//!
//! - `todo_service`: todo use-cases over a [`TodoStore`](crate::repository::TodoStore)

pub mod todo_service;

pub use todo_service::TodoService;
