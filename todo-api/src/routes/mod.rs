//! API route handlers
//!
//! - `health`: Static liveness endpoints
//! - `todos`: Todo CRUD endpoints

pub mod health;
pub mod todos;
