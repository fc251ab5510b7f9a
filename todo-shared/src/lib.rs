//! # Todo Shared Library
//!
//! Data model, storage and business logic of the todo service, used by the
//! API server and the seed tool.
//!
//! ## Module Organization
//!
//! - `models`: the `Todo` entity and its input types
//! - `db`: connection pool, schema bootstrap, seed data
//! - `repository`: storage access (PostgreSQL and in-memory)
//! - `service`: business rules on top of the repository

pub mod db;
pub mod models;
pub mod repository;
pub mod service;

/// Current version of the todo shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
