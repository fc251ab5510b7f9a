//! Database layer for the todo service
//!
//! # Modules
//!
//! - `pool`: PostgreSQL connection pool with a connectivity check
//! - `migrations`: applies the bundled `todos` schema
//! - `seed`: sample data for development
//!
//! # Example
//!
//! ```no_run
//! use todo_shared::db::pool::{create_pool, DatabaseConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig {
//!         url: std::env::var("DATABASE_URL")?,
//!         ..Default::default()
//!     };
//!
//!     let pool = create_pool(config).await?;
//!     Ok(())
//! }
//! ```

pub mod migrations;
pub mod pool;
pub mod seed;
