//! # Todo Seed Tool
//!
//! Replaces every todo in the configured database with the sample set.
//!
//! ```bash
//! cargo run -p todo-api --bin todo-seed
//! ```

use todo_api::{config::Config, telemetry};
use todo_shared::{
    db::{
        migrations::run_migrations,
        pool::{close_pool, create_pool},
        seed::seed_sample_todos,
    },
    repository::postgres::PgTodoStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    let config = Config::from_env()?;
    let pool = create_pool(config.pool_config()).await?;
    run_migrations(&pool).await?;

    let store = PgTodoStore::new(pool.clone());
    let todos = seed_sample_todos(&store).await?;
    tracing::info!(count = todos.len(), "Seed complete");

    close_pool(pool).await;
    Ok(())
}
