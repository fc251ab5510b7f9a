//! Application state and router builder
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use todo_api::{app::{build_router, AppState}, config::Config};
//! use todo_shared::{repository::postgres::PgTodoStore, service::TodoService};
//! use sqlx::PgPool;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::from_env()?;
//! let pool = PgPool::connect(&config.database.url).await?;
//! let service = TodoService::new(Arc::new(PgTodoStore::new(pool)));
//!
//! let app = build_router(AppState::new(service, config));
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

use crate::{config::Config, middleware::request_log, routes};
use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    middleware,
    routing::get,
    Router,
};
use std::{sync::Arc, time::Duration};
use todo_shared::service::TodoService;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// Todo use-cases
    pub todos: TodoService,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(todos: TodoService, config: Config) -> Self {
        Self {
            todos,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Routes
///
/// ```text
/// /
/// ├── GET    /                  # Liveness (static)
/// ├── GET    /health            # Liveness (static)
/// └── /api/todos
///     ├── GET    /              # List todos
///     ├── POST   /              # Create todo
///     ├── GET    /:id           # Fetch todo
///     ├── PUT    /:id           # Update todo
///     └── DELETE /:id           # Delete todo
/// ```
///
/// # Middleware Stack
///
/// Outermost first:
/// 1. CORS
/// 2. Request id assignment and propagation (`x-request-id`)
/// 3. Tracing spans (tower-http TraceLayer)
/// 4. Request log line
pub fn build_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::health_check));

    let todo_routes = Router::new()
        .route(
            "/api/todos",
            get(routes::todos::list_todos).post(routes::todos::create_todo),
        )
        .route(
            "/api/todos/:id",
            get(routes::todos::get_todo)
                .put(routes::todos::update_todo)
                .delete(routes::todos::delete_todo),
        );

    let cors = cors_layer(&state.config);
    let request_id_header = HeaderName::from_static(request_log::REQUEST_ID_HEADER);

    Router::new()
        .merge(health_routes)
        .merge(todo_routes)
        .layer(middleware::from_fn(request_log::log_requests))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
        )
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// CORS for the configured development origins
fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_permissive() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .api
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
