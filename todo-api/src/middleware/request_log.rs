//! Request logging middleware
//!
//! Logs one line per completed request with method, path, status, latency
//! and the request id assigned by `SetRequestIdLayer`. The level follows
//! the status: `info` below 400, `warn` for 4xx, `error` for 5xx.
//!
//! # Example
//!
//! ```no_run
//! use axum::{middleware, Router};
//! use todo_api::middleware::request_log::log_requests;
//!
//! let app: Router = Router::new().layer(middleware::from_fn(log_requests));
//! ```

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::{Duration, Instant};
use tower_http::request_id::RequestId;
use tracing::{error, info, warn};

/// Header carrying the request id on requests and responses
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Whole milliseconds, saturating at `u64::MAX`
fn elapsed_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
        .unwrap_or("-")
        .to_string();

    let started = Instant::now();
    let response = next.run(request).await;
    let latency_ms = elapsed_ms(started.elapsed());
    let status = response.status().as_u16();

    if response.status().is_server_error() {
        error!(%method, %path, status, latency_ms, %request_id, "Request failed");
    } else if response.status().is_client_error() {
        warn!(%method, %path, status, latency_ms, %request_id, "Request rejected");
    } else {
        info!(%method, %path, status, latency_ms, %request_id, "Request completed");
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_ms_whole_milliseconds() {
        assert_eq!(elapsed_ms(Duration::from_micros(2_500)), 2);
    }

    #[test]
    fn test_elapsed_ms_saturates() {
        assert_eq!(elapsed_ms(Duration::MAX), u64::MAX);
    }
}
