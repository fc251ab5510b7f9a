//! Common test utilities for integration tests
//!
//! Builds the real router over an in-memory store, so the HTTP surface can
//! be exercised without a database.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use todo_api::{
    app::{build_router, AppState},
    config::Config,
};
use todo_shared::{repository::memory::InMemoryTodoStore, service::TodoService};
use tower::ServiceExt;

/// Test context containing the router and its backing store
pub struct TestContext {
    pub app: Router,
    pub store: InMemoryTodoStore,
}

/// Status, headers and decoded JSON body of a response
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// `Value::Null` when the body is empty
    pub body: Value,
}

impl TestContext {
    pub fn new() -> Self {
        // Defaults only, independent of the process environment
        let config = Config::from_lookup(|_| None).expect("default config is valid");

        let store = InMemoryTodoStore::new();
        let service = TodoService::new(Arc::new(store.clone()));
        let app = build_router(AppState::new(service, config));

        TestContext { app, store }
    }

    /// Sends a request with an optional JSON body
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        self.dispatch(request).await
    }

    /// Sends a request with a raw body and content type
    pub async fn send_raw(&self, method: Method, uri: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.dispatch(request).await
    }

    pub async fn dispatch(&self, request: Request<Body>) -> TestResponse {
        let response = self.app.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                panic!("Expected JSON body, got: {}", String::from_utf8_lossy(&bytes))
            })
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Creates a todo through the API and returns the response body
    pub async fn create_todo(&self, task: &str, completed: Option<bool>) -> Value {
        let payload = match completed {
            Some(completed) => json!({ "task": task, "completed": completed }),
            None => json!({ "task": task }),
        };

        let response = self.send(Method::POST, "/api/todos", Some(payload)).await;
        assert_eq!(response.status, StatusCode::CREATED, "body: {}", response.body);
        response.body
    }
}

/// Id field of a todo response
pub fn id_of(todo: &Value) -> i64 {
    todo["id"].as_i64().expect("todo response has an integer id")
}

/// Asserts the standard error body shape
pub fn assert_error_body(body: &Value) {
    assert!(body["message"].is_string(), "missing message: {}", body);
    assert!(body["timestamp"].is_string(), "missing timestamp: {}", body);
}
