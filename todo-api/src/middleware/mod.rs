//! Middleware modules for the API server
//!
//! - `request_log`: per-request log line keyed by request id

pub mod request_log;
