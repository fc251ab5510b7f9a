//! Request extractors
//!
//! Both extractors reject with [`ApiError`] so that every failure, including
//! malformed input, produces the standard JSON error body.

use crate::error::ApiError;
use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

/// JSON body that has been deserialized and validated
///
/// Runs before the handler body, so an invalid payload never reaches the
/// service layer. Any failure (not JSON, not an object, missing or invalid
/// field) is a 422.
///
/// Only JSON objects are accepted: a derived `Deserialize` also reads a
/// sequence in field order, so `["x"]` has no `task` key yet still parses.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state).await?;
        if !body.is_object() {
            return Err(ApiError::validation("body", "Expected a JSON object"));
        }

        let value: T = serde_json::from_value(body)
            .map_err(|err| ApiError::validation("body", err.to_string()))?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Todo id taken from the `:id` path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for TodoId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state).await?;
        Ok(Self(id))
    }
}
