//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod expenses;
pub mod system;

// Re-export all handlers for use in router
pub use auth::*;
pub use categories::*;
pub use dashboard::*;
pub use expenses::*;
pub use system::*;

use axum::{
    async_trait,
    body::Body,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::{AppError, MAX_BODY_SIZE};

/// Numeric path parameter that rejects with a JSON 400
pub struct Id(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for Id
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::bad_request("Invalid id (expected an integer)"))?;
        Ok(Self(id))
    }
}

/// Read and decode a JSON request body of at most `MAX_BODY_SIZE` bytes
pub(crate) async fn read_json<T: DeserializeOwned>(body: Body) -> Result<T, AppError> {
    let bytes = axum::body::to_bytes(body, MAX_BODY_SIZE)
        .await
        .map_err(|_| AppError::payload_too_large("Request body too large (max 64KB)"))?;

    serde_json::from_slice(&bytes).map_err(|_| AppError::bad_request("Invalid JSON"))
}

/// Treat missing and blank strings the same way
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
