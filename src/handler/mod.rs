pub mod articles;
pub mod auth;
pub mod body;
pub mod error;
pub mod health;

pub use error::ApiError;

use axum::http::StatusCode;

/// Fallback for any route or method that nothing else handles.
pub async fn resource_not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Resource not found!")
}
