use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

use crate::error::ServiceError;

const GENERIC_MESSAGE: &str = "Something went wrong!";

/// Anything a route handler can fail with.
#[derive(Debug)]
pub enum ApiError {
    Service(ServiceError),
    MalformedBody(String),
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        ApiError::Service(err)
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
    error: ErrorDetail<'a>,
}

#[derive(Serialize)]
struct ErrorDetail<'a> {
    name: &'a str,
    message: &'a str,
}

fn internal_error(name: &str, message: &str) -> Response {
    let body = ErrorBody {
        message: GENERIC_MESSAGE,
        error: ErrorDetail { name, message },
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

// Only not-found gets its own status. Invalid params fall through to 500
// together with everything else.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Service(ServiceError::ArticleNotFound(message)) => {
                (StatusCode::NOT_FOUND, message).into_response()
            }
            ApiError::Service(err) => {
                error!(error = %err, kind = err.name(), "Request failed");
                internal_error(err.name(), &err.to_string())
            }
            ApiError::MalformedBody(message) => {
                error!(error = %message, "Failed to parse request body");
                internal_error("MalformedBodyError", &message)
            }
        }
    }
}
