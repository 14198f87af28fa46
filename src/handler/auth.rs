use axum::extract::Request;
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::warn;

pub const UNAUTHENTICATED: &str = "You must be authenticated to access this resource!";

/// Let the request through iff it carries a non-empty `Authorization` header.
///
/// The header value is never decoded or verified.
pub async fn require_authorization(req: Request, next: Next) -> Response {
    let authorized = req
        .headers()
        .get(header::AUTHORIZATION)
        .is_some_and(|value| !value.is_empty());

    if authorized {
        next.run(req).await
    } else {
        warn!(method = %req.method(), uri = %req.uri(), "Rejected unauthenticated request");
        (StatusCode::UNAUTHORIZED, UNAUTHENTICATED).into_response()
    }
}
