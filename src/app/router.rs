use crate::handler::articles::{
    create_article, delete_article, get_article, patch_article, replace_article,
};
use crate::handler::auth::require_authorization;
use crate::handler::health::health_handler;
use crate::handler::resource_not_found;
use crate::service::ArticleService;
use axum::Router;
use axum::handler::HandlerWithoutStateExt;
use axum::middleware;
use axum::routing::{get, post};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Build the articles API router (health + CRUD).
///
/// Unknown methods on a known path answer like unknown paths.
pub fn api_router(service: Arc<ArticleService>) -> Router {
    let v1_health_router = Router::new().route("/v1/health", get(health_handler));

    let articles_router = Router::new()
        .route(
            "/articles",
            post(create_article)
                .layer(middleware::from_fn(require_authorization))
                .fallback(resource_not_found),
        )
        .route(
            "/articles/{article_id}",
            get(get_article)
                .put(replace_article)
                .patch(patch_article)
                .delete(delete_article)
                .fallback(resource_not_found),
        )
        .with_state(service);

    Router::new()
        .merge(v1_health_router)
        .merge(articles_router)
}

/// Build the full application: API routes, static directories, request logging.
///
/// `public_dir` answers every path the API does not; `docs_dir` is mounted
/// under `/importantDocuments`. Misses in either end in the 404 fallback.
pub fn app_router(service: Arc<ArticleService>, public_dir: &Path, docs_dir: &Path) -> Router {
    let docs = ServeDir::new(docs_dir).not_found_service(resource_not_found.into_service());
    let public = ServeDir::new(public_dir).not_found_service(resource_not_found.into_service());

    api_router(service)
        .nest_service("/importantDocuments", docs)
        .fallback_service(public)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
