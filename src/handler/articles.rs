//! Route handlers for the `/articles` resource.
//!
//! Request payloads are explicit records with every field optional; the
//! service decides which missing fields are errors.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;
use tracing::info;

use super::body::LenientJson;
use super::error::ApiError;
use crate::domain::{Article, ArticlePatch, ArticleReplacement, NewArticle};
use crate::service::ArticleService;

/// Body of POST /articles. Any `id` sent by the client is ignored.
#[derive(Deserialize, Debug, Default)]
pub struct CreateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Body of PUT /articles/{article_id}.
#[derive(Deserialize, Debug, Default)]
pub struct ReplaceArticleRequest {
    pub id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Body of PATCH /articles/{article_id}. `id` is accepted and ignored.
#[derive(Deserialize, Debug, Default)]
pub struct PatchArticleRequest {
    pub id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl From<CreateArticleRequest> for NewArticle {
    fn from(req: CreateArticleRequest) -> Self {
        Self {
            title: req.title.unwrap_or_default(),
            content: req.content.unwrap_or_default(),
        }
    }
}

impl From<ReplaceArticleRequest> for ArticleReplacement {
    fn from(req: ReplaceArticleRequest) -> Self {
        Self {
            id: req.id.filter(|id| !id.is_empty()),
            title: req.title.unwrap_or_default(),
            content: req.content.unwrap_or_default(),
        }
    }
}

impl From<PatchArticleRequest> for ArticlePatch {
    fn from(req: PatchArticleRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
        }
    }
}

/// Handler for GET /articles/{article_id}
pub async fn get_article(
    State(service): State<Arc<ArticleService>>,
    Path(article_id): Path<String>,
) -> Result<Json<Article>, ApiError> {
    let article = service.get_by_id(&article_id).await?;
    Ok(Json(article))
}

/// Handler for POST /articles (requires authorization)
pub async fn create_article(
    State(service): State<Arc<ArticleService>>,
    LenientJson(req): LenientJson<CreateArticleRequest>,
) -> Result<Json<Article>, ApiError> {
    let created = service.create(req.into()).await?;
    info!(article_id = %created.id, "POST /articles succeeded");
    Ok(Json(created))
}

/// Handler for PUT /articles/{article_id}
pub async fn replace_article(
    State(service): State<Arc<ArticleService>>,
    Path(article_id): Path<String>,
    LenientJson(req): LenientJson<ReplaceArticleRequest>,
) -> Result<Json<Article>, ApiError> {
    let updated = service.update_by_id(&article_id, req.into()).await?;
    Ok(Json(updated))
}

/// Handler for PATCH /articles/{article_id}
pub async fn patch_article(
    State(service): State<Arc<ArticleService>>,
    Path(article_id): Path<String>,
    LenientJson(req): LenientJson<PatchArticleRequest>,
) -> Result<Json<Article>, ApiError> {
    let updated = service.update_partial_by_id(&article_id, req.into()).await?;
    Ok(Json(updated))
}

/// Handler for DELETE /articles/{article_id}
pub async fn delete_article(
    State(service): State<Arc<ArticleService>>,
    Path(article_id): Path<String>,
) -> Result<Json<Article>, ApiError> {
    let deleted = service.delete_by_id(&article_id).await?;
    Ok(Json(deleted))
}
