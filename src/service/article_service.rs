use crate::domain::{Article, ArticlePatch, ArticleReplacement, NewArticle};
use crate::error::ServiceError;
use crate::port::ArticleStore;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{info, instrument, warn};

const ID_REQUIRED: &str = "Article ID is required!";
const FIELDS_REQUIRED: &str = "Article title and content are required!";
const NOT_FOUND: &str = "Article not found!";

/// CRUD operations over the article collection.
///
/// Every operation follows validate -> load -> locate/mutate -> save. Without
/// serialized writes the load and save are independent awaits, so concurrent
/// writers race and the last save wins.
pub struct ArticleService {
    store: Arc<dyn ArticleStore>,
    write_gate: Option<Mutex<()>>,
}

impl ArticleService {
    #[must_use]
    pub fn new(store: Arc<dyn ArticleStore>) -> Self {
        Self {
            store,
            write_gate: None,
        }
    }

    /// Hold a single-writer gate across load/mutate/save of every mutating operation.
    #[must_use]
    pub fn with_serialized_writes(store: Arc<dyn ArticleStore>) -> Self {
        Self {
            store,
            write_gate: Some(Mutex::new(())),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, article_id: &str) -> Result<Article, ServiceError> {
        require_id(article_id)?;

        let articles = self.store.load().await?;
        articles
            .into_iter()
            .find(|article| article.id == article_id)
            .ok_or_else(|| not_found(article_id))
    }

    #[instrument(skip(self, article))]
    pub async fn create(&self, article: NewArticle) -> Result<Article, ServiceError> {
        if article.title.is_empty() || article.content.is_empty() {
            return Err(ServiceError::InvalidParams(FIELDS_REQUIRED.to_string()));
        }

        let _gate = self.lock_writes().await;
        let mut articles = self.store.load().await?;

        // Ids follow the collection length and can collide after a delete.
        let created = Article {
            id: (articles.len() + 1).to_string(),
            title: article.title,
            content: article.content,
        };
        articles.push(created.clone());
        self.store.save(articles).await?;

        info!(article_id = %created.id, "Created article");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, article_id: &str) -> Result<Article, ServiceError> {
        require_id(article_id)?;

        let _gate = self.lock_writes().await;
        let mut articles = self.store.load().await?;
        let index = position_of(&articles, article_id)?;

        let deleted = articles.remove(index);
        self.store.save(articles).await?;

        info!(article_id, "Deleted article");
        Ok(deleted)
    }

    #[instrument(skip(self, article))]
    pub async fn update_by_id(
        &self,
        article_id: &str,
        article: ArticleReplacement,
    ) -> Result<Article, ServiceError> {
        require_id(article_id)?;
        if article.title.is_empty() || article.content.is_empty() {
            return Err(ServiceError::InvalidParams(FIELDS_REQUIRED.to_string()));
        }

        let _gate = self.lock_writes().await;
        let mut articles = self.store.load().await?;
        let index = position_of(&articles, article_id)?;

        let updated = Article {
            id: article_id.to_string(),
            title: article.title,
            content: article.content,
        };
        articles[index] = updated.clone();
        self.store.save(articles).await?;

        info!(article_id, "Replaced article");
        Ok(updated)
    }

    #[instrument(skip(self, patch))]
    pub async fn update_partial_by_id(
        &self,
        article_id: &str,
        patch: ArticlePatch,
    ) -> Result<Article, ServiceError> {
        require_id(article_id)?;

        let _gate = self.lock_writes().await;
        let mut articles = self.store.load().await?;
        let index = position_of(&articles, article_id)?;

        let patched = patch.apply_to(&articles[index]);
        articles[index] = patched;
        let updated = articles[index].clone();
        self.store.save(articles).await?;

        info!(article_id, "Patched article");
        Ok(updated)
    }

    async fn lock_writes(&self) -> Option<MutexGuard<'_, ()>> {
        match &self.write_gate {
            Some(gate) => Some(gate.lock().await),
            None => None,
        }
    }
}

fn require_id(article_id: &str) -> Result<(), ServiceError> {
    if article_id.is_empty() {
        return Err(ServiceError::InvalidParams(ID_REQUIRED.to_string()));
    }
    Ok(())
}

fn position_of(articles: &[Article], article_id: &str) -> Result<usize, ServiceError> {
    articles
        .iter()
        .position(|article| article.id == article_id)
        .ok_or_else(|| not_found(article_id))
}

fn not_found(article_id: &str) -> ServiceError {
    warn!(article_id, "Article not found");
    ServiceError::ArticleNotFound(NOT_FOUND.to_string())
}
