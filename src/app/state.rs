use crate::adapter::json_file::JsonFileStore;
use crate::config::Settings;
use crate::error::AppError;
use crate::port::ArticleStore;
use crate::service::ArticleService;
use std::sync::Arc;
use tracing::info;

/// Shared application state holding the article service.
pub struct AppState {
    pub article_service: Arc<ArticleService>,
}

impl AppState {
    /// Create `AppState` from configuration settings.
    ///
    /// Backs the service with a `JsonFileStore` at `articles_path`, writing an
    /// empty collection first when `init_store` is set and the file is missing.
    pub async fn from_settings(settings: &Settings) -> Result<Self, AppError> {
        let json_store = JsonFileStore::new(&settings.articles_path);
        if settings.init_store {
            json_store.init_if_missing().await?;
        }
        info!("Using article store at {:?}", json_store.path());

        let store: Arc<dyn ArticleStore> = Arc::new(json_store);
        let article_service = if settings.serialize_writes {
            info!("Serialized writes enabled");
            ArticleService::with_serialized_writes(store)
        } else {
            ArticleService::new(store)
        };

        Ok(Self {
            article_service: Arc::new(article_service),
        })
    }
}
