// JsonFileStore: keeps the whole article collection in one JSON array file.
// Every load reads and decodes the full file; every save rewrites it through a
// sibling temp file followed by a rename, so readers never see a half-written
// array. Each save gets its own temp file; overlapping saves never share one.

use crate::domain::Article;
use crate::error::StoreError;
use crate::port::ArticleStore;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs;
use tracing::{debug, info, warn};

static TMP_SEQUENCE: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file holding an empty collection when it does not exist yet.
    ///
    /// Returns `true` if a new file was written.
    pub async fn init_if_missing(&self) -> Result<bool, StoreError> {
        if fs::try_exists(&self.path)
            .await
            .map_err(|source| self.read_error(source))?
        {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| self.write_error(source))?;
        }

        self.write_all(Vec::new()).await?;
        info!("Initialized empty article store at {:?}", self.path);
        Ok(true)
    }

    async fn read_all(&self) -> Result<Vec<Article>, StoreError> {
        let raw = fs::read_to_string(&self.path)
            .await
            .map_err(|source| self.read_error(source))?;

        let articles: Vec<Article> =
            serde_json::from_str(&raw).map_err(|source| StoreError::Decode {
                path: self.path.clone(),
                source,
            })?;

        debug!(count = articles.len(), "Loaded articles from {:?}", self.path);
        Ok(articles)
    }

    async fn write_all(&self, articles: Vec<Article>) -> Result<(), StoreError> {
        let json = serde_json::to_vec(&articles).map_err(StoreError::Encode)?;
        let tmp_path = self.tmp_path();

        fs::write(&tmp_path, &json)
            .await
            .map_err(|source| self.write_error(source))?;
        if let Err(source) = fs::rename(&tmp_path, &self.path).await {
            if let Err(e) = fs::remove_file(&tmp_path).await {
                warn!("Failed to remove temp file {:?}: {e}", tmp_path);
            }
            return Err(self.write_error(source));
        }

        debug!(count = articles.len(), "Saved articles to {:?}", self.path);
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "articles.json".to_string());
        let sequence = TMP_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        self.path.with_file_name(format!(
            ".{file_name}.{}.{sequence}.tmp",
            std::process::id()
        ))
    }

    fn read_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Read {
            path: self.path.clone(),
            source,
        }
    }

    fn write_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl ArticleStore for JsonFileStore {
    fn load(&self) -> Pin<Box<dyn Future<Output = Result<Vec<Article>, StoreError>> + Send + '_>> {
        Box::pin(self.read_all())
    }

    fn save(
        &self,
        articles: Vec<Article>,
    ) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + '_>> {
        Box::pin(self.write_all(articles))
    }
}
