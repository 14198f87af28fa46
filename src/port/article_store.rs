use crate::domain::Article;
use crate::error::StoreError;
use std::future::Future;
use std::pin::Pin;

/// Wholesale persistence for the article collection (JSON file, in-memory, etc.)
///
/// There is no partial access: `load` materializes every article and `save`
/// replaces the whole persisted collection. Implementations are not required
/// to serialize a load/save pair issued by different callers.
///
/// This trait is dyn-compatible by using boxed futures instead of `impl Future`.
pub trait ArticleStore: Send + Sync {
    fn load(&self) -> Pin<Box<dyn Future<Output = Result<Vec<Article>, StoreError>> + Send + '_>>;

    fn save(
        &self,
        articles: Vec<Article>,
    ) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + '_>>;
}
