//! Shared test support utilities
//!
//! Provides an in-memory `MockStore` implementing `ArticleStore` for unit tests.

use crate::domain::Article;
use crate::error::StoreError;
use crate::port::ArticleStore;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory store that records saves and can be told to fail.
pub struct MockStore {
    articles: Mutex<Vec<Article>>,
    saves: AtomicUsize,
    should_fail: AtomicBool,
}

impl MockStore {
    pub fn new() -> Self {
        Self::with_articles(Vec::new())
    }

    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            articles: Mutex::new(articles),
            saves: AtomicUsize::new(0),
            should_fail: AtomicBool::new(false),
        }
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    pub fn stored(&self) -> Vec<Article> {
        self.articles.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    fn check_failure(&self) -> Result<(), StoreError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(StoreError::Read {
                path: "mock".into(),
                source: std::io::Error::other("Mock store failure"),
            });
        }
        Ok(())
    }
}

pub fn article(id: &str, title: &str, content: &str) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
    }
}

impl ArticleStore for MockStore {
    fn load(&self) -> Pin<Box<dyn Future<Output = Result<Vec<Article>, StoreError>> + Send + '_>> {
        Box::pin(async move {
            self.check_failure()?;
            Ok(self.articles.lock().unwrap().clone())
        })
    }

    fn save(
        &self,
        articles: Vec<Article>,
    ) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + '_>> {
        Box::pin(async move {
            self.check_failure()?;
            *self.articles.lock().unwrap() = articles;
            self.saves.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    }
}
