pub mod article_store;

pub use article_store::ArticleStore;
