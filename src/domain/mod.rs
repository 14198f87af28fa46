pub mod article;

pub use article::{Article, ArticlePatch, ArticleReplacement, NewArticle};
