use serde::{Deserialize, Serialize};

/// A single persisted article. Serialized as `{ "id", "title", "content" }`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub content: String,
}

/// Input for `ArticleService::create`. The id is always assigned by the service.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
}

/// Input for a full update.
///
/// `id` is accepted for wire compatibility but never applied: the stored id is
/// forced to the lookup key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArticleReplacement {
    pub id: Option<String>,
    pub title: String,
    pub content: String,
}

/// Input for a partial update. Absent or empty fields keep the stored value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArticlePatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl ArticlePatch {
    /// Apply the patch on top of `current`, keeping the current `id`.
    #[must_use]
    pub fn apply_to(self, current: &Article) -> Article {
        Article {
            id: current.id.clone(),
            title: non_empty(self.title).unwrap_or_else(|| current.title.clone()),
            content: non_empty(self.content).unwrap_or_else(|| current.content.clone()),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
