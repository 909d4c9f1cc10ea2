use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub writer_email: String,
    pub publisher: String,
    pub is_approved: bool,
    pub is_premium: bool,
    pub views: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decline_message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title,
            body: article.body,
            writer_email: article.writer_email,
            publisher: article.publisher,
            is_approved: article.is_approved,
            is_premium: article.is_premium,
            views: article.views,
            decline_message: article.decline_message,
            created_at: article.created_at,
        }
    }
}
