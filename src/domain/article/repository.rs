use crate::domain::article::entity::{Article, ArticleStats, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;

    /// Silent no-op when the id does not exist, matching `decline`.
    async fn approve(&self, id: ArticleId) -> DomainResult<()>;

    /// Clears approval and records the reason. Silent no-op when missing.
    async fn decline(&self, id: ArticleId, message: &str) -> DomainResult<()>;

    async fn set_premium(&self, id: ArticleId, is_premium: bool) -> DomainResult<()>;

    async fn increment_views(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;

    /// Approved articles only, newest first, with an optional
    /// case-insensitive title substring filter. Returns the page and the
    /// total count of matching rows.
    async fn list_approved(
        &self,
        title_filter: Option<&str>,
        offset: u64,
        limit: u32,
    ) -> DomainResult<(Vec<Article>, u64)>;

    /// Every article regardless of approval state, newest first.
    async fn list_all(&self, offset: u64, limit: u32) -> DomainResult<(Vec<Article>, u64)>;

    async fn list_trending(&self, limit: u32) -> DomainResult<Vec<Article>>;

    async fn list_premium(&self) -> DomainResult<Vec<Article>>;

    async fn list_by_writer(&self, writer_email: &str) -> DomainResult<Vec<Article>>;

    async fn count_stats(&self) -> DomainResult<ArticleStats>;
}
