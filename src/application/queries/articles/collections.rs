// src/application/queries/articles/collections.rs
use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

/// How many articles the trending feed carries.
const TRENDING_LIMIT: u32 = 6;

impl ArticleQueryService {
    pub async fn trending(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.read_repo.list_trending(TRENDING_LIMIT).await?;
        Ok(articles.into_iter().map(ArticleDto::from).collect())
    }

    pub async fn premium_articles(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.read_repo.list_premium().await?;
        Ok(articles.into_iter().map(ArticleDto::from).collect())
    }

    pub async fn articles_by_writer(&self, writer_email: &str) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.read_repo.list_by_writer(writer_email).await?;
        Ok(articles.into_iter().map(ArticleDto::from).collect())
    }
}
