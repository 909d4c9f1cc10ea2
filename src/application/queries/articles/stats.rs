// src/application/queries/articles/stats.rs
use super::ArticleQueryService;
use crate::application::{dto::ArticleStatsDto, error::ApplicationResult};

impl ArticleQueryService {
    pub async fn article_stats(&self) -> ApplicationResult<ArticleStatsDto> {
        let stats = self.read_repo.count_stats().await?;
        Ok(stats.into())
    }
}
