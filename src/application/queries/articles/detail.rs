// src/application/queries/articles/detail.rs
use std::sync::Arc;

use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

impl ArticleQueryService {
    /// Fetches one article and records the view as a fire-and-forget
    /// side effect: the response always carries the pre-increment count,
    /// and a lost increment under concurrent reads is accepted.
    pub async fn get_article(&self, id: i64) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(id)
            .map_err(|_| ApplicationError::not_found("article not found"))?;

        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let write_repo = Arc::clone(&self.write_repo);
        tokio::spawn(async move {
            if let Err(err) = write_repo.increment_views(id).await {
                tracing::warn!(
                    error = %err,
                    article_id = i64::from(id),
                    "failed to record article view"
                );
            }
        });

        Ok(article.into())
    }
}
