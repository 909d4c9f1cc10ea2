// src/application/commands/articles/premium.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

impl ArticleCommandService {
    /// Read-then-write flip of the premium flag. The two steps are not
    /// atomic; concurrent toggles are last-write-wins, as in the original
    /// system.
    pub async fn toggle_premium(&self, id: i64) -> ApplicationResult<ArticleDto> {
        // Non-positive ids cannot exist, so they get the same 404 as any
        // other miss.
        let id =
            ArticleId::new(id).map_err(|_| ApplicationError::not_found("article not found"))?;

        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        article.toggle_premium();
        self.write_repo.set_premium(id, article.is_premium).await?;
        Ok(article.into())
    }
}
