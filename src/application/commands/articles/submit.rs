// src/application/commands/articles/submit.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::NewArticle,
};

/// Taken verbatim from the request body; fields are not validated beyond
/// being present.
pub struct SubmitArticleCommand {
    pub title: String,
    pub body: String,
    pub writer_email: String,
    pub publisher: String,
    pub is_premium: bool,
}

impl ArticleCommandService {
    pub async fn submit_article(
        &self,
        command: SubmitArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let new_article = NewArticle {
            title: command.title,
            body: command.body,
            writer_email: command.writer_email,
            publisher: command.publisher,
            is_premium: command.is_premium,
            created_at: self.clock.now(),
        };

        let created = self.write_repo.insert(new_article).await?;
        Ok(created.into())
    }
}
