// src/application/commands/articles/moderate.rs
use super::ArticleCommandService;
use crate::{application::error::ApplicationResult, domain::article::ArticleId};

pub struct DeclineArticleCommand {
    pub id: i64,
    pub message: String,
}

impl ArticleCommandService {
    /// Marks the article approved and clears any decline reason. Missing
    /// ids are a silent no-op.
    pub async fn approve_article(&self, id: i64) -> ApplicationResult<()> {
        let Ok(id) = ArticleId::new(id) else {
            // ids are store-generated and positive, so this cannot match
            return Ok(());
        };
        self.write_repo.approve(id).await?;
        Ok(())
    }

    /// Clears approval and records the moderation reason. Missing ids are
    /// a silent no-op, matching `approve_article`.
    pub async fn decline_article(&self, command: DeclineArticleCommand) -> ApplicationResult<()> {
        let Ok(id) = ArticleId::new(command.id) else {
            return Ok(());
        };
        self.write_repo.decline(id, &command.message).await?;
        Ok(())
    }
}
