// src/application/queries/users/stats.rs
use super::UserQueryService;
use crate::application::{dto::UserStatsDto, error::ApplicationResult};

impl UserQueryService {
    /// Premium counts only markers still in the future of the injected
    /// clock; expired markers stay stored but no longer count.
    pub async fn user_stats(&self) -> ApplicationResult<UserStatsDto> {
        let stats = self.user_repo.count_stats(self.clock.now()).await?;
        Ok(stats.into())
    }
}
