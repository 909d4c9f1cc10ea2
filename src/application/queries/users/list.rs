// src/application/queries/users/list.rs
use super::UserQueryService;
use crate::application::{dto::UserDto, error::ApplicationResult};

impl UserQueryService {
    pub async fn list_users(&self) -> ApplicationResult<Vec<UserDto>> {
        let now = self.clock.now();
        let users = self.user_repo.list().await?;
        Ok(users
            .into_iter()
            .map(|user| UserDto::from_user_at(user, now))
            .collect())
    }
}
