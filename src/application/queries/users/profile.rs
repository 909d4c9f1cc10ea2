// src/application/queries/users/profile.rs
use super::UserQueryService;
use crate::application::{
    dto::UserDto,
    error::{ApplicationError, ApplicationResult},
};

impl UserQueryService {
    /// Single-user fetch with the lazy expiry check applied: an expired
    /// marker reads back as not premium, an active one adds the raw
    /// `expires` timestamp. Nothing is written back.
    pub async fn get_user(&self, email: &str) -> ApplicationResult<UserDto> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        Ok(UserDto::from_user_at(user, self.clock.now()))
    }
}
