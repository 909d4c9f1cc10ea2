// src/application/commands/users/register.rs
use super::UserCommandService;
use crate::{
    application::{dto::InsertReceiptDto, error::ApplicationResult},
    domain::user::NewUser,
};

pub struct RegisterUserCommand {
    pub email: String,
    pub name: String,
}

impl UserCommandService {
    /// First registration wins; a repeated email reports the existing-user
    /// condition in the receipt and writes nothing.
    pub async fn register_user(
        &self,
        command: RegisterUserCommand,
    ) -> ApplicationResult<InsertReceiptDto> {
        let new_user = NewUser {
            email: command.email,
            name: command.name,
            created_at: self.clock.now(),
        };

        match self.user_repo.insert_if_absent(new_user).await? {
            Some(user) => Ok(InsertReceiptDto::inserted(user.id.into())),
            None => Ok(InsertReceiptDto::duplicate("user already exists")),
        }
    }
}
