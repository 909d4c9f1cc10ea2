// src/application/commands/users/subscribe.rs
use super::UserCommandService;
use crate::{
    application::{dto::UpdateReceiptDto, error::ApplicationResult},
    domain::user::SubscriptionPlan,
};

pub struct SubscribeCommand {
    pub email: String,
    pub plan: String,
}

impl UserCommandService {
    /// Stores a premium expiry marker offset from now by the plan's
    /// duration. An unknown plan fails before anything is written; an
    /// unknown email matches nothing and is reported in the receipt.
    pub async fn subscribe(&self, command: SubscribeCommand) -> ApplicationResult<UpdateReceiptDto> {
        let plan: SubscriptionPlan = command.plan.parse()?;
        let expires_at = plan.expiry_from(self.clock.now());

        let matched = self
            .user_repo
            .set_premium_expiry(&command.email, expires_at)
            .await?;

        Ok(UpdateReceiptDto {
            matched_count: u64::from(matched),
        })
    }
}
