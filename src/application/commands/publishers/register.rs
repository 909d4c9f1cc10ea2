// src/application/commands/publishers/register.rs
use super::PublisherCommandService;
use crate::{
    application::{dto::InsertReceiptDto, error::ApplicationResult},
    domain::publisher::NewPublisher,
};

pub struct RegisterPublisherCommand {
    pub name: String,
    pub metadata: serde_json::Value,
}

impl PublisherCommandService {
    /// Soft-idempotent insert keyed on the publisher name. A duplicate is
    /// reported in the receipt, never surfaced as an error.
    pub async fn register_publisher(
        &self,
        command: RegisterPublisherCommand,
    ) -> ApplicationResult<InsertReceiptDto> {
        let new_publisher = NewPublisher {
            name: command.name,
            metadata: command.metadata,
            created_at: self.clock.now(),
        };

        match self.repo.insert_if_absent(new_publisher).await? {
            Some(publisher) => Ok(InsertReceiptDto::inserted(publisher.id.into())),
            None => Ok(InsertReceiptDto::duplicate("publisher already inserted")),
        }
    }
}
