use crate::domain::errors::DomainResult;
use crate::domain::publisher::entity::{NewPublisher, PublicationCount, Publisher};
use async_trait::async_trait;

#[async_trait]
pub trait PublisherRepository: Send + Sync {
    /// Returns `None` when the name is already taken (soft no-op).
    async fn insert_if_absent(&self, publisher: NewPublisher) -> DomainResult<Option<Publisher>>;

    async fn list(&self) -> DomainResult<Vec<Publisher>>;

    async fn publication_counts(&self) -> DomainResult<Vec<PublicationCount>>;
}
