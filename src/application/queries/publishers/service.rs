// src/application/queries/publishers/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{PublicationStatsDto, PublisherDto},
        error::ApplicationResult,
    },
    domain::publisher::PublisherRepository,
};

pub struct PublisherQueryService {
    repo: Arc<dyn PublisherRepository>,
}

impl PublisherQueryService {
    pub fn new(repo: Arc<dyn PublisherRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_publishers(&self) -> ApplicationResult<Vec<PublisherDto>> {
        let publishers = self.repo.list().await?;
        Ok(publishers.into_iter().map(PublisherDto::from).collect())
    }

    /// Per-publisher article counts, joined by name value. Publishers with
    /// no matching articles still appear with a zero count.
    pub async fn publication_stats(&self) -> ApplicationResult<Vec<PublicationStatsDto>> {
        let counts = self.repo.publication_counts().await?;
        Ok(counts.into_iter().map(PublicationStatsDto::from).collect())
    }
}
