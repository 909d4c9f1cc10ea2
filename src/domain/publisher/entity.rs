// src/domain/publisher/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublisherId(pub i64);

impl PublisherId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "publisher id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PublisherId> for i64 {
    fn from(value: PublisherId) -> Self {
        value.0
    }
}

/// A publication. Read-only after creation; `metadata` carries whatever
/// extra fields arrived with the registration body (logo and the like).
#[derive(Debug, Clone)]
pub struct Publisher {
    pub id: PublisherId,
    pub name: String,
    pub metadata: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPublisher {
    pub name: String,
    pub metadata: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// Join-by-value aggregate: articles whose `publisher` field equals the
/// publisher's name.
#[derive(Debug, Clone)]
pub struct PublicationCount {
    pub publication: String,
    pub article_count: i64,
}
