use crate::domain::publisher::Publisher;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublisherDto {
    pub id: i64,
    pub name: String,
    /// Arbitrary registration metadata (logo etc.), flattened back into
    /// the response body.
    #[serde(flatten)]
    pub metadata: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl From<Publisher> for PublisherDto {
    fn from(publisher: Publisher) -> Self {
        Self {
            id: publisher.id.into(),
            name: publisher.name,
            metadata: publisher.metadata,
            created_at: publisher.created_at,
        }
    }
}
