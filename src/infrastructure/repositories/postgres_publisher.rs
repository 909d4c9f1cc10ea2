// src/infrastructure/repositories/postgres_publisher.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::publisher::{
    NewPublisher, PublicationCount, Publisher, PublisherId, PublisherRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresPublisherRepository {
    pool: PgPool,
}

impl PostgresPublisherRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PublisherRow {
    id: i64,
    name: String,
    metadata: serde_json::Value,
    created_at: DateTime<Utc>,
}

impl TryFrom<PublisherRow> for Publisher {
    type Error = DomainError;

    fn try_from(row: PublisherRow) -> Result<Self, Self::Error> {
        Ok(Publisher {
            id: PublisherId::new(row.id)?,
            name: row.name,
            metadata: row.metadata,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct PublicationCountRow {
    publication: String,
    article_count: i64,
}

#[async_trait]
impl PublisherRepository for PostgresPublisherRepository {
    async fn insert_if_absent(&self, publisher: NewPublisher) -> DomainResult<Option<Publisher>> {
        let NewPublisher {
            name,
            metadata,
            created_at,
        } = publisher;

        let row = sqlx::query_as::<_, PublisherRow>(
            "INSERT INTO publishers (name, metadata, created_at)
             VALUES ($1, $2, $3)
             ON CONFLICT (name) DO NOTHING
             RETURNING id, name, metadata, created_at",
        )
        .bind(name)
        .bind(metadata)
        .bind(created_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Publisher::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Publisher>> {
        let rows = sqlx::query_as::<_, PublisherRow>(
            "SELECT id, name, metadata, created_at FROM publishers ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Publisher::try_from).collect()
    }

    async fn publication_counts(&self) -> DomainResult<Vec<PublicationCount>> {
        // join by value: Article.publisher carries the name, not an id
        let rows = sqlx::query_as::<_, PublicationCountRow>(
            "SELECT p.name AS publication, COUNT(a.id) AS article_count
             FROM publishers p
             LEFT JOIN articles a ON a.publisher = p.name
             GROUP BY p.name
             ORDER BY article_count DESC, p.name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows
            .into_iter()
            .map(|row| PublicationCount {
                publication: row.publication,
                article_count: row.article_count,
            })
            .collect())
    }
}
