// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{NewUser, User, UserId, UserRepository, UserStats};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    email: String,
    name: String,
    premium_expires_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            email: row.email,
            name: row.name,
            premium_expires_at: row.premium_expires_at,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct StatsRow {
    total: i64,
    premium: i64,
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert_if_absent(&self, user: NewUser) -> DomainResult<Option<User>> {
        let NewUser {
            email,
            name,
            created_at,
        } = user;

        // ON CONFLICT DO NOTHING keeps duplicate registration a soft no-op
        // without a separate existence probe.
        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (email, name, created_at)
             VALUES ($1, $2, $3)
             ON CONFLICT (email) DO NOTHING
             RETURNING id, email, name, premium_expires_at, created_at",
        )
        .bind(email)
        .bind(name)
        .bind(created_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, name, premium_expires_at, created_at
             FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, name, premium_expires_at, created_at
             FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn set_premium_expiry(
        &self,
        email: &str,
        expires_at: DateTime<Utc>,
    ) -> DomainResult<bool> {
        let result = sqlx::query("UPDATE users SET premium_expires_at = $2 WHERE email = $1")
            .bind(email)
            .bind(expires_at)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_stats(&self, now: DateTime<Utc>) -> DomainResult<UserStats> {
        let row = sqlx::query_as::<_, StatsRow>(
            "SELECT COUNT(*) AS total,
                    COUNT(*) FILTER (WHERE premium_expires_at > $1) AS premium
             FROM users",
        )
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(UserStats {
            total: row.total,
            premium: row.premium,
        })
    }
}
