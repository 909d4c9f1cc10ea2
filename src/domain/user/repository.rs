use crate::domain::errors::DomainResult;
use crate::domain::user::entity::{NewUser, User, UserStats};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns `None` when the email is already registered. Duplicate
    /// registration is a soft no-op, not a constraint violation.
    async fn insert_if_absent(&self, user: NewUser) -> DomainResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    async fn list(&self) -> DomainResult<Vec<User>>;

    /// Stores the premium expiry marker. Returns whether any user matched.
    async fn set_premium_expiry(
        &self,
        email: &str,
        expires_at: DateTime<Utc>,
    ) -> DomainResult<bool>;

    /// Total users plus how many hold a marker still in the future of `now`.
    async fn count_stats(&self, now: DateTime<Utc>) -> DomainResult<UserStats>;
}
