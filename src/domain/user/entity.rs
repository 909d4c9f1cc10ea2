// src/domain/user/entity.rs
use crate::domain::user::value_objects::UserId;
use chrono::{DateTime, Utc};

/// A reader account. The stored expiry marker is the only persistent trace
/// of a subscription; the effective premium state is derived lazily at
/// read time, never swept.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub premium_expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Effective premium state at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PremiumStatus {
    /// Never subscribed.
    None,
    /// Subscription runs until the contained timestamp (exclusive).
    Active(DateTime<Utc>),
    /// A marker exists but is at or before the given instant.
    Expired,
}

impl User {
    pub fn premium_status_at(&self, now: DateTime<Utc>) -> PremiumStatus {
        match self.premium_expires_at {
            None => PremiumStatus::None,
            Some(expires_at) if expires_at > now => PremiumStatus::Active(expires_at),
            Some(_) => PremiumStatus::Expired,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy)]
pub struct UserStats {
    pub total: i64,
    pub premium: i64,
}
