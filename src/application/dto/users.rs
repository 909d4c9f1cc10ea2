use crate::domain::user::{PremiumStatus, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wire shape of a user. `isPremium` is the effective state at read time;
/// `expires` carries the raw marker only while the subscription is active.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub is_premium: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl UserDto {
    /// Applies the lazy expiry check against `now`. Expiry is evaluated on
    /// every read and never written back.
    pub fn from_user_at(user: User, now: DateTime<Utc>) -> Self {
        let (is_premium, expires) = match user.premium_status_at(now) {
            PremiumStatus::Active(expires_at) => (true, Some(expires_at)),
            PremiumStatus::Expired | PremiumStatus::None => (false, None),
        };

        Self {
            id: user.id.into(),
            email: user.email,
            name: user.name,
            is_premium,
            expires,
            created_at: user.created_at,
        }
    }
}
