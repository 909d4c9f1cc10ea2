use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl UserId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("user id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

/// Subscription plans and the window of premium access each one buys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionPlan {
    Starter,
    Standard,
    Premium,
}

impl SubscriptionPlan {
    pub fn duration(self) -> Duration {
        match self {
            SubscriptionPlan::Starter => Duration::minutes(1),
            SubscriptionPlan::Standard => Duration::days(5),
            SubscriptionPlan::Premium => Duration::days(10),
        }
    }

    pub fn expiry_from(self, now: DateTime<Utc>) -> DateTime<Utc> {
        now + self.duration()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SubscriptionPlan::Starter => "Starter",
            SubscriptionPlan::Standard => "Standard",
            SubscriptionPlan::Premium => "Premium",
        }
    }
}

impl fmt::Display for SubscriptionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubscriptionPlan {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Starter" => Ok(SubscriptionPlan::Starter),
            "Standard" => Ok(SubscriptionPlan::Standard),
            "Premium" => Ok(SubscriptionPlan::Premium),
            other => Err(DomainError::Validation(format!(
                "unknown subscription plan '{other}'"
            ))),
        }
    }
}
