// src/domain/article/entity.rs
use crate::domain::article::value_objects::ArticleId;
use chrono::{DateTime, Utc};

/// An article as stored. `publisher` and `writer_email` are informal
/// references resolved by value at query time, never enforced.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub body: String,
    pub writer_email: String,
    pub publisher: String,
    pub is_approved: bool,
    pub is_premium: bool,
    pub views: i64,
    pub decline_message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Article {
    pub fn approve(&mut self) {
        self.is_approved = true;
        self.decline_message = None;
    }

    pub fn decline(&mut self, reason: impl Into<String>) {
        self.is_approved = false;
        self.decline_message = Some(reason.into());
    }

    pub fn toggle_premium(&mut self) {
        self.is_premium = !self.is_premium;
    }
}

/// Submission payload. Articles always start unapproved with zero views.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: String,
    pub body: String,
    pub writer_email: String,
    pub publisher: String,
    pub is_premium: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy)]
pub struct ArticleStats {
    pub total: i64,
    pub premium: i64,
}
