use crate::domain::article::ArticleStats;
use crate::domain::publisher::PublicationCount;
use crate::domain::user::UserStats;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleStatsDto {
    pub total_articles: i64,
    pub premium_articles: i64,
}

impl From<ArticleStats> for ArticleStatsDto {
    fn from(stats: ArticleStats) -> Self {
        Self {
            total_articles: stats.total,
            premium_articles: stats.premium,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatsDto {
    pub total_users: i64,
    pub premium_users: i64,
}

impl From<UserStats> for UserStatsDto {
    fn from(stats: UserStats) -> Self {
        Self {
            total_users: stats.total,
            premium_users: stats.premium,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationStatsDto {
    pub publication: String,
    pub article_count: i64,
}

impl From<PublicationCount> for PublicationStatsDto {
    fn from(count: PublicationCount) -> Self {
        Self {
            publication: count.publication,
            article_count: count.article_count,
        }
    }
}
