// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleStats, ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str = "id, title, body, writer_email, publisher, is_approved, is_premium, views, decline_message, created_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    body: String,
    writer_email: String,
    publisher: String,
    is_approved: bool,
    is_premium: bool,
    views: i64,
    decline_message: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: row.title,
            body: row.body,
            writer_email: row.writer_email,
            publisher: row.publisher,
            is_approved: row.is_approved,
            is_premium: row.is_premium,
            views: row.views,
            decline_message: row.decline_message,
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
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            body,
            writer_email,
            publisher,
            is_premium,
            created_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (title, body, writer_email, publisher, is_premium, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, title, body, writer_email, publisher, is_approved, is_premium, views, decline_message, created_at",
        )
        .bind(title)
        .bind(body)
        .bind(writer_email)
        .bind(publisher)
        .bind(is_premium)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn approve(&self, id: ArticleId) -> DomainResult<()> {
        // zero rows affected is fine, missing ids are a silent no-op
        sqlx::query("UPDATE articles SET is_approved = TRUE, decline_message = NULL WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn decline(&self, id: ArticleId, message: &str) -> DomainResult<()> {
        sqlx::query("UPDATE articles SET is_approved = FALSE, decline_message = $2 WHERE id = $1")
            .bind(i64::from(id))
            .bind(message)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn set_premium(&self, id: ArticleId, is_premium: bool) -> DomainResult<()> {
        sqlx::query("UPDATE articles SET is_premium = $2 WHERE id = $1")
            .bind(i64::from(id))
            .bind(is_premium)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn increment_views(&self, id: ArticleId) -> DomainResult<()> {
        sqlx::query("UPDATE articles SET views = views + 1 WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}

enum ListingScope<'q> {
    Approved { title_pattern: Option<&'q str> },
    All,
}

// `%`, `_` and `\` are LIKE metacharacters; a search for a literal "100%"
// must not turn into a double wildcard.
fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

impl PostgresArticleReadRepository {
    fn push_conditions<'a>(builder: &mut QueryBuilder<'a, Postgres>, scope: &ListingScope<'a>) {
        match scope {
            ListingScope::Approved { title_pattern } => {
                builder.push(" WHERE is_approved = TRUE");
                if let Some(pattern) = title_pattern {
                    builder.push(" AND title ILIKE ");
                    builder.push_bind(*pattern);
                }
            }
            ListingScope::All => {}
        }
    }

    async fn count_matching(&self, scope: &ListingScope<'_>) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM articles");
        Self::push_conditions(&mut builder, scope);

        let total: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(total.max(0) as u64)
    }

    async fn fetch_page(
        &self,
        scope: ListingScope<'_>,
        offset: u64,
        limit: u32,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let total = self.count_matching(&scope).await?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles"));
        Self::push_conditions(&mut builder, &scope);
        builder.push(" ORDER BY created_at DESC, id DESC OFFSET ");
        builder.push_bind(offset as i64);
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(limit));

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let articles = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((articles, total))
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_approved(
        &self,
        title_filter: Option<&str>,
        offset: u64,
        limit: u32,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let pattern = title_filter.map(like_pattern);
        self.fetch_page(
            ListingScope::Approved {
                title_pattern: pattern.as_deref(),
            },
            offset,
            limit,
        )
        .await
    }

    async fn list_all(&self, offset: u64, limit: u32) -> DomainResult<(Vec<Article>, u64)> {
        self.fetch_page(ListingScope::All, offset, limit).await
    }

    async fn list_trending(&self, limit: u32) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY views DESC, id DESC LIMIT $1"
        ))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn list_premium(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE is_premium = TRUE
             ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn list_by_writer(&self, writer_email: &str) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE writer_email = $1
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(writer_email)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn count_stats(&self) -> DomainResult<ArticleStats> {
        let row = sqlx::query_as::<_, StatsRow>(
            "SELECT COUNT(*) AS total,
                    COUNT(*) FILTER (WHERE is_premium) AS premium
             FROM articles",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(ArticleStats {
            total: row.total,
            premium: row.premium,
        })
    }
}
