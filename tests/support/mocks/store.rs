// tests/support/mocks/store.rs
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use newsin::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleStats, ArticleWriteRepository, NewArticle,
};
use newsin::domain::errors::DomainResult;
use newsin::domain::publisher::{
    NewPublisher, PublicationCount, Publisher, PublisherId, PublisherRepository,
};
use newsin::domain::user::{NewUser, User, UserId, UserRepository, UserStats};

/// In-memory stand-in for the whole store. One struct implements every
/// repository trait so the publication-stats join-by-value can see both
/// collections, just like the real database.
#[derive(Default)]
pub struct InMemoryStore {
    articles: Mutex<Vec<Article>>,
    users: Mutex<Vec<User>>,
    publishers: Mutex<Vec<Publisher>>,
    next_id: AtomicI64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            articles: Mutex::new(Vec::new()),
            users: Mutex::new(Vec::new()),
            publishers: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    fn allocate_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Direct article fixture, bypassing the unapproved-on-submit rule.
    pub fn seed_article(&self, article: SeedArticle) -> i64 {
        let id = self.allocate_id();
        self.articles.lock().unwrap().push(Article {
            id: ArticleId::new(id).unwrap(),
            title: article.title,
            body: article.body,
            writer_email: article.writer_email,
            publisher: article.publisher,
            is_approved: article.is_approved,
            is_premium: article.is_premium,
            views: article.views,
            decline_message: None,
            created_at: article.created_at,
        });
        id
    }

    pub fn seed_user(&self, email: &str, name: &str, premium_expires_at: Option<DateTime<Utc>>) {
        let id = self.allocate_id();
        self.users.lock().unwrap().push(User {
            id: UserId::new(id).unwrap(),
            email: email.into(),
            name: name.into(),
            premium_expires_at,
            created_at: super::fixed_now(),
        });
    }

    pub fn article(&self, id: i64) -> Option<Article> {
        self.articles
            .lock()
            .unwrap()
            .iter()
            .find(|a| i64::from(a.id) == id)
            .cloned()
    }

    pub fn user(&self, email: &str) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned()
    }

    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn publisher_count(&self) -> usize {
        self.publishers.lock().unwrap().len()
    }
}

/// Fixture payload for `seed_article`.
pub struct SeedArticle {
    pub title: String,
    pub body: String,
    pub writer_email: String,
    pub publisher: String,
    pub is_approved: bool,
    pub is_premium: bool,
    pub views: i64,
    pub created_at: DateTime<Utc>,
}

impl Default for SeedArticle {
    fn default() -> Self {
        Self {
            title: "title".into(),
            body: "body".into(),
            writer_email: "writer@example.com".into(),
            publisher: "Daily Planet".into(),
            is_approved: false,
            is_premium: false,
            views: 0,
            created_at: super::fixed_now(),
        }
    }
}

fn newest_first(articles: &mut [Article]) {
    articles.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
    });
}

#[async_trait]
impl ArticleWriteRepository for InMemoryStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let id = self.allocate_id();
        let stored = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            body: article.body,
            writer_email: article.writer_email,
            publisher: article.publisher,
            is_approved: false,
            is_premium: article.is_premium,
            views: 0,
            decline_message: None,
            created_at: article.created_at,
        };
        self.articles.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn approve(&self, id: ArticleId) -> DomainResult<()> {
        let mut articles = self.articles.lock().unwrap();
        if let Some(article) = articles.iter_mut().find(|a| a.id == id) {
            article.approve();
        }
        Ok(())
    }

    async fn decline(&self, id: ArticleId, message: &str) -> DomainResult<()> {
        let mut articles = self.articles.lock().unwrap();
        if let Some(article) = articles.iter_mut().find(|a| a.id == id) {
            article.decline(message);
        }
        Ok(())
    }

    async fn set_premium(&self, id: ArticleId, is_premium: bool) -> DomainResult<()> {
        let mut articles = self.articles.lock().unwrap();
        if let Some(article) = articles.iter_mut().find(|a| a.id == id) {
            article.is_premium = is_premium;
        }
        Ok(())
    }

    async fn increment_views(&self, id: ArticleId) -> DomainResult<()> {
        let mut articles = self.articles.lock().unwrap();
        if let Some(article) = articles.iter_mut().find(|a| a.id == id) {
            article.views += 1;
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self
            .articles
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn list_approved(
        &self,
        title_filter: Option<&str>,
        offset: u64,
        limit: u32,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let needle = title_filter.map(str::to_lowercase);
        let mut matching: Vec<Article> = self
            .articles
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.is_approved)
            .filter(|a| match &needle {
                Some(needle) => a.title.to_lowercase().contains(needle),
                None => true,
            })
            .cloned()
            .collect();
        newest_first(&mut matching);

        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }

    async fn list_all(&self, offset: u64, limit: u32) -> DomainResult<(Vec<Article>, u64)> {
        let mut all: Vec<Article> = self.articles.lock().unwrap().clone();
        newest_first(&mut all);

        let total = all.len() as u64;
        let page = all
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }

    async fn list_trending(&self, limit: u32) -> DomainResult<Vec<Article>> {
        let mut all: Vec<Article> = self.articles.lock().unwrap().clone();
        all.sort_by(|a, b| {
            b.views
                .cmp(&a.views)
                .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
        });
        all.truncate(limit as usize);
        Ok(all)
    }

    async fn list_premium(&self) -> DomainResult<Vec<Article>> {
        let mut premium: Vec<Article> = self
            .articles
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.is_premium)
            .cloned()
            .collect();
        newest_first(&mut premium);
        Ok(premium)
    }

    async fn list_by_writer(&self, writer_email: &str) -> DomainResult<Vec<Article>> {
        let mut mine: Vec<Article> = self
            .articles
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.writer_email == writer_email)
            .cloned()
            .collect();
        newest_first(&mut mine);
        Ok(mine)
    }

    async fn count_stats(&self) -> DomainResult<ArticleStats> {
        let articles = self.articles.lock().unwrap();
        Ok(ArticleStats {
            total: articles.len() as i64,
            premium: articles.iter().filter(|a| a.is_premium).count() as i64,
        })
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert_if_absent(&self, user: NewUser) -> DomainResult<Option<User>> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Ok(None);
        }
        let id = self.allocate_id();
        let stored = User {
            id: UserId::new(id)?,
            email: user.email,
            name: user.name,
            premium_expires_at: None,
            created_at: user.created_at,
        };
        users.push(stored.clone());
        Ok(Some(stored))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<User>> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn set_premium_expiry(
        &self,
        email: &str,
        expires_at: DateTime<Utc>,
    ) -> DomainResult<bool> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.email == email) {
            Some(user) => {
                user.premium_expires_at = Some(expires_at);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count_stats(&self, now: DateTime<Utc>) -> DomainResult<UserStats> {
        let users = self.users.lock().unwrap();
        Ok(UserStats {
            total: users.len() as i64,
            premium: users
                .iter()
                .filter(|u| u.premium_expires_at.is_some_and(|t| t > now))
                .count() as i64,
        })
    }
}

#[async_trait]
impl PublisherRepository for InMemoryStore {
    async fn insert_if_absent(&self, publisher: NewPublisher) -> DomainResult<Option<Publisher>> {
        let mut publishers = self.publishers.lock().unwrap();
        if publishers.iter().any(|p| p.name == publisher.name) {
            return Ok(None);
        }
        let id = self.allocate_id();
        let stored = Publisher {
            id: PublisherId::new(id)?,
            name: publisher.name,
            metadata: publisher.metadata,
            created_at: publisher.created_at,
        };
        publishers.push(stored.clone());
        Ok(Some(stored))
    }

    async fn list(&self) -> DomainResult<Vec<Publisher>> {
        Ok(self.publishers.lock().unwrap().clone())
    }

    async fn publication_counts(&self) -> DomainResult<Vec<PublicationCount>> {
        let publishers = self.publishers.lock().unwrap();
        let articles = self.articles.lock().unwrap();

        let mut counts: Vec<PublicationCount> = publishers
            .iter()
            .map(|p| PublicationCount {
                publication: p.name.clone(),
                article_count: articles.iter().filter(|a| a.publisher == p.name).count() as i64,
            })
            .collect();
        counts.sort_by(|a, b| {
            b.article_count
                .cmp(&a.article_count)
                .then_with(|| a.publication.cmp(&b.publication))
        });
        Ok(counts)
    }
}
