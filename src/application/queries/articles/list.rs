// src/application/queries/articles/list.rs
use super::ArticleQueryService;
use crate::application::{
    dto::{ArticleDto, Page},
    error::ApplicationResult,
};

/// Page size for the public listing.
pub const PUBLIC_PAGE_SIZE: u32 = 5;
/// Page size for the moderation review listing.
pub const ADMIN_PAGE_SIZE: u32 = 10;

pub struct ListArticlesQuery {
    /// 1-based page number; zero is treated as the first page.
    pub page: u32,
    pub title: Option<String>,
}

impl ArticleQueryService {
    /// Approved articles only, newest first, optionally filtered by a
    /// case-insensitive title substring.
    pub async fn list_approved(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Page<ArticleDto>> {
        let offset = page_offset(query.page, PUBLIC_PAGE_SIZE);

        let (articles, total) = self
            .read_repo
            .list_approved(query.title.as_deref(), offset, PUBLIC_PAGE_SIZE)
            .await?;

        let items = articles.into_iter().map(ArticleDto::from).collect();
        Ok(Page::new(items, total, PUBLIC_PAGE_SIZE))
    }

    /// Every article regardless of approval state, for moderation review.
    pub async fn list_all(&self, page: u32) -> ApplicationResult<Page<ArticleDto>> {
        let offset = page_offset(page, ADMIN_PAGE_SIZE);
        let (articles, total) = self.read_repo.list_all(offset, ADMIN_PAGE_SIZE).await?;

        let items = articles.into_iter().map(ArticleDto::from).collect();
        Ok(Page::new(items, total, ADMIN_PAGE_SIZE))
    }
}

fn page_offset(page: u32, page_size: u32) -> u64 {
    u64::from(page.max(1) - 1) * u64::from(page_size)
}
