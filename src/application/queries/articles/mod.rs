// src/application/queries/articles/mod.rs
mod collections;
mod detail;
mod list;
mod service;
mod stats;

pub use list::{ADMIN_PAGE_SIZE, ListArticlesQuery, PUBLIC_PAGE_SIZE};
pub use service::ArticleQueryService;
