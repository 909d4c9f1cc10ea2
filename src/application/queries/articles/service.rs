// src/application/queries/articles/service.rs
use std::sync::Arc;

use crate::domain::article::{ArticleReadRepository, ArticleWriteRepository};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    // the detail fetch records a view, which is a write
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        write_repo: Arc<dyn ArticleWriteRepository>,
    ) -> Self {
        Self {
            read_repo,
            write_repo,
        }
    }
}
