// src/application/commands/publishers/service.rs
use std::sync::Arc;

use crate::{application::ports::time::Clock, domain::publisher::PublisherRepository};

pub struct PublisherCommandService {
    pub(super) repo: Arc<dyn PublisherRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PublisherCommandService {
    pub fn new(repo: Arc<dyn PublisherRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}
