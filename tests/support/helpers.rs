// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::{FixedClock, InMemoryStore};
use newsin::application::{ports::time::Clock, services::ApplicationServices};
use newsin::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    publisher::PublisherRepository,
    user::UserRepository,
};
use newsin::presentation::http::{routes::build_router, state::HttpState};

/// Everything a test needs: the wired services plus handles to reach
/// behind them and inspect or seed the store directly.
pub struct TestContext {
    pub services: Arc<ApplicationServices>,
    pub store: Arc<InMemoryStore>,
    pub clock: Arc<FixedClock>,
}

pub fn build_test_context() -> TestContext {
    let store = Arc::new(InMemoryStore::new());
    let clock = Arc::new(FixedClock::new());

    let user_repo: Arc<dyn UserRepository> = store.clone();
    let publisher_repo: Arc<dyn PublisherRepository> = store.clone();
    let article_write: Arc<dyn ArticleWriteRepository> = store.clone();
    let article_read: Arc<dyn ArticleReadRepository> = store.clone();
    let clock_port: Arc<dyn Clock> = clock.clone();

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        publisher_repo,
        article_write,
        article_read,
        clock_port,
    ));

    TestContext {
        services,
        store,
        clock,
    }
}

pub fn make_test_router(context: &TestContext) -> axum::Router {
    build_router(HttpState {
        services: Arc::clone(&context.services),
    })
}
