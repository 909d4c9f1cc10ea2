// tests/support/mocks/mod.rs
mod store;
mod time;

pub use store::{InMemoryStore, SeedArticle};
pub use time::{FixedClock, fixed_now};
