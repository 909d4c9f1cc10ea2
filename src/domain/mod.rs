pub mod article;
pub mod errors;
pub mod publisher;
pub mod user;
