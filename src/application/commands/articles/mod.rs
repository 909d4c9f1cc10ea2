// src/application/commands/articles/mod.rs
mod moderate;
mod premium;
mod service;
mod submit;

pub use moderate::DeclineArticleCommand;
pub use service::ArticleCommandService;
pub use submit::SubmitArticleCommand;
