// src/application/commands/publishers/mod.rs
mod register;
mod service;

pub use register::RegisterPublisherCommand;
pub use service::PublisherCommandService;
