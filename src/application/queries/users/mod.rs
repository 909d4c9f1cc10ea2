// src/application/queries/users/mod.rs
mod list;
mod profile;
mod service;
mod stats;

pub use service::UserQueryService;
