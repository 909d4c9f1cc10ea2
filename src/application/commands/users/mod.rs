// src/application/commands/users/mod.rs
mod register;
mod service;
mod subscribe;

pub use register::RegisterUserCommand;
pub use service::UserCommandService;
pub use subscribe::SubscribeCommand;
