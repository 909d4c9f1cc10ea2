pub mod entity;
pub mod repository;

pub use entity::{NewPublisher, PublicationCount, Publisher, PublisherId};
pub use repository::PublisherRepository;
