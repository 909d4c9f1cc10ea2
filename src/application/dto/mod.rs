pub mod articles;
pub mod pagination;
pub mod publishers;
pub mod receipts;
pub mod stats;
pub mod users;

pub use articles::ArticleDto;
pub use pagination::Page;
pub use publishers::PublisherDto;
pub use receipts::{InsertReceiptDto, UpdateReceiptDto};
pub use stats::{ArticleStatsDto, PublicationStatsDto, UserStatsDto};
pub use users::UserDto;
