pub mod articles;
pub mod publishers;
pub mod users;
