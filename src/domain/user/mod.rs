pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewUser, PremiumStatus, User, UserStats};
pub use repository::UserRepository;
pub use value_objects::{SubscriptionPlan, UserId};
