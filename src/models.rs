pub mod equipment;
pub mod health;
pub mod pagination;
pub mod user;
