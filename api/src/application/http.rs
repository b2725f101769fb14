pub mod health;
pub mod ingredient;
pub mod product;
pub mod server;
