pub mod common;
pub mod ingredient;
pub mod product;
