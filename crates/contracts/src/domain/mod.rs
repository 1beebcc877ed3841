pub mod blog;
pub mod common;
pub mod product;
