pub mod blog;
pub mod product;
