pub mod aggregate;
pub mod category;
