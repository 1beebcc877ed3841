pub mod page_title;
pub mod status;
