pub mod api;
pub mod ui;

/// Путь страницы списка блога
pub const BLOG_PATH: &str = "/blog";
