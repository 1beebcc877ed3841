use contracts::domain::product::aggregate::{Product, ProductSearchQuery};

use crate::shared::api_utils::fetch_json;

/// Fetch all products
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    fetch_json("/api/products").await
}

/// Fetch one product
pub async fn fetch_product(id: &str) -> Result<Product, String> {
    fetch_json(&format!("/api/products/{}", urlencoding::encode(id))).await
}

/// Поиск товаров. Пустой запрос на backend не отправляется.
pub async fn search_products(query: &ProductSearchQuery) -> Result<Vec<Product>, String> {
    if query.term().is_none() {
        return Ok(Vec::new());
    }
    fetch_json(&format!("/api/search?{}", query.to_query_string())).await
}
