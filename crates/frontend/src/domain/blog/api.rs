use contracts::domain::blog::aggregate::{BlogListResponse, BlogPost};
use contracts::shared::listing::ListingQuery;

use crate::shared::api_utils::fetch_json;

/// Fetch blog posts. Пустой запрос возвращает полный набор.
pub async fn fetch_blogs(query: &ListingQuery) -> Result<BlogListResponse, String> {
    let path = if query.normalized() == ListingQuery::default() {
        "/api/blog".to_string()
    } else {
        format!("/api/blog?{}", query.to_query_string())
    };
    fetch_json(&path).await
}

/// Fetch one blog post
pub async fn fetch_blog(id: &str) -> Result<BlogPost, String> {
    fetch_json(&format!("/api/blog/{}", urlencoding::encode(id))).await
}
