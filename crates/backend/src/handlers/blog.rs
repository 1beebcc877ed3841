use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use contracts::domain::blog::aggregate::{BlogListResponse, BlogPost};
use contracts::shared::listing::ListingQuery;

use super::status_for;
use crate::domain::blog;
use crate::state::AppState;

/// GET /api/blog?category=&q=
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<BlogListResponse>, StatusCode> {
    blog::service::list(state.source.as_ref(), &query)
        .await
        .map(Json)
        .map_err(|e| status_for(&e))
}

/// GET /api/blog/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BlogPost>, StatusCode> {
    if id.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    blog::service::get_by_id(state.source.as_ref(), &id)
        .await
        .map(Json)
        .map_err(|e| status_for(&e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::remote_api::mock::{blog as blog_post, MockSource};
    use std::sync::Arc;

    fn state() -> AppState {
        AppState::new(Arc::new(MockSource {
            blogs: vec![
                blog_post("1", "fashion", "Red Coat", ""),
                blog_post("2", "beauty", "Lipstick", ""),
            ],
            ..Default::default()
        }))
    }

    #[tokio::test]
    async fn test_list_filters_by_category() {
        let query = ListingQuery {
            category: Some("fashion".into()),
            q: Some(String::new()),
        };
        let Json(response) = list(State(state()), Query(query)).await.unwrap();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].title, "Red Coat");
    }

    #[tokio::test]
    async fn test_get_unknown_post_is_404() {
        let result = get_by_id(State(state()), Path("99".to_string())).await;
        assert_eq!(result.unwrap_err(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_remote_error_is_502() {
        let state = AppState::new(Arc::new(MockSource {
            fail_with_status: Some(503),
            ..Default::default()
        }));
        let result = list(State(state), Query(ListingQuery::default())).await;
        assert_eq!(result.unwrap_err(), StatusCode::BAD_GATEWAY);
    }
}
