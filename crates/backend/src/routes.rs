use std::path::Path;

use axum::http::{header, Method};
use axum::{middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers;
use crate::shared::request_logger::request_logger;
use crate::state::AppState;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    // Маршруты страниц (/blog?category=..., /shop/3) обслуживает frontend,
    // поэтому всё неизвестное отдаём как index.html
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Blog
        .route("/api/blog", get(handlers::blog::list))
        .route("/api/blog/:id", get(handlers::blog::get_by_id))
        // Shop
        .route("/api/products", get(handlers::product::list_all))
        .route("/api/products/:id", get(handlers::product::get_by_id))
        .route("/api/search", get(handlers::product::search))
        .with_state(state)
        .fallback_service(spa)
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}
