//! Клиент удалённого API витрины (json-server: /blogs, /products).
//!
//! Все страницы загружают данные одинаково: собрать query из параметров
//! страницы, сходить в API, разобрать JSON. Это сделано один раз здесь,
//! сервисы получают уже типизированные коллекции.

pub mod client;
#[cfg(test)]
pub mod mock;
pub mod query_mapping;

use async_trait::async_trait;
use contracts::domain::blog::aggregate::BlogPost;
use contracts::domain::product::aggregate::Product;
use contracts::shared::listing::ListingQuery;
use thiserror::Error;

pub use client::RemoteApiClient;

/// Ошибки обращения к удалённому API
#[derive(Debug, Error)]
pub enum RemoteApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Remote API returned HTTP {0}")]
    Status(u16),

    #[error("Not found")]
    NotFound,

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Источник элементов витрины
#[async_trait]
pub trait ItemSource: Send + Sync {
    /// Список записей блога, предварительно отфильтрованный удалённой стороной
    async fn list_blogs(&self, query: &ListingQuery) -> Result<Vec<BlogPost>, RemoteApiError>;

    async fn get_blog(&self, id: &str) -> Result<BlogPost, RemoteApiError>;

    /// Список товаров; `q` включает полнотекстовый поиск удалённой стороны
    async fn list_products(&self, q: Option<&str>) -> Result<Vec<Product>, RemoteApiError>;

    async fn get_product(&self, id: &str) -> Result<Product, RemoteApiError>;
}
