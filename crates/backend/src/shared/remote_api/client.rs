use async_trait::async_trait;
use contracts::domain::blog::aggregate::BlogPost;
use contracts::domain::product::aggregate::Product;
use contracts::shared::listing::ListingQuery;
use serde::de::DeserializeOwned;

use super::query_mapping::{blog_query_pairs, product_query_pairs};
use super::{ItemSource, RemoteApiError};
use crate::shared::config::RemoteApiConfig;

/// HTTP-клиент удалённого API витрины
pub struct RemoteApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteApiClient {
    pub fn new(config: &RemoteApiConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET + разбор JSON. Единственное место, где статус ответа
    /// превращается в ошибку.
    async fn fetch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, RemoteApiError> {
        let url = self.url(path);
        tracing::debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .query(query)
            .send()
            .await
            .map_err(|e| RemoteApiError::Network(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RemoteApiError::NotFound);
        }
        if !status.is_success() {
            tracing::warn!("Remote API {} responded with {}", url, status);
            return Err(RemoteApiError::Status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| RemoteApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ItemSource for RemoteApiClient {
    async fn list_blogs(&self, query: &ListingQuery) -> Result<Vec<BlogPost>, RemoteApiError> {
        self.fetch_json("/blogs", &blog_query_pairs(query)).await
    }

    async fn get_blog(&self, id: &str) -> Result<BlogPost, RemoteApiError> {
        let path = format!("/blogs/{}", encode_id(id));
        self.fetch_json(&path, &[]).await
    }

    async fn list_products(&self, q: Option<&str>) -> Result<Vec<Product>, RemoteApiError> {
        self.fetch_json("/products", &product_query_pairs(q)).await
    }

    async fn get_product(&self, id: &str) -> Result<Product, RemoteApiError> {
        let path = format!("/products/{}", encode_id(id));
        self.fetch_json(&path, &[]).await
    }
}

/// Идентификатор попадает в путь, экранируем его целиком
fn encode_id(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join() {
        let client = RemoteApiClient::new(&RemoteApiConfig {
            base_url: "http://localhost:5001".into(),
            timeout_secs: 1,
        })
        .unwrap();
        assert_eq!(client.url("/blogs"), "http://localhost:5001/blogs");
    }

    #[test]
    fn test_id_is_escaped_in_path() {
        assert_eq!(encode_id("42"), "42");
        assert_eq!(encode_id("a/b c"), "a%2Fb%20c");
        assert_eq!(encode_id("../admin"), "..%2Fadmin");
    }
}
