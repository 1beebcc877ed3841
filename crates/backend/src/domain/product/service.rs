use contracts::domain::product::aggregate::{Product, ProductSearchQuery};
use contracts::shared::listing::{filter_items, FilterState};

use crate::shared::remote_api::{ItemSource, RemoteApiError};

pub async fn list_all(source: &dyn ItemSource) -> Result<Vec<Product>, RemoteApiError> {
    source.list_products(None).await
}

pub async fn get_by_id(source: &dyn ItemSource, id: &str) -> Result<Product, RemoteApiError> {
    source.get_product(id).await
}

/// Поиск из модального окна в шапке. Пустой запрос в API не уходит.
pub async fn search(
    source: &dyn ItemSource,
    query: &ProductSearchQuery,
) -> Result<Vec<Product>, RemoteApiError> {
    let Some(term) = query.term() else {
        return Ok(Vec::new());
    };

    let fetched = source.list_products(Some(term)).await?;
    Ok(filter_items(fetched, &FilterState::new(None, term)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::remote_api::mock::{product, MockSource};

    fn source() -> MockSource {
        MockSource {
            products: vec![
                product("1", "Esprit Ruffle Shirt", "Cotton"),
                product("2", "Herschel supply", "Backpack for shirts and more"),
                product("3", "Only Check Trouser", "Slim fit"),
            ],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_search_matches_title_and_description() {
        let source = source();
        let query = ProductSearchQuery::from_input("SHIRT").unwrap();
        let found = search(&source, &query).await.unwrap();
        let ids: Vec<&str> = found.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(
            source.product_queries.lock().unwrap().as_slice(),
            &[Some("SHIRT".to_string())]
        );
    }

    #[tokio::test]
    async fn test_blank_search_skips_remote_call() {
        let source = source();
        let query = ProductSearchQuery {
            product: Some("   ".into()),
        };
        assert!(search(&source, &query).await.unwrap().is_empty());
        assert!(source.product_queries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_product() {
        let source = source();
        let err = get_by_id(&source, "404").await.unwrap_err();
        assert!(matches!(err, RemoteApiError::NotFound));
    }
}
