//! In-memory источник для тестов сервисов и обработчиков

use std::sync::Mutex;

use async_trait::async_trait;
use contracts::domain::blog::aggregate::BlogPost;
use contracts::domain::product::aggregate::Product;
use contracts::shared::listing::ListingQuery;

use super::{ItemSource, RemoteApiError};

#[derive(Default)]
pub struct MockSource {
    pub blogs: Vec<BlogPost>,
    pub products: Vec<Product>,
    /// Если задано, любой запрос завершается этой ошибкой (HTTP-статус)
    pub fail_with_status: Option<u16>,
    /// Запросы списка блога, как их получил источник
    pub blog_queries: Mutex<Vec<ListingQuery>>,
    pub product_queries: Mutex<Vec<Option<String>>>,
}

impl MockSource {
    fn check(&self) -> Result<(), RemoteApiError> {
        match self.fail_with_status {
            Some(status) => Err(RemoteApiError::Status(status)),
            None => Ok(()),
        }
    }
}

pub fn blog(id: &str, category: &str, title: &str, excerpt: &str) -> BlogPost {
    BlogPost {
        id: id.to_string(),
        author: "Admin".to_string(),
        date: "22 Jan, 2018".to_string(),
        category: category.to_string(),
        excerpt: excerpt.to_string(),
        img: format!("images/blog-{}.jpg", id),
        title: title.to_string(),
        first_content: String::new(),
        second_content: String::new(),
    }
}

pub fn product(id: &str, title: &str, description: &str) -> Product {
    Product {
        id: id.to_string(),
        title: title.to_string(),
        price: "$16.64".to_string(),
        description: description.to_string(),
        img: format!("images/product-{}.jpg", id),
    }
}

#[async_trait]
impl ItemSource for MockSource {
    /// Имитирует json-server: игнорирует фильтры и отдаёт всё
    async fn list_blogs(&self, query: &ListingQuery) -> Result<Vec<BlogPost>, RemoteApiError> {
        self.check()?;
        self.blog_queries
            .lock()
            .expect("mock mutex poisoned")
            .push(query.clone());
        Ok(self.blogs.clone())
    }

    async fn get_blog(&self, id: &str) -> Result<BlogPost, RemoteApiError> {
        self.check()?;
        self.blogs
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or(RemoteApiError::NotFound)
    }

    async fn list_products(&self, q: Option<&str>) -> Result<Vec<Product>, RemoteApiError> {
        self.check()?;
        self.product_queries
            .lock()
            .expect("mock mutex poisoned")
            .push(q.map(str::to_string));
        Ok(self.products.clone())
    }

    async fn get_product(&self, id: &str) -> Result<Product, RemoteApiError> {
        self.check()?;
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(RemoteApiError::NotFound)
    }
}
