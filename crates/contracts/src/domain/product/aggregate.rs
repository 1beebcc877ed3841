use serde::{Deserialize, Serialize};

use crate::domain::common::deserialize_remote_id;
use crate::shared::listing::Searchable;

/// Товар витрины
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "deserialize_remote_id")]
    pub id: String,
    pub title: String,
    /// Цена приходит уже отформатированной строкой ("$16.64")
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub img: String,
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    // Цена может прийти числом, форматируем её так же, как строковую
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(format!("${}", n)),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "unexpected price value: {}",
            other
        ))),
    }
}

impl Searchable for Product {
    fn title(&self) -> &str {
        &self.title
    }

    fn excerpt(&self) -> &str {
        &self.description
    }

    /// У товаров нет рубрик блога
    fn category_code(&self) -> &str {
        ""
    }
}

/// Параметры страницы поиска товаров (`/search?product=...`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSearchQuery {
    #[serde(default)]
    pub product: Option<String>,
}

impl ProductSearchQuery {
    /// Пустой или состоящий из пробелов запрос не отправляется
    pub fn from_input(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                product: Some(trimmed.to_string()),
            })
        }
    }

    pub fn term(&self) -> Option<&str> {
        self.product
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    pub fn to_query_string(&self) -> String {
        let normalized = Self {
            product: Some(self.term().unwrap_or("").to_string()),
        };
        serde_qs::to_string(&normalized).unwrap_or_default()
    }
}
