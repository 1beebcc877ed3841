use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::BlogCategory;
use crate::domain::common::deserialize_remote_id;
use crate::shared::listing::Searchable;

/// Запись блога в том виде, в каком её отдаёт удалённый API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    #[serde(deserialize_with = "deserialize_remote_id")]
    pub id: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub date: String,
    /// Сырой код рубрики. Неизвестные значения сохраняются как есть.
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub img: String,
    pub title: String,
    #[serde(default)]
    pub first_content: String,
    #[serde(default)]
    pub second_content: String,
}

impl BlogPost {
    /// Рубрика, если код входит в фиксированный перечень
    pub fn known_category(&self) -> Option<BlogCategory> {
        BlogCategory::from_code(&self.category)
    }

    /// Дата публикации. API присылает либо ISO-дату, либо "22 Jan, 2018".
    pub fn published_on(&self) -> Option<NaiveDate> {
        let raw = self.date.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(raw, "%d %b, %Y"))
            .or_else(|_| NaiveDate::parse_from_str(raw, "%d %b %Y"))
            .ok()
    }
}

impl Searchable for BlogPost {
    fn title(&self) -> &str {
        &self.title
    }

    fn excerpt(&self) -> &str {
        &self.excerpt
    }

    fn category_code(&self) -> &str {
        &self.category
    }
}

/// Ответ backend на запрос списка записей блога
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogListResponse {
    pub items: Vec<BlogPost>,
    /// Нормализованная рубрика из запроса (None = все рубрики)
    pub category: Option<BlogCategory>,
    /// Нормализованная строка поиска из запроса
    pub q: Option<String>,
}
