use serde::{Deserialize, Serialize};

use crate::domain::blog::category::BlogCategory;

/// Параметры списка в адресной строке: `category` и `q`.
///
/// Поля хранятся в сыром виде, как пришли из URL. Нормализация
/// выполняется методами `normalized_*`, ошибок при этом не бывает.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingQuery {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
}

impl ListingQuery {
    /// Собрать уже нормализованный запрос
    pub fn new(category: Option<BlogCategory>, q: &str) -> Self {
        let q = q.trim();
        Self {
            category: category.map(|c| c.code().to_string()),
            q: if q.is_empty() { None } else { Some(q.to_string()) },
        }
    }

    /// Неизвестная или пустая рубрика означает "все рубрики"
    pub fn normalized_category(&self) -> Option<BlogCategory> {
        self.category.as_deref().and_then(BlogCategory::from_code)
    }

    /// Строка поиска без пробелов по краям; пустая строка означает "без поиска"
    pub fn normalized_search(&self) -> Option<String> {
        self.q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_string)
    }

    pub fn normalized(&self) -> Self {
        Self::new(
            self.normalized_category(),
            self.normalized_search().as_deref().unwrap_or(""),
        )
    }

    /// Query string без ведущего `?`. Оба параметра присутствуют всегда,
    /// даже если один из них пустой.
    pub fn to_query_string(&self) -> String {
        let normalized = self.normalized();
        let wire = QueryWire {
            category: normalized.category.as_deref().unwrap_or(""),
            q: normalized.q.as_deref().unwrap_or(""),
        };
        serde_qs::to_string(&wire).unwrap_or_default()
    }

    /// Разбор `location.search` (с `?` или без). Неразборчивая строка
    /// означает "без фильтра".
    pub fn from_query_string(search: &str) -> Self {
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
    }
}

/// Вид параметров в адресной строке: пустое значение тоже пишется
#[derive(Serialize)]
struct QueryWire<'a> {
    category: &'a str,
    q: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_parameters_always_written() {
        assert_eq!(ListingQuery::default().to_query_string(), "category=&q=");
        assert_eq!(
            ListingQuery::new(Some(BlogCategory::Beauty), "").to_query_string(),
            "category=beauty&q="
        );
        assert_eq!(
            ListingQuery::new(None, "coat").to_query_string(),
            "category=&q=coat"
        );
    }

    #[test]
    fn test_unknown_category_is_dropped_on_write() {
        let query = ListingQuery {
            category: Some("unknown-value".into()),
            q: Some("  lip ".into()),
        };
        assert_eq!(query.normalized_category(), None);
        assert_eq!(query.normalized_search().as_deref(), Some("lip"));
        assert_eq!(query.to_query_string(), "category=&q=lip");
    }

    #[test]
    fn test_parse_location_search() {
        let query = ListingQuery::from_query_string("?category=diy&q=paper%20craft%21");
        assert_eq!(query.normalized_category(), Some(BlogCategory::Diy));
        assert_eq!(query.q.as_deref(), Some("paper craft!"));

        let empty = ListingQuery::from_query_string("");
        assert_eq!(empty.normalized(), ListingQuery::default());
    }

    #[test]
    fn test_extra_parameters_are_ignored() {
        let query = ListingQuery::from_query_string("category=fashion&utm=1");
        assert_eq!(query.normalized_category(), Some(BlogCategory::Fashion));
        assert_eq!(query.q, None);
    }

    #[test]
    fn test_written_query_has_no_raw_separators() {
        let written = ListingQuery::new(None, "a&b = c").to_query_string();
        assert!(written.starts_with("category=&q="));
        assert!(!written.contains(' '));
        assert_eq!(written.matches('&').count(), 1);
    }

    #[test]
    fn test_written_query_parses_back() {
        let original = ListingQuery::new(Some(BlogCategory::LifeStyle), "a&b = c");
        let parsed = ListingQuery::from_query_string(&original.to_query_string());
        assert_eq!(parsed.normalized(), original);
    }
}
