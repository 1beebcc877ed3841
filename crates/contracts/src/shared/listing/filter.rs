use crate::domain::blog::category::BlogCategory;

/// Trait для элементов списка, поддерживающих фильтрацию
pub trait Searchable {
    fn title(&self) -> &str;

    /// Короткое описание, по которому тоже идёт поиск
    fn excerpt(&self) -> &str;

    /// Сырой код рубрики элемента
    fn category_code(&self) -> &str;
}

/// Текущий выбор пользователя: рубрика и строка поиска
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// None = все рубрики
    pub active_category: Option<BlogCategory>,
    /// Пустая строка = без текстового фильтра
    pub search_text: String,
}

impl FilterState {
    pub fn new(active_category: Option<BlogCategory>, search_text: impl Into<String>) -> Self {
        Self {
            active_category,
            search_text: search_text.into(),
        }
    }
}

/// Предикат фильтра. `needle` уже приведён к нижнему регистру.
fn matches_prepared<T: Searchable + ?Sized>(
    item: &T,
    category: Option<BlogCategory>,
    needle: Option<&str>,
) -> bool {
    let category_ok = category.map_or(true, |c| item.category_code() == c.code());
    category_ok
        && needle.map_or(true, |needle| {
            item.title().to_lowercase().contains(needle)
                || item.excerpt().to_lowercase().contains(needle)
        })
}

fn prepare_needle(filter: &FilterState) -> Option<String> {
    let trimmed = filter.search_text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Индексы подходящих элементов в исходном порядке. Один проход, исходный
/// список не меняется.
pub fn derive_view<T: Searchable>(items: &[T], filter: &FilterState) -> Vec<usize> {
    let needle = prepare_needle(filter);
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| matches_prepared(*item, filter.active_category, needle.as_deref()))
        .map(|(idx, _)| idx)
        .collect()
}

/// Фильтрует список по рубрике и строке поиска, забирая владение
pub fn filter_items<T: Searchable>(items: Vec<T>, filter: &FilterState) -> Vec<T> {
    let needle = prepare_needle(filter);
    items
        .into_iter()
        .filter(|item| matches_prepared(item, filter.active_category, needle.as_deref()))
        .collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Searchable;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Item {
        pub id: u32,
        pub title: String,
        pub excerpt: String,
        pub category: String,
    }

    impl Item {
        pub fn new(id: u32, category: &str, title: &str, excerpt: &str) -> Self {
            Self {
                id,
                title: title.to_string(),
                excerpt: excerpt.to_string(),
                category: category.to_string(),
            }
        }
    }

    impl Searchable for Item {
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

    pub fn fixture() -> Vec<Item> {
        vec![
            Item::new(1, "fashion", "Red Coat", "Warm wool for winter"),
            Item::new(2, "beauty", "Lipstick", "Shades of red for every day"),
            Item::new(3, "fashion", "Summer dress", "Light LINEN cut"),
            Item::new(4, "diy", "Paper lamp", "Craft a lamp from old maps"),
            Item::new(5, "travel", "Lisbon streets", "Not a known category"),
            Item::new(6, "streetstyle", "Denim jacket", "red stitching"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{fixture, Item};
    use super::*;

    fn naive(item: &Item, filter: &FilterState) -> bool {
        let cat = match filter.active_category {
            None => true,
            Some(c) => item.category == c.code(),
        };
        let q = filter.search_text.trim().to_lowercase();
        let text = q.is_empty()
            || item.title.to_lowercase().contains(&q)
            || item.excerpt.to_lowercase().contains(&q);
        cat && text
    }

    #[test]
    fn test_derive_view_equals_predicate_for_all_filters() {
        let items = fixture();
        let mut categories: Vec<Option<BlogCategory>> =
            BlogCategory::all().into_iter().map(Some).collect();
        categories.push(None);
        let searches = ["", "  ", "red", "RED", "lamp", "linen", "zzz", "a", " coat "];

        for category in &categories {
            for search in searches {
                let filter = FilterState::new(*category, search);
                let expected: Vec<usize> = items
                    .iter()
                    .enumerate()
                    .filter(|(_, i)| naive(i, &filter))
                    .map(|(idx, _)| idx)
                    .collect();
                assert_eq!(derive_view(&items, &filter), expected, "{:?}", filter);
            }
        }
    }

    #[test]
    fn test_search_matches_excerpt_case_insensitive() {
        let items = fixture();
        let view = derive_view(&items, &FilterState::new(None, "red"));
        let ids: Vec<u32> = view.iter().map(|&i| items[i].id).collect();
        // заголовок "Red Coat", описание "Shades of red", описание "red stitching"
        assert_eq!(ids, vec![1, 2, 6]);
    }

    #[test]
    fn test_unknown_item_category_only_visible_without_category_filter() {
        let items = fixture();
        assert!(derive_view(&items, &FilterState::default()).contains(&4));
        for category in BlogCategory::all() {
            assert!(!derive_view(&items, &FilterState::new(Some(category), "")).contains(&4));
        }
    }

    #[test]
    fn test_filter_items_keeps_order_and_input_untouched() {
        let items = fixture();
        let filter = FilterState::new(Some(BlogCategory::Fashion), "");
        let owned = filter_items(items.clone(), &filter);
        assert_eq!(owned.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(items.len(), 6);
    }
}
