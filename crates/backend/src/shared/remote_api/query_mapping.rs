use contracts::shared::listing::ListingQuery;

/// Параметры json-server для списка блога: `q` для полнотекстового поиска,
/// `category_like` для фильтра по рубрике.
pub fn blog_query_pairs(query: &ListingQuery) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if let Some(q) = query.normalized_search() {
        pairs.push(("q", q));
    }
    if let Some(category) = query.normalized_category() {
        pairs.push(("category_like", category.code().to_string()));
    }
    pairs
}

pub fn product_query_pairs(q: Option<&str>) -> Vec<(&'static str, String)> {
    q.map(str::trim)
        .filter(|q| !q.is_empty())
        .map(|q| vec![("q", q.to_string())])
        .unwrap_or_default()
}
