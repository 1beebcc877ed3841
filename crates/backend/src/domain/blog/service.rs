use contracts::domain::blog::aggregate::{BlogListResponse, BlogPost};
use contracts::shared::listing::{filter_items, FilterState, ListingQuery};

use crate::shared::remote_api::{ItemSource, RemoteApiError};

/// Список записей блога для входа на страницу.
///
/// Удалённая сторона фильтрует по своим правилам (`q` ищет по всем полям),
/// поэтому результат дополнительно прогоняется через тот же предикат,
/// что и на клиенте.
pub async fn list(
    source: &dyn ItemSource,
    query: &ListingQuery,
) -> Result<BlogListResponse, RemoteApiError> {
    let normalized = query.normalized();
    let fetched = source.list_blogs(&normalized).await?;
    let fetched_count = fetched.len();

    let filter = FilterState::new(
        normalized.normalized_category(),
        normalized.q.clone().unwrap_or_default(),
    );
    let items = filter_items(fetched, &filter);

    tracing::debug!(
        "blog list: category={:?} q={:?} fetched={} kept={}",
        filter.active_category,
        normalized.q,
        fetched_count,
        items.len()
    );

    Ok(BlogListResponse {
        items,
        category: filter.active_category,
        q: normalized.q,
    })
}

pub async fn get_by_id(source: &dyn ItemSource, id: &str) -> Result<BlogPost, RemoteApiError> {
    source.get_blog(id).await
}
