use contracts::domain::blog::aggregate::BlogPost;
use contracts::shared::listing::{ListingQuery, ListingSynchronizer, LocationOutcome, NavigationRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::params::ParamsMap;
use leptos_router::NavigateOptions;

use crate::domain::blog::BLOG_PATH;
use crate::shared::location::current_href;

pub type BlogListState = ListingSynchronizer<BlogPost>;

/// Параметры списка из query роутера
pub fn listing_query(params: &ParamsMap) -> ListingQuery {
    ListingQuery {
        category: params.get("category"),
        q: params.get("q"),
    }
}

/// Состояние страницы создаётся из адресной строки при входе.
/// Записи подставляются позже, когда придёт ответ backend.
pub fn create_state(entry: &ListingQuery) -> RwSignal<BlogListState> {
    RwSignal::new(ListingSynchronizer::from_query(Vec::new(), entry))
}

/// Адресная строка изменилась: своя запись, назад/вперёд или переход по ссылке
pub fn observe_location(state: RwSignal<BlogListState>, location: &ListingQuery) {
    match state.try_update(|s| s.on_location_entered(location)) {
        Some(LocationOutcome::Stale) => log::debug!("blog: stale location ignored"),
        Some(LocationOutcome::Applied) => log::debug!("blog: location applied"),
        _ => {}
    }
}

/// Запись в адресную строку после того, как новый список уже отрисован.
/// Перекрытая более новым переходом запись не выполняется. Подтверждение
/// приходит через query роутера в [`observe_location`].
pub fn schedule_navigation<N>(
    state: RwSignal<BlogListState>,
    navigate: StoredValue<N, LocalStorage>,
    request: NavigationRequest,
) where
    N: Fn(&str, NavigateOptions) + 'static,
{
    spawn_local(async move {
        let href = request.href(BLOG_PATH);
        let superseded = state
            .try_with_untracked(|s| s.is_superseded(request.seq))
            .unwrap_or(true);

        if superseded || current_href() == href {
            if let Some(outcome) = state.try_update(|s| s.complete_navigation(&request)) {
                log::debug!("blog: location write #{} skipped ({:?})", request.seq, outcome);
            }
            return;
        }

        navigate.with_value(|navigate| {
            navigate(
                &href,
                NavigateOptions {
                    scroll: false,
                    ..Default::default()
                },
            )
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::blog::category::BlogCategory;

    #[test]
    fn test_link_to_mounted_page_applies_filter() {
        let mut state = ListingSynchronizer::<BlogPost>::from_query(Vec::new(), &ListingQuery::default());

        let mut params = ParamsMap::new();
        params.insert("category", "diy".to_string());
        params.insert("q", String::new());
        let location = listing_query(&params);

        assert_eq!(state.on_location_entered(&location), LocationOutcome::Applied);
        assert_eq!(state.active_category(), Some(BlogCategory::Diy));
    }
}
