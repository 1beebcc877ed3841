use contracts::domain::product::aggregate::ProductSearchQuery;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::domain::product::api;
use crate::domain::product::ui::list::ProductGrid;
use crate::shared::components::page_title::PageTitle;
use crate::shared::components::status::{ErrorAlert, LoadingIndicator};

/// Результаты поиска из модального окна шапки: `/search?product=...`
#[component]
pub fn ProductSearchPage() -> impl IntoView {
    let query_map = use_query_map();
    let query = Memo::new(move |_| ProductSearchQuery {
        product: query_map.with(|q| q.get("product")),
    });

    let results = LocalResource::new(move || {
        let query = query.get();
        async move { api::search_products(&query).await }
    });

    let items = Signal::derive(move || results.get().and_then(|r| r.ok()).unwrap_or_default());
    let heading = move || match query.with(|q| q.term().map(str::to_string)) {
        Some(term) => format!("Results for \"{}\"", term),
        None => "Type something in the search box".to_string(),
    };

    view! {
        <PageTitle title="Search".to_string() />
        <section class="search-page">
            <h3 class="search-page__heading">{heading}</h3>
            {move || match results.get() {
                None => view! { <LoadingIndicator /> }.into_any(),
                Some(Err(e)) => view! { <ErrorAlert message=e /> }.into_any(),
                Some(Ok(_)) => view! { <ProductGrid products=items /> }.into_any(),
            }}
        </section>
    }
}
