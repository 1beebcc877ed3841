use leptos::prelude::*;

use crate::domain::blog::BLOG_PATH;
use crate::domain::product::api;
use crate::shared::components::page_title::PageTitle;
use crate::shared::components::status::{ErrorAlert, LoadingIndicator};
use crate::domain::product::ui::list::ProductGrid;

const FEATURED_COUNT: usize = 8;

/// Главная: баннер и первые товары каталога
#[component]
pub fn HomePage() -> impl IntoView {
    let products = LocalResource::new(|| api::fetch_products());
    let featured = Signal::derive(move || {
        products
            .get()
            .and_then(|r| r.ok())
            .map(|mut items| {
                items.truncate(FEATURED_COUNT);
                items
            })
            .unwrap_or_default()
    });

    view! {
        <PageTitle title="Home".to_string() />
        <section class="hero">
            <h2 class="hero__title">"New arrivals"</h2>
            <div class="hero__links">
                <a href="/shop" class="button">"Shop now"</a>
                <a href=BLOG_PATH class="button button--ghost">"Read the blog"</a>
            </div>
        </section>
        <section class="featured">
            {move || match products.get() {
                None => view! { <LoadingIndicator /> }.into_any(),
                Some(Err(e)) => view! { <ErrorAlert message=e /> }.into_any(),
                Some(Ok(_)) => view! { <ProductGrid products=featured /> }.into_any(),
            }}
        </section>
    }
}
