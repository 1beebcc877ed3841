use contracts::domain::product::aggregate::Product;
use leptos::prelude::*;
use thaw::*;

use crate::domain::product::api;
use crate::shared::components::page_title::PageTitle;
use crate::shared::components::status::{ErrorAlert, LoadingIndicator, NoResults};

/// Карточка товара в сетке
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let href = format!("/shop/{}", product.id);
    view! {
        <div class="product-card">
            <a href=href.clone() class="product-card__img">
                <img src=product.img.clone() alt="IMG-PRODUCT" />
            </a>
            <div class="product-card__info">
                <a href=href class="product-card__title">{product.title.clone()}</a>
                <span class="product-card__price">{product.price.clone()}</span>
            </div>
        </div>
    }
}

/// Сетка товаров с индикатором пустого результата
#[component]
pub fn ProductGrid(#[prop(into)] products: Signal<Vec<Product>>) -> impl IntoView {
    view! {
        <Show
            when=move || !products.with(|p| p.is_empty())
            fallback=|| view! { <NoResults /> }
        >
            <div class="product-grid">
                <For
                    each=move || products.get()
                    key=|p| p.id.clone()
                    children=move |p: Product| view! { <ProductCard product=p /> }
                />
            </div>
        </Show>
    }
}

#[component]
pub fn ShopListPage() -> impl IntoView {
    let products = LocalResource::new(|| api::fetch_products());

    let items = Signal::derive(move || {
        products
            .get()
            .and_then(|r| r.ok())
            .unwrap_or_default()
    });

    view! {
        <PageTitle title="Shop".to_string() />
        <section class="shop-page">
            <div class="shop-page__header">
                <h3>"Product Overview"</h3>
                <Badge>{move || items.with(|i| i.len()).to_string()}</Badge>
            </div>
            {move || match products.get() {
                None => view! { <LoadingIndicator /> }.into_any(),
                Some(Err(e)) => view! { <ErrorAlert message=format!("Failed to load products: {}", e) /> }.into_any(),
                Some(Ok(_)) => view! { <ProductGrid products=items /> }.into_any(),
            }}
        </section>
    }
}
