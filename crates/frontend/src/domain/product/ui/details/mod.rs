use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::domain::product::api;
use crate::shared::components::page_title::PageTitle;
use crate::shared::components::status::{ErrorAlert, LoadingIndicator};

#[component]
pub fn ProductDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.with(|p| p.get("id").unwrap_or_default());

    let product = LocalResource::new(move || {
        let id = id();
        async move { api::fetch_product(&id).await }
    });

    let title = Signal::derive(move || {
        product
            .get()
            .and_then(|r| r.ok())
            .map(|p| p.title)
            .unwrap_or_else(|| "Shop".to_string())
    });

    view! {
        <PageTitle title=title />
        <section class="product-detail">
            {move || match product.get() {
                None => view! { <LoadingIndicator /> }.into_any(),
                Some(Err(e)) => view! { <ErrorAlert message=e /> }.into_any(),
                Some(Ok(p)) => view! {
                    <div class="product-detail__row">
                        <div class="product-detail__gallery">
                            <img src=p.img.clone() alt="IMG-PRODUCT" />
                        </div>
                        <div class="product-detail__info">
                            <h4 class="product-detail__title">{p.title.clone()}</h4>
                            <span class="product-detail__price">{p.price.clone()}</span>
                            <p class="product-detail__description">{p.description.clone()}</p>
                        </div>
                    </div>
                    <div class="product-detail__tabs">
                        <p>{p.description.clone()}</p>
                    </div>
                    <div class="product-detail__banner">"Free shipping - only today"</div>
                }
                .into_any(),
            }}
        </section>
    }
}
