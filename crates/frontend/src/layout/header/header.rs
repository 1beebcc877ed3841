use contracts::domain::product::aggregate::ProductSearchQuery;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::domain::blog::BLOG_PATH;
use crate::shared::icons::icon;

/// Адрес страницы результатов для строки из модального поиска.
/// `None` для пустой строки: переход не выполняется.
pub fn search_href(input: &str) -> Option<String> {
    ProductSearchQuery::from_input(input).map(|q| format!("/search?{}", q.to_query_string()))
}

#[component]
pub fn Header() -> impl IntoView {
    let navigate = use_navigate();
    let (modal_open, set_modal_open) = signal(false);
    let (search_input, set_search_input) = signal(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(href) = search_input.with_untracked(|s| search_href(s)) else {
            return;
        };
        log::debug!("header search -> {}", href);
        navigate(&href, NavigateOptions::default());
        set_search_input.set(String::new());
        set_modal_open.set(false);
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <a href="/" class="header__title">"Storefront"</a>
                <nav class="header__nav">
                    <a href="/">"Home"</a>
                    <a href="/shop">"Shop"</a>
                    <a href=BLOG_PATH>"Blog"</a>
                </nav>
            </div>
            <div class="header__actions">
                <button
                    class="button button--ghost"
                    aria-label="Search"
                    on:click=move |_| set_modal_open.update(|open| *open = !*open)
                >
                    {icon("search")}
                </button>
                <a href="/shop" class="button button--ghost" aria-label="Shop">{icon("bag")}</a>
            </div>
            <div class="search-modal" class:search-modal--open=move || modal_open.get()>
                <button
                    class="search-modal__close"
                    aria-label="Close"
                    on:click=move |_| set_modal_open.set(false)
                >
                    {icon("x")}
                </button>
                <form class="search-modal__form" on:submit=on_submit>
                    <input
                        class="search-modal__input"
                        type="text"
                        placeholder="Search..."
                        prop:value=move || search_input.get()
                        on:input=move |ev| set_search_input.set(event_target_value(&ev))
                    />
                    <button type="submit" class="search-modal__submit" aria-label="Submit">
                        {icon("arrow-right")}
                    </button>
                </form>
            </div>
        </header>
    }
}
