use leptos::prelude::*;

/// Баннер с заголовком страницы
#[component]
pub fn PageTitle(#[prop(into)] title: Signal<String>) -> impl IntoView {
    view! {
        <section class="page-title">
            <h2 class="page-title__text">{move || title.get()}</h2>
        </section>
    }
}
