use leptos::prelude::*;

/// Индикатор пустого результата фильтрации
#[component]
pub fn NoResults() -> impl IntoView {
    view! { <p class="no-results">"No results found"</p> }
}

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! { <p class="loading">"Loading..."</p> }
}

#[component]
pub fn ErrorAlert(#[prop(into)] message: String) -> impl IntoView {
    view! { <div class="alert alert--error">{message}</div> }
}
