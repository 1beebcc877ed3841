use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::blog::ui::details::BlogDetailsPage;
use crate::domain::blog::ui::list::BlogListPage;
use crate::domain::home::HomePage;
use crate::domain::product::ui::details::ProductDetailsPage;
use crate::domain::product::ui::list::ShopListPage;
use crate::domain::product::ui::search::ProductSearchPage;
use crate::layout::Shell;

#[component]
fn NotFound() -> impl IntoView {
    view! { <div class="not-found">"Page not found"</div> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/shop") view=ShopListPage />
                    <Route path=path!("/shop/:id") view=ProductDetailsPage />
                    <Route path=path!("/blog") view=BlogListPage />
                    <Route path=path!("/blog/:id") view=BlogDetailsPage />
                    <Route path=path!("/search") view=ProductSearchPage />
                </Routes>
            </Shell>
        </Router>
    }
}
