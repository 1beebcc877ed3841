pub mod footer;
pub mod header;

use leptos::prelude::*;

use footer::Footer;
use header::header::Header;

/// Оболочка страницы: шапка, контент, подвал.
///
/// ```text
/// +------------------------------+
/// |            Header            |
/// +------------------------------+
/// |           Content            |
/// +------------------------------+
/// |            Footer            |
/// +------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell">
            <Header />
            <main class="app-main">{children()}</main>
            <Footer />
        </div>
    }
}
