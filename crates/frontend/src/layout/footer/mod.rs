use leptos::prelude::*;

use crate::domain::blog::BLOG_PATH;
use contracts::domain::blog::category::BlogCategory;
use contracts::shared::listing::ListingQuery;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().format("%Y").to_string();

    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__column">
                <h4>"Blog"</h4>
                <ul>
                    {BlogCategory::all()
                        .into_iter()
                        .map(|c| {
                            let href = format!(
                                "{}?{}",
                                BLOG_PATH,
                                ListingQuery::new(Some(c), "").to_query_string()
                            );
                            view! { <li><a href=href>{c.display_name()}</a></li> }
                        })
                        .collect_view()}
                </ul>
            </div>
            <div class="footer__copyright">{format!("Copyright © {} All rights reserved", year)}</div>
        </footer>
    }
}
