use contracts::domain::blog::aggregate::BlogPost;
use contracts::shared::listing::ListingQuery;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::domain::blog::{api, BLOG_PATH};
use crate::shared::components::page_title::PageTitle;
use crate::shared::components::status::{ErrorAlert, LoadingIndicator};

/// "22 Jan, 2018" / "2018-01-22" -> "Jan 22, 2018"; нераспознанную дату показываем как есть
fn display_date(post: &BlogPost) -> String {
    post.published_on()
        .map(|d| d.format("%b %d, %Y").to_string())
        .unwrap_or_else(|| post.date.clone())
}

#[component]
pub fn BlogDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.with(|p| p.get("id").unwrap_or_default());

    let post = LocalResource::new(move || {
        let id = id();
        async move { api::fetch_blog(&id).await }
    });

    let title = Signal::derive(move || {
        post.get()
            .and_then(|r| r.ok())
            .map(|p| p.title)
            .unwrap_or_else(|| "Blog".to_string())
    });

    view! {
        <PageTitle title=title />
        <section class="blog-detail">
            {move || match post.get() {
                None => view! { <LoadingIndicator /> }.into_any(),
                Some(Err(e)) => view! { <ErrorAlert message=e /> }.into_any(),
                Some(Ok(post)) => {
                    let category = post
                        .known_category()
                        .map(|c| c.display_name().to_string())
                        .unwrap_or_else(|| post.category.clone());
                    let category_href = format!(
                        "{}?{}",
                        BLOG_PATH,
                        ListingQuery::new(post.known_category(), "").to_query_string()
                    );
                    view! {
                        <article class="blog-detail__article">
                            <img class="blog-detail__img" src=post.img.clone() alt="IMG-BLOG" />
                            <div class="blog-detail__meta">
                                <span>"By " {post.author.clone()}</span>
                                <span class="blog-detail__sep">"|"</span>
                                <span>{display_date(&post)}</span>
                                <span class="blog-detail__sep">"|"</span>
                                <a href=category_href>{category}</a>
                            </div>
                            <h4 class="blog-detail__title">{post.title.clone()}</h4>
                            <p class="blog-detail__text">{post.first_content.clone()}</p>
                            <p class="blog-detail__text">{post.second_content.clone()}</p>
                        </article>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
