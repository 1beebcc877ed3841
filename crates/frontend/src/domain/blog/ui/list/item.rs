use contracts::domain::blog::aggregate::BlogPost;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Карточка записи в списке блога
#[component]
pub fn BlogItem(post: BlogPost) -> impl IntoView {
    let href = format!("/blog/{}", post.id);
    let category = post
        .known_category()
        .map(|c| c.display_name().to_string())
        .unwrap_or_else(|| post.category.clone());

    view! {
        <a href=href.clone() class="blog-item">
            <div class="blog-item__img">
                <img src=post.img.clone() alt="IMG-BLOG" />
            </div>
            <div class="blog-item__body">
                <h4 class="blog-item__title">{post.title.clone()}</h4>
                <p class="blog-item__excerpt">{post.excerpt.clone()}</p>
                <div class="blog-item__footer">
                    <span class="blog-item__meta">
                        <span class="blog-item__by">"By"</span>
                        " "
                        {post.author.clone()}
                        <span class="blog-item__sep">"|"</span>
                        {category}
                    </span>
                    <span class="blog-item__more">
                        "Continue Reading "
                        {icon("arrow-right")}
                    </span>
                </div>
            </div>
        </a>
    }
}
