mod item;
pub mod state;

use contracts::domain::blog::aggregate::BlogPost;
use contracts::domain::blog::category::BlogCategory;
use contracts::shared::listing::ListingQuery;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};
use thaw::*;

use crate::domain::blog::api;
use crate::shared::components::page_title::PageTitle;
use crate::shared::components::status::{ErrorAlert, LoadingIndicator, NoResults};
use crate::shared::icons::icon;
use item::BlogItem;
use state::{create_state, listing_query, observe_location, schedule_navigation};

/// Страница блога: список записей, поиск и фильтр по рубрикам.
///
/// Фильтр живёт в адресной строке (`?category=..&q=..`): им можно
/// поделиться ссылкой, и он переживает навигацию назад/вперёд.
#[component]
pub fn BlogListPage() -> impl IntoView {
    let query_map = use_query_map();
    let navigate = StoredValue::new_local(use_navigate());
    let state = create_state(&query_map.with_untracked(listing_query));
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    // Набор записей загружается один раз при входе на страницу, полностью:
    // рубрика и поиск дальше применяются на клиенте
    spawn_local(async move {
        match api::fetch_blogs(&ListingQuery::default()).await {
            Ok(response) => {
                log::debug!("blog: loaded {} posts", response.items.len());
                state.try_update(|s| s.replace_items(response.items));
            }
            Err(e) => {
                log::error!("blog: load failed: {}", e);
                set_error.try_set(Some(format!("Failed to load blog posts: {}", e)));
            }
        }
        set_loading.try_set(false);
    });

    // Любая смена query на этом же маршруте: ссылки, назад/вперёд, свои записи
    Effect::new(move |_| {
        let location = query_map.with(listing_query);
        observe_location(state, &location);
    });

    let select_category = move |category: Option<BlogCategory>| {
        if let Some(request) = state.try_update(|s| s.select_category(category)) {
            schedule_navigation(state, navigate, request);
        }
    };

    let submit_search = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(request) = state.try_update(|s| s.submit_search()) {
            schedule_navigation(state, navigate, request);
        }
    };

    let posts = Memo::new(move |_| {
        state.with(|s| s.derived_view().into_iter().cloned().collect::<Vec<BlogPost>>())
    });
    let is_empty = Memo::new(move |_| state.with(|s| s.is_empty_result()));
    let visible_count = move || state.with(|s| s.view_len()).to_string();
    let search_text = move || state.with(|s| s.filter_state().search_text.clone());

    view! {
        <PageTitle title="Blog".to_string() />

        <section class="blog-page">
            <div class="blog-page__content">
                {move || error.get().map(|e| view! { <ErrorAlert message=e /> })}
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <LoadingIndicator /> }
                >
                    <Show
                        when=move || !is_empty.get()
                        fallback=|| view! { <NoResults /> }
                    >
                        <For
                            each=move || posts.get()
                            key=|post| post.id.clone()
                            children=move |post: BlogPost| view! { <BlogItem post=post /> }
                        />
                    </Show>
                </Show>
            </div>

            <aside class="blog-page__side">
                <form class="blog-search" on:submit=submit_search>
                    <input
                        class="blog-search__input"
                        type="text"
                        name="search"
                        placeholder="Search"
                        prop:value=search_text
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            state.update(|s| s.set_search_text(text));
                        }
                    />
                    <button type="submit" class="blog-search__button">{icon("search")}</button>
                </form>

                <div class="blog-categories">
                    <h4 class="blog-categories__title">
                        "Categories " <Badge>{visible_count}</Badge>
                    </h4>
                    <ul>
                        <li>
                            <Button
                                appearance=move || {
                                    if state.with(|s| s.active_category().is_none()) {
                                        ButtonAppearance::Primary
                                    } else {
                                        ButtonAppearance::Subtle
                                    }
                                }
                                on_click=move |_| select_category(None)
                            >
                                "All"
                            </Button>
                        </li>
                        {BlogCategory::all()
                            .into_iter()
                            .map(|category| {
                                view! {
                                    <li>
                                        <Button
                                            appearance=move || {
                                                if state.with(|s| s.active_category() == Some(category)) {
                                                    ButtonAppearance::Primary
                                                } else {
                                                    ButtonAppearance::Subtle
                                                }
                                            }
                                            on_click=move |_| select_category(Some(category))
                                        >
                                            {category.display_name()}
                                        </Button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </aside>
        </section>
    }
}
