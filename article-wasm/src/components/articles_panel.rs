use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::pagination::Pagination;
use crate::models::Article;
use crate::pagination::{PAGE_SIZE, total_pages};
use crate::state::AppState;
use crate::text::{format_timestamp, truncate_preview};

const PREVIEW_CHARS: usize = 120;

#[derive(Clone, Copy)]
struct ListState {
    articles: RwSignal<Vec<Article>>,
    total: RwSignal<u64>,
    page: RwSignal<u32>,
    keyword: RwSignal<String>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    generation: RwSignal<u64>,
}

impl ListState {
    fn new() -> Self {
        Self {
            articles: RwSignal::new(Vec::new()),
            total: RwSignal::new(0),
            page: RwSignal::new(1),
            keyword: RwSignal::new(String::new()),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }
}

fn load_articles(app: AppState, list: ListState) {
    let page = list.page.get_untracked();
    let keyword = list.keyword.get_untracked();

    // каждый запрос получает свой номер поколения; ответ с устаревшим
    // номером отбрасывается — выигрывает самый свежий запрос
    let generation = list.generation.get_untracked() + 1;
    list.generation.set(generation);

    list.loading.set(true);
    list.error.set(None);

    let token = app.token.get_untracked();
    spawn_local(async move {
        let result = api::list_articles(token.as_deref(), page, &keyword).await;
        if list.generation.get_untracked() != generation {
            return;
        }
        match result {
            Ok(resp) => {
                list.articles.set(resp.list);
                list.total.set(resp.total.max(0) as u64);
            }
            Err(err) => {
                list.articles.set(Vec::new());
                list.total.set(0);
                list.error.set(Some(err.to_string()));
            }
        }
        list.loading.set(false);
    });
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[component]
pub(crate) fn ArticlesPanel(state: AppState, on_open: Callback<i64>) -> impl IntoView {
    let list = ListState::new();
    let search_input = RwSignal::new(String::new());

    {
        let state = state.clone();
        Effect::new(move |_| {
            // номер страницы и зафиксированное ключевое слово —
            // зависимости запроса
            list.page.track();
            list.keyword.track();
            load_articles(state.clone(), list);
        });
    }

    let on_search = move |ev: SubmitEvent| {
        ev.prevent_default();
        list.keyword.set(search_input.get_untracked());
        list.page.set(1);
    };

    let on_clear_search = Callback::new(move |_: ()| {
        search_input.set(String::new());
        list.keyword.set(String::new());
        list.page.set(1);
    });

    let on_retry = Callback::new({
        let state = state.clone();
        move |_: ()| load_articles(state.clone(), list)
    });

    let on_select_page = Callback::new(move |page: u32| {
        list.page.set(page);
        scroll_to_top();
    });

    view! {
        <h2>"Articles"</h2>

        <form class="search-box" on:submit=on_search>
            <input
                placeholder="Поиск по заголовку и тексту..."
                prop:value=move || search_input.get()
                on:input=move |ev| search_input.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || list.loading.get()>"Search"</button>
        </form>

        <Show when=move || list.loading.get()>
            <p class="loading">"Загрузка..."</p>
        </Show>

        <Show when=move || list.error.get().is_some()>
            <div class="error-banner">
                <p>{move || list.error.get().unwrap_or_default()}</p>
                <button on:click=move |_| on_retry.run(())>"Retry"</button>
            </div>
        </Show>

        <Show when=move || {
            !list.loading.get() && list.error.get().is_none() && list.articles.get().is_empty()
        }>
            <div class="empty">
                <p>"Статей пока нет"</p>
                <Show when=move || !list.keyword.get().is_empty()>
                    <button on:click=move |_| on_clear_search.run(())>"Clear search"</button>
                </Show>
            </div>
        </Show>

        <ul class="articles">
            <For
                each=move || list.articles.get()
                key=|article| article.article_id
                children=move |article| {
                    let article_id = article.article_id;
                    let category = article.category.clone().filter(|c| !c.is_empty());
                    let image_url = article.image_url.clone().filter(|url| !url.is_empty());
                    let created = format_timestamp(&article.created_at);
                    let preview = truncate_preview(&article.body_text, PREVIEW_CHARS);
                    view! {
                        <li class="article-card" on:click=move |_| on_open.run(article_id)>
                            {image_url
                                .map(|src| {
                                    view! {
                                        <img class="article-image" src=src alt=article.title.clone()/>
                                    }
                                })}
                            <div class="article-meta">
                                {category
                                    .map(|category| {
                                        view! { <span class="category-tag">{category}</span> }
                                    })}
                                <span class="publish-date">{created}</span>
                            </div>
                            <h3 class="article-title">{article.title.clone()}</h3>
                            <p class="article-preview">{preview}</p>
                            <div class="article-stats">
                                <span>{format!("❤ {}", article.like_count)}</span>
                                <span>{format!("💬 {}", article.comment_count)}</span>
                            </div>
                        </li>
                    }
                }
            />
        </ul>

        {move || {
            let pages = total_pages(list.total.get(), PAGE_SIZE);
            view! {
                <div class="list-footer">
                    <Show when=move || list.total.get() > 0>
                        <p class="result-info">
                            {move || format!(
                                "Всего статей: {}, страница {} из {}",
                                list.total.get(),
                                list.page.get(),
                                total_pages(list.total.get(), PAGE_SIZE),
                            )}
                        </p>
                    </Show>
                    <Pagination
                        current_page=list.page.get()
                        total_pages=pages
                        on_select=on_select_page
                    />
                </div>
            }
        }}
    }
}
