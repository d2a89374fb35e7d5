use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::Article;
use crate::state::AppState;
use crate::text::format_timestamp;

#[derive(Clone, Copy)]
struct DetailState {
    article: RwSignal<Option<Article>>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    liked: RwSignal<bool>,
    like_count: RwSignal<i64>,
    generation: RwSignal<u64>,
}

impl DetailState {
    fn new() -> Self {
        Self {
            article: RwSignal::new(None),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
            liked: RwSignal::new(false),
            like_count: RwSignal::new(0),
            generation: RwSignal::new(0),
        }
    }
}

fn load_article(app: AppState, detail: DetailState, article_id: i64) {
    let generation = detail.generation.get_untracked() + 1;
    detail.generation.set(generation);

    detail.loading.set(true);
    detail.error.set(None);

    let token = app.token.get_untracked();
    spawn_local(async move {
        let result = api::get_article(token.as_deref(), article_id).await;
        if detail.generation.get_untracked() != generation {
            return;
        }
        match result {
            Ok(article) => {
                // локальный счётчик лайков стартует от серверного значения
                detail.like_count.set(article.like_count);
                detail.article.set(Some(article));
            }
            Err(err) => detail.error.set(Some(err.to_string())),
        }
        detail.loading.set(false);
    });
}

/// Страница одной статьи. Компонент пересоздаётся при смене `article_id`,
/// так что состояние (включая локальный лайк) сбрасывается вместе с ним.
#[component]
pub(crate) fn ArticleDetail(
    state: AppState,
    article_id: i64,
    on_back: Callback<()>,
) -> impl IntoView {
    let detail = DetailState::new();

    load_article(state.clone(), detail, article_id);

    let on_retry = Callback::new({
        let state = state.clone();
        move |_: ()| load_article(state.clone(), detail, article_id)
    });

    // лайк живёт только в этой вкладке: первый клик поднимает счётчик и
    // выключает кнопку, сетевого вызова нет
    // TODO: отправлять лайк на бэкенд, когда появится endpoint для этого
    let on_like = move |_| {
        if detail.liked.get_untracked() {
            return;
        }
        detail.liked.set(true);
        detail.like_count.update(|count| *count += 1);
    };

    view! {
        <div class="article-detail">
            <button class="back-button" on:click=move |_| on_back.run(())>"← Back"</button>

            <Show when=move || detail.loading.get()>
                <p class="loading">"Загрузка..."</p>
            </Show>

            <Show when=move || detail.error.get().is_some()>
                <div class="error-banner">
                    <p>{move || detail.error.get().unwrap_or_default()}</p>
                    <button on:click=move |_| on_retry.run(())>"Retry"</button>
                </div>
            </Show>

            {move || {
                detail
                    .article
                    .get()
                    .map(|article| {
                        let category = article.category.clone().filter(|c| !c.is_empty());
                        let image_url = article.image_url.clone().filter(|url| !url.is_empty());
                        let created = format_timestamp(&article.created_at);
                        let updated = article
                            .updated_at
                            .clone()
                            .filter(|raw| !raw.is_empty())
                            .map(|raw| format_timestamp(&raw));
                        let paragraphs = article
                            .body_text
                            .lines()
                            .map(str::to_string)
                            .collect::<Vec<_>>();
                        view! {
                            <article class="article-content">
                                <div class="article-meta">
                                    {category
                                        .map(|category| {
                                            view! { <span class="category-tag">{category}</span> }
                                        })}
                                    <span class="publish-info">"Опубликовано " {created}</span>
                                    {updated
                                        .map(|updated| {
                                            view! {
                                                <span class="update-info">" · обновлено " {updated}</span>
                                            }
                                        })}
                                </div>

                                <h2 class="article-title">{article.title.clone()}</h2>

                                {image_url
                                    .map(|src| {
                                        view! {
                                            <img
                                                class="article-image"
                                                src=src
                                                alt=article.title.clone()
                                            />
                                        }
                                    })}

                                <div class="article-body">
                                    {paragraphs
                                        .into_iter()
                                        .map(|line| view! { <p>{line}</p> })
                                        .collect::<Vec<_>>()}
                                </div>

                                <div class="article-stats">
                                    <button
                                        class="like-button"
                                        disabled=move || detail.liked.get()
                                        on:click=on_like
                                    >
                                        {move || format!("❤ {}", detail.like_count.get())}
                                    </button>
                                    <span>{format!("💬 {}", article.comment_count)}</span>
                                </div>
                            </article>
                        }
                    })
            }}
        </div>
    }
}
