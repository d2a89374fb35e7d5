use leptos::prelude::*;

use crate::api;
use crate::components::article_detail::ArticleDetail;
use crate::components::articles_panel::ArticlesPanel;
use crate::components::login_panel::LoginPanel;
use crate::components::profile_panel::ProfilePanel;
use crate::components::upload_panel::UploadPanel;
use crate::state::{self, AppState, View};
use crate::storage;

fn restore_session(state: AppState) {
    // токен из query-строки (возврат с OAuth-редиректа) приоритетнее
    // сохранённого
    if let Some((token, refresh_token)) = state::take_query_tokens() {
        state.establish_session(token, refresh_token);
    } else if let Some(token) = storage::load_token() {
        state.token.set(Some(token));
    }

    let Some(token) = state.token.get_untracked() else {
        return;
    };

    leptos::task::spawn_local(async move {
        match api::fetch_me(Some(&token)).await {
            Ok(user) => {
                state.clear_error();
                state.user.set(Some(user));
            }
            // недействительный токен равнозначен отсутствию сессии
            Err(err) if err.is_auth_error() => state.clear_session(),
            Err(err) => state.set_error(err.to_string()),
        }
    });
}

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();

    restore_session(state.clone());

    let error = state.error;
    let view_signal = state.view;

    let on_open_article = Callback::new(move |id: i64| view_signal.set(View::Detail(id)));
    let on_back = Callback::new(move |_: ()| view_signal.set(View::Articles));

    let state_for_view = state.clone();
    let main_view = move || {
        if !state_for_view.is_authenticated() {
            return view! { <LoginPanel/> }.into_any();
        }

        view! {
            <nav class="tabs">
                <button on:click=move |_| view_signal.set(View::Articles)>"Articles"</button>
                <button on:click=move |_| view_signal.set(View::Upload)>"Upload"</button>
                <button on:click=move |_| view_signal.set(View::Profile)>"Profile"</button>
            </nav>
            {match view_signal.get() {
                View::Articles => {
                    view! {
                        <ArticlesPanel state=state_for_view.clone() on_open=on_open_article/>
                    }
                        .into_any()
                }
                View::Detail(article_id) => {
                    view! {
                        <ArticleDetail
                            state=state_for_view.clone()
                            article_id=article_id
                            on_back=on_back
                        />
                    }
                        .into_any()
                }
                View::Upload => view! { <UploadPanel state=state_for_view.clone()/> }.into_any(),
                View::Profile => view! { <ProfilePanel state=state_for_view.clone()/> }.into_any(),
            }}
        }
        .into_any()
    };

    view! {
        <main class="page">
            <section class="container">
                <h1>"Articles"</h1>

                <Show when=move || error.get().is_some()>
                    <div class="error-banner">
                        <strong>"Ошибка: "</strong>
                        {move || error.get().unwrap_or_default()}
                    </div>
                </Show>

                {main_view}
            </section>
        </main>
    }
}
