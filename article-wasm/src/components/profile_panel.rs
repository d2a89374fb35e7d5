use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::state::AppState;

#[component]
pub(crate) fn ProfilePanel(state: AppState) -> impl IntoView {
    let on_logout = {
        let state = state.clone();
        move |_| {
            let state = state.clone();
            spawn_local(async move {
                // бэкенд может ответить чем угодно, но локальная сессия
                // завершается в любом случае
                let _ = api::logout(state.token.get_untracked().as_deref()).await;
                state.clear_session();
            });
        }
    };

    let state_for_user = state.clone();

    view! {
        <h2>"Profile"</h2>

        {move || match state_for_user.user.get() {
            Some(user) => {
                let avatar = user.avatar.clone().filter(|url| !url.is_empty());
                let display_name = if user.name.is_empty() {
                    user.email.clone()
                } else {
                    user.name.clone()
                };
                view! {
                    <div class="profile-card">
                        {avatar
                            .map(|src| {
                                view! {
                                    <img
                                        src=src
                                        alt="avatar"
                                        width="48"
                                        referrerpolicy="no-referrer"
                                    />
                                }
                            })}
                        <p class="profile-name">{display_name}</p>
                        <p class="profile-email">{user.email.clone()}</p>
                        <p class="profile-id">{format!("id: {}", user.user_id)}</p>
                        <p class="profile-provider">"Вход: " {user.provider.clone()}</p>
                    </div>
                }
                    .into_any()
            }
            None => view! { <p class="loading">"Профиль загружается..."</p> }.into_any(),
        }}

        <button class="logout-button" on:click=on_logout>"Logout"</button>
    }
}
