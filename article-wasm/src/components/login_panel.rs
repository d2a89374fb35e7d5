use leptos::prelude::*;

use crate::api;

/// Неавторизованное состояние. Единственная точка входа — OAuth-редирект:
/// бэкенд вернёт пользователя обратно с токеном в query-строке.
#[component]
pub(crate) fn LoginPanel() -> impl IntoView {
    view! {
        <div class="login-panel">
            <h2>"Sign in"</h2>
            <p>"Войдите через Google, чтобы читать и публиковать статьи."</p>
            <a class="google-login" href=api::google_auth_url() rel="external">
                "Sign in with Google"
            </a>
        </div>
    }
}
