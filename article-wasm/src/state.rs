use leptos::prelude::*;

use crate::models::User;
use crate::storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum View {
    Articles,
    Detail(i64),
    Upload,
    Profile,
}

#[derive(Debug, Clone)]
pub(crate) struct AppState {
    pub(crate) token: RwSignal<Option<String>>,
    pub(crate) user: RwSignal<Option<User>>,
    pub(crate) view: RwSignal<View>,
    pub(crate) error: RwSignal<Option<String>>,
}

impl AppState {
    pub(crate) fn new() -> Self {
        Self {
            token: RwSignal::new(None),
            user: RwSignal::new(None),
            view: RwSignal::new(View::Articles),
            error: RwSignal::new(None),
        }
    }

    pub(crate) fn set_error(&self, message: impl Into<String>) {
        self.error.set(Some(message.into()));
    }

    pub(crate) fn clear_error(&self) {
        self.error.set(None);
    }

    pub(crate) fn is_authenticated(&self) -> bool {
        self.token.get().is_some()
    }

    /// Единственная точка записи сессии: storage и сигнал меняются вместе.
    pub(crate) fn establish_session(&self, access_token: String, refresh_token: Option<String>) {
        if let Err(err) = storage::save_token(&access_token) {
            self.set_error(err);
        }
        if let Some(refresh_token) = &refresh_token {
            if let Err(err) = storage::save_refresh_token(refresh_token) {
                self.set_error(err);
            }
        }
        self.token.set(Some(access_token));
    }

    /// Локальная сессия завершается независимо от ответа бэкенда;
    /// недоступный storage выходу не мешает.
    pub(crate) fn clear_session(&self) {
        let _ = storage::clear_token();
        let _ = storage::clear_refresh_token();
        self.token.set(None);
        self.user.set(None);
        self.view.set(View::Articles);
    }
}

/// Достаёт `?token=`/`?refresh_token=` из адресной строки при первой
/// загрузке; после этого видимый URL остаётся без query-параметров.
pub(crate) fn take_query_tokens() -> Option<(String, Option<String>)> {
    let window = web_sys::window()?;
    let location = window.location();
    let search = location.search().ok()?;
    if search.is_empty() || search == "?" {
        return None;
    }

    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    let token = params
        .get("token")
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())?;
    let refresh_token = params
        .get("refresh_token")
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty());

    if let (Ok(history), Ok(pathname)) = (window.history(), location.pathname()) {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&pathname));
    }

    Some((token, refresh_token))
}
