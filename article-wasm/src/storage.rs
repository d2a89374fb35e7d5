const TOKEN_KEY: &str = "access_token";
const REFRESH_TOKEN_KEY: &str = "refresh_token";

fn parse_token(raw: &str) -> Option<String> {
    let token = raw.trim().to_string();
    if token.is_empty() {
        return None;
    }
    Some(token)
}

fn load_item(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let raw = storage.get_item(key).ok()??;
    parse_token(&raw)
}

fn save_item(key: &str, value: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window is not available".to_string())?;
    let storage = window
        .local_storage()
        .map_err(|_| "failed to access localStorage".to_string())?
        .ok_or_else(|| "localStorage is not available".to_string())?;

    storage
        .set_item(key, value)
        .map_err(|_| format!("failed to save {key}"))
}

fn clear_item(key: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window is not available".to_string())?;
    let storage = window
        .local_storage()
        .map_err(|_| "failed to access localStorage".to_string())?
        .ok_or_else(|| "localStorage is not available".to_string())?;

    storage
        .remove_item(key)
        .map_err(|_| format!("failed to clear {key}"))
}

/// Недоступный storage означает «токена нет»: чтение никогда не падает.
pub(crate) fn load_token() -> Option<String> {
    load_item(TOKEN_KEY)
}

pub(crate) fn save_token(token: &str) -> Result<(), String> {
    save_item(TOKEN_KEY, token)
}

pub(crate) fn clear_token() -> Result<(), String> {
    clear_item(TOKEN_KEY)
}

pub(crate) fn save_refresh_token(token: &str) -> Result<(), String> {
    save_item(REFRESH_TOKEN_KEY, token)
}

pub(crate) fn clear_refresh_token() -> Result<(), String> {
    clear_item(REFRESH_TOKEN_KEY)
}
