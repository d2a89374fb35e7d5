use gloo_net::http::{Request, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use web_sys::RequestCredentials;

use crate::models::{Article, ArticleResponse, ListArticlesRequest, ListArticlesResponse, User};
use crate::pagination::PAGE_SIZE;

const API_BASE_URL: &str = match option_env!("WASM_API_BASE_URL") {
    Some(value) => value,
    None => "http://127.0.0.1:3000",
};

#[derive(Debug, Clone)]
pub(crate) enum ApiError {
    Network(String),
    Http { status: u16, message: String },
    Decode(String),
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "network error: {msg}"),
            Self::Http { status, message } => write!(f, "http error {status}: {message}"),
            Self::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl ApiError {
    /// 401/403 — сессия недействительна, клиент должен разлогиниться.
    pub(crate) fn is_auth_error(&self) -> bool {
        matches!(self, Self::Http { status: 401 | 403, .. })
    }
}

fn endpoint(path: &str) -> String {
    format!(
        "{}/{}",
        API_BASE_URL.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// URL начала OAuth-редиректа; бэкенд вернёт пользователя обратно
/// с токеном в query-строке.
pub(crate) fn google_auth_url() -> String {
    endpoint("/api/auth/google")
}

/// Cookie и bearer-токен сосуществуют: бэкенд принимает любой из них.
fn with_session(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    let builder = builder.credentials(RequestCredentials::Include);
    match token {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

async fn parse_json<T: DeserializeOwned>(response: gloo_net::http::Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

async fn parse_error_body(response: gloo_net::http::Response) -> ApiError {
    let status = response.status();

    let fallback = match status {
        400 => "Некорректный запрос".to_string(),
        401 => "Требуется авторизация".to_string(),
        403 => "Недостаточно прав для этой операции".to_string(),
        404 => "Ресурс не найден".to_string(),
        500..=599 => "Ошибка сервера".to_string(),
        _ => format!("HTTP ошибка {status}"),
    };

    #[derive(Deserialize)]
    struct ErrorBody {
        error_message: Option<String>,
    }

    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body
            .error_message
            .filter(|message| !message.trim().is_empty())
            .unwrap_or(fallback),
        Err(_) => fallback,
    };

    ApiError::Http { status, message }
}

pub(crate) async fn fetch_me(token: Option<&str>) -> Result<User, ApiError> {
    let response = with_session(Request::get(&endpoint("/api/users/me")), token)
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    parse_json(response).await
}

/// Fire-and-forget: тело ответа не интересно, локальную сессию очищает
/// вызывающая сторона в любом случае.
pub(crate) async fn logout(token: Option<&str>) -> Result<(), ApiError> {
    let response = with_session(Request::post(&endpoint("/api/auth/logout")), token)
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    Ok(())
}

pub(crate) async fn list_articles(
    token: Option<&str>,
    page: u32,
    keyword: &str,
) -> Result<ListArticlesResponse, ApiError> {
    let payload = ListArticlesRequest {
        page,
        page_size: PAGE_SIZE,
        keyword: keyword.to_string(),
    };

    let response = with_session(Request::post(&endpoint("/api/articles/list")), token)
        .json(&payload)
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    let status = response.status();
    let body: ListArticlesResponse = parse_json(response).await?;
    if !body.success {
        return Err(ApiError::Http {
            status,
            message: body
                .error_message
                .unwrap_or_else(|| "Не удалось получить список статей".to_string()),
        });
    }
    Ok(body)
}

pub(crate) async fn get_article(token: Option<&str>, id: i64) -> Result<Article, ApiError> {
    let response = with_session(Request::get(&endpoint(&format!("/api/articles/{id}"))), token)
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    let status = response.status();
    let body: ArticleResponse = parse_json(response).await?;
    if !body.success {
        return Err(ApiError::Http {
            status,
            message: body
                .error_message
                .unwrap_or_else(|| "Не удалось получить статью".to_string()),
        });
    }
    body.data
        .ok_or_else(|| ApiError::Decode("в ответе нет поля data".to_string()))
}

fn append(form: &web_sys::FormData, name: &str, value: &str) -> Result<(), ApiError> {
    form.append_with_str(name, value)
        .map_err(|_| ApiError::Network(format!("не удалось заполнить поле формы `{name}`")))
}

/// Создаёт статью multipart-формой; счётчики лайков и комментариев
/// у новой статьи всегда нулевые.
pub(crate) async fn create_article(
    token: Option<&str>,
    title: &str,
    body_text: &str,
    category: &str,
    image: Option<&web_sys::File>,
) -> Result<Article, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("не удалось создать форму".to_string()))?;
    append(&form, "title", title)?;
    append(&form, "body_text", body_text)?;
    append(&form, "category", category)?;
    append(&form, "like_count", "0")?;
    append(&form, "comment_count", "0")?;
    if let Some(file) = image {
        form.append_with_blob_and_filename("image", file, &file.name())
            .map_err(|_| ApiError::Network("не удалось приложить файл".to_string()))?;
    }

    let response = with_session(Request::post(&endpoint("/api/articles/with-image")), token)
        .body(wasm_bindgen::JsValue::from(form))
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    let status = response.status();
    let body: ArticleResponse = parse_json(response).await?;
    if !body.success {
        return Err(ApiError::Http {
            status,
            message: body
                .error_message
                .unwrap_or_else(|| "Не удалось опубликовать статью".to_string()),
        });
    }
    body.data
        .ok_or_else(|| ApiError::Decode("в ответе нет поля data".to_string()))
}
