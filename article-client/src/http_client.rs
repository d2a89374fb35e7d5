use reqwest::{Client, Method, multipart};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::time::Duration;

use crate::error::{ArticleClientError, ArticleClientResult};
use crate::models::{Article, ArticlePage, AuthTokens, NewArticle, User};

#[derive(Debug, Serialize)]
struct GoogleLoginRequestDto<'a> {
    id_token: &'a str,
}

#[derive(Debug, Serialize)]
struct ListArticlesRequestDto<'a> {
    page: u32,
    page_size: u32,
    keyword: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorBodyDto {
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DataResponseDto<T> {
    success: bool,
    data: Option<T>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListResponseDto {
    success: bool,
    #[serde(default)]
    total: i64,
    #[serde(default)]
    list: Vec<ArticleDto>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ArticleDto {
    article_id: i64,
    title: String,
    body_text: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    like_count: i64,
    #[serde(default)]
    comment_count: i64,
    #[serde(default)]
    image_url: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Deserialize)]
struct UserDto {
    user_id: i64,
    email: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    avatar: Option<String>,
    #[serde(default)]
    provider: String,
}

#[derive(Debug, Deserialize)]
struct TokensDto {
    access_token: String,
    refresh_token: String,
}

impl From<ArticleDto> for Article {
    fn from(value: ArticleDto) -> Self {
        Self {
            article_id: value.article_id,
            title: value.title,
            body_text: value.body_text,
            // бэкенд присылает пустую строку вместо отсутствующей категории
            category: value.category.filter(|category| !category.is_empty()),
            like_count: value.like_count,
            comment_count: value.comment_count,
            image_url: value.image_url.filter(|url| !url.is_empty()),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<UserDto> for User {
    fn from(value: UserDto) -> Self {
        Self {
            user_id: value.user_id,
            email: value.email,
            name: value.name,
            avatar: value.avatar.filter(|url| !url.is_empty()),
            provider: value.provider,
        }
    }
}

impl From<TokensDto> for AuthTokens {
    fn from(value: TokensDto) -> Self {
        Self {
            access_token: value.access_token,
            refresh_token: value.refresh_token,
        }
    }
}

fn map_page(dto: ListResponseDto, page: u32, page_size: u32, keyword: &str) -> ArticlePage {
    ArticlePage {
        items: dto.list.into_iter().map(Article::from).collect(),
        total: dto.total.max(0) as u64,
        page,
        page_size,
        keyword: keyword.to_string(),
    }
}

#[derive(Debug, Clone)]
/// HTTP-клиент для работы с REST API статейного бэкенда.
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    /// Создаёт новый HTTP-клиент с базовым URL сервера.
    ///
    /// Cookie-jar включён: бэкенд может авторизовать запрос и по cookie,
    /// и по bearer-токену, механизмы сосуществуют.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .cookie_store(true)
            .build()
            .expect("failed to build reqwest client");

        Self {
            base_url: base_url.into(),
            client,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn decode_error(response: reqwest::Response) -> ArticleClientError {
        let status = response.status();

        let message = match response.json::<ErrorBodyDto>().await {
            Ok(body) => body
                .error_message
                .unwrap_or_else(|| format!("http status {status}")),
            Err(_) => format!("http status {status}"),
        };
        ArticleClientError::from_http_status(status, Some(message))
    }

    fn unwrap_data<T>(
        status: reqwest::StatusCode,
        dto: DataResponseDto<T>,
    ) -> ArticleClientResult<T> {
        if !dto.success {
            return Err(ArticleClientError::from_envelope(
                status.as_u16(),
                dto.error_message,
            ));
        }
        dto.data.ok_or(ArticleClientError::RequestFailed {
            status: status.as_u16(),
            message: "response body is missing `data`".to_string(),
        })
    }

    /// универсальный helper для отправки запросов с json-payload
    async fn send_json<TReq, TRes>(
        &self,
        method: Method,
        path: &str,
        body: &TReq,
        token: Option<&str>,
    ) -> ArticleClientResult<(reqwest::StatusCode, TRes)>
    where
        TReq: Serialize,
        TRes: DeserializeOwned,
    {
        let url = self.endpoint(path);

        let mut request = self.client.request(method, url).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(ArticleClientError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        let status = response.status();
        let body = response
            .json::<TRes>()
            .await
            .map_err(ArticleClientError::from_reqwest)?;
        Ok((status, body))
    }

    /// Обменивает Google `id_token` на пару токенов платформы.
    pub async fn google_login(&self, id_token: &str) -> ArticleClientResult<AuthTokens> {
        let payload = GoogleLoginRequestDto { id_token };
        let (status, dto): (_, DataResponseDto<TokensDto>) = self
            .send_json(Method::POST, "/api/auth/google", &payload, None)
            .await?;
        let tokens = Self::unwrap_data(status, dto)?;
        Ok(tokens.into())
    }

    /// Возвращает профиль текущего пользователя.
    pub async fn fetch_me(&self, token: Option<&str>) -> ArticleClientResult<User> {
        let url = self.endpoint("/api/users/me");

        let mut request = self.client.request(Method::GET, url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(ArticleClientError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        let dto = response
            .json::<UserDto>()
            .await
            .map_err(ArticleClientError::from_reqwest)?;
        Ok(dto.into())
    }

    /// Завершает сессию на бэкенде. Тело ответа игнорируется.
    pub async fn logout(&self, token: Option<&str>) -> ArticleClientResult<()> {
        let url = self.endpoint("/api/auth/logout");

        let mut request = self.client.request(Method::POST, url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(ArticleClientError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        Ok(())
    }

    /// Возвращает страницу списка статей с поиском по ключевому слову.
    pub async fn list_articles(
        &self,
        token: Option<&str>,
        page: u32,
        page_size: u32,
        keyword: &str,
    ) -> ArticleClientResult<ArticlePage> {
        let payload = ListArticlesRequestDto {
            page,
            page_size,
            keyword,
        };
        let (status, dto): (_, ListResponseDto) = self
            .send_json(Method::POST, "/api/articles/list", &payload, token)
            .await?;

        if !dto.success {
            return Err(ArticleClientError::from_envelope(
                status.as_u16(),
                dto.error_message,
            ));
        }
        Ok(map_page(dto, page, page_size, keyword))
    }

    /// Возвращает статью по идентификатору.
    pub async fn get_article(&self, token: Option<&str>, id: i64) -> ArticleClientResult<Article> {
        let url = self.endpoint(&format!("/api/articles/{id}"));

        let mut request = self.client.request(Method::GET, url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(ArticleClientError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        let status = response.status();
        let dto = response
            .json::<DataResponseDto<ArticleDto>>()
            .await
            .map_err(ArticleClientError::from_reqwest)?;
        let article = Self::unwrap_data(status, dto)?;
        Ok(article.into())
    }

    /// Создаёт статью multipart-формой с опциональной картинкой.
    ///
    /// Начальные счётчики лайков и комментариев всегда нулевые.
    pub async fn create_article(
        &self,
        token: Option<&str>,
        article: &NewArticle,
    ) -> ArticleClientResult<Article> {
        let url = self.endpoint("/api/articles/with-image");

        let mut form = multipart::Form::new()
            .text("title", article.title.clone())
            .text("body_text", article.body_text.clone())
            .text("category", article.category.clone())
            .text("like_count", "0")
            .text("comment_count", "0");
        if let Some(image) = &article.image {
            let part = multipart::Part::bytes(image.bytes.clone())
                .file_name(image.file_name.clone())
                .mime_str(&image.mime_type)?;
            form = form.part("image", part);
        }

        let mut request = self.client.request(Method::POST, url).multipart(form);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(ArticleClientError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        let status = response.status();
        let dto = response
            .json::<DataResponseDto<ArticleDto>>()
            .await
            .map_err(ArticleClientError::from_reqwest)?;
        let created = Self::unwrap_data(status, dto)?;
        Ok(created.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_article_dto(id: i64, category: &str) -> ArticleDto {
        ArticleDto {
            article_id: id,
            title: "t".to_string(),
            body_text: "b".to_string(),
            category: Some(category.to_string()),
            like_count: 3,
            comment_count: 1,
            image_url: None,
            created_at: Utc.timestamp_opt(10, 0).single().expect("valid ts"),
            updated_at: None,
        }
    }

    #[test]
    fn endpoint_normalizes_slashes() {
        let client = HttpClient::new("http://localhost:3000/");
        let full = client.endpoint("/api/articles/list");
        assert_eq!(full, "http://localhost:3000/api/articles/list");
    }

    #[test]
    fn map_page_keeps_request_parameters() {
        let dto = ListResponseDto {
            success: true,
            total: 42,
            list: vec![],
            error_message: None,
        };

        let mapped = map_page(dto, 3, 6, "осень");
        assert_eq!(mapped.page, 3);
        assert_eq!(mapped.page_size, 6);
        assert_eq!(mapped.keyword, "осень");
        assert_eq!(mapped.total, 42);
    }

    #[test]
    fn map_page_clamps_negative_total() {
        let dto = ListResponseDto {
            success: true,
            total: -7,
            list: vec![sample_article_dto(1, "")],
            error_message: None,
        };

        let mapped = map_page(dto, 1, 10, "");
        assert_eq!(mapped.total, 0);
        assert_eq!(mapped.items.len(), 1);
        assert_eq!(mapped.items[0].article_id, 1);
    }

    #[test]
    fn empty_category_becomes_none() {
        let article = Article::from(sample_article_dto(5, ""));
        assert!(article.category.is_none());

        let article = Article::from(sample_article_dto(6, "Travel"));
        assert_eq!(article.category.as_deref(), Some("Travel"));
    }
}
