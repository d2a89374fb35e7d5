//! Клиентская библиотека для статейного бэкенда.
//!
//! Оборачивает REST API (`reqwest`) в типизированный фасад
//! (`ArticleClient`): вход через Google `id_token`, профиль пользователя,
//! список статей с пагинацией и поиском, одна статья, создание статьи
//! multipart-формой с картинкой.
//!
//! Клиент хранит bearer-токен после `google_login` и автоматически
//! подставляет его в запросы; без токена запросы уходят анонимно
//! (бэкенд может авторизовать их и по cookie).
#![warn(missing_docs)]

mod error;
mod http_client;
mod models;
pub mod upload;

pub use error::{ArticleClientError, ArticleClientResult};
pub use models::{Article, ArticlePage, AuthTokens, ImageFile, NewArticle, User};

use http_client::HttpClient;

#[derive(Debug, Clone)]
/// Типизированный клиент статейного бэкенда поверх HTTP.
pub struct ArticleClient {
    http_client: HttpClient,
    token: Option<String>,
}

impl ArticleClient {
    /// Создаёт клиент с базовым URL бэкенда, например `http://127.0.0.1:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(base_url),
            token: None,
        }
    }

    /// Устанавливает bearer-токен вручную (например, из сохранённой сессии).
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Возвращает текущий bearer-токен, если он установлен.
    pub fn get_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Очищает сохранённый bearer-токен.
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Обменивает Google `id_token` на пару токенов платформы и
    /// сохраняет access-токен в клиенте.
    pub async fn google_login(&mut self, id_token: &str) -> ArticleClientResult<AuthTokens> {
        let tokens = self.http_client.google_login(id_token).await?;
        self.token = Some(tokens.access_token.clone());
        Ok(tokens)
    }

    /// Возвращает профиль текущего пользователя.
    pub async fn fetch_me(&self) -> ArticleClientResult<User> {
        self.http_client.fetch_me(self.token.as_deref()).await
    }

    /// Завершает сессию.
    ///
    /// Локальный токен очищается независимо от исхода HTTP-вызова:
    /// клиентская сессия считается завершённой в любом случае.
    pub async fn logout(&mut self) -> ArticleClientResult<()> {
        let result = self.http_client.logout(self.token.as_deref()).await;
        self.token = None;
        result
    }

    /// Возвращает страницу списка статей.
    ///
    /// `page` нумеруется с 1; `keyword` может быть пустым.
    pub async fn list_articles(
        &self,
        page: u32,
        page_size: u32,
        keyword: &str,
    ) -> ArticleClientResult<ArticlePage> {
        self.http_client
            .list_articles(self.token.as_deref(), page, page_size, keyword)
            .await
    }

    /// Возвращает статью по идентификатору.
    pub async fn get_article(&self, id: i64) -> ArticleClientResult<Article> {
        self.http_client.get_article(self.token.as_deref(), id).await
    }

    /// Создаёт статью.
    ///
    /// Перед отправкой выполняется клиентская валидация: непустые
    /// заголовок и текст, допустимый MIME-тип и размер картинки.
    /// При нарушении запрос не отправляется вовсе.
    pub async fn create_article(&self, article: &NewArticle) -> ArticleClientResult<Article> {
        upload::validate_draft(&article.title, &article.body_text)?;
        if let Some(image) = &article.image {
            upload::validate_image(&image.mime_type, image.bytes.len() as u64)?;
        }
        self.http_client
            .create_article(self.token.as_deref(), article)
            .await
    }
}
