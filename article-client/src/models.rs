use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Публичная модель пользователя (проекция `GET /api/users/me`).
pub struct User {
    /// Идентификатор пользователя.
    pub user_id: i64,
    /// Email.
    pub email: String,
    /// Отображаемое имя.
    pub name: String,
    /// URL аватара, если задан.
    pub avatar: Option<String>,
    /// Провайдер авторизации (например, `google`).
    pub provider: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Публичная модель статьи.
pub struct Article {
    /// Идентификатор статьи.
    pub article_id: i64,
    /// Заголовок.
    pub title: String,
    /// Текст статьи.
    pub body_text: String,
    /// Категория; `None`, если не задана.
    pub category: Option<String>,
    /// Количество лайков.
    pub like_count: i64,
    /// Количество комментариев.
    pub comment_count: i64,
    /// URL картинки статьи, если загружена.
    pub image_url: Option<String>,
    /// Дата и время создания (UTC).
    pub created_at: DateTime<Utc>,
    /// Дата и время последнего обновления (UTC), если было.
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Одна выбранная страница списка статей вместе с параметрами запроса.
pub struct ArticlePage {
    /// Статьи текущей страницы.
    pub items: Vec<Article>,
    /// Общее количество статей, подходящих под запрос.
    pub total: u64,
    /// Запрошенный номер страницы (нумерация с 1).
    pub page: u32,
    /// Запрошенный размер страницы.
    pub page_size: u32,
    /// Запрошенное ключевое слово поиска (возможно пустое).
    pub keyword: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Пара токенов после успешного входа через Google.
pub struct AuthTokens {
    /// Bearer-токен доступа.
    pub access_token: String,
    /// Refresh-токен.
    pub refresh_token: String,
}

#[derive(Debug, Clone)]
/// Черновик новой статьи для `create_article`.
pub struct NewArticle {
    /// Заголовок (обязателен, непустой после trim).
    pub title: String,
    /// Текст статьи (обязателен, непустой после trim).
    pub body_text: String,
    /// Категория; пустая строка допустима.
    pub category: String,
    /// Прикреплённая картинка, если есть.
    pub image: Option<ImageFile>,
}

#[derive(Debug, Clone)]
/// Картинка, прикладываемая к статье при создании.
pub struct ImageFile {
    /// Имя файла, попадающее в multipart-форму.
    pub file_name: String,
    /// Заявленный MIME-тип.
    pub mime_type: String,
    /// Содержимое файла.
    pub bytes: Vec<u8>,
}
