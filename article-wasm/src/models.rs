use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct User {
    pub(crate) user_id: i64,
    pub(crate) email: String,
    #[serde(default)]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) avatar: Option<String>,
    #[serde(default)]
    pub(crate) provider: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct Article {
    pub(crate) article_id: i64,
    pub(crate) title: String,
    pub(crate) body_text: String,
    #[serde(default)]
    pub(crate) category: Option<String>,
    #[serde(default)]
    pub(crate) like_count: i64,
    #[serde(default)]
    pub(crate) comment_count: i64,
    #[serde(default)]
    pub(crate) image_url: Option<String>,
    pub(crate) created_at: String,
    #[serde(default)]
    pub(crate) updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ListArticlesRequest {
    pub(crate) page: u32,
    pub(crate) page_size: u32,
    pub(crate) keyword: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ListArticlesResponse {
    pub(crate) success: bool,
    #[serde(default)]
    pub(crate) total: i64,
    #[serde(default)]
    pub(crate) list: Vec<Article>,
    #[serde(default)]
    pub(crate) error_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ArticleResponse {
    pub(crate) success: bool,
    #[serde(default)]
    pub(crate) data: Option<Article>,
    #[serde(default)]
    pub(crate) error_message: Option<String>,
}
