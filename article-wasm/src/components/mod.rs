pub(crate) mod article_detail;
pub(crate) mod articles_panel;
pub(crate) mod login_panel;
pub(crate) mod pagination;
pub(crate) mod profile_panel;
pub(crate) mod upload_panel;
