//! Клиентская валидация картинки и полей статьи перед отправкой.
//!
//! Проверки выполняются до любого сетевого вызова: файл с недопустимым
//! MIME-типом или превышенным размером не попадает в форму.

use std::path::Path;

use crate::error::{ArticleClientError, ArticleClientResult};

/// Допустимые MIME-типы картинок статьи.
pub const ALLOWED_IMAGE_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

/// Максимальный размер картинки в байтах (5 MiB).
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Проверяет MIME-тип и размер картинки.
pub fn validate_image(mime_type: &str, size_bytes: u64) -> ArticleClientResult<()> {
    if !ALLOWED_IMAGE_TYPES.contains(&mime_type) {
        return Err(ArticleClientError::Validation(format!(
            "unsupported image type `{mime_type}`, expected one of: {}",
            ALLOWED_IMAGE_TYPES.join(", ")
        )));
    }
    if size_bytes > MAX_IMAGE_BYTES {
        return Err(ArticleClientError::Validation(format!(
            "image is {size_bytes} bytes, limit is {MAX_IMAGE_BYTES}"
        )));
    }
    Ok(())
}

/// Проверяет, что заголовок и текст статьи непусты после trim.
pub fn validate_draft(title: &str, body_text: &str) -> ArticleClientResult<()> {
    if title.trim().is_empty() || body_text.trim().is_empty() {
        return Err(ArticleClientError::Validation(
            "title and body_text must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Определяет MIME-тип по расширению файла, как это делает бэкенд
/// для multipart-загрузок без явного Content-Type.
pub fn mime_from_extension(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "image/jpeg",
    }
}
