/// Допустимые MIME-типы картинки статьи.
pub(crate) const ALLOWED_IMAGE_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

/// Максимальный размер картинки в байтах (5 MiB).
pub(crate) const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Проверка файла в момент выбора: тип и размер. Ошибка — готовое
/// сообщение для поля формы; файл при этом в черновик не попадает.
pub(crate) fn validate_image(mime_type: &str, size_bytes: u64) -> Result<(), String> {
    if !ALLOWED_IMAGE_TYPES.contains(&mime_type) {
        return Err("Допустимы только изображения JPG, PNG, GIF и WebP".to_string());
    }
    if size_bytes > MAX_IMAGE_BYTES {
        return Err("Размер изображения не должен превышать 5 МБ".to_string());
    }
    Ok(())
}

pub(crate) fn validate_non_empty_fields(
    title: &str,
    body_text: &str,
    error_message: &'static str,
) -> Result<(), &'static str> {
    if title.trim().is_empty() || body_text.trim().is_empty() {
        return Err(error_message);
    }
    Ok(())
}
