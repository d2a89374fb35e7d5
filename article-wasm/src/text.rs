/// Обрезает превью текста до `max_chars` символов, добавляя многоточие.
pub(crate) fn truncate_preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_chars).collect();
    format!("{truncated}...")
}

/// «2026-01-02T03:04:05Z» → «2026-01-02 03:04»; строки без `T`
/// возвращаются как есть.
pub(crate) fn format_timestamp(raw: &str) -> String {
    let Some((date, time)) = raw.split_once('T') else {
        return raw.to_string();
    };
    let time = time.get(..5).unwrap_or(time);
    format!("{date} {time}")
}
