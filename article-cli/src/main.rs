use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use article_client::{
    Article, ArticleClient, ArticleClientError, ArticlePage, AuthTokens, ImageFile, NewArticle,
    User, upload,
};
use clap::{Parser, Subcommand};

const TOKEN_FILE: &str = ".articles_token";
const REFRESH_TOKEN_FILE: &str = ".articles_refresh_token";
const DEFAULT_SERVER: &str = "http://127.0.0.1:3000";

#[derive(Debug, Parser)]
#[command(name = "article-cli", version, about = "CLI клиент статейного бэкенда")]
struct Cli {
    /// Адрес бэкенда (по умолчанию ARTICLES_SERVER или 127.0.0.1:3000).
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Вход по Google id_token (токены сохраняются локально).
    Login {
        #[arg(long)]
        id_token: String,
    },
    /// Профиль текущего пользователя (требует токен или cookie).
    Me,
    /// Выход: локальная сессия очищается при любом ответе сервера.
    Logout,
    /// Список статей с пагинацией и поиском.
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        page_size: u32,
        #[arg(long, default_value = "")]
        keyword: String,
    },
    /// Получение статьи по id.
    Get {
        #[arg(long)]
        id: i64,
    },
    /// Создание статьи с опциональной картинкой.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        body_text: String,
        #[arg(long, default_value = "")]
        category: String,
        #[arg(long)]
        image: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Ошибка: {err}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let server = resolve_server(cli.server, std::env::var("ARTICLES_SERVER").ok());
    let mut client = ArticleClient::new(server);

    if let Some(token) = load_token().context("не удалось прочитать .articles_token")? {
        client.set_token(token);
    }

    match cli.command {
        Command::Login { id_token } => {
            let tokens = client
                .google_login(&id_token)
                .await
                .map_err(map_client_error)?;
            persist_tokens(&tokens).context("не удалось сохранить токены")?;
            println!("Вход выполнен");
            println!("access_token: {}", tokens.access_token);
            println!("refresh_token: {}", tokens.refresh_token);
        }
        Command::Me => {
            let user = client.fetch_me().await.map_err(map_client_error)?;
            print_user(&user);
        }
        Command::Logout => {
            let result = client.logout().await;
            clear_tokens().context("не удалось удалить файлы токенов")?;
            match result {
                Ok(()) => println!("Выход выполнен, локальная сессия очищена"),
                Err(err) => println!(
                    "Сервер ответил ошибкой ({}); локальная сессия всё равно очищена",
                    map_client_error(err)
                ),
            }
        }
        Command::List {
            page,
            page_size,
            keyword,
        } => {
            let list = client
                .list_articles(page, page_size, &keyword)
                .await
                .map_err(map_client_error)?;
            print_page(&list);
        }
        Command::Get { id } => {
            let article = client.get_article(id).await.map_err(map_client_error)?;
            print_article("Статья", &article);
        }
        Command::Create {
            title,
            body_text,
            category,
            image,
        } => {
            let image = match image {
                Some(path) => Some(read_image(&path)?),
                None => None,
            };
            let draft = NewArticle {
                title,
                body_text,
                category,
                image,
            };
            let created = client
                .create_article(&draft)
                .await
                .map_err(map_client_error)?;
            print_article("Статья создана", &created);
        }
    }

    Ok(())
}

fn resolve_server(flag: Option<String>, env: Option<String>) -> String {
    let raw = flag
        .or(env)
        .unwrap_or_else(|| DEFAULT_SERVER.to_string());
    normalize_server(raw)
}

fn normalize_server(server: String) -> String {
    if server.starts_with("http://") || server.starts_with("https://") {
        return server;
    }

    format!("http://{server}")
}

fn read_image(path: &Path) -> Result<ImageFile> {
    let bytes =
        fs::read(path).with_context(|| format!("не удалось прочитать файл {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("image")
        .to_string();
    let mime_type = upload::mime_from_extension(path).to_string();

    Ok(ImageFile {
        file_name,
        mime_type,
        bytes,
    })
}

fn parse_token_content(raw: &str) -> Option<String> {
    let token = raw.trim().to_string();
    if token.is_empty() {
        return None;
    }
    Some(token)
}

fn load_token() -> io::Result<Option<String>> {
    if !Path::new(TOKEN_FILE).exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(TOKEN_FILE)?;
    Ok(parse_token_content(&raw))
}

fn persist_tokens(tokens: &AuthTokens) -> io::Result<()> {
    fs::write(TOKEN_FILE, &tokens.access_token)?;
    fs::write(REFRESH_TOKEN_FILE, &tokens.refresh_token)?;
    Ok(())
}

fn clear_tokens() -> io::Result<()> {
    for file in [TOKEN_FILE, REFRESH_TOKEN_FILE] {
        if Path::new(file).exists() {
            fs::remove_file(file)?;
        }
    }
    Ok(())
}

fn map_client_error(err: ArticleClientError) -> anyhow::Error {
    let message = match err {
        ArticleClientError::AuthRequired => {
            "требуется авторизация: выполните `article-cli login --id-token ...`".to_string()
        }
        ArticleClientError::RequestFailed { status, message } => {
            format!("запрос отклонён (HTTP {status}): {message}")
        }
        ArticleClientError::Validation(message) => format!("некорректные данные: {message}"),
        ArticleClientError::Http(err) => format!("ошибка HTTP: {err}"),
    };
    anyhow::anyhow!(message)
}

fn print_user(user: &User) {
    println!("Пользователь");
    println!("  user_id: {}", user.user_id);
    println!("  name: {}", user.name);
    println!("  email: {}", user.email);
    println!("  provider: {}", user.provider);
    if let Some(avatar) = &user.avatar {
        println!("  avatar: {avatar}");
    }
}

fn print_article(title: &str, article: &Article) {
    println!("{title}");
    println!("  article_id: {}", article.article_id);
    println!("  title: {}", article.title);
    if let Some(category) = &article.category {
        println!("  category: {category}");
    }
    println!("  likes: {}", article.like_count);
    println!("  comments: {}", article.comment_count);
    if let Some(url) = &article.image_url {
        println!("  image: {url}");
    }
    println!("  created_at: {}", article.created_at);
    if let Some(updated_at) = article.updated_at {
        println!("  updated_at: {updated_at}");
    }
    println!("{}", article.body_text);
}

fn print_page(page: &ArticlePage) {
    let total_pages = page.total.div_ceil(page.page_size.max(1) as u64);
    println!(
        "Статей: {} (page={}, page_size={}, keyword={:?}, total={}, pages={})",
        page.items.len(),
        page.page,
        page.page_size,
        page.keyword,
        page.total,
        total_pages
    );

    for article in &page.items {
        println!(
            "- [{}] {} (likes={}, comments={})",
            article.article_id, article.title, article.like_count, article.comment_count
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_server_keeps_scheme() {
        let s = normalize_server("https://example.com:3000".to_string());
        assert_eq!(s, "https://example.com:3000");
    }

    #[test]
    fn normalize_server_adds_http_scheme() {
        let s = normalize_server("127.0.0.1:3000".to_string());
        assert_eq!(s, "http://127.0.0.1:3000");
    }

    #[test]
    fn resolve_server_prefers_flag_over_env() {
        let s = resolve_server(
            Some("localhost:9999".to_string()),
            Some("localhost:8888".to_string()),
        );
        assert_eq!(s, "http://localhost:9999");
    }

    #[test]
    fn resolve_server_falls_back_to_env_then_default() {
        let s = resolve_server(None, Some("localhost:8888".to_string()));
        assert_eq!(s, "http://localhost:8888");

        let s = resolve_server(None, None);
        assert_eq!(s, DEFAULT_SERVER);
    }

    #[test]
    fn parse_token_content_trims_whitespace() {
        let token = parse_token_content("  abc.def.ghi  ");
        assert_eq!(token.as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn parse_token_content_rejects_blank() {
        let token = parse_token_content("   ");
        assert!(token.is_none());
    }
}
