use article_client::{ArticleClient, ArticleClientError, ImageFile, NewArticle};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn article_json(id: i64) -> serde_json::Value {
    json!({
        "article_id": id,
        "title": "Осенний Киото",
        "body_text": "Клёны краснеют в ноябре.",
        "category": "Travel",
        "like_count": 3,
        "comment_count": 1,
        "image_url": "",
        "created_at": "2026-01-02T03:04:05Z",
        "updated_at": null
    })
}

fn sample_draft(image: Option<ImageFile>) -> NewArticle {
    NewArticle {
        title: "Осенний Киото".to_string(),
        body_text: "Клёны краснеют в ноябре.".to_string(),
        category: "Travel".to_string(),
        image,
    }
}

#[tokio::test]
async fn bearer_header_is_attached_when_token_present() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/articles/list"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "total": 0,
                "list": []
            })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut client = ArticleClient::new(server.uri());
    client.set_token("secret-token");

    let page = client
        .list_articles(1, 6, "")
        .await
        .expect("list_articles must succeed");
    assert_eq!(page.total, 0);
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn bearer_header_is_omitted_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/articles/list"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "total": 0,
                "list": []
            })),
        )
        .mount(&server)
        .await;

    let client = ArticleClient::new(server.uri());
    client
        .list_articles(1, 6, "")
        .await
        .expect("list_articles must succeed");

    let requests = server
        .received_requests()
        .await
        .expect("request recording is enabled");
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn non_success_status_maps_to_request_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/articles/7"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({
                "success": false,
                "error_message": "внутренняя ошибка"
            })),
        )
        .mount(&server)
        .await;

    let client = ArticleClient::new(server.uri());
    let err = client
        .get_article(7)
        .await
        .expect_err("500 must map to an error");
    match err {
        ArticleClientError::RequestFailed { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "внутренняя ошибка");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn unauthorized_maps_to_auth_required() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/me"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = ArticleClient::new(server.uri());
    let err = client.fetch_me().await.expect_err("401 must map to an error");
    assert!(matches!(err, ArticleClientError::AuthRequired));
}

#[tokio::test]
async fn envelope_failure_maps_to_request_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/articles/9"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({
                "success": false,
                "error_message": "статья не найдена"
            })),
        )
        .mount(&server)
        .await;

    let client = ArticleClient::new(server.uri());
    let err = client
        .get_article(9)
        .await
        .expect_err("success=false must map to an error");
    match err {
        ArticleClientError::RequestFailed { status, message } => {
            assert_eq!(status, 200);
            assert_eq!(message, "статья не найдена");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn list_articles_decodes_page() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/articles/list"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "total": 13,
                "list": [article_json(1), article_json(2)]
            })),
        )
        .mount(&server)
        .await;

    let client = ArticleClient::new(server.uri());
    let page = client
        .list_articles(2, 6, "клёны")
        .await
        .expect("list_articles must succeed");

    assert_eq!(page.total, 13);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.page, 2);
    assert_eq!(page.page_size, 6);
    assert_eq!(page.keyword, "клёны");
    // пустой image_url из DTO превращается в None
    assert!(page.items[0].image_url.is_none());
}

#[tokio::test]
async fn google_login_stores_access_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/google"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": {
                    "access_token": "at-123",
                    "refresh_token": "rt-456"
                }
            })),
        )
        .mount(&server)
        .await;

    let mut client = ArticleClient::new(server.uri());
    let tokens = client
        .google_login("google-id-token")
        .await
        .expect("google_login must succeed");

    assert_eq!(tokens.access_token, "at-123");
    assert_eq!(tokens.refresh_token, "rt-456");
    assert_eq!(client.get_token(), Some("at-123"));
}

#[tokio::test]
async fn logout_clears_token_even_when_server_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut client = ArticleClient::new(server.uri());
    client.set_token("secret-token");

    let result = client.logout().await;
    assert!(result.is_err());
    assert!(client.get_token().is_none());
}

#[tokio::test]
async fn create_article_sends_multipart_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/articles/with-image"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": article_json(10)
            })),
        )
        .mount(&server)
        .await;

    let mut client = ArticleClient::new(server.uri());
    client.set_token("secret-token");

    let image = ImageFile {
        file_name: "kyoto.png".to_string(),
        mime_type: "image/png".to_string(),
        bytes: vec![0u8; 1024],
    };
    let created = client
        .create_article(&sample_draft(Some(image)))
        .await
        .expect("create_article must succeed");
    assert_eq!(created.article_id, 10);

    let requests = server
        .received_requests()
        .await
        .expect("request recording is enabled");
    assert_eq!(requests.len(), 1);
    let content_type = requests[0]
        .headers
        .get("content-type")
        .expect("content-type must be set")
        .to_str()
        .expect("ascii header");
    assert!(content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"title\""));
    assert!(body.contains("name=\"body_text\""));
    assert!(body.contains("name=\"like_count\""));
    assert!(body.contains("filename=\"kyoto.png\""));
}

#[tokio::test]
async fn create_article_with_blank_title_issues_no_request() {
    let server = MockServer::start().await;

    let client = ArticleClient::new(server.uri());
    let mut draft = sample_draft(None);
    draft.title = "   ".to_string();

    let err = client
        .create_article(&draft)
        .await
        .expect_err("blank title must be rejected");
    assert!(matches!(err, ArticleClientError::Validation(_)));

    let requests = server
        .received_requests()
        .await
        .expect("request recording is enabled");
    assert!(requests.is_empty());
}

#[tokio::test]
async fn create_article_with_bad_image_issues_no_request() {
    let server = MockServer::start().await;

    let client = ArticleClient::new(server.uri());
    let image = ImageFile {
        file_name: "scan.bmp".to_string(),
        mime_type: "image/bmp".to_string(),
        bytes: vec![0u8; 16],
    };

    let err = client
        .create_article(&sample_draft(Some(image)))
        .await
        .expect_err("bmp must be rejected");
    assert!(matches!(err, ArticleClientError::Validation(_)));

    let requests = server
        .received_requests()
        .await
        .expect("request recording is enabled");
    assert!(requests.is_empty());
}
