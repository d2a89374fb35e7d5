use article_client::ArticleClient;

#[tokio::test]
#[ignore = "requires running backend"]
async fn http_smoke_flow() {
    let base_url =
        std::env::var("ARTICLES_HTTP_URL").unwrap_or_else(|_| "http://127.0.0.1:3000".to_string());
    let mut client = ArticleClient::new(base_url);

    if let Ok(token) = std::env::var("ARTICLES_ACCESS_TOKEN") {
        client.set_token(token);
    }

    let page = client
        .list_articles(1, 10, "")
        .await
        .expect("list_articles must succeed");
    assert_eq!(page.page, 1);

    if let Some(first) = page.items.first() {
        let fetched = client
            .get_article(first.article_id)
            .await
            .expect("get_article must succeed");
        assert_eq!(fetched.article_id, first.article_id);
    }

    if client.get_token().is_some() {
        let me = client.fetch_me().await.expect("fetch_me must succeed");
        assert!(!me.email.is_empty());
    }
}
