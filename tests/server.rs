#![cfg(feature = "server")]

use std::net::{SocketAddr, TcpListener};
use std::path::PathBuf;
use welcome_cover::common::Config;
use welcome_cover::server;

fn static_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("welcome-cover-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

async fn start(config: Config) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        server::serve(listener, &config).await.unwrap();
    });

    addr
}

#[tokio::test]
async fn test_pages_get_the_shell() {
    let mut config = Config::default();
    config.site.title = "Shell Test".into();
    config.server.static_dir = static_dir("shell").display().to_string();
    let addr = start(config).await;

    for path in ["/", "/demo"] {
        let resp = reqwest::get(format!("http://{}{}", addr, path)).await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);

        let content_type = resp.headers()[reqwest::header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .to_string();
        assert!(content_type.starts_with("text/html"));

        let body = resp.text().await.unwrap();
        assert!(body.contains("<title>Shell Test</title>"));
        assert!(body.contains("localStorage.getItem('darkMode')"));
        assert!(body.contains(r#"<div id="main"></div>"#));
    }
}

#[tokio::test]
async fn test_static_files() {
    let dir = static_dir("static");
    std::fs::write(dir.join("hello.txt"), "hello from disk").unwrap();

    let mut config = Config::default();
    config.server.static_dir = dir.display().to_string();
    let addr = start(config).await;

    let resp = reqwest::get(format!("http://{}/hello.txt", addr)).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "hello from disk");

    let resp = reqwest::get(format!("http://{}/missing.jpeg", addr)).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
}
