mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::TestApp;
use serde_json::Value;
use tower::ServiceExt;

const BOUNDARY: &str = "----test-boundary-7f3a9c";

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn multipart_body(
    file_name: Option<&str>,
    content_type: &str,
    bytes: &[u8],
    directory: Option<&str>
) -> Vec<u8> {
    let mut body = Vec::new();

    if let Some(file_name) = file_name {
        body.extend_from_slice(format!(
            "--{}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
            BOUNDARY, file_name, content_type
        ).as_bytes());
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    if let Some(dir) = directory {
        body.extend_from_slice(format!(
            "--{}\r\nContent-Disposition: form-data; name=\"directory\"\r\n\r\n{}\r\n",
            BOUNDARY, dir
        ).as_bytes());
    }

    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

async fn post_upload(app: &TestApp, token: Option<&str>, body: Vec<u8>) -> axum::response::Response {
    let mut builder = Request::builder().method("POST").uri("/api/v1/uploads")
        .header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={}", BOUNDARY));
    if let Some(token) = token {
        builder = builder.header(header::COOKIE, format!("access_token={}", token));
    }
    app.router.clone().oneshot(builder.body(Body::from(body)).unwrap()).await.unwrap()
}

#[tokio::test]
async fn test_upload_poster_returns_public_url() {
    let app = TestApp::new().await;
    let token = app.token_for("usr_alice");

    let body = multipart_body(Some("poster.png"), "image/png", b"\x89PNG fake bytes", Some("festival-posters"));
    let res = post_upload(&app, Some(&token), body).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    assert_eq!(body["url"], "https://storage.example.com/festival-posters/poster.png");
}

#[tokio::test]
async fn test_upload_defaults_directory() {
    let app = TestApp::new().await;
    let token = app.token_for("usr_alice");

    let body = multipart_body(Some("poster.jpg"), "image/jpeg", b"fake jpeg", None);
    let res = post_upload(&app, Some(&token), body).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    assert_eq!(body["url"], "https://storage.example.com/show-posters/poster.jpg");
}

#[tokio::test]
async fn test_upload_rejects_non_image() {
    let app = TestApp::new().await;
    let token = app.token_for("usr_alice");

    let body = multipart_body(Some("notes.pdf"), "application/pdf", b"%PDF-1.4", None);
    let res = post_upload(&app, Some(&token), body).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = parse_body(res).await;
    assert!(body["error"].as_str().unwrap().contains("image"));
}

#[tokio::test]
async fn test_upload_rejects_oversized_image() {
    let app = TestApp::new().await;
    let token = app.token_for("usr_alice");

    let oversized = vec![0u8; 3 * 1024 * 1024 + 1];
    let body = multipart_body(Some("huge.png"), "image/png", &oversized, None);
    let res = post_upload(&app, Some(&token), body).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = parse_body(res).await;
    assert!(body["error"].as_str().unwrap().contains("3 MB"));
}

#[tokio::test]
async fn test_upload_requires_file_part() {
    let app = TestApp::new().await;
    let token = app.token_for("usr_alice");

    let body = multipart_body(None, "", b"", Some("festival-posters"));
    let res = post_upload(&app, Some(&token), body).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_requires_auth() {
    let app = TestApp::new().await;

    let body = multipart_body(Some("poster.png"), "image/png", b"fake", None);
    let res = post_upload(&app, None, body).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}
