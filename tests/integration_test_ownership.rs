mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use chrono::{Duration, Utc};
use common::{TestApp, ADMIN_USER};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn festival_payload(name: &str) -> Value {
    let start = (Utc::now() + Duration::days(60)).date_naive();

    json!({
        "name": name,
        "country": "Austria",
        "city": "Vienna",
        "date_from": start.to_string(),
        "date_until": (start + Duration::days(2)).to_string(),
        "description": "A weekend of improv.",
        "languages": ["de"]
    })
}

async fn create_festival(app: &TestApp, token: &str, name: &str) -> Value {
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/festivals")
            .header(header::COOKIE, format!("access_token={}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(festival_payload(name).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    parse_body(res).await
}

async fn update_name(app: &TestApp, token: &str, id: &str, name: &str) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/v1/festivals/{}", id))
            .header(header::COOKIE, format!("access_token={}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"name": name}).to_string())).unwrap()
    ).await.unwrap()
}

async fn delete_festival(app: &TestApp, token: Option<&str>, id: &str) -> axum::response::Response {
    let mut builder = Request::builder().method("DELETE").uri(format!("/api/v1/festivals/{}", id));
    if let Some(token) = token {
        builder = builder.header(header::COOKIE, format!("access_token={}", token));
    }
    app.router.clone().oneshot(builder.body(Body::empty()).unwrap()).await.unwrap()
}

async fn get_festival(app: &TestApp, id: &str) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/festivals/{}", id))
            .body(Body::empty()).unwrap()
    ).await.unwrap()
}

#[tokio::test]
async fn test_non_owner_cannot_update() {
    let app = TestApp::new().await;
    let alice = app.token_for("usr_alice");
    let mallory = app.token_for("usr_mallory");

    let created = create_festival(&app, &alice, "Vienna Improv Days").await;
    let id = created["id"].as_str().unwrap();

    let res = update_name(&app, &mallory, id, "Hijacked").await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    // The generic message must not leak the owner identity
    let body = parse_body(res).await;
    assert!(!body["error"].as_str().unwrap().contains("usr_alice"));

    let body = parse_body(get_festival(&app, id).await).await;
    assert_eq!(body["name"], "Vienna Improv Days");
}

#[tokio::test]
async fn test_non_owner_cannot_delete_and_record_survives() {
    let app = TestApp::new().await;
    let alice = app.token_for("usr_alice");
    let mallory = app.token_for("usr_mallory");

    let created = create_festival(&app, &alice, "Sturdy Fest").await;
    let id = created["id"].as_str().unwrap();

    let res = delete_festival(&app, Some(&mallory), id).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = get_festival(&app, id).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["name"], "Sturdy Fest");
    assert_eq!(body["user_id"], "usr_alice");
}

#[tokio::test]
async fn test_admin_can_update_foreign_record() {
    let app = TestApp::new().await;
    let alice = app.token_for("usr_alice");
    let admin = app.token_for(ADMIN_USER);

    let created = create_festival(&app, &alice, "Moderated Fest").await;
    let id = created["id"].as_str().unwrap();

    let res = update_name(&app, &admin, id, "Moderated Fest (fixed)").await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    assert_eq!(body["name"], "Moderated Fest (fixed)");
    assert_eq!(body["user_id"], "usr_alice", "admin edits must not take ownership");
}

#[tokio::test]
async fn test_admin_can_delete_foreign_record() {
    let app = TestApp::new().await;
    let alice = app.token_for("usr_alice");
    let admin = app.token_for(ADMIN_USER);

    let created = create_festival(&app, &alice, "Removable Fest").await;
    let id = created["id"].as_str().unwrap();

    let res = delete_festival(&app, Some(&admin), id).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = get_festival(&app, id).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_owner_delete_returns_deleted_record() {
    let app = TestApp::new().await;
    let alice = app.token_for("usr_alice");

    let created = create_festival(&app, &alice, "Short-lived Fest").await;
    let id = created["id"].as_str().unwrap();

    let res = delete_festival(&app, Some(&alice), id).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["id"], created["id"]);
    assert_eq!(body["name"], "Short-lived Fest");

    let res = get_festival(&app, id).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_id_is_404_not_silent() {
    let app = TestApp::new().await;
    let alice = app.token_for("usr_alice");

    let res = delete_festival(&app, Some(&alice), "no-such-id").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_mutations_require_authentication() {
    let app = TestApp::new().await;
    let alice = app.token_for("usr_alice");

    let created = create_festival(&app, &alice, "Guarded Fest").await;
    let id = created["id"].as_str().unwrap();

    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/v1/festivals/{}", id))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"name": "Anon edit"}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = delete_festival(&app, None, id).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_rejected_for_mutations() {
    let app = TestApp::new().await;
    let alice = app.token_for("usr_alice");

    let created = create_festival(&app, &alice, "Fresh Token Fest").await;
    let id = created["id"].as_str().unwrap();

    let res = update_name(&app, "not-a-real-token", id, "Broken").await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}
