mod helpers;

use axum::http::StatusCode;
use helpers::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_block_normalizes_and_persists() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json("/api/block", json!({"domain": "  Ads.Example.COM. "}))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "ads.example.com blocked");
    assert!(app.blacklist_store.patterns().contains("ads.example.com"));
}

#[tokio::test]
async fn test_blocked_list_is_sorted() {
    let app = TestApp::new();
    for domain in ["zeta.com", "alpha.com", "mid.org"] {
        app.post_json("/api/block", json!({ "domain": domain })).await;
    }

    let (status, body) = app.get("/api/blocked").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["blocked_domains"],
        json!(["alpha.com", "mid.org", "zeta.com"])
    );
}

#[tokio::test]
async fn test_unblock_removes_domain() {
    let app = TestApp::new();
    app.post_json("/api/block", json!({"domain": "bad.com"})).await;

    let (status, body) = app
        .post_json("/api/unblock", json!({"domain": "bad.com"}))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "bad.com unblocked");
    let (_, listed) = app.get("/api/blocked").await;
    assert_eq!(listed["blocked_domains"], json!([]));
    assert!(app.blacklist_store.patterns().is_empty());
}

#[tokio::test]
async fn test_unblock_unknown_domain_still_succeeds() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json("/api/unblock", json!({"domain": "never-blocked.io"}))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "never-blocked.io unblocked");
}

#[tokio::test]
async fn test_block_without_domain_is_ignored() {
    let app = TestApp::new();

    let (status, _) = app.post_json("/api/block", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    let (_, listed) = app.get("/api/blocked").await;
    assert_eq!(listed["blocked_domains"], json!([]));
}
