//! Web API 集成测试
//!
//! 用 `tower::ServiceExt::oneshot` 直接驱动路由器，不监听端口。
//! 覆盖校验失败、抓取失败和页面路由；成功路径由重写和归档测试分别覆盖。

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use pagemirror::core::PagemirrorOptions;
use pagemirror::web::{create_routes, AppState};

fn test_app() -> Router {
    let state = Arc::new(AppState {
        options: PagemirrorOptions::default(),
    });
    create_routes().with_state(state)
}

fn download_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/download")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn error_body(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    value["error"].as_str().unwrap_or_default().to_string()
}

#[tokio::test]
async fn test_missing_url_returns_400() {
    let response = test_app()
        .oneshot(download_request(json!({ "replacementDomain": "new.com" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        error_body(response).await,
        "URL and replacement domain are required"
    );
}

#[tokio::test]
async fn test_missing_replacement_domain_returns_400() {
    let response = test_app()
        .oneshot(download_request(json!({ "url": "https://old.com" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        error_body(response).await,
        "URL and replacement domain are required"
    );
}

#[tokio::test]
async fn test_blank_fields_return_400() {
    let response = test_app()
        .oneshot(download_request(
            json!({ "url": "  ", "replacementDomain": "" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        error_body(response).await,
        "URL and replacement domain are required"
    );
}

#[tokio::test]
async fn test_relative_source_url_returns_400() {
    // 源URL必须是绝对URL，校验在抓取之前
    let response = test_app()
        .oneshot(download_request(
            json!({ "url": "not a url", "replacementDomain": "new.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(!error_body(response).await.is_empty());
}

#[tokio::test]
async fn test_unreachable_url_returns_500_with_error_body() {
    // 端口9（discard）上没有HTTP服务，抓取必然失败
    let response = test_app()
        .oneshot(download_request(json!({
            "url": "http://127.0.0.1:9/page",
            "replacementDomain": "new.com",
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // 失败时返回JSON错误体，不能泄漏部分归档
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("application/json"));
    assert!(!error_body(response).await.is_empty());
}

#[tokio::test]
async fn test_index_page_is_served() {
    let response = test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Pagemirror"));
    assert!(html.contains("/download"));
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/nothing-here")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
