use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use dashboard_api_http::{app, cors_layer, AppState};
use dashboard_core::api::TITLE;
use dashboard_core::application::{dashboard_dispatcher, describe};
use dashboard_core::port::{FixedRandomSource, FixedTimeProvider};
use http_body_util::BodyExt as _;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt; // for Router::oneshot

fn router(origin: &str) -> Router {
    let now = "2024-05-06T07:08:09Z".parse().unwrap();
    let dispatcher =
        dashboard_dispatcher(Arc::new(FixedTimeProvider(now)), Arc::new(FixedRandomSource(0)))
            .unwrap();
    let document = describe(dispatcher.registry(), TITLE, "test");
    let state = AppState {
        dispatcher: Arc::new(dispatcher),
        document: Arc::new(document),
    };
    app(state, cors_layer(origin).unwrap())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(text) => {
            req = req.header(header::CONTENT_TYPE, "application/json");
            Body::from(text.to_string())
        }
        None => Body::empty(),
    };
    let resp = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn hello_accepts_only_yoo() {
    let app = router("*");

    let (status, body) = send(&app, "POST", "/hello", Some(r#"{"name":"yoo"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Hello, yoo!"}));

    let (status, body) = send(&app, "POST", "/hello", Some(r#"{"name":"bob"}"#)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["kind"], "INVALID_NAME");
    assert_eq!(body["status"], 500);
    assert_eq!(body["data"], json!({"providedName": "bob"}));

    let (status, body) = send(&app, "POST", "/hello", Some(r#"{"name":"woo"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "BAD_REQUEST");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn hello_rejects_bad_input_before_the_handler() {
    let app = router("*");

    let (status, body) = send(&app, "POST", "/hello", Some("{}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "VALIDATION_FAILED");
    assert_eq!(body["data"][0]["path"], "name");

    let (status, body) = send(&app, "POST", "/hello", Some(r#"{"name":42}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "VALIDATION_FAILED");

    let (status, body) = send(&app, "POST", "/hello", Some("{name:")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "VALIDATION_FAILED");

    let (status, body) = send(&app, "POST", "/hello", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn bye_and_health_ignore_bodies() {
    let app = router("*");

    let (status, body) = send(&app, "POST", "/bye", Some(r#"{"anything":true}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Goodbye! Thanks for using our API.");
    assert_eq!(body["timestamp"], "2024-05-06T07:08:09.000Z");
    assert_eq!(body["sessionDuration"], 300);
    assert_eq!(body["user"]["id"], "user_123");

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"status": "ok", "timestamp": "2024-05-06T07:08:09.000Z"})
    );
}

#[tokio::test]
async fn unmatched_routes_are_404() {
    let app = router("*");

    let (status, body) = send(&app, "GET", "/hello", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "NOT_MATCHED");

    let (status, _) = send(&app, "POST", "/nope", Some("{}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn contract_document_is_published() {
    let app = router("*");

    let (status, body) = send(&app, "GET", "/contract", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], TITLE);

    let ops = body["operations"].as_array().unwrap();
    assert_eq!(ops.len(), 3);
    assert_eq!(ops[0]["method"], "POST");
    assert_eq!(ops[0]["path"], "/hello");
    assert_eq!(ops[0]["errors"][0]["kind"], "INVALID_NAME");
    assert_eq!(ops[2]["method"], "GET");
    assert!(ops[1].get("input").is_none());
    assert_eq!(ops[2]["input"], json!({}));
}

#[tokio::test]
async fn cors_headers_follow_configured_origin() {
    let app = router("http://localhost:3000");

    let req = Request::builder()
        .method("OPTIONS")
        .uri("/hello")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
    let methods = resp.headers()[header::ACCESS_CONTROL_ALLOW_METHODS]
        .to_str()
        .unwrap()
        .to_string();
    assert!(methods.contains("PATCH"));
}

#[tokio::test]
async fn non_json_bodies_only_matter_where_input_is_parsed() {
    let app = router("*");

    let (status, body) = send(&app, "GET", "/health", Some("ping")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&app, "POST", "/bye", Some("x")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], "user_123");

    let (status, body) = send(&app, "POST", "/nope", Some("{oops")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "NOT_MATCHED");

    let (status, body) = send(&app, "POST", "/hello", Some("{oops")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "VALIDATION_FAILED");
}
