//! Plain HTTP clients against a live REST server

mod common;

use common::Backend;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_hello_over_http() {
    let backend = Backend::start().await;
    let client = reqwest::Client::new();
    let url = format!("{}/hello", backend.rest_url);

    let resp = client.post(&url).json(&json!({"name": "yoo"})).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"message": "Hello, yoo!"}));

    let resp = client.post(&url).json(&json!({"name": "woo"})).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["kind"], "BAD_REQUEST");

    let resp = client.post(&url).json(&json!({"name": "bob"})).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["kind"], "INVALID_NAME");
    assert_eq!(body["data"]["providedName"], "bob");

    backend.stop().await;
}

#[tokio::test]
async fn test_health_and_contract_over_http() {
    let backend = Backend::start().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{}/health", backend.rest_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");

    let resp = client
        .get(format!("{}/contract", backend.rest_url))
        .send()
        .await
        .unwrap();
    let doc: Value = resp.json().await.unwrap();
    assert_eq!(doc["operations"].as_array().unwrap().len(), 3);

    backend.stop().await;
}

#[tokio::test]
async fn test_rpc_method_names_over_raw_json_rpc() {
    let backend = Backend::start().await;
    let client = reqwest::Client::new();

    let resp: Value = client
        .post(&backend.rpc_url)
        .json(&json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "hello",
            "params": {"name": "bob"}
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(resp["error"]["code"], 4100);
    assert_eq!(
        resp["error"]["data"],
        json!({"kind": "INVALID_NAME", "status": 500, "data": {"providedName": "bob"}})
    );

    backend.stop().await;
}
