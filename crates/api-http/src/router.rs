//! Router assembly and request handlers

use crate::response::{failure_response, EnvelopeResponse};
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{Method, Request as HttpRequest, Uri};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use dashboard_core::application::{ContractDocument, Dispatcher};
use dashboard_core::domain::{Failure, HttpMethod, Request};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
    pub document: Arc<ContractDocument>,
}

/// Build the application router
pub fn app(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/contract", get(contract))
        .fallback(dispatch)
        .layer(cors)
        .layer(middleware::from_fn(log_request))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn contract(State(state): State<AppState>) -> Json<ContractDocument> {
    Json(state.document.as_ref().clone())
}

/// Every other route goes through the contract
async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let path = uri.path();

    // Methods outside the contract vocabulary cannot match any route
    let Ok(method) = method.as_str().parse::<HttpMethod>() else {
        let target = format!("{} {}", method, path);
        return failure_response(Failure::not_matched(&target));
    };

    // Route first: the body only matters to operations that declare input
    let Some(spec) = state.dispatcher.registry().resolve(method, path) else {
        let target = format!("{} {}", method, path);
        return failure_response(Failure::not_matched(&target));
    };

    let body = match &spec.input {
        None => Value::Null,
        Some(shape) => match parse_body(&body) {
            Ok(value) => value,
            // Anything-goes input ignores unparseable bodies
            Err(_) if shape.is_any() => Value::Null,
            Err(e) => return failure_response(Failure::malformed_body(e)),
        },
    };

    let envelope = state
        .dispatcher
        .handle(Request::new(method, path, body))
        .await;
    EnvelopeResponse(envelope).into_response()
}

fn parse_body(body: &[u8]) -> Result<Value, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        Ok(Value::Null)
    } else {
        serde_json::from_slice(body)
    }
}

async fn log_request(request: HttpRequest<Body>, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();

    info!(method = %method, uri = %uri, "Request started");
    let response = next.run(request).await;
    info!(
        method = %method,
        uri = %uri,
        status = response.status().as_u16(),
        duration_ms = started.elapsed().as_millis() as u64,
        "Request completed"
    );

    response
}
