//! Envelope → HTTP response mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use dashboard_core::domain::{Envelope, Failure};

/// Dispatcher outcome rendered as HTTP.
///
/// Success is `200` with the output value as body. Failure uses the failure's
/// status with `{kind, status, message, data?}` as body.
pub struct EnvelopeResponse(pub Envelope);

impl IntoResponse for EnvelopeResponse {
    fn into_response(self) -> Response {
        match self.0 {
            Envelope::Success { value } => (StatusCode::OK, Json(value)).into_response(),
            Envelope::Failure(failure) => failure_response(failure),
        }
    }
}

pub fn failure_response(failure: Failure) -> Response {
    let status =
        StatusCode::from_u16(failure.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(failure)).into_response()
}
