//! HTTP boundary for both services.
//!
//! Each service gets its own `Router`; `main.rs` picks one to serve.

pub mod account;
pub mod payment;

use crate::error::PaymentError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

pub(crate) fn health(service: &'static str) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service,
        version: env!("CARGO_PKG_VERSION"),
    })
}

impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        let status = match &self {
            PaymentError::Delivery(_) => StatusCode::BAD_GATEWAY,
            PaymentError::ValidationError(_) => StatusCode::BAD_REQUEST,
            PaymentError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}
