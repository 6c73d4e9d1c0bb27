use super::{HealthResponse, health};
use crate::application::payment::PaymentService;
use crate::domain::transaction::Transaction;
use crate::error::PaymentError;
use axum::extract::State;
use axum::routing::{any, get};
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::error;

/// Builds the payment service's router.
///
/// `/payment` answers every HTTP method: it generates a transaction, relays it
/// through the sidecar and echoes the transaction back as JSON.
pub fn router(service: Arc<PaymentService>) -> Router {
    Router::new()
        .route("/payment", any(trigger_payment))
        .route("/health", get(payment_health))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

async fn trigger_payment(
    State(service): State<Arc<PaymentService>>,
) -> Result<Json<Transaction>, PaymentError> {
    match service.initiate().await {
        Ok(tx) => Ok(Json(tx)),
        Err(e) => {
            error!(
                service = service.target().service(),
                method = service.target().method(),
                error = %e,
                "Payment relay failed"
            );
            Err(e)
        }
    }
}

async fn payment_health() -> Json<HealthResponse> {
    health("payment")
}
