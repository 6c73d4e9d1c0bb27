use super::{HealthResponse, health};
use crate::application::ingestion::IngestionService;
use crate::domain::transaction::Transaction;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Builds the account service's router.
///
/// The body of `POST /account` is parsed as JSON whatever `Content-Type` the
/// caller declared. The `Json` extractor would insist on `application/json`.
pub fn router(service: IngestionService) -> Router {
    Router::new()
        .route("/account", post(ingest_transaction))
        .route("/health", get(account_health))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

async fn ingest_transaction(
    State(service): State<IngestionService>,
    body: Bytes,
) -> Result<&'static str, (StatusCode, String)> {
    let tx: Transaction = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "Rejected malformed transaction body");
        (StatusCode::BAD_REQUEST, format!("Invalid transaction: {e}"))
    })?;
    Ok(service.ingest(tx).as_str())
}

async fn account_health() -> Json<HealthResponse> {
    health("account")
}
