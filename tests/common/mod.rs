#![allow(dead_code)]

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use payrelay::application::payment::PaymentService;
use payrelay::application::producer::TransactionProducer;
use payrelay::config::SidecarConfig;
use payrelay::domain::invocation::InvocationTarget;
use payrelay::domain::transaction::{Amount, PartyId};
use payrelay::infrastructure::random::SequenceAmountSource;
use payrelay::infrastructure::sidecar::SidecarClient;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One request as seen by the mock sidecar.
#[derive(Debug, Clone)]
pub struct RecordedInvocation {
    pub service: String,
    pub method: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

#[derive(Clone)]
struct MockState {
    reply_status: StatusCode,
    recorded: Arc<Mutex<Vec<RecordedInvocation>>>,
}

/// A sidecar stand-in bound to an ephemeral local port. It echoes every
/// invocation body back with the configured status.
pub struct MockSidecar {
    pub port: u16,
    pub recorded: Arc<Mutex<Vec<RecordedInvocation>>>,
}

impl MockSidecar {
    pub async fn echo() -> Self {
        Self::with_status(StatusCode::OK).await
    }

    pub async fn with_status(reply_status: StatusCode) -> Self {
        let recorded = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            reply_status,
            recorded: recorded.clone(),
        };
        let app = Router::new()
            .route("/v1.0/invoke/{service}/method/{method}", post(echo_invocation))
            .with_state(state);
        let port = spawn(app).await;
        Self { port, recorded }
    }

    pub fn invocations(&self) -> Vec<RecordedInvocation> {
        self.recorded.lock().unwrap().clone()
    }
}

async fn echo_invocation(
    State(state): State<MockState>,
    Path((service, method)): Path<(String, String)>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Bytes) {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.recorded.lock().unwrap().push(RecordedInvocation {
        service,
        method,
        content_type,
        body: body.to_vec(),
    });
    (state.reply_status, body)
}

/// Serves `app` on 127.0.0.1 with an OS-assigned port and returns the port.
pub async fn spawn(app: Router) -> u16 {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    port
}

/// A port on which nothing is listening.
pub async fn unused_port() -> u16 {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

pub fn sidecar_client(port: u16) -> SidecarClient {
    SidecarClient::new(&SidecarConfig {
        host: "127.0.0.1".to_string(),
        port,
        connect_timeout: Duration::from_secs(2),
    })
    .unwrap()
}

pub fn checkout() -> InvocationTarget {
    InvocationTarget::new("checkout", "checkout").unwrap()
}

/// Payment service producing Luffy -> Zoro transfers with the given amounts.
pub fn payment_service(sidecar_port: u16, amounts: &[u32]) -> PaymentService {
    let amounts = amounts.iter().map(|v| Amount::new(*v).unwrap()).collect();
    let producer = TransactionProducer::new(
        PartyId::new("Luffy").unwrap(),
        PartyId::new("Zoro").unwrap(),
        Box::new(SequenceAmountSource::new(amounts).unwrap()),
    );
    PaymentService::new(producer, Box::new(sidecar_client(sidecar_port)), checkout())
}
