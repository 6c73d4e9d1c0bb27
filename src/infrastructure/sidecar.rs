use crate::config::SidecarConfig;
use crate::domain::invocation::{InvocationTarget, SidecarResponse};
use crate::domain::ports::TransactionRelay;
use crate::domain::transaction::Transaction;
use crate::error::Result;
use async_trait::async_trait;
use tracing::debug;

/// Relays transactions through a local sidecar's service-invocation API.
///
/// The sidecar forwards `POST /v1.0/invoke/<service>/method/<method>` to the
/// named logical service, so the caller never needs the target's address.
/// One request per call; nothing is retried or batched. The sidecar is always
/// local, so proxy settings from the environment are ignored.
#[derive(Debug, Clone)]
pub struct SidecarClient {
    http: reqwest::Client,
    base_url: String,
}

impl SidecarClient {
    pub fn new(config: &SidecarConfig) -> Result<Self> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .no_proxy()
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url(),
        })
    }

    pub fn invocation_url(&self, target: &InvocationTarget) -> String {
        format!(
            "{}/v1.0/invoke/{}/method/{}",
            self.base_url,
            target.service(),
            target.method()
        )
    }
}

#[async_trait]
impl TransactionRelay for SidecarClient {
    async fn relay(&self, target: &InvocationTarget, tx: &Transaction) -> Result<SidecarResponse> {
        let url = self.invocation_url(target);
        debug!(%url, transaction = %tx, "Invoking sidecar");

        let response = self
            .http
            .post(&url)
            .json(tx)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(SidecarResponse { status, body })
    }
}
