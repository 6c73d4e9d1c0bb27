//! Typed configuration for the two services.
//!
//! Values are resolved once at process start (flags and environment, see
//! `main.rs`) and handed to the components that need them.

use crate::domain::invocation::InvocationTarget;
use crate::domain::transaction::PartyId;
use crate::error::{PaymentError, Result};
use std::time::Duration;

/// Environment variable naming the sidecar's local HTTP port.
pub const SIDECAR_PORT_ENV: &str = "DAPR_HTTP_PORT";
pub const DEFAULT_SIDECAR_HOST: &str = "localhost";
pub const DEFAULT_SIDECAR_PORT: u16 = 3500;
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

pub const DEFAULT_SENDER: &str = "Luffy";
pub const DEFAULT_RECEIVER: &str = "Zoro";
pub const DEFAULT_TARGET_SERVICE: &str = "checkout";
pub const DEFAULT_TARGET_METHOD: &str = "checkout";

/// Where the local sidecar listens and how long to wait for a connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidecarConfig {
    pub host: String,
    pub port: u16,
    pub connect_timeout: Duration,
}

impl Default for SidecarConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SIDECAR_HOST.to_string(),
            port: DEFAULT_SIDECAR_PORT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

impl SidecarConfig {
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(PaymentError::Config("sidecar host cannot be empty".into()));
        }
        if self.port == 0 {
            return Err(PaymentError::Config("sidecar port cannot be 0".into()));
        }
        if self.connect_timeout.is_zero() {
            return Err(PaymentError::Config(
                "connect timeout cannot be 0".into(),
            ));
        }
        Ok(())
    }

    /// Base address of the sidecar, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Everything the payment service needs besides the sidecar location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentConfig {
    pub sender: String,
    pub receiver: String,
    pub target_service: String,
    pub target_method: String,
    pub sidecar: SidecarConfig,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            sender: DEFAULT_SENDER.to_string(),
            receiver: DEFAULT_RECEIVER.to_string(),
            target_service: DEFAULT_TARGET_SERVICE.to_string(),
            target_method: DEFAULT_TARGET_METHOD.to_string(),
            sidecar: SidecarConfig::default(),
        }
    }
}

impl PaymentConfig {
    pub fn validate(&self) -> Result<()> {
        self.sidecar.validate()?;
        self.parties()?;
        self.target()?;
        Ok(())
    }

    /// The sender and receiver as validated identifiers.
    ///
    /// A payment service configured to pay itself is rejected here even though
    /// the transaction entity itself allows it.
    pub fn parties(&self) -> Result<(PartyId, PartyId)> {
        let sender = PartyId::new(self.sender.clone())
            .map_err(|e| PaymentError::Config(format!("sender: {e}")))?;
        let receiver = PartyId::new(self.receiver.clone())
            .map_err(|e| PaymentError::Config(format!("receiver: {e}")))?;
        if sender == receiver {
            return Err(PaymentError::Config(
                "sender and receiver must differ".into(),
            ));
        }
        Ok((sender, receiver))
    }

    pub fn target(&self) -> Result<InvocationTarget> {
        InvocationTarget::new(self.target_service.clone(), self.target_method.clone())
            .map_err(|e| PaymentError::Config(e.to_string()))
    }
}
