use super::invocation::{InvocationTarget, SidecarResponse};
use super::transaction::{Amount, Transaction};
use crate::error::Result;
use async_trait::async_trait;

/// Source of transaction amounts, injected so tests can replace randomness.
pub trait AmountSource: Send + Sync {
    fn next_amount(&self) -> Amount;
}

/// Delivers a transaction to a named downstream service and method.
#[async_trait]
pub trait TransactionRelay: Send + Sync {
    async fn relay(&self, target: &InvocationTarget, tx: &Transaction) -> Result<SidecarResponse>;
}

pub type AmountSourceBox = Box<dyn AmountSource>;
pub type TransactionRelayBox = Box<dyn TransactionRelay>;
