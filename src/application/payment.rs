use super::producer::TransactionProducer;
use crate::domain::invocation::InvocationTarget;
use crate::domain::ports::TransactionRelayBox;
use crate::domain::transaction::Transaction;
use crate::error::Result;
use tracing::{info, warn};

/// The payment-initiating use case.
///
/// Each call produces a fresh transaction and relays it exactly once to the
/// configured target. Delivery is at-most-once: a transport failure is returned
/// to the caller and nothing is retried.
pub struct PaymentService {
    producer: TransactionProducer,
    relay: TransactionRelayBox,
    target: InvocationTarget,
}

impl PaymentService {
    pub fn new(
        producer: TransactionProducer,
        relay: TransactionRelayBox,
        target: InvocationTarget,
    ) -> Self {
        Self {
            producer,
            relay,
            target,
        }
    }

    pub fn target(&self) -> &InvocationTarget {
        &self.target
    }

    /// Produces a transaction, relays it, and returns what was sent.
    pub async fn initiate(&self) -> Result<Transaction> {
        let tx = self.producer.produce();
        let response = self.relay.relay(&self.target, &tx).await?;

        info!(
            service = self.target.service(),
            method = self.target.method(),
            transaction = %tx,
            "Transaction passed"
        );
        if response.is_success() {
            info!(status = response.status, body = %response.body, "Sidecar response");
        } else {
            // Only transport failures count as delivery errors.
            warn!(status = response.status, body = %response.body, "Sidecar returned non-success status");
        }

        Ok(tx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::invocation::SidecarResponse;
    use crate::domain::ports::TransactionRelay;
    use crate::domain::transaction::{Amount, PartyId};
    use crate::error::PaymentError;
    use crate::infrastructure::random::SequenceAmountSource;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingRelay {
        sent: Arc<Mutex<Vec<(String, String, Transaction)>>>,
        status: u16,
    }

    #[async_trait]
    impl TransactionRelay for RecordingRelay {
        async fn relay(
            &self,
            target: &InvocationTarget,
            tx: &Transaction,
        ) -> Result<SidecarResponse> {
            self.sent.lock().unwrap().push((
                target.service().to_string(),
                target.method().to_string(),
                tx.clone(),
            ));
            Ok(SidecarResponse {
                status: self.status,
                body: String::new(),
            })
        }
    }

    struct FailingRelay;

    #[async_trait]
    impl TransactionRelay for FailingRelay {
        async fn relay(&self, _: &InvocationTarget, _: &Transaction) -> Result<SidecarResponse> {
            Err(PaymentError::ValidationError("sidecar down".into()))
        }
    }

    fn producer() -> TransactionProducer {
        TransactionProducer::new(
            PartyId::new("Luffy").unwrap(),
            PartyId::new("Zoro").unwrap(),
            Box::new(SequenceAmountSource::new(vec![Amount::new(427).unwrap()]).unwrap()),
        )
    }

    fn checkout() -> InvocationTarget {
        InvocationTarget::new("checkout", "checkout").unwrap()
    }

    #[tokio::test]
    async fn test_initiate_relays_exactly_once() {
        let relay = RecordingRelay {
            status: 200,
            ..Default::default()
        };
        let service = PaymentService::new(producer(), Box::new(relay.clone()), checkout());

        let tx = service.initiate().await.unwrap();
        assert_eq!(tx.value().value(), 427);

        let sent = relay.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "checkout");
        assert_eq!(sent[0].1, "checkout");
        assert_eq!(sent[0].2, tx);
    }

    #[tokio::test]
    async fn test_non_success_status_is_not_an_error() {
        let relay = RecordingRelay {
            status: 500,
            ..Default::default()
        };
        let service = PaymentService::new(producer(), Box::new(relay), checkout());
        assert!(service.initiate().await.is_ok());
    }

    #[tokio::test]
    async fn test_relay_failure_propagates() {
        let service = PaymentService::new(producer(), Box::new(FailingRelay), checkout());
        assert!(service.initiate().await.is_err());
    }
}
