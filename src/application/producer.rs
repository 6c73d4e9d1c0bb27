use crate::domain::ports::AmountSourceBox;
use crate::domain::transaction::{PartyId, Transaction};

/// Synthesizes one transaction per call between two fixed parties.
///
/// The amount comes from the injected `AmountSource`, so production code can
/// use real randomness while tests supply a known sequence.
pub struct TransactionProducer {
    sender: PartyId,
    receiver: PartyId,
    amounts: AmountSourceBox,
}

impl TransactionProducer {
    /// Creates a new `TransactionProducer`.
    ///
    /// # Arguments
    ///
    /// * `sender` - The paying party stamped on every transaction.
    /// * `receiver` - The receiving party stamped on every transaction.
    /// * `amounts` - Where transaction values are drawn from.
    pub fn new(sender: PartyId, receiver: PartyId, amounts: AmountSourceBox) -> Self {
        Self {
            sender,
            receiver,
            amounts,
        }
    }

    /// Builds the next transaction. Never fails.
    pub fn produce(&self) -> Transaction {
        Transaction::new(
            self.sender.clone(),
            self.receiver.clone(),
            self.amounts.next_amount(),
        )
    }
}
