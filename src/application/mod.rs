//! Application layer containing the two use cases of the relay.
//!
//! `PaymentService` produces a transaction and hands it to a `TransactionRelay`;
//! `IngestionService` acknowledges transactions arriving on the far side.

pub mod ingestion;
pub mod payment;
pub mod producer;
