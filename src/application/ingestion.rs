use crate::domain::transaction::Transaction;
use std::fmt;
use tracing::info;

/// Receipt for an accepted transaction. On the wire it is the literal `GOOD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acknowledgement;

impl Acknowledgement {
    pub const TOKEN: &'static str = "GOOD";

    pub fn as_str(&self) -> &'static str {
        Self::TOKEN
    }
}

impl fmt::Display for Acknowledgement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The account-ingestion use case.
///
/// Stateless: each transaction is logged and acknowledged. Nothing is stored,
/// no balance changes, and duplicates are not detected.
#[derive(Debug, Default, Clone, Copy)]
pub struct IngestionService;

impl IngestionService {
    pub fn new() -> Self {
        Self
    }

    pub fn ingest(&self, tx: Transaction) -> Acknowledgement {
        info!(transaction = %tx, "Transaction received");
        Acknowledgement
    }
}
