use crate::error::PaymentError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a party taking part in a transfer.
///
/// Guaranteed non-blank, so a deserialized `Transaction` always names both sides.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PartyId(String);

impl PartyId {
    pub fn new(id: impl Into<String>) -> Result<Self, PaymentError> {
        let id = id.into();
        if id.trim().is_empty() {
            Err(PaymentError::ValidationError(
                "Party identifier must not be empty".to_string(),
            ))
        } else {
            Ok(Self(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PartyId {
    type Error = PaymentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PartyId> for String {
    fn from(id: PartyId) -> Self {
        id.0
    }
}

impl fmt::Display for PartyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Represents a positive amount of value carried by a transaction.
///
/// Accepts any JSON integer on the wire so that zero and negative values get a
/// domain error rather than a generic type mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Amount(u32);

impl Amount {
    pub const MIN: Self = Self(1);

    pub fn new(value: u32) -> Result<Self, PaymentError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(PaymentError::ValidationError(
                "Amount must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Adds `delta`, clamping at `u32::MAX`. The result stays positive.
    pub fn saturating_add(self, delta: u32) -> Self {
        Self(self.0.saturating_add(delta))
    }
}

impl TryFrom<i64> for Amount {
    type Error = PaymentError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let value = u32::try_from(value).map_err(|_| {
            PaymentError::ValidationError(format!("Amount {value} is out of range"))
        })?;
        Self::new(value)
    }
}

impl From<Amount> for u32 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single transfer of value between two parties.
///
/// Built once and sent once: there are no mutators, and the wire form is
/// exactly `{"from": .., "to": .., "value": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transaction {
    from: PartyId,
    to: PartyId,
    value: Amount,
}

impl Transaction {
    pub fn new(from: PartyId, to: PartyId, value: Amount) -> Self {
        Self { from, to, value }
    }

    pub fn sender(&self) -> &PartyId {
        &self.from
    }

    pub fn receiver(&self) -> &PartyId {
        &self.to
    }

    pub fn value(&self) -> Amount {
        self.value
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transaction{{from={}, to={}, value={}}}",
            self.from, self.to, self.value
        )
    }
}
