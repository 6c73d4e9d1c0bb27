use crate::domain::ports::AmountSource;
use crate::domain::transaction::Amount;
use crate::error::{PaymentError, Result};
use rand::Rng;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const DEFAULT_MIN_AMOUNT: u32 = 1;
pub const DEFAULT_MAX_AMOUNT: u32 = 999;

/// Draws amounts uniformly from an inclusive range using the thread-local RNG.
#[derive(Debug, Clone, Copy)]
pub struct RandomAmountSource {
    min: Amount,
    max: Amount,
}

impl RandomAmountSource {
    pub fn new(min: Amount, max: Amount) -> Result<Self> {
        if min > max {
            return Err(PaymentError::ValidationError(format!(
                "Amount range is empty: {min} > {max}"
            )));
        }
        Ok(Self { min, max })
    }
}

impl Default for RandomAmountSource {
    fn default() -> Self {
        Self {
            min: Amount::MIN,
            max: Amount::MIN.saturating_add(DEFAULT_MAX_AMOUNT - DEFAULT_MIN_AMOUNT),
        }
    }
}

impl AmountSource for RandomAmountSource {
    fn next_amount(&self) -> Amount {
        let span = self.max.value() - self.min.value();
        self.min.saturating_add(rand::thread_rng().gen_range(0..=span))
    }
}

/// Replays a fixed list of amounts in order, wrapping around at the end.
#[derive(Debug)]
pub struct SequenceAmountSource {
    amounts: Vec<Amount>,
    cursor: AtomicUsize,
}

impl SequenceAmountSource {
    pub fn new(amounts: Vec<Amount>) -> Result<Self> {
        if amounts.is_empty() {
            return Err(PaymentError::ValidationError(
                "Amount sequence must not be empty".to_string(),
            ));
        }
        Ok(Self {
            amounts,
            cursor: AtomicUsize::new(0),
        })
    }
}

impl AmountSource for SequenceAmountSource {
    fn next_amount(&self) -> Amount {
        let index = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.amounts[index % self.amounts.len()]
    }
}
