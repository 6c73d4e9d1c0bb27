use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Delivery error: {0}")]
    Delivery(#[from] reqwest::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
