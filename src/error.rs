use alloy::primitives::utils::UnitsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not convert token units: {0}")]
    Units(#[from] UnitsError),
    #[error("Empty amount")]
    EmptyAmount,
    #[error("Negative amount: {0}")]
    NegativeAmount(String),
    #[error("Amount {amount} has more than {decimals} decimals")]
    Precision { amount: String, decimals: u8 },
    #[error("Could not serialize interface: {0}")]
    Serialize(#[from] serde_json::Error),
}
