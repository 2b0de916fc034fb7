//! Error types for the route explorer

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RouterError>;

#[derive(Error, Debug)]
pub enum RouterError {
    #[error("Invalid liquidity in pool {index}: {reason}")]
    InvalidLiquidity { index: usize, reason: String },

    #[error("Pool {index} pairs {symbol} with itself")]
    SelfReferentialPool { index: usize, symbol: String },

    #[error("Non-finite amount {amount} swapping {from} -> {to}")]
    NonFiniteAmount {
        from: String,
        to: String,
        amount: f64,
    },

    #[error("Invalid input amount: {0}")]
    InvalidAmount(f64),

    #[error("Pool parsing error: {0}")]
    PoolParseError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
