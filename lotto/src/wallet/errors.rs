//! Wallet error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::entities::Points;

/// Wallet errors
#[derive(Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum WalletError {
    /// Insufficient balance
    #[error("Insufficient balance: available {available}, required {required}")]
    InsufficientBalance { available: Points, required: Points },

    /// Invalid amount (must not be negative)
    #[error("Invalid amount: {0}")]
    InvalidAmount(Points),
}

/// Result type for wallet operations
pub type WalletResult<T> = Result<T, WalletError>;
