//! Game error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entities::{Number, Points, PoolKind};
use crate::wallet::WalletError;

/// Errors surfaced to the presentation layer. None of them are fatal; the
/// player can correct the input or reset the session and try again.
#[derive(Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum GameError {
    #[error("need exactly {expected} {kind} numbers, got {actual}")]
    SelectionSize {
        kind: PoolKind,
        expected: usize,
        actual: usize,
    },
    #[error("can't pick more than {limit} {kind} numbers")]
    LimitExceeded { kind: PoolKind, limit: usize },
    #[error("{number} is not a {kind} number (1-{total})")]
    NumberOutOfRange {
        kind: PoolKind,
        number: Number,
        total: Number,
    },
    #[error("insufficient points: have {balance}, a round costs {cost}")]
    InsufficientFunds { balance: Points, cost: Points },
    #[error("the game is disabled")]
    GameDisabled,
    #[error("the game has already ended")]
    AlreadyEnded,
    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Wallet(#[from] WalletError),
}

/// Result type for game operations
pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_size_message() {
        let err = GameError::SelectionSize {
            kind: PoolKind::Regular,
            expected: 6,
            actual: 5,
        };
        assert_eq!(err.to_string(), "need exactly 6 regular numbers, got 5");
    }

    #[test]
    fn test_wallet_error_is_transparent() {
        let err: GameError = WalletError::InvalidAmount(-5).into();
        assert_eq!(err.to_string(), WalletError::InvalidAmount(-5).to_string());
    }
}
