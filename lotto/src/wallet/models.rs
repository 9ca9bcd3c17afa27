//! Wallet data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::game::entities::Points;

/// What the wallet does when a settled round leaves it below the minimum
/// playable balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BalancePolicy {
    /// Quietly restore the initial balance and keep playing.
    AutoReset,
    /// Lock the game until the player explicitly resets it.
    Disable,
}

impl std::fmt::Display for BalancePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BalancePolicy::AutoReset => write!(f, "auto-reset"),
            BalancePolicy::Disable => write!(f, "disable"),
        }
    }
}

impl std::str::FromStr for BalancePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto-reset" | "auto_reset" | "autoreset" | "reset" => Ok(BalancePolicy::AutoReset),
            "disable" | "disabled" => Ok(BalancePolicy::Disable),
            other => Err(format!(
                "unknown balance policy '{other}' (expected 'auto-reset' or 'disable')"
            )),
        }
    }
}

/// Wallet state snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletState {
    pub balance: Points,
    pub round_cost: Points,
    pub initial_balance: Points,
    /// Below this the post-round policy kicks in.
    pub min_playable_balance: Points,
    /// True until the first round is charged, and again after every reset.
    pub is_first_round: bool,
}

/// Wallet entry model (in-memory ledger)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletEntry {
    /// Round the entry belongs to, or `None` for an explicit reset.
    pub round: Option<u64>,
    pub amount: Points,
    pub balance_after: Points,
    pub direction: EntryDirection,
    pub entry_type: EntryType,
    pub created_at: DateTime<Utc>,
}

/// Entry direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryDirection {
    Debit,
    Credit,
}

impl std::fmt::Display for EntryDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryDirection::Debit => write!(f, "debit"),
            EntryDirection::Credit => write!(f, "credit"),
        }
    }
}

/// Entry type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    RoundCost,
    Prize,
    Reset,
    AutoReset,
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryType::RoundCost => write!(f, "round_cost"),
            EntryType::Prize => write!(f, "prize"),
            EntryType::Reset => write!(f, "reset"),
            EntryType::AutoReset => write!(f, "auto_reset"),
        }
    }
}
