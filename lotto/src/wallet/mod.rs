//! Wallet module providing the virtual points ledger for a game session.
//!
//! This module implements:
//! - Round cost charging with an affordability check
//! - Prize crediting, alone or settled together with the round cost
//! - Explicit resets back to the initial balance
//! - A post-round minimum-balance policy (auto-reset or disable)
//! - An in-memory entry history of every balance change
//!
//! ## Example
//!
//! ```
//! use lotto::wallet::{BalancePolicy, WalletLedger};
//! use lotto::PolicyOutcome;
//! use uuid::Uuid;
//!
//! let mut wallet = WalletLedger::new(Uuid::new_v4(), 1000, 300, 300, BalancePolicy::AutoReset);
//!
//! for round in 1..=3 {
//!     wallet.charge(round).unwrap();
//! }
//! assert_eq!(wallet.balance(), 100);
//!
//! // Below the minimum: the auto-reset policy restores the initial balance.
//! assert_eq!(wallet.evaluate_post_round_policy(3), PolicyOutcome::AutoReset);
//! assert_eq!(wallet.balance(), 1000);
//! ```

pub mod errors;
pub mod manager;
pub mod models;

pub use errors::{WalletError, WalletResult};
pub use manager::WalletLedger;
pub use models::{BalancePolicy, EntryDirection, EntryType, WalletEntry, WalletState};
