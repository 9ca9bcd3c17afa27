//! Wallet ledger implementation with an in-memory entry history.

use super::{
    errors::{WalletError, WalletResult},
    models::{BalancePolicy, EntryDirection, EntryType, WalletEntry, WalletState},
};
use crate::game::{
    config::GameConfig,
    entities::{Points, PolicyOutcome},
};
use chrono::Utc;
use log::{debug, info, warn};
use uuid::Uuid;

/// Wallet ledger
///
/// The only place a session's balance is ever mutated. Every mutation is
/// recorded as a [`WalletEntry`] so the presentation layer can show a
/// history of costs, prizes, and resets.
#[derive(Debug, Clone)]
pub struct WalletLedger {
    /// Session this ledger belongs to.
    owner: Uuid,
    state: WalletState,
    policy: BalancePolicy,
    entries: Vec<WalletEntry>,
}

impl WalletLedger {
    /// Create a new wallet ledger
    ///
    /// # Arguments
    ///
    /// * `owner` - Session ID, included in every log line
    /// * `initial_balance` - Balance at session start and after every reset
    /// * `round_cost` - Points charged per accepted round
    /// * `min_playable_balance` - Threshold checked after each settled round
    /// * `policy` - What to do when the balance drops below the threshold
    pub fn new(
        owner: Uuid,
        initial_balance: Points,
        round_cost: Points,
        min_playable_balance: Points,
        policy: BalancePolicy,
    ) -> Self {
        Self {
            owner,
            state: WalletState {
                balance: initial_balance,
                round_cost,
                initial_balance,
                min_playable_balance,
                is_first_round: true,
            },
            policy,
            entries: Vec::new(),
        }
    }

    pub fn from_config(owner: Uuid, config: &GameConfig) -> Self {
        Self::new(
            owner,
            config.initial_balance,
            config.round_cost,
            config.min_playable_balance,
            config.policy,
        )
    }

    pub fn owner(&self) -> Uuid {
        self.owner
    }

    pub fn balance(&self) -> Points {
        self.state.balance
    }

    pub fn state(&self) -> &WalletState {
        &self.state
    }

    pub fn policy(&self) -> BalancePolicy {
        self.policy
    }

    pub fn is_first_round(&self) -> bool {
        self.state.is_first_round
    }

    /// Ledger entries, oldest first.
    pub fn history(&self) -> &[WalletEntry] {
        &self.entries
    }

    /// Whether the balance covers one more round.
    pub fn can_afford(&self) -> bool {
        self.state.balance >= self.state.round_cost
    }

    /// Charge the round cost
    ///
    /// # Returns
    ///
    /// * `WalletResult<Points>` - New balance or error
    ///
    /// # Errors
    ///
    /// * `WalletError::InsufficientBalance` - Balance doesn't cover the round
    ///   cost; the wallet is left untouched
    pub fn charge(&mut self, round: u64) -> WalletResult<Points> {
        if !self.can_afford() {
            return Err(WalletError::InsufficientBalance {
                available: self.state.balance,
                required: self.state.round_cost,
            });
        }

        Ok(self.debit_round_cost(round))
    }

    /// Charge the round cost without checking affordability.
    ///
    /// Only the first-round grace uses this. The balance may go negative; the
    /// post-round policy then resets or disables the wallet.
    pub fn charge_grace(&mut self, round: u64) -> Points {
        warn!(
            "Wallet {}: charging grace round {} with balance {} below cost {}",
            self.owner, round, self.state.balance, self.state.round_cost
        );
        self.debit_round_cost(round)
    }

    fn debit_round_cost(&mut self, round: u64) -> Points {
        let cost = self.state.round_cost;
        self.state.balance = self.state.balance.saturating_sub(cost);
        self.state.is_first_round = false;
        self.record(Some(round), -cost, EntryType::RoundCost);
        self.state.balance
    }

    /// Credit a prize
    ///
    /// # Errors
    ///
    /// * `WalletError::InvalidAmount` - Prize is negative
    pub fn credit(&mut self, round: u64, prize: Points) -> WalletResult<Points> {
        if prize < 0 {
            return Err(WalletError::InvalidAmount(prize));
        }

        Ok(self.add_prize(round, prize))
    }

    fn add_prize(&mut self, round: u64, prize: Points) -> Points {
        self.state.balance = self.state.balance.saturating_add(prize);
        self.record(Some(round), prize, EntryType::Prize);
        self.state.balance
    }

    /// Charge the round cost and credit any prize as one step.
    ///
    /// Both amounts are checked before the balance moves, so on error the
    /// wallet is left exactly as it was.
    ///
    /// # Arguments
    ///
    /// * `round` - Round the entries belong to
    /// * `prize` - Prize won this round, if any
    /// * `grace` - Skip the affordability check (first-round grace)
    ///
    /// # Errors
    ///
    /// * `WalletError::InvalidAmount` - Prize is negative
    /// * `WalletError::InsufficientBalance` - Balance doesn't cover the round
    ///   cost and `grace` is off
    pub fn settle_round(
        &mut self,
        round: u64,
        prize: Option<Points>,
        grace: bool,
    ) -> WalletResult<Points> {
        if let Some(prize) = prize.filter(|&p| p < 0) {
            return Err(WalletError::InvalidAmount(prize));
        }

        if grace {
            self.charge_grace(round);
        } else {
            self.charge(round)?;
        }
        if let Some(prize) = prize {
            self.add_prize(round, prize);
        }
        Ok(self.state.balance)
    }

    /// Restore the initial balance and the first-round flag.
    pub fn reset(&mut self) -> Points {
        let delta = self.state.initial_balance - self.state.balance;
        self.state.balance = self.state.initial_balance;
        self.state.is_first_round = true;
        self.record(None, delta, EntryType::Reset);
        info!("Wallet {}: reset to {}", self.owner, self.state.balance);
        self.state.balance
    }

    /// Apply the minimum-balance policy after a settled round.
    ///
    /// Under [`BalancePolicy::AutoReset`] the balance is restored here and the
    /// restoration is recorded against `round`.
    pub fn evaluate_post_round_policy(&mut self, round: u64) -> PolicyOutcome {
        if self.state.balance >= self.state.min_playable_balance {
            return PolicyOutcome::Continue;
        }

        match self.policy {
            BalancePolicy::AutoReset => {
                let delta = self.state.initial_balance - self.state.balance;
                info!(
                    "Wallet {}: balance {} below minimum {}, auto-resetting to {}",
                    self.owner,
                    self.state.balance,
                    self.state.min_playable_balance,
                    self.state.initial_balance
                );
                self.state.balance = self.state.initial_balance;
                self.record(Some(round), delta, EntryType::AutoReset);
                PolicyOutcome::AutoReset
            }
            BalancePolicy::Disable => {
                warn!(
                    "Wallet {}: balance {} below minimum {}, disabling play",
                    self.owner, self.state.balance, self.state.min_playable_balance
                );
                PolicyOutcome::Disabled
            }
        }
    }

    fn record(&mut self, round: Option<u64>, amount: Points, entry_type: EntryType) {
        let direction = if amount < 0 {
            EntryDirection::Debit
        } else {
            EntryDirection::Credit
        };
        debug!(
            "Wallet {}: {} {} {} -> balance {}",
            self.owner,
            entry_type,
            direction,
            amount.abs(),
            self.state.balance
        );
        self.entries.push(WalletEntry {
            round,
            amount,
            balance_after: self.state.balance,
            direction,
            entry_type,
            created_at: Utc::now(),
        });
    }
}
