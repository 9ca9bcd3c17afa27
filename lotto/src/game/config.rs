//! Game configuration models.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{
    entities::{Points, Pool, PoolKind},
    errors::{GameError, GameResult},
    prizes::PrizeTable,
};
use crate::wallet::BalancePolicy;

/// Regular pool: pick 6 of 37.
pub const DEFAULT_REGULAR_POOL: Pool = Pool::new(37, 6);
/// Strong pool: pick 1 of 7.
pub const DEFAULT_STRONG_POOL: Pool = Pool::new(7, 1);
pub const DEFAULT_ROUND_COST: Points = 300;
pub const DEFAULT_INITIAL_BALANCE: Points = 1000;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Regular number pool
    pub regular: Pool,

    /// Strong number pool
    pub strong: Pool,

    /// Points charged for every accepted round
    pub round_cost: Points,

    /// Wallet balance at session start and after every reset
    pub initial_balance: Points,

    /// Ordered prize rules
    pub prize_table: PrizeTable,

    /// A settled round leaving the wallet below this triggers `policy`
    pub min_playable_balance: Points,

    /// Auto-reset or disable when the wallet runs low
    pub policy: BalancePolicy,

    /// Let the very first round through even when the wallet can't cover it
    pub first_round_grace: bool,

    /// Attach a matched-numbers breakdown to every round result
    pub detailed_results: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            regular: DEFAULT_REGULAR_POOL,
            strong: DEFAULT_STRONG_POOL,
            round_cost: DEFAULT_ROUND_COST,
            initial_balance: DEFAULT_INITIAL_BALANCE,
            prize_table: PrizeTable::default(),
            min_playable_balance: DEFAULT_ROUND_COST,
            policy: BalancePolicy::Disable,
            first_round_grace: false,
            detailed_results: false,
        }
    }
}

impl GameConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> GameResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| GameError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn pool(&self, kind: PoolKind) -> &Pool {
        match kind {
            PoolKind::Regular => &self.regular,
            PoolKind::Strong => &self.strong,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> GameResult<()> {
        for kind in PoolKind::ALL {
            let pool = self.pool(kind);
            if pool.total == 0 {
                return Err(invalid(format!("{kind} pool must contain at least one number")));
            }
            if pool.limit == 0 || pool.limit > usize::from(pool.total) {
                return Err(invalid(format!(
                    "{kind} pool limit must be between 1 and {}",
                    pool.total
                )));
            }
        }

        if self.round_cost <= 0 {
            return Err(invalid("Round cost must be greater than 0".to_string()));
        }

        if self.initial_balance < 0 {
            return Err(invalid("Initial balance can't be negative".to_string()));
        }

        if self.min_playable_balance < 0 {
            return Err(invalid("Minimum playable balance can't be negative".to_string()));
        }

        let mut seen = HashSet::with_capacity(self.prize_table.rules().len());
        for rule in self.prize_table.rules() {
            if rule.prize < 0 {
                return Err(invalid(format!("Prize for ({rule}) can't be negative")));
            }
            if rule.regular_matches > self.regular.limit || rule.strong_matches > self.strong.limit
            {
                return Err(invalid(format!("Prize rule ({rule}) can never be reached")));
            }
            if !seen.insert((rule.regular_matches, rule.strong_matches)) {
                return Err(invalid(format!(
                    "Duplicate prize rule for {} regular + {} strong",
                    rule.regular_matches, rule.strong_matches
                )));
            }
        }

        Ok(())
    }
}

fn invalid(reason: String) -> GameError {
    GameError::InvalidConfig(reason)
}
