use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeSet,
    fmt::{self},
};

/// Placeholder for pool numbers. Numbers run from 1 up to a pool's total.
pub type Number = u8;

/// Whole points. Balances, round costs, and prizes are all represented as
/// signed whole points so a grace round can dip below zero without wrapping.
pub type Points = i64;

/// A player's picks for a single pool, kept ordered for display.
pub type Selection = BTreeSet<Number>;

/// Which of the two number pools a selection or draw belongs to.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolKind {
    Regular,
    Strong,
}

impl PoolKind {
    pub const ALL: [PoolKind; 2] = [PoolKind::Regular, PoolKind::Strong];
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Regular => "regular",
            Self::Strong => "strong",
        };
        write!(f, "{repr}")
    }
}

/// A number space `1..=total` from which exactly `limit` numbers are picked
/// by the player and drawn by the game.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Pool {
    pub total: Number,
    pub limit: usize,
}

impl Pool {
    #[must_use]
    pub const fn new(total: Number, limit: usize) -> Self {
        Self { total, limit }
    }

    /// Whether `number` lies inside this pool's number space.
    #[must_use]
    pub fn contains(&self, number: Number) -> bool {
        (1..=self.total).contains(&number)
    }

    pub fn numbers(&self) -> impl Iterator<Item = Number> {
        1..=self.total
    }
}

/// What happened to the wallet once a round settled.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyOutcome {
    /// Balance is still playable.
    Continue,
    /// Balance dropped below the minimum and was restored to the initial amount.
    AutoReset,
    /// Balance dropped below the minimum and play is locked until a reset.
    Disabled,
}

impl fmt::Display for PolicyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Continue => "continue",
            Self::AutoReset => "auto-reset",
            Self::Disabled => "disabled",
        };
        write!(f, "{repr}")
    }
}

/// Extra breakdown attached to a round when detailed results are enabled.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RoundDetail {
    pub selected_regular: Vec<Number>,
    pub selected_strong: Vec<Number>,
    pub matched_regular: Vec<Number>,
    pub matched_strong: Vec<Number>,
    pub balance_before: Points,
}

/// Everything the presentation layer needs to render a settled round.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RoundResult {
    /// 1-based count of accepted rounds since the session (or last reset) began.
    pub round: u64,
    pub drawn_regular: Vec<Number>,
    pub drawn_strong: Vec<Number>,
    pub matching_regular: usize,
    pub matching_strong: usize,
    pub prize: Option<Points>,
    pub cost: Points,
    /// Balance after cost, prize, and any auto-reset were applied.
    pub new_balance: Points,
    pub outcome: PolicyOutcome,
    pub session_continues: bool,
    pub detail: Option<RoundDetail>,
}

impl RoundResult {
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.prize.is_some()
    }
}

fn join_numbers(numbers: &[Number]) -> String {
    numbers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl RoundResult {
    /// The drawn numbers, e.g. `Regular numbers: 3, 8, 12, 20, 31, 37, Strong number: 5`.
    #[must_use]
    pub fn draw_summary(&self) -> String {
        let strong_label = if self.drawn_strong.len() == 1 {
            "Strong number"
        } else {
            "Strong numbers"
        };
        format!(
            "Regular numbers: {}, {strong_label}: {}",
            join_numbers(&self.drawn_regular),
            join_numbers(&self.drawn_strong)
        )
    }
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.draw_summary())?;
        match self.prize {
            Some(prize) => write!(f, "Congratulations! You won {prize}!"),
            None => write!(f, "Sorry, no prize this time."),
        }
    }
}
