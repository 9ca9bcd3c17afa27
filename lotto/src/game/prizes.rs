//! Prize rules and their resolution from match counts.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::entities::Points;

/// Pays `prize` when a round scores exactly `regular_matches` and exactly
/// `strong_matches`. Rules are never "at least" thresholds.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PrizeRule {
    pub regular_matches: usize,
    pub strong_matches: usize,
    pub prize: Points,
}

impl PrizeRule {
    #[must_use]
    pub const fn new(regular_matches: usize, strong_matches: usize, prize: Points) -> Self {
        Self {
            regular_matches,
            strong_matches,
            prize,
        }
    }

    #[must_use]
    pub fn matches(&self, regular_matches: usize, strong_matches: usize) -> bool {
        self.regular_matches == regular_matches && self.strong_matches == strong_matches
    }
}

impl fmt::Display for PrizeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} regular + {} strong => {}",
            self.regular_matches, self.strong_matches, self.prize
        )
    }
}

/// Ordered list of prize rules. The first rule matching both counts wins.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PrizeTable(Vec<PrizeRule>);

impl Default for PrizeTable {
    fn default() -> Self {
        Self(vec![
            PrizeRule::new(6, 1, 1000),
            PrizeRule::new(6, 0, 600),
            PrizeRule::new(4, 1, 400),
        ])
    }
}

impl From<Vec<PrizeRule>> for PrizeTable {
    fn from(rules: Vec<PrizeRule>) -> Self {
        Self(rules)
    }
}

impl PrizeTable {
    #[must_use]
    pub fn new(rules: Vec<PrizeRule>) -> Self {
        Self(rules)
    }

    #[must_use]
    pub fn rules(&self) -> &[PrizeRule] {
        &self.0
    }

    /// Find the first rule whose required counts equal the supplied pair.
    #[must_use]
    pub fn resolve(&self, regular_matches: usize, strong_matches: usize) -> Option<&PrizeRule> {
        self.0
            .iter()
            .find(|rule| rule.matches(regular_matches, strong_matches))
    }

    #[must_use]
    pub fn prize_for(&self, regular_matches: usize, strong_matches: usize) -> Option<Points> {
        self.resolve(regular_matches, strong_matches)
            .map(|rule| rule.prize)
    }
}
