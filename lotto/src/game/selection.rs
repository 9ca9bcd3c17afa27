//! Live per-pool selection tracking with limit enforcement.

use log::debug;
use serde::{Deserialize, Serialize};

use super::{
    entities::{Number, Pool, PoolKind, Selection},
    errors::{GameError, GameResult},
};

/// Whether a toggle picked or un-picked a number.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Toggle {
    Added,
    Removed,
}

/// A pool's selection state right after a toggle, for live display as
/// `count/limit`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SelectionState {
    pub kind: PoolKind,
    pub change: Toggle,
    pub count: usize,
    pub limit: usize,
    pub exhausted: bool,
}

/// Tracks the numbers picked in each pool and never lets a pool exceed its
/// limit.
#[derive(Clone, Debug)]
pub struct SelectionTracker {
    regular_pool: Pool,
    strong_pool: Pool,
    regular: Selection,
    strong: Selection,
}

impl SelectionTracker {
    #[must_use]
    pub fn new(regular_pool: Pool, strong_pool: Pool) -> Self {
        Self {
            regular_pool,
            strong_pool,
            regular: Selection::new(),
            strong: Selection::new(),
        }
    }

    #[must_use]
    pub fn pool(&self, kind: PoolKind) -> &Pool {
        match kind {
            PoolKind::Regular => &self.regular_pool,
            PoolKind::Strong => &self.strong_pool,
        }
    }

    #[must_use]
    pub fn selected(&self, kind: PoolKind) -> &Selection {
        match kind {
            PoolKind::Regular => &self.regular,
            PoolKind::Strong => &self.strong,
        }
    }

    fn selected_mut(&mut self, kind: PoolKind) -> &mut Selection {
        match kind {
            PoolKind::Regular => &mut self.regular,
            PoolKind::Strong => &mut self.strong,
        }
    }

    #[must_use]
    pub fn count(&self, kind: PoolKind) -> usize {
        self.selected(kind).len()
    }

    #[must_use]
    pub fn limit(&self, kind: PoolKind) -> usize {
        self.pool(kind).limit
    }

    /// True once the pool has as many picks as its limit allows.
    #[must_use]
    pub fn is_exhausted(&self, kind: PoolKind) -> bool {
        self.count(kind) >= self.limit(kind)
    }

    /// Whether toggling `number` would currently be accepted. Selected numbers
    /// can always be removed; unselected ones only while the pool has room.
    #[must_use]
    pub fn is_selectable(&self, kind: PoolKind, number: Number) -> bool {
        if !self.pool(kind).contains(number) {
            return false;
        }
        self.selected(kind).contains(&number) || !self.is_exhausted(kind)
    }

    /// Whether both pools are exactly at their limits.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        PoolKind::ALL
            .into_iter()
            .all(|kind| self.count(kind) == self.limit(kind))
    }

    /// Pick `number` if it isn't selected yet, otherwise un-pick it.
    ///
    /// # Errors
    ///
    /// * `GameError::NumberOutOfRange` - `number` isn't in the pool
    /// * `GameError::LimitExceeded` - the pool is already full
    pub fn toggle(&mut self, kind: PoolKind, number: Number) -> GameResult<SelectionState> {
        let pool = *self.pool(kind);
        if !pool.contains(number) {
            return Err(GameError::NumberOutOfRange {
                kind,
                number,
                total: pool.total,
            });
        }

        let change = if self.selected_mut(kind).remove(&number) {
            Toggle::Removed
        } else if self.is_exhausted(kind) {
            return Err(GameError::LimitExceeded {
                kind,
                limit: pool.limit,
            });
        } else {
            self.selected_mut(kind).insert(number);
            Toggle::Added
        };

        let state = SelectionState {
            kind,
            change,
            count: self.count(kind),
            limit: pool.limit,
            exhausted: self.is_exhausted(kind),
        };
        debug!(
            "{:?} {kind} number {number} ({}/{})",
            change, state.count, state.limit
        );
        Ok(state)
    }

    pub fn clear(&mut self) {
        self.regular.clear();
        self.strong.clear();
    }
}
