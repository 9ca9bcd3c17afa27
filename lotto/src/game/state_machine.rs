//! Game session state machine.
//!
//! A session owns the selections, the wallet, and the draw source for one
//! player. Every public method is a discrete player action, processed to
//! completion before it returns.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::{
    config::GameConfig,
    draw::{DrawSource, Drawer},
    entities::{Number, Points, PolicyOutcome, PoolKind, RoundDetail, RoundResult, Selection},
    errors::{GameError, GameResult},
    functional::matching_numbers,
    selection::{SelectionState, SelectionTracker},
};
use crate::wallet::WalletLedger;

/// Session lifecycle.
///
/// `Validating` and `Settled` only exist while a round is being processed;
/// between player actions a session is always `Idle` or `Ended`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum SessionState {
    Idle,
    Validating,
    Settled,
    Ended,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Settled => "settled",
            Self::Ended => "ended",
        };
        write!(f, "{repr}")
    }
}

/// One player's game: selections, wallet, and draw source.
#[derive(Debug)]
pub struct GameSession {
    id: Uuid,
    config: GameConfig,
    selections: SelectionTracker,
    wallet: WalletLedger,
    drawer: Drawer,
    state: SessionState,
    /// Accepted rounds since the session started or was last reset.
    rounds_played: u64,
}

impl GameSession {
    /// Start a session with uniformly random draws.
    ///
    /// # Errors
    ///
    /// * `GameError::InvalidConfig` - the configuration doesn't validate
    pub fn configure(config: GameConfig) -> GameResult<Self> {
        Self::with_drawer(config, Drawer::default())
    }

    /// Start a session with a specific draw source (seeded or scripted).
    ///
    /// # Errors
    ///
    /// * `GameError::InvalidConfig` - the configuration doesn't validate
    pub fn with_drawer(config: GameConfig, drawer: impl Into<Drawer>) -> GameResult<Self> {
        config.validate()?;

        let id = Uuid::new_v4();
        let session = Self {
            id,
            selections: SelectionTracker::new(config.regular, config.strong),
            wallet: WalletLedger::from_config(id, &config),
            drawer: drawer.into(),
            state: SessionState::Idle,
            rounds_played: 0,
            config,
        };
        info!(
            "Session {} started with balance {} (policy: {})",
            session.id,
            session.wallet.balance(),
            session.config.policy
        );
        Ok(session)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn wallet(&self) -> &WalletLedger {
        &self.wallet
    }

    pub fn session_state(&self) -> SessionState {
        self.state
    }

    pub fn is_ended(&self) -> bool {
        self.state == SessionState::Ended
    }

    pub fn current_balance(&self) -> Points {
        self.wallet.balance()
    }

    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    pub fn current_selection(&self, kind: PoolKind) -> &Selection {
        self.selections.selected(kind)
    }

    pub fn is_pool_exhausted(&self, kind: PoolKind) -> bool {
        self.selections.is_exhausted(kind)
    }

    /// Whether the player may toggle `number` right now. Nothing is
    /// selectable once the session has ended.
    pub fn is_selectable(&self, kind: PoolKind, number: Number) -> bool {
        !self.is_ended() && self.selections.is_selectable(kind, number)
    }

    /// Whether both pools are exactly at their limits.
    pub fn is_selection_complete(&self) -> bool {
        self.selections.is_complete()
    }

    /// Pick or un-pick a number.
    ///
    /// # Errors
    ///
    /// * `GameError::GameDisabled` - the session has ended
    /// * `GameError::NumberOutOfRange` / `GameError::LimitExceeded` - see
    ///   [`SelectionTracker::toggle`]
    pub fn toggle_selection(&mut self, kind: PoolKind, number: Number) -> GameResult<SelectionState> {
        if self.is_ended() {
            return Err(GameError::GameDisabled);
        }
        self.selections.toggle(kind, number)
    }

    pub fn clear_selection(&mut self) {
        self.selections.clear();
    }

    /// Play a round with the currently tracked selections.
    ///
    /// An ended session holds no selections, so it reports
    /// `GameDisabled` rather than an empty selection.
    ///
    /// # Errors
    ///
    /// * `GameError::GameDisabled` - the session has ended
    /// * `GameError::SelectionSize` - a pool isn't exactly at its limit
    /// * `GameError::InsufficientFunds` - the wallet can't cover the round
    pub fn submit_round(&mut self) -> GameResult<RoundResult> {
        if self.is_ended() {
            warn!("Session {} rejected round: game disabled", self.id);
            return Err(GameError::GameDisabled);
        }
        let regular = self.selections.selected(PoolKind::Regular).clone();
        let strong = self.selections.selected(PoolKind::Strong).clone();
        self.play_round(regular, strong)
    }

    /// Play a round with explicit selections, bypassing the tracker.
    ///
    /// Repeated numbers count once, so they show up as a size error.
    ///
    /// # Errors
    ///
    /// Same as [`GameSession::submit_round`], plus
    /// `GameError::NumberOutOfRange` for numbers outside a pool.
    pub fn submit_selection(
        &mut self,
        regular: &[Number],
        strong: &[Number],
    ) -> GameResult<RoundResult> {
        let regular: Selection = regular.iter().copied().collect();
        let strong: Selection = strong.iter().copied().collect();
        for (kind, selection) in [(PoolKind::Regular, &regular), (PoolKind::Strong, &strong)] {
            let pool = self.config.pool(kind);
            if let Some(&number) = selection.iter().find(|&&n| !pool.contains(n)) {
                return Err(GameError::NumberOutOfRange {
                    kind,
                    number,
                    total: pool.total,
                });
            }
        }
        self.play_round(regular, strong)
    }

    fn play_round(&mut self, regular: Selection, strong: Selection) -> GameResult<RoundResult> {
        for (kind, selection) in [(PoolKind::Regular, &regular), (PoolKind::Strong, &strong)] {
            let expected = self.config.pool(kind).limit;
            if selection.len() != expected {
                return Err(GameError::SelectionSize {
                    kind,
                    expected,
                    actual: selection.len(),
                });
            }
        }

        if self.is_ended() {
            return Err(GameError::GameDisabled);
        }

        self.state = SessionState::Validating;
        let use_grace = match self.check_funds() {
            Ok(use_grace) => use_grace,
            Err(err) => {
                self.state = SessionState::Idle;
                warn!("Session {} rejected round: {err}", self.id);
                return Err(err);
            }
        };

        let round = self.rounds_played + 1;
        let balance_before = self.wallet.balance();

        let drawn_regular = self.drawer.draw(PoolKind::Regular, &self.config.regular);
        let drawn_strong = self.drawer.draw(PoolKind::Strong, &self.config.strong);

        let selected_regular: Vec<Number> = regular.into_iter().collect();
        let selected_strong: Vec<Number> = strong.into_iter().collect();
        let matched_regular = matching_numbers(&drawn_regular, &selected_regular);
        let matched_strong = matching_numbers(&drawn_strong, &selected_strong);

        let prize = self
            .config
            .prize_table
            .prize_for(matched_regular.len(), matched_strong.len());

        // Cost and prize move the balance together or not at all.
        if let Err(err) = self.wallet.settle_round(round, prize, use_grace) {
            self.state = SessionState::Idle;
            warn!("Session {} failed to settle round {round}: {err}", self.id);
            return Err(err.into());
        }
        self.rounds_played = round;

        self.state = SessionState::Settled;
        let outcome = self.wallet.evaluate_post_round_policy(round);
        self.selections.clear();
        self.state = match outcome {
            PolicyOutcome::Disabled => SessionState::Ended,
            PolicyOutcome::Continue | PolicyOutcome::AutoReset => SessionState::Idle,
        };

        info!(
            "Session {} round {} settled: {}/{} matches, prize {:?}, balance {} ({})",
            self.id,
            round,
            matched_regular.len(),
            matched_strong.len(),
            prize,
            self.wallet.balance(),
            outcome
        );

        let detail = self.config.detailed_results.then(|| RoundDetail {
            selected_regular,
            selected_strong,
            matched_regular: matched_regular.clone(),
            matched_strong: matched_strong.clone(),
            balance_before,
        });

        Ok(RoundResult {
            round,
            drawn_regular,
            drawn_strong,
            matching_regular: matched_regular.len(),
            matching_strong: matched_strong.len(),
            prize,
            cost: self.config.round_cost,
            new_balance: self.wallet.balance(),
            outcome,
            session_continues: !self.is_ended(),
            detail,
        })
    }

    /// `Ok(true)` when the round may only go ahead on the first-round grace.
    fn check_funds(&self) -> GameResult<bool> {
        if self.wallet.can_afford() {
            return Ok(false);
        }
        if self.config.first_round_grace && self.wallet.is_first_round() {
            return Ok(true);
        }
        Err(GameError::InsufficientFunds {
            balance: self.wallet.balance(),
            cost: self.config.round_cost,
        })
    }

    /// End the game, returning the final balance.
    ///
    /// # Errors
    ///
    /// * `GameError::AlreadyEnded` - the session had already ended
    pub fn finish(&mut self) -> GameResult<Points> {
        if self.is_ended() {
            return Err(GameError::AlreadyEnded);
        }
        self.state = SessionState::Ended;
        self.selections.clear();
        info!(
            "Session {} finished after {} round(s) with balance {}",
            self.id,
            self.rounds_played,
            self.wallet.balance()
        );
        Ok(self.wallet.balance())
    }

    /// Restore the initial balance, clear selections, and re-open play.
    pub fn reset_session(&mut self) -> Points {
        self.selections.clear();
        self.rounds_played = 0;
        self.state = SessionState::Idle;
        let balance = self.wallet.reset();
        info!("Session {} reset", self.id);
        balance
    }
}
