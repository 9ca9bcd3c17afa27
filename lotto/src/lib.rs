//! # Lotto
//!
//! A numbers-lottery game-round engine.
//!
//! A player picks an exact number of "regular" and "strong" numbers from two
//! fixed pools, pays a round cost from a virtual wallet, and wins a prize when
//! the match counts against a random draw equal one of the configured prize
//! rules. Rendering is left entirely to the caller; the engine only exposes
//! state and results.
//!
//! ## Round lifecycle
//!
//! A [`GameSession`] moves through these states:
//!
//! - **Idle**: waiting for the player to pick numbers and submit
//! - **Validating**: checking selection sizes, session state, and funds
//! - **Settled**: cost charged, numbers drawn, prize credited, wallet policy applied
//! - **Ended**: play is locked (finished, or disabled by an empty wallet) until a reset
//!
//! ## Core Modules
//!
//! - [`game`]: Selections, draws, scoring, prizes, and the session state machine
//! - [`wallet`]: The points ledger and its minimum-balance policy
//!
//! ## Example
//!
//! ```
//! use lotto::{GameConfig, GameSession, PoolKind, ScriptedDraw};
//!
//! let draws = ScriptedDraw::new().round(1..=6, [1]);
//! let mut session = GameSession::with_drawer(GameConfig::default(), draws).unwrap();
//!
//! for n in 1..=6 {
//!     session.toggle_selection(PoolKind::Regular, n).unwrap();
//! }
//! session.toggle_selection(PoolKind::Strong, 1).unwrap();
//!
//! let result = session.submit_round().unwrap();
//! assert_eq!(result.prize, Some(1000));
//! assert_eq!(session.current_balance(), 1000 - 300 + 1000);
//! ```

/// Core game logic, entities, and session state machine.
pub mod game;
pub use game::{
    DrawSource, Drawer, GameConfig, GameError, GameResult, GameSession, PrizeRule, PrizeTable,
    RandomDraw, ScriptedDraw, SelectionState, SelectionTracker, SessionState, Toggle,
    entities::{
        self, Number, Points, PolicyOutcome, Pool, PoolKind, RoundDetail, RoundResult, Selection,
    },
    functional,
};

/// Virtual wallet and ledger.
pub mod wallet;
pub use wallet::{BalancePolicy, WalletError, WalletLedger};
