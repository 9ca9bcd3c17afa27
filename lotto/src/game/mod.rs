//! Game-round engine - selections, draws, scoring, prizes, and the session FSM.
//!
//! This module provides:
//! - Per-pool selection tracking with live limit enforcement
//! - Duplicate-free random (or scripted) draws
//! - Match scoring and prize resolution from an ordered rule table
//! - The session state machine that settles rounds against the wallet

// Submodules
pub mod config;
pub mod draw;
pub mod entities;
pub mod errors;
pub mod functional;
pub mod prizes;
pub mod selection;
pub mod state_machine;

pub use config::GameConfig;
pub use draw::{DrawSource, Drawer, RandomDraw, ScriptedDraw};
pub use errors::{GameError, GameResult};
pub use prizes::{PrizeRule, PrizeTable};
pub use selection::{SelectionState, SelectionTracker, Toggle};
pub use state_machine::{GameSession, SessionState};
