//! Structured logging configuration.
//!
//! Logs go to stderr so they never interleave with the board on stdout. The
//! engine logs through the `log` facade; `tracing-subscriber` picks those
//! records up through its `tracing-log` bridge.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is unset: quiet shell, engine warnings only.
pub const DEFAULT_FILTER: &str = "warn,lotto_cli=info";

/// Initialize structured logging
///
/// Configurable log levels via RUST_LOG env var, e.g. `RUST_LOG=lotto=debug`
/// to watch every toggle, draw, and ledger entry.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::debug!("Structured logging initialized");
}

/// Log a settled round with structured fields
pub fn log_round(session_id: &str, round: u64, prize: Option<i64>, balance: i64) {
    tracing::info!(
        session_id = session_id,
        round = round,
        prize = prize,
        balance = balance,
        "Round settled"
    );
}

/// Log a player action the engine rejected
pub fn log_rejected(action: &str, reason: &str) {
    tracing::warn!(action = action, reason = reason, "Action rejected");
}
