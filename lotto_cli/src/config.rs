//! Shell configuration management.
//!
//! Consolidates environment variable reads, the optional JSON game file, and
//! command-line overrides into one validated configuration. Precedence, from
//! lowest to highest: built-in defaults, JSON file, environment, CLI flags.

use lotto::{BalancePolicy, GameConfig, GameError};
use std::path::{Path, PathBuf};

/// Complete shell configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Engine configuration handed to the session
    pub game: GameConfig,
    /// Fixed RNG seed for reproducible draws
    pub seed: Option<u64>,
    /// Label printed after point amounts
    pub currency: String,
}

/// Values given on the command line. `None`/`false` means "not given".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_path: Option<PathBuf>,
    pub seed: Option<u64>,
    pub policy: Option<BalancePolicy>,
    pub detailed: bool,
    pub grace: bool,
}

impl ClientConfig {
    /// Load configuration from the JSON file, environment variables, and CLI
    ///
    /// # Errors
    ///
    /// Returns error if the file can't be read or parsed, an environment
    /// variable holds an invalid policy, or the resulting game configuration
    /// doesn't validate
    pub fn load(overrides: CliOverrides) -> Result<Self, ConfigError> {
        let config_path = overrides
            .config_path
            .or_else(|| std::env::var("LOTTO_CONFIG").ok().map(PathBuf::from));

        let mut game = match config_path {
            Some(path) => load_game_file(&path)?,
            None => GameConfig::default(),
        };

        game.round_cost = parse_env_or("LOTTO_ROUND_COST", game.round_cost);
        game.initial_balance = parse_env_or("LOTTO_INITIAL_BALANCE", game.initial_balance);
        game.min_playable_balance = parse_env_or("LOTTO_MIN_BALANCE", game.min_playable_balance);
        game.first_round_grace = parse_env_or("LOTTO_FIRST_ROUND_GRACE", game.first_round_grace);
        game.detailed_results = parse_env_or("LOTTO_DETAILED", game.detailed_results);

        if let Ok(value) = std::env::var("LOTTO_POLICY") {
            game.policy = value.parse().map_err(|reason| ConfigError::Invalid {
                var: "LOTTO_POLICY".to_string(),
                reason,
            })?;
        }

        if let Some(policy) = overrides.policy {
            game.policy = policy;
        }
        if overrides.detailed {
            game.detailed_results = true;
        }
        if overrides.grace {
            game.first_round_grace = true;
        }

        let seed = overrides
            .seed
            .or_else(|| std::env::var("LOTTO_SEED").ok().and_then(|v| v.parse().ok()));

        let currency = std::env::var("LOTTO_CURRENCY").unwrap_or_else(|_| "pts".to_string());

        let config = ClientConfig {
            game,
            seed,
            currency,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.game.validate()?;

        if self.currency.trim().is_empty() {
            return Err(ConfigError::Invalid {
                var: "LOTTO_CURRENCY".to_string(),
                reason: "Must not be blank".to_string(),
            });
        }

        Ok(())
    }
}

fn load_game_file(path: &Path) -> Result<GameConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::File {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    GameConfig::from_json(&contents).map_err(|e| ConfigError::File {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },

    #[error("Failed to load game config from {path}: {reason}")]
    File { path: String, reason: String },

    #[error(transparent)]
    Game(#[from] GameError),
}

/// Helper to parse environment variable with default fallback
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
