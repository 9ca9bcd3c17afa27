use lotto::{Number, PoolKind};
use std::fmt;

/// A player action typed into the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Toggle one or more numbers in a pool.
    Pick(PoolKind, Vec<Number>),
    /// Drop every current pick.
    Clear,
    /// Submit the current picks as a round.
    Play,
    /// Restore the initial balance and re-open play.
    Reset,
    /// End the game and report the final balance.
    Finish,
    Balance,
    History,
    Board,
    Help,
    Quit,
}

/// Errors that can occur during command parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Pick command without a pool or numbers.
    PickMissingArgs,
    /// Pool name other than regular/strong.
    UnknownPool(String),
    /// Not a number between 0 and 255.
    InvalidNumber(String),
    /// Unrecognized command.
    UnrecognizedCommand(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PickMissingArgs => write!(
                f,
                "Pick needs a pool and at least one number (e.g., 'pick r 7 12' or 'pick s 3')"
            ),
            Self::UnknownPool(pool) => write!(
                f,
                "Unknown pool '{}'. Use 'r'/'regular' or 's'/'strong'",
                pool
            ),
            Self::InvalidNumber(value) => write!(f, "Invalid number '{}'", value),
            Self::UnrecognizedCommand(cmd) => write!(
                f,
                "Unrecognized command '{}'. Type 'help' to see available commands",
                cmd
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a command string into a [`Command`].
///
/// # Examples
///
/// ```
/// use lotto::PoolKind;
/// use lotto_cli::commands::{Command, parse_command};
///
/// assert_eq!(parse_command("play"), Ok(Command::Play));
/// assert_eq!(
///     parse_command("pick r 4 8"),
///     Ok(Command::Pick(PoolKind::Regular, vec![4, 8]))
/// );
/// ```
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();

    // Try single-word commands first
    match trimmed {
        "play" | "check" | "gamble" => return Ok(Command::Play),
        "clear" => return Ok(Command::Clear),
        "reset" => return Ok(Command::Reset),
        "finish" => return Ok(Command::Finish),
        "balance" | "wallet" => return Ok(Command::Balance),
        "history" => return Ok(Command::History),
        "board" | "" => return Ok(Command::Board),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    let parts: Vec<&str> = trimmed.split_ascii_whitespace().collect();
    match parts.first() {
        Some(&"pick") | Some(&"p") => parse_pick_command(&parts),
        _ => Err(ParseError::UnrecognizedCommand(trimmed.to_string())),
    }
}

/// Parse a pick command: "pick POOL N [N...]"
fn parse_pick_command(parts: &[&str]) -> Result<Command, ParseError> {
    let pool = parts.get(1).ok_or(ParseError::PickMissingArgs)?;
    let kind = match pool.to_lowercase().as_str() {
        "r" | "regular" => PoolKind::Regular,
        "s" | "strong" => PoolKind::Strong,
        _ => return Err(ParseError::UnknownPool(pool.to_string())),
    };

    let numbers = parts[2..]
        .iter()
        .map(|value| {
            value
                .parse::<Number>()
                .map_err(|_| ParseError::InvalidNumber(value.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if numbers.is_empty() {
        return Err(ParseError::PickMissingArgs);
    }
    Ok(Command::Pick(kind, numbers))
}
