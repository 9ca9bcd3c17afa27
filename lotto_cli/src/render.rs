//! Plain-text rendering of the board, round results, and wallet history.

use lotto::{
    GameSession, PolicyOutcome, PoolKind, RoundResult,
    wallet::{EntryType, WalletEntry},
};
use std::fmt::Write;

const NUMBERS_PER_ROW: usize = 10;

/// Render one pool as a grid. Picked numbers are bracketed, numbers that
/// can't be picked right now are shown as `-`.
pub fn render_pool(session: &GameSession, kind: PoolKind) -> String {
    let pool = session.config().pool(kind);
    let selected = session.current_selection(kind);

    let mut out = format!("{kind} ({}/{})\n", selected.len(), pool.limit);
    let numbers: Vec<_> = pool.numbers().collect();
    for row in numbers.chunks(NUMBERS_PER_ROW) {
        let cells: Vec<String> = row
            .iter()
            .map(|&n| {
                if selected.contains(&n) {
                    format!("[{n:>2}]")
                } else if session.is_selectable(kind, n) {
                    format!(" {n:>2} ")
                } else {
                    "  - ".to_string()
                }
            })
            .collect();
        out.push_str(cells.join("").trim_end());
        out.push('\n');
    }
    out
}

pub fn render_wallet(session: &GameSession, currency: &str) -> String {
    format!("Wallet: {} {currency}", session.current_balance())
}

/// The full board: both pools, the wallet, and a note when play is locked.
pub fn render_board(session: &GameSession, currency: &str) -> String {
    let mut out = String::new();
    for kind in PoolKind::ALL {
        out.push_str(&render_pool(session, kind));
        out.push('\n');
    }
    out.push_str(&render_wallet(session, currency));
    if session.is_ended() {
        out.push_str("\nThe game has ended. Type 'reset' to play again.");
    }
    out
}

pub fn render_result(result: &RoundResult, currency: &str) -> String {
    let mut out = String::new();
    // Writing to a String never fails.
    let _ = writeln!(out, "Round {}", result.round);
    let _ = writeln!(out, "{}", result.draw_summary());
    match result.prize {
        Some(prize) => {
            let _ = write!(out, "Congratulations! You won {prize} {currency}!");
        }
        None => out.push_str("Sorry, no prize this time."),
    }

    if let Some(detail) = &result.detail {
        let _ = write!(
            out,
            "\n  picked   regular {:?} strong {:?}\n  matched  regular {:?} strong {:?}\n  balance  {} -> {} {currency}",
            detail.selected_regular,
            detail.selected_strong,
            detail.matched_regular,
            detail.matched_strong,
            detail.balance_before,
            result.new_balance,
        );
    }

    match result.outcome {
        PolicyOutcome::Continue => {}
        PolicyOutcome::AutoReset => {
            let _ = write!(
                out,
                "\nYour wallet ran low and was restored to {} {currency}.",
                result.new_balance
            );
        }
        PolicyOutcome::Disabled => {
            let _ = write!(
                out,
                "\nInsufficient points to continue playing. The game is disabled until you reset."
            );
        }
    }
    out
}

pub fn render_history(entries: &[WalletEntry], currency: &str) -> String {
    if entries.is_empty() {
        return "No wallet activity yet.".to_string();
    }

    entries
        .iter()
        .map(|entry| {
            let label = match entry.entry_type {
                EntryType::RoundCost => "round cost",
                EntryType::Prize => "prize",
                EntryType::Reset => "reset",
                EntryType::AutoReset => "auto-reset",
            };
            let round = entry
                .round
                .map(|r| format!("#{r}"))
                .unwrap_or_else(|| "-".to_string());
            format!(
                "{} {round:>4} {label:<10} {:>+6} -> {} {currency}",
                entry.created_at.format("%H:%M:%S"),
                entry.amount,
                entry.balance_after
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub const HELP: &str = "\
Commands:
  pick r N [N...]   Toggle regular numbers (alias: p)
  pick s N          Toggle strong number
  clear             Drop all picks
  play              Submit your picks and draw (aliases: check, gamble)
  reset             Restore the starting wallet and re-open the game
  finish            End the game and show the final balance
  balance           Show the wallet
  history           Show every wallet change
  board             Show the number pools (or just press Enter)
  help              Show this help
  quit              Leave";
