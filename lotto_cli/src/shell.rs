//! Command dispatch: turns parsed commands into engine calls and rendered text.

use lotto::{GameSession, PoolKind, RandomDraw, SelectionState, Toggle};

use crate::{
    commands::Command,
    config::ClientConfig,
    logging,
    render::{self, HELP},
};

/// What the REPL should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub quit: bool,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quit: false,
        }
    }
}

/// The presentation shell around one game session.
#[derive(Debug)]
pub struct Shell {
    session: GameSession,
    currency: String,
}

impl Shell {
    /// Build a shell with random draws, seeded when the config carries a seed.
    pub fn new(config: ClientConfig) -> lotto::GameResult<Self> {
        let drawer = match config.seed {
            Some(seed) => RandomDraw::seeded(seed),
            None => RandomDraw::new(),
        };
        let session = GameSession::with_drawer(config.game, drawer)?;
        Ok(Self::with_session(session, config.currency))
    }

    pub fn with_session(session: GameSession, currency: String) -> Self {
        Self { session, currency }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn board(&self) -> String {
        render::render_board(&self.session, &self.currency)
    }

    pub fn handle(&mut self, command: Command) -> Reply {
        match command {
            Command::Pick(kind, numbers) => Reply::text(self.pick(kind, &numbers)),
            Command::Clear => {
                self.session.clear_selection();
                Reply::text(self.board())
            }
            Command::Play => Reply::text(self.play()),
            Command::Reset => {
                let balance = self.session.reset_session();
                Reply::text(format!(
                    "Game reset! Wallet restored to {balance} {}.\n\n{}",
                    self.currency,
                    self.board()
                ))
            }
            Command::Finish => match self.session.finish() {
                Ok(balance) => Reply::text(format!(
                    "Game has ended.\nYour final wallet balance is: {balance} {}.",
                    self.currency
                )),
                Err(err) => self.rejected("finish", &err),
            },
            Command::Balance => Reply::text(render::render_wallet(&self.session, &self.currency)),
            Command::History => Reply::text(render::render_history(
                self.session.wallet().history(),
                &self.currency,
            )),
            Command::Board => Reply::text(self.board()),
            Command::Help => Reply::text(HELP),
            Command::Quit => Reply {
                text: format!(
                    "Bye! You leave with {} {}.",
                    self.session.current_balance(),
                    self.currency
                ),
                quit: true,
            },
        }
    }

    fn pick(&mut self, kind: PoolKind, numbers: &[lotto::Number]) -> String {
        let mut notes = Vec::new();
        for &number in numbers {
            match self.session.toggle_selection(kind, number) {
                Ok(SelectionState { change, .. }) => {
                    if change == Toggle::Removed {
                        notes.push(format!("Removed {kind} {number}."));
                    }
                }
                Err(err) => {
                    logging::log_rejected("pick", &err.to_string());
                    notes.push(err.to_string());
                }
            }
        }

        let mut out = render::render_pool(&self.session, kind);
        if !notes.is_empty() {
            out.push_str(&notes.join("\n"));
        }
        out.trim_end().to_string()
    }

    fn play(&mut self) -> String {
        match self.session.submit_round() {
            Ok(result) => {
                logging::log_round(
                    &self.session.id().to_string(),
                    result.round,
                    result.prize,
                    result.new_balance,
                );
                format!(
                    "{}\n{}",
                    render::render_result(&result, &self.currency),
                    render::render_wallet(&self.session, &self.currency)
                )
            }
            Err(err) => self.rejected("play", &err).text,
        }
    }

    fn rejected(&self, action: &str, err: &lotto::GameError) -> Reply {
        logging::log_rejected(action, &err.to_string());
        Reply::text(err.to_string())
    }
}
