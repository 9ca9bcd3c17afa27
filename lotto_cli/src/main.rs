//! A terminal shell for the lotto game engine.
//!
//! The shell owns all rendering and messages; the engine owns every rule.

use anyhow::{Context, Result};
use ctrlc::set_handler;
use pico_args::Arguments;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use lotto::BalancePolicy;
use lotto_cli::{
    commands::parse_command,
    config::{CliOverrides, ClientConfig},
    logging,
    render::HELP,
    shell::Shell,
};

const USAGE: &str = "\
Play the numbers lottery in your terminal

USAGE:
  lotto_cli [OPTIONS]

OPTIONS:
  --config PATH         JSON game configuration  [default: env LOTTO_CONFIG or built-in]
  --seed N              Seed draws for a reproducible session  [default: env LOTTO_SEED]
  --policy POLICY       auto-reset | disable  [default: env LOTTO_POLICY or disable]

FLAGS:
  --detailed            Show matched numbers after every round
  --grace               Allow the first round even when the wallet can't cover it
  -h, --help            Print help information

ENVIRONMENT:
  LOTTO_ROUND_COST      Points per round
  LOTTO_INITIAL_BALANCE Starting wallet
  LOTTO_MIN_BALANCE     Balance below which the policy applies
  LOTTO_CURRENCY        Label for point amounts  [default: pts]
  RUST_LOG              Log filter (logs go to stderr)
";

fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{USAGE}");
        std::process::exit(0);
    }

    let overrides = CliOverrides {
        config_path: pargs.opt_value_from_str::<_, PathBuf>("--config")?,
        seed: pargs.opt_value_from_str("--seed")?,
        policy: pargs.opt_value_from_str::<_, BalancePolicy>("--policy")?,
        detailed: pargs.contains("--detailed"),
        grace: pargs.contains("--grace"),
    };

    // Catching signals for exit.
    set_handler(|| std::process::exit(0))?;

    logging::init();

    let config = ClientConfig::load(overrides).context("Failed to load configuration")?;
    tracing::info!(
        round_cost = config.game.round_cost,
        initial_balance = config.game.initial_balance,
        policy = %config.game.policy,
        seeded = config.seed.is_some(),
        "Starting lotto shell"
    );

    let mut shell = Shell::new(config).context("Failed to start game session")?;
    run(&mut shell)
}

fn run(shell: &mut Shell) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}\n\n{HELP}\n", shell.board())?;

    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read input")?;

        match parse_command(&line) {
            Ok(command) => {
                let reply = shell.handle(command);
                writeln!(stdout, "{}\n", reply.text)?;
                if reply.quit {
                    break;
                }
            }
            Err(e) => writeln!(stdout, "{e}\n")?,
        }
    }

    Ok(())
}
