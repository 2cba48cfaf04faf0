//! tictactoe_bus - command-line entry point.

use anyhow::Result;
use clap::Parser;
use tictactoe_bus::{Cli, Command, GameConfig, ScriptRunner, init_stderr_tracing, run_tui};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(Some(cli.config.as_path()))?;

    match cli.command {
        Command::Play => run_tui(&config),
        Command::Script { moves } => run_script(&config, &moves),
    }
}

/// Plays the given inputs headlessly and prints each event as JSON.
#[instrument(skip(config))]
fn run_script(config: &GameConfig, moves: &[String]) -> Result<()> {
    init_stderr_tracing(config.log_filter());
    info!(count = moves.len(), "Running scripted game");

    let runner = ScriptRunner::new(config.to_players());
    runner.run(moves);

    for line in runner.json_lines()? {
        println!("{}", line);
    }
    Ok(())
}
