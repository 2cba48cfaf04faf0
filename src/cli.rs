//! Command-line interface for tictactoe_bus.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe over an in-process event bus
#[derive(Parser, Debug)]
#[command(name = "tictactoe_bus")]
#[command(about = "Two-player tic-tac-toe driven by an event bus", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the game configuration file
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Feed moves without a UI and print every event as a JSON line
    Script {
        /// Inputs in order: a position (0-8) per move, or `restart`
        #[arg(required = true, allow_hyphen_values = true)]
        moves: Vec<String>,
    },
}
