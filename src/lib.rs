//! Tic-tac-toe over an in-process event bus.
//!
//! The game logic lives in [`tictactoe_core`]; this crate adds what a
//! runnable program needs around it.
//!
//! # Architecture
//!
//! - **Config**: TOML game settings (player symbols, logging)
//! - **TUI**: ratatui render adapter speaking the bus contract
//! - **Script**: headless adapter printing events as JSON lines
//! - **CLI**: `play` and `script` subcommands
//!
//! # Example
//!
//! ```
//! use tictactoe_bus::{GameConfig, ScriptRunner};
//!
//! let runner = ScriptRunner::new(GameConfig::default().to_players());
//! runner.run(["0", "3", "1", "4", "2"]);
//! assert!(runner.controller().phase().is_over());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod logging;
mod script;
mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Logging setup
pub use logging::{init_file_tracing, init_stderr_tracing};

// Crate-level exports - Headless adapter
pub use script::{OUTBOUND_CHANNELS, RESTART_TOKEN, ScriptRunner};

// Crate-level exports - Terminal adapter
pub use tui::{
    EMPTY_CELL, KeyAction, KeyOutcome, Screen, ScreenState, key_action, move_cursor, run_tui,
};
