//! Terminal frontend.

mod input;
mod screen;
mod ui;

pub use input::{KeyAction, key_action, move_cursor};
pub use screen::{EMPTY_CELL, KeyOutcome, Screen, ScreenState};

use crate::config::GameConfig;
use crate::logging;
use anyhow::Result;
use crossterm::{
    event::{self, Event as TermEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::rc::Rc;
use tictactoe_core::{Board, EventBus, GameController};
use tracing::{error, info, instrument};

/// Runs the terminal UI until the user quits.
pub fn run_tui(config: &GameConfig) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    logging::init_file_tracing(config.log_file(), config.log_filter())?;

    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal, config);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Wires one session and pumps key presses into it.
#[instrument(skip_all)]
fn run_game(terminal: &mut Terminal<CrosstermBackend<Stdout>>, config: &GameConfig) -> Result<()> {
    let bus = Rc::new(EventBus::new());
    let screen = Screen::attach(Rc::clone(&bus));
    let board = Board::new(Rc::clone(&bus));
    let _controller = GameController::new(Rc::clone(&bus), board, config.to_players());

    loop {
        let view = screen.view();
        terminal.draw(|frame| ui::draw(frame, &view))?;

        if let TermEvent::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && screen.handle_key(key.code) == KeyOutcome::Quit
        {
            info!("User quit");
            return Ok(());
        }
    }
}
