//! Screen model for the terminal UI.
//!
//! [`Screen`] is the render adapter: it listens to the four outbound
//! channels and keeps a [`ScreenState`] the drawing code reads, and it turns
//! key presses into `PlayerInput` and `RestartGame` events. It never talks
//! to the board or the controller directly.

use super::input::{self, KeyAction};
use crossterm::event::KeyCode;
use derive_getters::Getters;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use tictactoe_core::{BOARD_SIZE, Channel, Event, EventBus, Handler};
use tracing::{debug, info, instrument};

/// Marker shown in cells nobody has played.
pub const EMPTY_CELL: &str = "_";

/// Whether the UI loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Keep reading keys.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Everything the UI draws.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ScreenState {
    /// Cell texts, [`EMPTY_CELL`] for empty cells.
    cells: [String; BOARD_SIZE],
    /// Cells on the winning line.
    highlight: [bool; BOARD_SIZE],
    /// Whose turn it is, e.g. "X's turn".
    turn_label: String,
    /// Game-over message while the notice is open.
    notice: Option<String>,
    /// Keyboard cursor cell.
    cursor: usize,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self {
            cells: std::array::from_fn(|_| EMPTY_CELL.to_string()),
            highlight: [false; BOARD_SIZE],
            turn_label: String::new(),
            notice: None,
            cursor: 4,
        }
    }
}

impl ScreenState {
    fn apply(&mut self, event: &Event) {
        match event {
            Event::UpdateBoard(snapshot) => {
                for (cell, slot) in self.cells.iter_mut().zip(snapshot.iter()) {
                    *cell = slot.unwrap_or(EMPTY_CELL).to_string();
                }
            }
            Event::PlayerChange(player) => {
                self.turn_label = format!("{}'s turn", player.symbol());
            }
            Event::GameWin(line) => {
                for &pos in line.iter().filter(|&&pos| pos < BOARD_SIZE) {
                    self.highlight[pos] = true;
                }
            }
            Event::GameOver(message) => {
                self.notice = Some(message.clone());
            }
            Event::PlayerInput(_) | Event::RestartGame => {}
        }
    }

    fn clear_board(&mut self) {
        for cell in &mut self.cells {
            *cell = EMPTY_CELL.to_string();
        }
        self.highlight = [false; BOARD_SIZE];
        self.notice = None;
    }
}

/// Terminal render adapter attached to an [`EventBus`].
pub struct Screen {
    state: Rc<RefCell<ScreenState>>,
    bus: Rc<EventBus>,
    handlers: Vec<(Channel, Handler)>,
}

impl Screen {
    /// Subscribes to the outbound channels.
    ///
    /// Attach before the controller is created so the opening turn label
    /// arrives.
    #[instrument(skip_all)]
    pub fn attach(bus: Rc<EventBus>) -> Self {
        let state = Rc::new(RefCell::new(ScreenState::default()));
        let weak: Weak<RefCell<ScreenState>> = Rc::downgrade(&state);
        let handler: Handler = Rc::new(move |event: &Event| {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().apply(event);
            }
        });

        let channels = [
            Channel::GameOver,
            Channel::UpdateBoard,
            Channel::GameWin,
            Channel::PlayerChange,
        ];
        let handlers = channels
            .into_iter()
            .map(|channel| {
                bus.subscribe(channel, [Rc::clone(&handler)]);
                (channel, Rc::clone(&handler))
            })
            .collect();

        Self {
            state,
            bus,
            handlers,
        }
    }

    /// Copy of the current screen state.
    pub fn view(&self) -> ScreenState {
        self.state.borrow().clone()
    }

    /// Publishes a move for `cell`.
    #[instrument(skip(self))]
    pub fn select(&self, cell: usize) {
        debug!("Cell selected");
        self.bus.publish(Event::PlayerInput(cell.into()));
    }

    /// Clears the board display, closes the notice and asks for a new game.
    #[instrument(skip(self))]
    pub fn restart(&self) {
        self.state.borrow_mut().clear_board();
        info!("Restart requested");
        self.bus.publish(Event::RestartGame);
    }

    /// Applies one key press.
    pub fn handle_key(&self, code: KeyCode) -> KeyOutcome {
        let notice_open = self.state.borrow().notice.is_some();
        match input::key_action(code, notice_open) {
            Some(KeyAction::Quit) => return KeyOutcome::Quit,
            Some(KeyAction::Select(cell)) => self.select(cell),
            Some(KeyAction::SelectCursor) => {
                let cursor = self.state.borrow().cursor;
                self.select(cursor);
            }
            Some(KeyAction::MoveCursor(key)) => {
                let mut state = self.state.borrow_mut();
                state.cursor = input::move_cursor(state.cursor, key);
            }
            Some(KeyAction::Restart) => self.restart(),
            None => {}
        }
        KeyOutcome::Continue
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        for (channel, handler) in self.handlers.drain(..) {
            self.bus.unsubscribe(channel, &handler);
        }
    }
}

impl fmt::Debug for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Screen")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
