//! Turn orchestration for tic-tac-toe.
//!
//! The controller reacts to two signals from the bus:
//!
//! - [`Event::PlayerInput`]: validate, place the active symbol, then publish
//!   either [`Event::GameWin`] + [`Event::GameOver`], a tie
//!   [`Event::GameOver`], or [`Event::PlayerChange`] for the next player.
//! - [`Event::RestartGame`]: clear the board and hand the turn to the first
//!   player again.
//!
//! Malformed input and illegal moves are dropped silently (logged at
//! `debug`); they never produce an event.
//!
//! A turn collects its outbound events and publishes them only after the
//! session is released. Handlers may therefore query the controller or
//! publish `PlayerInput`/`RestartGame` themselves; such signals are handled
//! immediately, nested inside the outer dispatch.

use crate::board::Board;
use crate::event_bus::{EventBus, Handler};
use crate::events::{BoardSnapshot, Channel, Event, MoveInput, WinningLine};
use crate::player::Player;
use crate::rules::{draw, win};
use serde::Serialize;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::{debug, info, instrument, warn};

/// Message published on [`Event::GameOver`] when the board fills up.
pub const TIE_MESSAGE: &str = "The game ended in a tie.";

/// Where the current game stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// Waiting for the active player to move.
    AwaitingInput,
    /// A player completed a line. Terminal until restart.
    Won {
        /// The winner's symbol.
        symbol: String,
        /// The line that won.
        line: WinningLine,
    },
    /// The board filled up without a line. Terminal until restart.
    Tie,
}

impl Phase {
    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, Phase::AwaitingInput)
    }
}

#[derive(Debug)]
struct Session {
    board: Board,
    players: [Player; 2],
    active: usize,
    phase: Phase,
    bus: Rc<EventBus>,
    outbox: Vec<Event>,
}

impl Session {
    #[instrument(skip(self))]
    fn initialize(&mut self) {
        self.board.reset();
        self.phase = Phase::AwaitingInput;
        self.switch_player(0);
        info!("New game started");
    }

    fn switch_player(&mut self, index: usize) {
        self.active = index % self.players.len();
        let player = self.players[self.active].clone();
        debug!(player = %player, "Active player changed");
        self.outbox.push(Event::PlayerChange(player));
    }

    #[instrument(skip_all, fields(input = %input))]
    fn play_round(&mut self, input: &MoveInput) {
        let Some(value) = input.parse() else {
            debug!("Ignoring non-integer input");
            return;
        };
        if self.phase.is_over() {
            debug!(phase = ?self.phase, "Ignoring input, game is over");
            return;
        }
        let Ok(position) = usize::try_from(value) else {
            debug!(value, "Ignoring negative position");
            return;
        };

        let symbol = self.players[self.active].symbol().to_owned();
        match self.board.occupy(position, &symbol) {
            Ok(update) => self.outbox.push(update),
            Err(e) => {
                debug!(error = %e, "Move rejected");
                return;
            }
        }

        self.conclude_round(&symbol);
    }

    fn conclude_round(&mut self, symbol: &str) {
        if let Some(line) = win::winning_line(&self.board, symbol) {
            info!(symbol, ?line, "Game won");
            self.phase = Phase::Won {
                symbol: symbol.to_owned(),
                line,
            };
            self.outbox.push(Event::GameWin(line));
            self.outbox.push(Event::GameOver(format!("The winner is {symbol}")));
        } else if draw::is_full(&self.board) {
            info!("Game tied");
            self.phase = Phase::Tie;
            self.outbox.push(Event::GameOver(TIE_MESSAGE.to_string()));
        } else {
            self.switch_player(self.active + 1);
        }
    }
}

/// Drives turns for one game session.
///
/// Owns the [`Board`] and the two [`Player`]s. Everything it learns about
/// the outside world arrives through the bus; the bus only holds weak
/// references back to the controller, so dropping the controller ends its
/// participation.
pub struct GameController {
    session: Rc<RefCell<Session>>,
    bus: Rc<EventBus>,
    handlers: Vec<(Channel, Handler)>,
}

impl GameController {
    /// Starts a game and subscribes to input and restart signals.
    ///
    /// Publishes [`Event::PlayerChange`] for the first player before
    /// returning, so adapters must be subscribed beforehand to see it.
    #[instrument(skip_all, fields(players = ?players))]
    pub fn new(bus: Rc<EventBus>, board: Board, players: [Player; 2]) -> Self {
        let session = Rc::new(RefCell::new(Session {
            board,
            players,
            active: 0,
            phase: Phase::AwaitingInput,
            bus: Rc::clone(&bus),
            outbox: Vec::new(),
        }));
        with_session(&Rc::downgrade(&session), Session::initialize);

        let on_input = bus.on(Channel::PlayerInput, {
            let session = Rc::downgrade(&session);
            move |event| {
                if let Event::PlayerInput(input) = event {
                    with_session(&session, |s| s.play_round(input));
                }
            }
        });
        let on_restart = bus.on(Channel::RestartGame, {
            let session = Rc::downgrade(&session);
            move |_| with_session(&session, Session::initialize)
        });

        Self {
            session,
            bus,
            handlers: vec![
                (Channel::PlayerInput, on_input),
                (Channel::RestartGame, on_restart),
            ],
        }
    }

    /// Unsubscribes from the bus. The game state stays readable.
    #[instrument(skip(self))]
    pub fn detach(&mut self) {
        for (channel, handler) in self.handlers.drain(..) {
            self.bus.unsubscribe(channel, &handler);
        }
    }

    /// The player whose turn it is (the last mover once the game is over).
    pub fn active_player(&self) -> Player {
        let session = self.session.borrow();
        session.players[session.active].clone()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.session.borrow().phase.clone()
    }

    /// Copy of the board.
    pub fn board_snapshot(&self) -> BoardSnapshot {
        self.session.borrow().board.snapshot()
    }

    /// Number of empty positions.
    pub fn empty_count(&self) -> usize {
        self.session.borrow().board.empty_count()
    }
}

impl Drop for GameController {
    fn drop(&mut self) {
        self.detach();
    }
}

impl fmt::Debug for GameController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameController")
            .field("session", &self.session)
            .field("subscriptions", &self.handlers.len())
            .finish()
    }
}

/// Runs `f` on the session if it is alive, then publishes whatever it
/// queued once the borrow is released.
fn with_session(session: &Weak<RefCell<Session>>, f: impl FnOnce(&mut Session)) {
    let Some(session) = session.upgrade() else {
        return;
    };
    let Ok(mut guard) = session.try_borrow_mut() else {
        warn!("Ignoring signal while the session is borrowed");
        return;
    };
    f(&mut guard);
    let bus = Rc::clone(&guard.bus);
    let outbox = std::mem::take(&mut guard.outbox);
    drop(guard);

    for event in outbox {
        bus.publish(event);
    }
}
