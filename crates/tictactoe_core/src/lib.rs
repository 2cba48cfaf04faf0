//! Event-driven tic-tac-toe core.
//!
//! Three collaborators talk to each other only through an [`EventBus`]:
//!
//! - **[`Board`]**: owns the nine slots and the set of empty positions,
//!   publishes [`Event::UpdateBoard`] after every placement.
//! - **[`GameController`]**: listens for [`Event::PlayerInput`] and
//!   [`Event::RestartGame`], rotates players, detects wins and ties.
//! - **Render adapters** (outside this crate): publish input events and
//!   react to [`Event::PlayerChange`], [`Event::GameWin`] and
//!   [`Event::GameOver`].
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use tictactoe_core::{Board, Channel, Event, EventBus, GameController, Player};
//!
//! let bus = Rc::new(EventBus::new());
//! bus.on(Channel::GameOver, |event| println!("{event:?}"));
//!
//! let board = Board::new(Rc::clone(&bus));
//! let controller = GameController::new(Rc::clone(&bus), board, Player::defaults());
//!
//! bus.publish(Event::PlayerInput("4".into()));
//! assert_eq!(controller.active_player().symbol(), "O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod controller;
mod event_bus;
mod events;
mod player;
pub mod rules;

pub use board::{BOARD_SIZE, Board, PlaceError};
pub use controller::{GameController, Phase, TIE_MESSAGE};
pub use event_bus::{EventBus, Handler};
pub use events::{BoardSnapshot, Channel, Event, MoveInput, WinningLine};
pub use player::Player;
