//! Event kinds carried by the bus.
//!
//! Events are domain facts, not side effects. Each kind carries its own
//! payload; [`Channel`] is the payload-free discriminant the bus uses as a
//! registry key.

use crate::board::BOARD_SIZE;
use crate::player::Player;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumDiscriminants, EnumIter};

/// Three board positions forming a winning line.
pub type WinningLine = [usize; 3];

/// Everything that travels over the [`EventBus`](crate::EventBus).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, EnumDiscriminants)]
#[serde(tag = "event", content = "payload")]
#[strum_discriminants(name(Channel))]
#[strum_discriminants(derive(Hash, Display, EnumIter))]
pub enum Event {
    /// A user picked a position. The payload is raw input text; the
    /// controller decides whether it is a usable integer.
    PlayerInput(MoveInput),
    /// A user asked for a fresh game.
    RestartGame,
    /// The board changed; carries a full copy of the nine slots.
    UpdateBoard(BoardSnapshot),
    /// The active player changed.
    PlayerChange(Player),
    /// A player completed a line.
    GameWin(WinningLine),
    /// The game ended; carries a human-readable message.
    GameOver(String),
}

/// Raw position input as an adapter received it.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, derive_more::From,
)]
#[serde(transparent)]
pub struct MoveInput(String);

impl MoveInput {
    /// Returns the raw text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the input as an integer, `None` if it is not one.
    ///
    /// Range is not checked here: `-1` and `12` parse fine and are
    /// rejected later by the board.
    pub fn parse(&self) -> Option<i64> {
        self.0.trim().parse().ok()
    }
}

impl From<&str> for MoveInput {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

impl From<usize> for MoveInput {
    fn from(position: usize) -> Self {
        Self(position.to_string())
    }
}

/// Copy of the nine board slots, `None` for empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardSnapshot([Option<String>; BOARD_SIZE]);

impl BoardSnapshot {
    pub(crate) fn new(slots: [Option<String>; BOARD_SIZE]) -> Self {
        Self(slots)
    }

    /// Symbol at `position`, `None` if empty or off the board.
    pub fn get(&self, position: usize) -> Option<&str> {
        self.0.get(position)?.as_deref()
    }

    /// All slots in row-major order.
    pub fn slots(&self) -> &[Option<String>; BOARD_SIZE] {
        &self.0
    }

    /// Iterates slots in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Option<&str>> {
        self.0.iter().map(Option::as_deref)
    }
}
