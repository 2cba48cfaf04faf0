//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the controller composes them per turn.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, winning_line};
