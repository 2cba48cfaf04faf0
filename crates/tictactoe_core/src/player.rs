//! Player identity.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player, identified by the symbol it marks the board with.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new, derive_more::Display,
)]
#[display("{}", symbol)]
pub struct Player {
    #[new(into)]
    symbol: String,
}

impl Player {
    /// Returns the player's board symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The standard pair: "X" moves first, "O" second.
    #[instrument]
    pub fn defaults() -> [Player; 2] {
        [Player::new("X"), Player::new("O")]
    }
}
