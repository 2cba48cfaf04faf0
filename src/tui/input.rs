//! Keyboard mapping for the terminal UI.

use crossterm::event::KeyCode;

/// What a key press asks the screen to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Pick a cell directly (digits 1-9 map to cells 0-8).
    Select(usize),
    /// Pick the cell under the cursor.
    SelectCursor,
    /// Move the cursor with an arrow key.
    MoveCursor(KeyCode),
    /// Start a new game (also closes the game-over notice).
    Restart,
    /// Leave the program.
    Quit,
}

/// Maps a key to an action.
///
/// While the game-over notice is open only quitting and closing the notice
/// are accepted, like a modal dialog.
pub fn key_action(code: KeyCode, notice_open: bool) -> Option<KeyAction> {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(KeyAction::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(KeyAction::Restart),
        KeyCode::Enter | KeyCode::Esc if notice_open => Some(KeyAction::Restart),
        _ if notice_open => None,
        KeyCode::Char(c @ '1'..='9') => Some(KeyAction::Select(c as usize - '1' as usize)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(KeyAction::SelectCursor),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(KeyAction::MoveCursor(code))
        }
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: usize, key: KeyCode) -> usize {
    let (row, col) = (cursor.min(8) / 3, cursor.min(8) % 3);

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        // No change for other keys
        _ => (row, col),
    };
    row * 3 + col
}
