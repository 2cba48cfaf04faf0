//! Board occupancy.

use crate::event_bus::EventBus;
use crate::events::{BoardSnapshot, Event};
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, instrument};

/// Number of positions on the board.
pub const BOARD_SIZE: usize = 9;

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// The position already holds a symbol.
    #[display("Position {} is already occupied", _0)]
    Occupied(usize),

    /// The position is not on the board.
    #[display("Position {} is outside the board (0-8)", _0)]
    OutOfRange(usize),
}

impl std::error::Error for PlaceError {}

/// The nine slots plus the set of positions still empty.
///
/// A position is in the empty set if and only if its slot is `None`.
/// [`place`](Board::place) publishes [`Event::UpdateBoard`] on success.
#[derive(Debug)]
pub struct Board {
    slots: [Option<String>; BOARD_SIZE],
    empty: HashSet<usize>,
    bus: Rc<EventBus>,
}

impl Board {
    /// Creates an empty board that reports changes on `bus`.
    #[instrument(skip(bus))]
    pub fn new(bus: Rc<EventBus>) -> Self {
        Self {
            slots: Default::default(),
            empty: (0..BOARD_SIZE).collect(),
            bus,
        }
    }

    /// Empties every slot.
    ///
    /// No event is published; the controller announces the new game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.slots = Default::default();
        self.empty = (0..BOARD_SIZE).collect();
        debug!("Board reset");
    }

    /// Writes `symbol` at `position` if that position is empty.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::OutOfRange`] for positions past the board and
    /// [`PlaceError::Occupied`] for taken positions. The board is unchanged
    /// and nothing is published in either case.
    #[instrument(skip(self))]
    pub fn place(&mut self, position: usize, symbol: &str) -> Result<(), PlaceError> {
        let update = self.occupy(position, symbol)?;
        self.bus.publish(update);
        Ok(())
    }

    /// Performs a placement and hands back the [`Event::UpdateBoard`] it
    /// owes, leaving publication to the caller.
    pub(crate) fn occupy(&mut self, position: usize, symbol: &str) -> Result<Event, PlaceError> {
        if position >= BOARD_SIZE {
            return Err(PlaceError::OutOfRange(position));
        }
        if !self.empty.remove(&position) {
            return Err(PlaceError::Occupied(position));
        }

        self.slots[position] = Some(symbol.to_owned());
        debug_assert!(self.is_consistent(), "Board slots and empty set disagree");
        debug!(board = %self, remaining = self.empty.len(), "Symbol placed");

        Ok(Event::UpdateBoard(self.snapshot()))
    }

    /// Symbol at `position`, `None` if empty or off the board.
    pub fn symbol_at(&self, position: usize) -> Option<&str> {
        self.slots.get(position)?.as_deref()
    }

    /// Whether `position` is on the board and still free.
    pub fn is_vacant(&self, position: usize) -> bool {
        self.empty.contains(&position)
    }

    /// Number of empty positions.
    pub fn empty_count(&self) -> usize {
        self.empty.len()
    }

    /// Copies the nine slots.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::new(self.slots.clone())
    }

    fn is_consistent(&self) -> bool {
        (0..BOARD_SIZE).all(|pos| self.slots[pos].is_none() == self.empty.contains(&pos))
            && self.empty.iter().all(|&pos| pos < BOARD_SIZE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pos, slot) in self.slots.iter().enumerate() {
            if pos > 0 && pos % 3 == 0 {
                f.write_str("/")?;
            }
            f.write_str(slot.as_deref().unwrap_or("_"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Channel;
    use std::cell::RefCell;

    fn recording_board() -> (Board, Rc<RefCell<Vec<BoardSnapshot>>>) {
        let bus = Rc::new(EventBus::new());
        let updates = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&updates);
        bus.on(Channel::UpdateBoard, move |event| {
            if let Event::UpdateBoard(snapshot) = event {
                sink.borrow_mut().push(snapshot.clone());
            }
        });
        (Board::new(bus), updates)
    }

    #[test]
    fn test_new_board_is_empty() {
        let (board, _) = recording_board();
        assert_eq!(board.empty_count(), BOARD_SIZE);
        for pos in 0..BOARD_SIZE {
            assert_eq!(board.symbol_at(pos), None);
            assert!(board.is_vacant(pos));
        }
    }

    #[test]
    fn test_place_fills_slot_and_publishes() {
        let (mut board, updates) = recording_board();
        board.place(4, "X").unwrap();

        assert_eq!(board.symbol_at(4), Some("X"));
        assert_eq!(board.empty_count(), 8);
        assert!(!board.is_vacant(4));

        let updates = updates.borrow();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].get(4), Some("X"));
        assert_eq!(updates[0].iter().flatten().count(), 1);
    }

    #[test]
    fn test_place_twice_rejected_without_event() {
        let (mut board, updates) = recording_board();
        board.place(0, "X").unwrap();
        let before = board.snapshot();

        assert_eq!(board.place(0, "O"), Err(PlaceError::Occupied(0)));
        assert_eq!(board.snapshot(), before);
        assert_eq!(board.symbol_at(0), Some("X"));
        assert_eq!(board.empty_count(), 8);
        assert_eq!(updates.borrow().len(), 1);
    }

    #[test]
    fn test_place_out_of_range() {
        let (mut board, updates) = recording_board();
        assert_eq!(board.place(9, "X"), Err(PlaceError::OutOfRange(9)));
        assert_eq!(board.place(usize::MAX, "X"), Err(PlaceError::OutOfRange(usize::MAX)));
        assert_eq!(board.empty_count(), BOARD_SIZE);
        assert!(updates.borrow().is_empty());
    }

    #[test]
    fn test_vacancy_off_the_board() {
        let (board, _) = recording_board();
        assert!(!board.is_vacant(BOARD_SIZE));
        assert!(!board.is_vacant(usize::MAX));
    }

    #[test]
    fn test_occupy_defers_the_update() {
        let (mut board, updates) = recording_board();
        let update = board.occupy(3, "O").unwrap();

        assert!(updates.borrow().is_empty());
        assert!(matches!(&update, Event::UpdateBoard(s) if s.get(3) == Some("O")));
        assert_eq!(board.occupy(3, "X"), Err(PlaceError::Occupied(3)));
    }

    #[test]
    fn test_symbol_at_past_end_is_none() {
        let (board, _) = recording_board();
        assert_eq!(board.symbol_at(9), None);
        assert_eq!(board.symbol_at(100), None);
    }

    #[test]
    fn test_reset_restores_all_positions() {
        let (mut board, updates) = recording_board();
        for pos in [0, 4, 8] {
            board.place(pos, "X").unwrap();
        }
        board.reset();

        assert_eq!(board.empty_count(), BOARD_SIZE);
        assert!((0..BOARD_SIZE).all(|pos| board.symbol_at(pos).is_none()));
        assert_eq!(updates.borrow().len(), 3);
        board.place(4, "O").unwrap();
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let (mut board, _) = recording_board();
        board.place(1, "X").unwrap();
        let snapshot = board.snapshot();
        board.place(2, "O").unwrap();
        assert_eq!(snapshot.get(2), None);
    }

    #[test]
    fn test_display() {
        let (mut board, _) = recording_board();
        board.place(0, "X").unwrap();
        board.place(4, "O").unwrap();
        assert_eq!(board.to_string(), "X__/_O_/___");
    }
}
