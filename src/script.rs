//! Headless adapter: scripted input in, JSON lines out.

use std::cell::RefCell;
use std::rc::Rc;
use tictactoe_core::{Board, Channel, Event, EventBus, GameController, Handler, Player};
use tracing::{debug, instrument};

/// Token that publishes [`Event::RestartGame`] instead of a move.
pub const RESTART_TOKEN: &str = "restart";

/// Channels an adapter renders.
pub const OUTBOUND_CHANNELS: [Channel; 4] = [
    Channel::UpdateBoard,
    Channel::PlayerChange,
    Channel::GameWin,
    Channel::GameOver,
];

/// Runs a game from a list of input tokens and records what it publishes.
#[derive(Debug)]
pub struct ScriptRunner {
    bus: Rc<EventBus>,
    controller: GameController,
    recorded: Rc<RefCell<Vec<Event>>>,
}

impl ScriptRunner {
    /// Wires a bus, a recorder, a board and a controller.
    ///
    /// The recorder subscribes first so the opening
    /// [`Event::PlayerChange`] is captured.
    #[instrument]
    pub fn new(players: [Player; 2]) -> Self {
        let bus = Rc::new(EventBus::new());
        let recorded = Rc::new(RefCell::new(Vec::new()));
        let recorder: Handler = {
            let recorded = Rc::clone(&recorded);
            Rc::new(move |event: &Event| recorded.borrow_mut().push(event.clone()))
        };
        for channel in OUTBOUND_CHANNELS {
            bus.subscribe(channel, [Rc::clone(&recorder)]);
        }

        let board = Board::new(Rc::clone(&bus));
        let controller = GameController::new(Rc::clone(&bus), board, players);
        Self {
            bus,
            controller,
            recorded,
        }
    }

    /// Publishes one input per token, in order.
    #[instrument(skip_all)]
    pub fn run<I, S>(&self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            let token = token.as_ref();
            debug!(token, "Feeding script token");
            if token.eq_ignore_ascii_case(RESTART_TOKEN) {
                self.bus.publish(Event::RestartGame);
            } else {
                self.bus.publish(Event::PlayerInput(token.into()));
            }
        }
    }

    /// Every outbound event so far, in publish order.
    pub fn events(&self) -> Vec<Event> {
        self.recorded.borrow().clone()
    }

    /// The recorded events, one JSON document each.
    pub fn json_lines(&self) -> Result<Vec<String>, serde_json::Error> {
        self.recorded
            .borrow()
            .iter()
            .map(serde_json::to_string)
            .collect()
    }

    /// The controller driving this run.
    pub fn controller(&self) -> &GameController {
        &self.controller
    }
}
