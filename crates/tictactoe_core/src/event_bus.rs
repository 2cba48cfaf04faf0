//! Typed publish/subscribe registry.
//!
//! Dispatch is synchronous: [`EventBus::publish`] runs every handler of the
//! event's channel, in subscription order, before it returns. Channels are
//! get-or-create, so neither `subscribe` nor `publish` needs a prior
//! registration step.

use crate::events::{Channel, Event};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, instrument, warn};

/// A subscribed callback. Identity (for [`EventBus::unsubscribe`]) is the
/// `Rc` allocation, so clones of one handle are the same handler.
pub type Handler = Rc<dyn Fn(&Event)>;

/// Channel registry shared by every component of a game session.
#[derive(Default)]
pub struct EventBus {
    channels: RefCell<HashMap<Channel, Vec<Handler>>>,
}

impl EventBus {
    /// Creates an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `channel` with no handlers. Does nothing if it exists.
    #[instrument(skip(self))]
    pub fn create_channel(&self, channel: Channel) {
        let mut channels = self.channels.borrow_mut();
        if channels.contains_key(&channel) {
            debug!(%channel, "Channel already exists");
            return;
        }
        channels.insert(channel, Vec::new());
        debug!(%channel, "Channel created");
    }

    /// Removes `channel` and all of its handlers.
    #[instrument(skip(self))]
    pub fn delete_channel(&self, channel: Channel) {
        if self.channels.borrow_mut().remove(&channel).is_some() {
            debug!(%channel, "Channel deleted");
        }
    }

    /// Appends handlers to `channel`, preserving their order.
    ///
    /// The same handler may be subscribed more than once; it then runs once
    /// per subscription.
    #[instrument(skip(self, handlers))]
    pub fn subscribe<I>(&self, channel: Channel, handlers: I)
    where
        I: IntoIterator<Item = Handler>,
    {
        let mut channels = self.channels.borrow_mut();
        let list = channels.entry(channel).or_insert_with(|| {
            debug!(%channel, "Channel created on subscribe");
            Vec::new()
        });
        let before = list.len();
        list.extend(handlers);
        debug!(%channel, added = list.len() - before, "Handlers subscribed");
    }

    /// Subscribes a closure and returns its handle for later
    /// [`unsubscribe`](Self::unsubscribe).
    pub fn on<F>(&self, channel: Channel, handler: F) -> Handler
    where
        F: Fn(&Event) + 'static,
    {
        let handler: Handler = Rc::new(handler);
        self.subscribe(channel, [Rc::clone(&handler)]);
        handler
    }

    /// Removes the first subscription of `handler` from `channel`.
    ///
    /// Returns `true` if a subscription was removed.
    #[instrument(skip(self, handler))]
    pub fn unsubscribe(&self, channel: Channel, handler: &Handler) -> bool {
        let mut channels = self.channels.borrow_mut();
        let Some(list) = channels.get_mut(&channel) else {
            warn!(%channel, "Cannot unsubscribe, channel does not exist");
            return false;
        };
        match list.iter().position(|h| Rc::ptr_eq(h, handler)) {
            Some(index) => {
                list.remove(index);
                true
            }
            None => false,
        }
    }

    /// Runs every handler subscribed to the event's channel.
    ///
    /// The handler list is copied before dispatch, so handlers may publish,
    /// subscribe or unsubscribe freely. Changes take effect from the next
    /// publish.
    #[instrument(skip_all, fields(channel = %Channel::from(&event)))]
    pub fn publish(&self, event: Event) {
        let channel = Channel::from(&event);
        let handlers = {
            let mut channels = self.channels.borrow_mut();
            channels
                .entry(channel)
                .or_insert_with(|| {
                    debug!(%channel, "Channel created on publish");
                    Vec::new()
                })
                .clone()
        };

        for handler in &handlers {
            handler(&event);
        }
        debug!(%channel, handlers = handlers.len(), "Event published");
    }

    /// Drops every channel and every subscription.
    #[instrument(skip(self))]
    pub fn reset(&self) {
        self.channels.borrow_mut().clear();
        debug!("Event bus reset");
    }

    /// Whether `channel` is registered.
    pub fn has_channel(&self, channel: Channel) -> bool {
        self.channels.borrow().contains_key(&channel)
    }

    /// Number of subscriptions on `channel`, `None` if it is not registered.
    pub fn subscriber_count(&self, channel: Channel) -> Option<usize> {
        self.channels.borrow().get(&channel).map(Vec::len)
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let channels = self.channels.borrow();
        f.debug_map()
            .entries(channels.iter().map(|(channel, list)| (channel, list.len())))
            .finish()
    }
}
