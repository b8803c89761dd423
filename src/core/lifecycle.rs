//! # Lifecycle Events
//!
//! A small subscribe/unsubscribe facade for app-wide events. Handlers are
//! called in subscription order.

use log::debug;

use super::device::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    NetworkChanged { online: bool },
    Pause,
    Close,
    Resumed,
    OrientationChanged(Orientation),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Handler = Box<dyn FnMut(&LifecycleEvent)>;

pub struct Lifecycle {
    handlers: Vec<(SubscriptionId, Handler)>,
    next_id: u64,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            next_id: 1,
        }
    }

    pub fn subscribe<H>(&mut self, handler: H) -> SubscriptionId
    where
        H: FnMut(&LifecycleEvent) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(sub, _)| *sub != id);
        self.handlers.len() != before
    }

    pub fn emit(&mut self, event: LifecycleEvent) {
        debug!("Lifecycle event {:?} -> {} handlers", event, self.handlers.len());
        for (_, handler) in self.handlers.iter_mut() {
            handler(&event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}
