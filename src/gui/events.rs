use tokio::sync::mpsc;
use tracing::debug;

use crate::types::InventoryEvent;

/// Fan-out of inventory events to any number of listeners
///
/// Each listener gets its own unbounded channel. Listeners that dropped
/// their receiver are pruned on the next emit. Owned by the mediator, so
/// registration and emission go through `&mut self`.
#[derive(Default)]
pub struct EventHub {
    listeners: Vec<mpsc::UnboundedSender<InventoryEvent>>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new listener
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<InventoryEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.listeners.push(tx);
        rx
    }

    pub fn emit(&mut self, event: InventoryEvent) {
        self.listeners.retain(|tx| tx.send(event.clone()).is_ok());
        debug!("Emitted {:?} to {} listener(s)", event, self.listeners.len());
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
