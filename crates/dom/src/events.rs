//! Event listeners keyed by node and event type.

use crate::NodeId;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// An event delivered to listeners.
#[derive(Debug, Clone)]
pub struct Event {
    pub event_type: String,
    pub target: NodeId,
}

impl Event {
    pub fn new(event_type: &str, target: NodeId) -> Self {
        Self {
            event_type: event_type.to_owned(),
            target,
        }
    }
}

/// A listener callback. Identity is the `Arc` allocation, so removing a
/// listener requires a clone of the handle that registered it, the same
/// contract as removing a listener by function reference.
pub type EventCallback = Arc<dyn Fn(&Event) + Send + Sync>;

/// Listener lists keyed by `(node, event type)`.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: HashMap<(NodeId, String), Vec<EventCallback>>,
}

impl ListenerRegistry {
    /// Register a callback. Registering the same allocation again for the
    /// same node and event type is a no-op, so one dispatch runs it once.
    pub fn add(&mut self, node: NodeId, event_type: &str, callback: EventCallback) {
        let list = self
            .listeners
            .entry((node, event_type.to_owned()))
            .or_default();
        if list.iter().any(|existing| Arc::ptr_eq(existing, &callback)) {
            return;
        }
        list.push(callback);
    }

    /// Remove the registration of `callback` for the node and event type.
    /// Callbacks that were never registered are left alone.
    pub fn remove(&mut self, node: NodeId, event_type: &str, callback: &EventCallback) {
        let key = (node, event_type.to_owned());
        if let Some(list) = self.listeners.get_mut(&key) {
            list.retain(|existing| !Arc::ptr_eq(existing, callback));
            if list.is_empty() {
                self.listeners.remove(&key);
            }
        }
    }

    /// Clone the listener list for a node and event type. Dispatch works on
    /// this snapshot so callbacks run without the registry borrowed.
    pub fn snapshot(&self, node: NodeId, event_type: &str) -> Vec<EventCallback> {
        self.listeners
            .get(&(node, event_type.to_owned()))
            .map(|list| list.iter().map(Arc::clone).collect())
            .unwrap_or_default()
    }

    /// Number of listeners registered for a node and event type.
    pub fn count(&self, node: NodeId, event_type: &str) -> usize {
        self.listeners
            .get(&(node, event_type.to_owned()))
            .map_or(0, Vec::len)
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = formatter.debug_map();
        for (key, list) in &self.listeners {
            map.entry(key, &list.len());
        }
        map.finish()
    }
}
