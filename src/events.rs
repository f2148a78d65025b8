//! Name-keyed event bus for stream events.
//!
//! The WebSocket loop pushes every decoded event through the bus; user
//! callbacks registered with [`EventBus::on`] fire synchronously on the
//! stream task, in registration order. Listeners must not block — the
//! read loop does not advance until every listener for an emission has
//! returned.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::models::{WsBookUpdate, WsTicker};

/// A decoded stream event delivered to listeners.
#[derive(Debug, Clone)]
pub enum StreamEvent {
    /// Aggregate ticker update (channel 1002).
    Ticker(WsTicker),
    /// One order-book delta from a per-market channel.
    Book(WsBookUpdate),
}

type Listener = Arc<dyn Fn(&StreamEvent) + Send + Sync + 'static>;

/// Identifies a registered listener so it can be removed later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerHandle {
    event: String,
    id: u64,
}

/// Registration-ordered listener lists keyed by event name.
#[derive(Default)]
pub struct EventBus {
    listeners: Mutex<HashMap<String, Vec<(u64, Listener)>>>,
    next_id: AtomicU64,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for an event name and returns a handle for
    /// later removal.
    pub fn on<F>(&self, event: &str, listener: F) -> ListenerHandle
    where
        F: Fn(&StreamEvent) + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut listeners = self.listeners.lock().expect("listener table poisoned");
        listeners
            .entry(event.to_string())
            .or_default()
            .push((id, Arc::new(listener)));
        ListenerHandle {
            event: event.to_string(),
            id,
        }
    }

    /// Removes a previously registered listener.
    ///
    /// Returns `false` if the handle no longer refers to a live
    /// listener.
    pub fn off(&self, handle: &ListenerHandle) -> bool {
        let mut listeners = self.listeners.lock().expect("listener table poisoned");
        let Some(entries) = listeners.get_mut(&handle.event) else {
            return false;
        };
        let before = entries.len();
        entries.retain(|(id, _)| *id != handle.id);
        before != entries.len()
    }

    /// Dispatches an event to every listener registered for `event`, in
    /// registration order, synchronously on the caller's context.
    pub fn emit(&self, event: &str, payload: &StreamEvent) {
        // Snapshot under the lock so listeners may call on/off freely.
        let snapshot: Vec<Listener> = {
            let listeners = self.listeners.lock().expect("listener table poisoned");
            match listeners.get(event) {
                Some(entries) => entries.iter().map(|(_, l)| Arc::clone(l)).collect(),
                None => return,
            }
        };
        for listener in snapshot {
            listener(payload);
        }
    }
}
