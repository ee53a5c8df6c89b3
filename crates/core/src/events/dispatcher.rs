// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event dispatcher for invoking subscribers synchronously

use super::payload::{Context, Payload};
use super::subscriber::{Callback, SubscriberError};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// The event dispatcher invokes matching subscribers inline, in registration
/// order, on the caller's stack.
///
/// Subscriber lists are per-instance state with a single-threaded access
/// model; there is no queuing and no suspension point between invocations.
pub struct EventDispatcher {
    subscribers: HashMap<String, Vec<Callback>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self {
            subscribers: HashMap::new(),
        }
    }

    /// Subscribe a callback to an event name.
    ///
    /// The list for the event is created on first subscription. Subscribing a
    /// handle already present for that event (same `Rc` allocation) is a
    /// no-op, so a callback fires at most once per trigger.
    pub fn subscribe(&mut self, event: impl Into<String>, callback: Callback) {
        let event = event.into();
        tracing::trace!(event = %event, "subscribe");
        let subs = self.subscribers.entry(event).or_default();
        if subs.iter().any(|existing| Rc::ptr_eq(existing, &callback)) {
            return;
        }
        subs.push(callback);
    }

    /// Unsubscribe a callback from an event name.
    ///
    /// Unknown event names and handles that were never subscribed are silent
    /// no-ops. The event's list is dropped once its last callback is removed.
    pub fn unsubscribe(&mut self, event: &str, callback: &Callback) {
        let Some(subs) = self.subscribers.get_mut(event) else {
            return;
        };
        if let Some(pos) = subs.iter().position(|existing| Rc::ptr_eq(existing, callback)) {
            subs.remove(pos);
            if subs.is_empty() {
                self.subscribers.remove(event);
            }
        }
    }

    /// Trigger an event, invoking every subscriber in registration order.
    ///
    /// With no subscribers for `event` this returns `Ok(())` immediately.
    /// Each callback is invoked with `payload.args()` and with `context`
    /// bound; when `context` is `None` the dispatcher itself is bound
    /// instead. A subscriber error propagates unwrapped to the caller and
    /// aborts the remaining invocations for this trigger call.
    pub fn trigger(
        &self,
        event: &str,
        payload: &Payload,
        context: Option<&Value>,
    ) -> Result<(), SubscriberError> {
        let Some(subs) = self.subscribers.get(event) else {
            return Ok(());
        };

        tracing::trace!(event, subscribers = subs.len(), "trigger");

        let ctx = match context {
            Some(value) => Context::Value(value),
            None => Context::Dispatcher(self),
        };
        let args = payload.args();

        for callback in subs {
            callback(ctx, args)?;
        }

        Ok(())
    }

    /// Number of callbacks subscribed to an event name.
    pub fn subscriber_count(&self, event: &str) -> usize {
        self.subscribers.get(event).map_or(0, Vec::len)
    }

    /// Event names with at least one subscriber.
    pub fn subscribed_events(&self) -> Vec<&str> {
        self.subscribers.keys().map(String::as_str).collect()
    }

    /// True when no event has any subscriber.
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

// Callbacks are opaque; show the subscriber counts instead.
impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (event, subs) in &self.subscribers {
            map.entry(event, &subs.len());
        }
        map.finish()
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
