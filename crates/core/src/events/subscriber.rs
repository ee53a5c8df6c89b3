// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subscriber callback handles and the errors they may raise

use super::payload::Context;
use serde_json::Value;
use std::rc::Rc;

/// Error raised by a subscriber during a trigger.
///
/// The dispatcher does not catch or wrap these; they surface unchanged to
/// whatever invoked `trigger`.
pub type SubscriberError = Box<dyn std::error::Error + Send + Sync>;

/// A shared callback handle registered against an event name.
///
/// The `Rc` allocation is the callback's identity: cloning the handle and
/// subscribing it again is a no-op, and `unsubscribe` removes only the handle
/// it is given. Two closures with identical bodies are distinct callbacks.
pub type Callback = Rc<dyn Fn(Context<'_>, &[Value]) -> Result<(), SubscriberError>>;

/// Wrap a closure in the shared handle the dispatcher stores.
pub fn callback<F>(f: F) -> Callback
where
    F: Fn(Context<'_>, &[Value]) -> Result<(), SubscriberError> + 'static,
{
    Rc::new(f)
}

#[cfg(test)]
#[path = "subscriber_tests.rs"]
mod tests;
