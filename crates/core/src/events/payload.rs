// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Argument payloads and execution contexts for triggered events

use super::dispatcher::EventDispatcher;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Arguments delivered to subscribers when an event fires.
///
/// The shape is explicit at the call site: `Spread` delivers each element as
/// its own positional argument, `Single` delivers the value as the only
/// argument. There is no inference from the value's runtime type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Payload {
    /// Subscribers receive no arguments.
    Empty,
    /// The value is delivered as the single positional argument.
    Single(Value),
    /// Each element is delivered as its own positional argument.
    Spread(Vec<Value>),
}

impl Payload {
    /// The positional argument slice subscribers see.
    pub fn args(&self) -> &[Value] {
        match self {
            Payload::Empty => &[],
            Payload::Single(value) => std::slice::from_ref(value),
            Payload::Spread(values) => values,
        }
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Payload::Single(value)
    }
}

impl From<Vec<Value>> for Payload {
    fn from(values: Vec<Value>) -> Self {
        Payload::Spread(values)
    }
}

/// Execution-context value bound to subscribers during invocation.
#[derive(Debug, Clone, Copy)]
pub enum Context<'a> {
    /// The dispatcher that fired the event. Bound when the trigger caller
    /// supplies no context of its own.
    Dispatcher(&'a EventDispatcher),
    /// A caller-supplied value.
    Value(&'a Value),
}

impl<'a> Context<'a> {
    /// The caller-supplied value, if any.
    pub fn value(&self) -> Option<&'a Value> {
        match *self {
            Context::Value(value) => Some(value),
            Context::Dispatcher(_) => None,
        }
    }

    /// The dispatcher, when no caller-supplied context was bound.
    pub fn dispatcher(&self) -> Option<&'a EventDispatcher> {
        match *self {
            Context::Dispatcher(dispatcher) => Some(dispatcher),
            Context::Value(_) => None,
        }
    }
}

#[cfg(test)]
#[path = "payload_tests.rs"]
mod tests;
