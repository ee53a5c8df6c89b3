// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Events system for decoupling producers from consumers in one process
//!
//! This module provides:
//! - `EventDispatcher` - Invoke subscribers synchronously, in registration order
//! - `Payload` - Argument shapes delivered to subscribers
//! - `Context` - Execution-context value bound during invocation

mod dispatcher;
mod payload;
mod subscriber;

pub use dispatcher::EventDispatcher;
pub use payload::{Context, Payload};
pub use subscriber::{callback, Callback, SubscriberError};
