// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Console-like output targets for the tagged logger
//!
//! Every severity method defaults to a no-op, so a sink implements only the
//! severities it supports; lines for the rest are silently discarded.

use std::sync::{Arc, Mutex};

/// Receives fully rendered log lines, one method per severity
pub trait ConsoleSink {
    fn debug(&self, _line: &str) {}
    fn info(&self, _line: &str) {}
    fn warn(&self, _line: &str) {}
    fn error(&self, _line: &str) {}
}

/// Writes every line to standard error
#[derive(Clone, Copy, Default)]
pub struct StderrSink;

impl ConsoleSink for StderrSink {
    fn debug(&self, line: &str) {
        eprintln!("{}", line);
    }

    fn info(&self, line: &str) {
        eprintln!("{}", line);
    }

    fn warn(&self, line: &str) {
        eprintln!("{}", line);
    }

    fn error(&self, line: &str) {
        eprintln!("{}", line);
    }
}

/// Forwards lines to the `tracing` subscriber at the matching level
#[derive(Clone, Copy, Default)]
pub struct TracingSink;

impl ConsoleSink for TracingSink {
    fn debug(&self, line: &str) {
        tracing::debug!("{}", line);
    }

    fn info(&self, line: &str) {
        tracing::info!("{}", line);
    }

    fn warn(&self, line: &str) {
        tracing::warn!("{}", line);
    }

    fn error(&self, line: &str) {
        tracing::error!("{}", line);
    }
}

/// Records lines for inspection in tests
#[derive(Clone, Default)]
pub struct FakeSink {
    lines: Arc<Mutex<Vec<(&'static str, String)>>>,
}

impl FakeSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded `(method, line)` pairs, in arrival order
    pub fn lines(&self) -> Vec<(&'static str, String)> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn record(&self, method: &'static str, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((method, line.to_string()));
    }
}

impl ConsoleSink for FakeSink {
    fn debug(&self, line: &str) {
        self.record("debug", line);
    }

    fn info(&self, line: &str) {
        self.record("info", line);
    }

    fn warn(&self, line: &str) {
        self.record("warn", line);
    }

    fn error(&self, line: &str) {
        self.record("error", line);
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
