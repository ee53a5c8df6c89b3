// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tagged console logger
//!
//! Each message is rendered as `"<letter> <timestamp> [<tag>] <message>"`
//! and forwarded to the sink method matching its severity. Without a sink,
//! without message arguments, or below the minimum level, the call is a
//! silent no-op.

use crate::clock::{Clock, SystemClock};
use crate::format::format;
use crate::pad::{pad, PadDirection};
use crate::sink::ConsoleSink;
use chrono::Timelike;
use std::fmt::Display;
use std::rc::Rc;

/// Message severity, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    /// The single-letter prefix used in rendered lines
    pub fn letter(self) -> char {
        match self {
            Level::Debug => 'D',
            Level::Info => 'I',
            Level::Warn => 'W',
            Level::Error => 'E',
        }
    }
}

/// Prefixes messages with severity, timestamp and tag, then forwards them to
/// a console-like sink.
pub struct TaggedLogger<C: Clock = SystemClock> {
    tag: String,
    sink: Option<Rc<dyn ConsoleSink>>,
    min_level: Level,
    clock: C,
}

impl TaggedLogger {
    /// A logger with no sink attached; every call is a no-op until one is.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            sink: None,
            min_level: Level::Debug,
            clock: SystemClock,
        }
    }
}

impl<C: Clock> TaggedLogger<C> {
    /// Attach the sink that receives rendered lines.
    pub fn with_sink(mut self, sink: Rc<dyn ConsoleSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Drop messages below the given level.
    pub fn with_min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Replace the time source for timestamps.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> TaggedLogger<C2> {
        TaggedLogger {
            tag: self.tag,
            sink: self.sink,
            min_level: self.min_level,
            clock,
        }
    }

    pub fn debug(&self, args: &[&dyn Display]) {
        self.emit(Level::Debug, args);
    }

    pub fn info(&self, args: &[&dyn Display]) {
        self.emit(Level::Info, args);
    }

    pub fn warn(&self, args: &[&dyn Display]) {
        self.emit(Level::Warn, args);
    }

    pub fn error(&self, args: &[&dyn Display]) {
        self.emit(Level::Error, args);
    }

    fn emit(&self, level: Level, args: &[&dyn Display]) {
        let Some(sink) = &self.sink else {
            return;
        };
        if args.is_empty() || level < self.min_level {
            return;
        }

        let message = args
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        let line = format(
            "{0} {1} [{2}] {3}",
            &[&level.letter(), &self.timestamp(), &self.tag, &message],
        );

        match level {
            Level::Debug => sink.debug(&line),
            Level::Info => sink.info(&line),
            Level::Warn => sink.warn(&line),
            Level::Error => sink.error(&line),
        }
    }

    /// Fixed-width `HH:MM:SS.mmm` timestamp, composed with the sibling
    /// formatter and padding helpers.
    fn timestamp(&self) -> String {
        let now = self.clock.now();
        let ms = now.timestamp_subsec_millis();
        format(
            "{0}:{1}:{2}.{3}",
            &[
                &zero_pad(now.hour(), 2),
                &zero_pad(now.minute(), 2),
                &zero_pad(now.second(), 2),
                &zero_pad(ms, 3),
            ],
        )
    }
}

fn zero_pad(value: u32, width: usize) -> String {
    let text = value.to_string();
    pad(&text, "0", width, PadDirection::Start).unwrap_or(text)
}

#[cfg(test)]
#[path = "logger_tests.rs"]
mod tests;
