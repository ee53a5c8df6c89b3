// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Positional template substitution

use std::fmt::{self, Write};

/// Substitute `{0}`, `{1}`, ... placeholders with the matching argument's
/// `Display` rendering.
///
/// A placeholder may appear any number of times and in any order. Malformed
/// placeholders (`{}`, `{x}`, an unterminated `{`) and indexes with no
/// matching argument are left verbatim.
pub fn format(template: &str, args: &[&dyn fmt::Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        rest = &rest[open..];

        match placeholder(rest) {
            Some((index, end)) if index < args.len() => {
                let _ = write!(out, "{}", args[index]);
                rest = &rest[end..];
            }
            _ => {
                out.push('{');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Parse a `{N}` placeholder at the start of `s`.
///
/// Returns the argument index and the byte offset just past the closing
/// brace. `s` must start with `{`.
fn placeholder(s: &str) -> Option<(usize, usize)> {
    let close = s.find('}')?;
    let digits = &s[1..close];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index = digits.parse().ok()?;
    Some((index, close + 1))
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
