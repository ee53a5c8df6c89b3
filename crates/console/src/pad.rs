// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pad a string to a minimum width

use thiserror::Error;

/// Errors from the padding helper
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PadError {
    #[error("pad must be exactly one character: {0:?}")]
    NotSingleChar(String),
}

/// Which side of the input receives the fill characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadDirection {
    Start,
    End,
}

/// Pad `input` with `pad` until it is at least `width` characters long.
///
/// Input already at or above `width` is returned unchanged. The pad string
/// must be exactly one character; width is measured in characters, not bytes.
pub fn pad(input: &str, pad: &str, width: usize, direction: PadDirection) -> Result<String, PadError> {
    let mut chars = pad.chars();
    let fill = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return Err(PadError::NotSingleChar(pad.to_string())),
    };

    let len = input.chars().count();
    if len >= width {
        return Ok(input.to_string());
    }

    let filler: String = std::iter::repeat(fill).take(width - len).collect();
    Ok(match direction {
        PadDirection::Start => filler + input,
        PadDirection::End => input.to_string() + &filler,
    })
}

#[cfg(test)]
#[path = "pad_tests.rs"]
mod tests;
