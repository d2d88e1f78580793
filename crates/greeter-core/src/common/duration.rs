//! Duration parsing for configuration values such as `BLOCK_DURATION`.
//!
//! Accepts the forms understood by [`humantime::parse_duration`]: a number
//! followed by a unit, optionally repeated (`3s`, `100ms`, `1.5s`, `500µs`,
//! `1m30s`, `2h 15min`), and a bare `0`. Empty input, missing numbers, and
//! unknown units are rejected.

use crate::{Error, Result};
use core::time::Duration;

/// Parses a human-readable duration string.
///
/// # Errors
///
/// Returns [`Error::InvalidDuration`] carrying the rejected input and the
/// parser's reason when `input` is not a valid duration.
pub fn parse_duration(input: &str) -> Result<Duration> {
    humantime::parse_duration(input).map_err(|e| Error::InvalidDuration {
        input: input.to_string(),
        reason: e.to_string(),
    })
}
