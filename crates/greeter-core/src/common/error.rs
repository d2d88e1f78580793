//! Error types for the greeter service.
//!
//! Requests never fail, so every variant here describes a configuration
//! problem detected before the server starts.

pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for the greeter crates.
#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// A duration string could not be parsed.
    #[error("Invalid duration {input:?}: {reason}")]
    InvalidDuration { input: String, reason: String },
}
