//! # Greeter Types and Defaults
//!
//! Shared definitions that server and clients agree on: which server
//! [`Variant`] produced a reply, the default listen address and block bound,
//! and the exact reply format.
//!
//! ## Reply Format
//!
//! Every reply is `"Hello {name}, from {variant} server"`, where `{variant}`
//! is the lowercase [`Variant`] name. The name is echoed verbatim, so an empty
//! name yields `"Hello , from default server"`.

use crate::proto::HelloReply;
use core::fmt;
use core::time::Duration;

/// Listen address used when none is configured: port 50051 on all
/// interfaces.
pub const DEFAULT_LISTEN_ADDR: &str = ":50051";

/// Upper bound of the random delay injected by the [`Variant::Block`] server
/// when none is configured.
pub const DEFAULT_BLOCK_DURATION: Duration = Duration::from_secs(3);

/// The behavior a greeter server is started with.
///
/// Chosen once at startup and fixed for the lifetime of the process.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Replies immediately.
    #[default]
    Default,
    /// Replies after a random delay in `[0, max_block_duration)`.
    Block,
}

impl Variant {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Block => "block",
        }
    }
}

/// Only the exact string `"block"` selects [`Variant::Block`]. Anything else,
/// including an empty or misspelled value, selects [`Variant::Default`].
impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        match value {
            "block" => Self::Block,
            _ => Self::Default,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formats the greeting for `name` as produced by a `variant` server.
pub fn greeting(name: &str, variant: Variant) -> String {
    format!("Hello {name}, from {variant} server")
}

impl HelloReply {
    /// Builds the reply a `variant` server sends for `name`.
    pub fn greeting(name: &str, variant: Variant) -> Self {
        Self {
            message: greeting(name, variant),
        }
    }
}
