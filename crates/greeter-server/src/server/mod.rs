//! Server-side components of the greeter service.
//!
//! ## Submodules
//!
//! - [`config`] - CLI/environment arguments and the parsed [`ServerConfig`].
//! - [`service`] - The `Greeter` implementation and its reply strategies.
//! - [`serve`] - Router construction and the serve loop.
//! - [`telemetry`] - `tracing` subscriber initialization.
//!
//! [`ServerConfig`]: config::ServerConfig

pub mod config;
pub mod serve;
pub mod service;
pub mod telemetry;
