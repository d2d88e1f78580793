//! gRPC service implementation for `helloworld.Greeter`.
//!
//! ## Structure
//!
//! - [`handler`] - gRPC service entry point ([`GreeterService`]).
//! - [`responder`] - Reply strategies, one per server variant.
//! - [`delay`] - Random delay sources used by the `block` variant.
//!
//! [`GreeterService`]: handler::GreeterService

pub mod delay;
pub mod handler;
pub mod responder;
