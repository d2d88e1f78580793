//! # `greeter-server`: Greeter gRPC Service
//!
//! A small gRPC server built on [`tonic`] that answers
//! `helloworld.Greeter/SayHello` and exposes gRPC server reflection so tools
//! such as `grpcurl` can discover it.
//!
//! The server starts in one of two variants:
//!
//! - **default**: replies immediately.
//! - **block**: sleeps for a random duration below a configured bound before
//!   replying, to stand in for a slow backend. The sleep only suspends the
//!   task serving that request.
//!
//! ## Module Overview
//!
//! - [`server`] - Configuration, service implementation, telemetry, and the
//!   serve loop.

pub mod server;
