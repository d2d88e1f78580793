//! Shared protocol bindings, types, and error definitions for the greeter
//! service.
//!
//! ## Submodules
//!
//! - [`duration`] - Parsing of human-readable duration strings.
//! - [`error`] - Crate-wide error type.
//! - [`types`] - The server [`Variant`](types::Variant), defaults, and the
//!   greeting formatter.
//! - [`proto`] - Generated Protobuf messages, client, and server.

pub mod duration;
pub mod error;
pub mod types;

pub use error::{Error, Result};

/// gRPC service and message definitions generated from
/// `proto/helloworld.proto`.
///
/// ## Service
///
/// - `Greeter/SayHello` - Returns a greeting for the supplied name.
///
/// ## Messages
///
/// - [`HelloRequest`](proto::HelloRequest) - Carries the `name` to greet.
/// - [`HelloReply`](proto::HelloReply) - Carries the formatted `message`.
pub mod proto {
    tonic::include_proto!("helloworld");

    /// Encoded `FileDescriptorSet` for `helloworld.proto`, served through gRPC
    /// reflection.
    pub const FILE_DESCRIPTOR_SET: &[u8] =
        tonic::include_file_descriptor_set!("helloworld_descriptor");
}
