/// Builds the gRPC client and server code for `helloworld.proto` using
/// `tonic-prost-build`.
///
/// The Protocol Buffer definitions in `proto/` are compiled into Rust modules
/// with gRPC bindings in the crate's `OUT_DIR`. An encoded
/// `FileDescriptorSet` is written next to them so the server can answer gRPC
/// reflection queries.
///
/// # Files and Paths
///
/// - Proto file: `proto/helloworld.proto`
/// - Includes: `proto/`
/// - Descriptor set: `$OUT_DIR/helloworld_descriptor.bin`
///
/// # Panics
///
/// Panics if code generation fails.
///
/// # Output
///
/// Generated code is accessible in Rust via:
///
/// ```rust
/// pub mod proto {
///     tonic::include_proto!("helloworld");
/// }
/// ```
use std::env;
use std::path::PathBuf;
fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let descriptor_path = out_dir.join("helloworld_descriptor.bin");

    let mut config = tonic_prost_build::Config::new();
    config.file_descriptor_set_path(&descriptor_path);

    tonic_prost_build::configure()
        .compile_with_config(config, &["proto/helloworld.proto"], &["proto"])
        .unwrap();
}
