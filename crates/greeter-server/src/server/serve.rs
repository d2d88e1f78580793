//! Router construction and the serve loop.
//!
//! The router carries two services: gRPC reflection (v1), built from the
//! descriptor set emitted by `greeter-core`'s build script, and the
//! `helloworld.Greeter` service itself. Connections are supplied by the
//! caller as a stream so tests can serve on an ephemeral port.
//!
//! [`bind_listener`] opens the TCP listener. An IPv6 wildcard address
//! (`[::]:N`) is bound with `IPV6_V6ONLY` cleared, so one socket accepts
//! both IPv4 and IPv6 clients.

use crate::server::{config::ServerConfig, service::handler::GreeterService};
use anyhow::Context;
use futures::Stream;
use greeter_core::proto::{FILE_DESCRIPTOR_SET, greeter_server::GreeterServer};
use socket2::{Domain, Protocol, Socket, Type};
use std::{io, net::SocketAddr};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::{TcpListener, lookup_host};
use tonic::transport::server::Connected;
use tonic::{codec::CompressionEncoding, transport::Server};
use tonic_reflection::server::Builder;

const LISTEN_BACKLOG: i32 = 1024;

/// Resolves `addr` and binds a listener on the first address it yields.
///
/// # Errors
///
/// Fails if `addr` does not resolve or the socket cannot be bound.
pub async fn bind_listener(addr: &str) -> io::Result<TcpListener> {
    let addr = lookup_host(addr).await?.next().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::AddrNotAvailable,
            format!("{addr} did not resolve to any address"),
        )
    })?;
    bind_socket(addr)
}

fn bind_socket(addr: SocketAddr) -> io::Result<TcpListener> {
    let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))?;
    if addr.is_ipv6() && addr.ip().is_unspecified() {
        socket.set_only_v6(false)?;
    }
    #[cfg(unix)]
    socket.set_reuse_address(true)?;
    socket.bind(&addr.into())?;
    socket.listen(LISTEN_BACKLOG)?;
    socket.set_nonblocking(true)?;
    TcpListener::from_std(socket.into())
}

/// Serves the greeter described by `config` on `incoming` until the
/// transport fails.
pub async fn run_server_with_incoming<I, IO, IE>(
    incoming: I,
    config: ServerConfig,
) -> anyhow::Result<()>
where
    I: Stream<Item = Result<IO, IE>>,
    IO: AsyncRead + AsyncWrite + Connected + Unpin + Send + 'static,
    IE: Into<tower::BoxError>,
{
    serve_greeter(incoming, GreeterService::new(&config)).await
}

/// Serves an already constructed [`GreeterService`] on `incoming`.
pub async fn serve_greeter<I, IO, IE>(incoming: I, service: GreeterService) -> anyhow::Result<()>
where
    I: Stream<Item = Result<IO, IE>>,
    IO: AsyncRead + AsyncWrite + Connected + Unpin + Send + 'static,
    IE: Into<tower::BoxError>,
{
    let reflection = Builder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
        .build_v1()
        .context("failed to build reflection service")?;

    Server::builder()
        .http2_adaptive_window(Some(true))
        .add_service(reflection)
        .add_service(build_greeter_service(service))
        .serve_with_incoming(incoming)
        .await
        .context("failed to serve")?;

    Ok(())
}

/// Wraps `service` in the generated tonic server. Compressed requests are
/// accepted, and replies are compressed when the client asks for it.
pub fn build_greeter_service(service: GreeterService) -> GreeterServer<GreeterService> {
    GreeterServer::new(service)
        .send_compressed(CompressionEncoding::Zstd)
        .send_compressed(CompressionEncoding::Gzip)
        .send_compressed(CompressionEncoding::Deflate)
        .accept_compressed(CompressionEncoding::Zstd)
        .accept_compressed(CompressionEncoding::Gzip)
        .accept_compressed(CompressionEncoding::Deflate)
}
