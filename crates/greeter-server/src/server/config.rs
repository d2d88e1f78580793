use clap::Parser;
use core::time::Duration;
use greeter_core::{
    duration::parse_duration,
    types::{DEFAULT_BLOCK_DURATION, DEFAULT_LISTEN_ADDR, Variant},
};

/// Runtime configuration for the `greeter-server` binary.
///
/// Every option can be given as a CLI flag or through the environment
/// variable named in its documentation. Flags win over the environment.
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "greeter-server",
    version,
    about = "A gRPC greeter service with an optional randomized-latency mode"
)]
pub struct CliArgs {
    /// Address to listen on.
    ///
    /// Accepts `host:port`, `:port` (all interfaces), or a bare port number.
    /// Defaults to `:50051`.
    ///
    /// Environment variable: `PORT`
    #[arg(long, env = "PORT")]
    pub port: Option<String>,

    /// Server variant. `block` delays every reply by a random amount; any
    /// other value replies immediately.
    ///
    /// Environment variable: `SERVER_TYPE`
    #[arg(long, env = "SERVER_TYPE")]
    pub server_type: Option<String>,

    /// Upper bound of the random delay used by the `block` variant, e.g.
    /// `3s` or `100ms`. Invalid values are ignored and `3s` is used.
    ///
    /// Environment variable: `BLOCK_DURATION`
    #[arg(long, env = "BLOCK_DURATION")]
    pub block_duration: Option<String>,
}

/// Parsed server configuration, fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket address handed to the TCP listener.
    pub listen_addr: String,
    pub variant: Variant,
    /// Exclusive upper bound of the `block` variant's delay.
    pub max_block_duration: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: normalize_listen_addr(DEFAULT_LISTEN_ADDR),
            variant: Variant::Default,
            max_block_duration: DEFAULT_BLOCK_DURATION,
        }
    }
}

impl From<CliArgs> for ServerConfig {
    fn from(args: CliArgs) -> Self {
        let listen_addr = match args.port.as_deref() {
            Some(port) if !port.trim().is_empty() => normalize_listen_addr(port.trim()),
            _ => normalize_listen_addr(DEFAULT_LISTEN_ADDR),
        };

        let variant = args
            .server_type
            .as_deref()
            .map(Variant::from)
            .unwrap_or_default();

        let max_block_duration = match args.block_duration.as_deref() {
            None | Some("") => DEFAULT_BLOCK_DURATION,
            Some(raw) => match parse_duration(raw) {
                Ok(duration) => duration,
                Err(e) => {
                    tracing::warn!(
                        "Ignoring BLOCK_DURATION, using {:?}: {}",
                        DEFAULT_BLOCK_DURATION,
                        e
                    );
                    DEFAULT_BLOCK_DURATION
                }
            },
        };

        Self {
            listen_addr,
            variant,
            max_block_duration,
        }
    }
}

/// Expands the shorthand listen forms into a bindable socket address.
///
/// `:50051` and `50051` both become `[::]:50051`, the IPv6 wildcard, which
/// [`bind_listener`](crate::server::serve::bind_listener) opens dual-stack so
/// IPv4 clients are served too. Anything else is returned unchanged and
/// resolved by the listener.
pub fn normalize_listen_addr(raw: &str) -> String {
    if let Some(port) = raw.strip_prefix(':') {
        format!("[::]:{port}")
    } else if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        format!("[::]:{raw}")
    } else {
        raw.to_string()
    }
}
