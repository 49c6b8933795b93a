//! Server configuration and command-line arguments.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

/// Proglog HTTP server
#[derive(Parser, Debug)]
#[command(name = "proglog")]
#[command(about = "In-memory append-only log over HTTP", long_about = None)]
pub struct CliArgs {
    /// Address to bind to
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
}

/// Runtime configuration for [`LogServer`](crate::LogServer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
        }
    }
}

impl From<&CliArgs> for ServerConfig {
    fn from(args: &CliArgs) -> Self {
        Self {
            addr: SocketAddr::new(args.host, args.port),
        }
    }
}
