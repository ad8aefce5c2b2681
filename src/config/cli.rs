//! Command-line arguments.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::{ArgAction, Parser};

/// Flags accepted by the `lattice-app` binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "lattice-app")]
#[command(about = "Multi-port demo app that reports its identity and instance index", long_about = None)]
pub struct Args {
    /// Comma delimited list of ports, where the app will be listening to
    #[arg(long, default_value = "")]
    pub ports: String,

    /// The message to log and display
    #[arg(long, default_value = "Hello")]
    pub message: String,

    /// Less verbose logging
    #[arg(
        long,
        default_value_t = false,
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub quiet: bool,

    /// Interface every listener binds on
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub bind_host: IpAddr,

    /// Serve Prometheus metrics on this address
    #[arg(long)]
    pub metrics_address: Option<SocketAddr>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            ports: String::new(),
            message: "Hello".to_string(),
            quiet: false,
            bind_host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            metrics_address: None,
        }
    }
}
