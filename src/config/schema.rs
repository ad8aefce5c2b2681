//! Configuration schema definitions.
//!
//! `AppConfig` is the single source of runtime settings. It is assembled once by
//! `loader.rs` and handed by reference to every subsystem.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Display name used when `APP_NAME` is unset or empty.
pub const DEFAULT_APP_NAME: &str = "Lattice-app";

/// Root configuration for the app.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Application display name (`APP_NAME`).
    pub app_name: String,

    /// Message interpolated into the status line.
    pub message: String,

    /// Raise the log threshold from debug to info.
    pub quiet: bool,

    /// Validated ports, in resolution order.
    pub ports: Vec<u16>,

    /// Interface every listener binds on.
    pub bind_host: IpAddr,

    /// Prometheus exporter address, disabled when `None`.
    pub metrics_address: Option<SocketAddr>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            message: "Hello".to_string(),
            quiet: false,
            ports: vec![8080],
            bind_host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            metrics_address: None,
        }
    }
}
