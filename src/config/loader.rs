//! Configuration assembly from flags and environment.

use thiserror::Error;

use crate::config::cli::Args;
use crate::config::env::EnvSource;
use crate::config::ports::resolve_ports;
use crate::config::schema::{AppConfig, DEFAULT_APP_NAME};
use crate::config::validation::validate_ports;

/// Environment variable holding the display name.
pub const APP_NAME: &str = "APP_NAME";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no ports resolved")]
    NoPorts,

    #[error("invalid port {value:?} at position {position}")]
    InvalidPort { position: usize, value: String },
}

/// Application display name, falling back to `Lattice-app`.
pub fn app_name(env: &impl EnvSource) -> String {
    match env.var(APP_NAME) {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_APP_NAME.to_string(),
    }
}

/// Build and validate the runtime configuration.
pub fn load_config(args: Args, env: &impl EnvSource) -> Result<AppConfig, ConfigError> {
    let spec = resolve_ports(&args.ports, env);
    tracing::debug!(ports = %spec, "Ports resolved");
    let ports = validate_ports(&spec)?;

    Ok(AppConfig {
        app_name: app_name(env),
        message: args.message,
        quiet: args.quiet,
        ports,
        bind_host: args.bind_host,
        metrics_address: args.metrics_address,
    })
}
