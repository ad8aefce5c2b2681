//! Layered port resolution.
//!
//! # Sources (first non-empty wins)
//! 1. `CF_INSTANCE_PORTS`: platform port mappings (JSON), internal ports only
//! 2. `--ports` flag
//! 3. `PORT` environment variable
//! 4. `8080`
//!
//! # Design Decisions
//! - Resolution is pure and infallible; a malformed platform value falls through
//! - Order follows the source, never sorted, duplicates kept
//! - Entries are not validated here (see `validation.rs`)

use std::fmt;

use serde::Deserialize;

use crate::config::env::EnvSource;

/// Platform-provided port mapping variable.
pub const CF_INSTANCE_PORTS: &str = "CF_INSTANCE_PORTS";

/// Generic port variable.
pub const PORT: &str = "PORT";

/// Used when no other source yields anything.
pub const DEFAULT_PORT: &str = "8080";

/// One `{External, Internal}` entry of `CF_INSTANCE_PORTS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PortMapping {
    #[serde(rename = "External", alias = "external", default)]
    pub external: i64,
    #[serde(rename = "Internal", alias = "internal", default)]
    pub internal: i64,
}

/// Ordered list of port strings to bind.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PortSpec(Vec<String>);

impl PortSpec {
    pub fn new(ports: Vec<String>) -> Self {
        Self(ports)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl fmt::Display for PortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(","))
    }
}

/// Decode the raw `CF_INSTANCE_PORTS` value.
pub fn decode_port_mappings(raw: &str) -> Result<Vec<PortMapping>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Internal ports published by the platform, empty when absent or malformed.
pub fn platform_ports(env: &impl EnvSource) -> Vec<String> {
    let raw = match env.var(CF_INSTANCE_PORTS) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Vec::new(),
    };

    let mappings = match decode_port_mappings(&raw) {
        Ok(mappings) => mappings,
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring undecodable {}", CF_INSTANCE_PORTS);
            Vec::new()
        }
    };

    mappings.iter().map(|m| m.internal.to_string()).collect()
}

/// Compute the ports to listen on.
///
/// `ports_flag` is the raw `--ports` value; an empty string means unset.
pub fn resolve_ports(ports_flag: &str, env: &impl EnvSource) -> PortSpec {
    let platform = platform_ports(env);
    if !platform.is_empty() {
        return PortSpec(platform);
    }

    let mut given = ports_flag.to_string();
    if given.is_empty() {
        given = env.var(PORT).unwrap_or_default();
    }
    if given.is_empty() {
        given = DEFAULT_PORT.to_string();
    }

    let stripped: String = given.chars().filter(|c| !c.is_whitespace()).collect();
    PortSpec(stripped.split(',').map(str::to_string).collect())
}
