//! Port validation.
//!
//! # Responsibilities
//! - Turn resolved port strings into bindable `u16` values
//! - Reject empty, non-numeric, zero and out-of-range entries
//!
//! # Design Decisions
//! - Fails on the first bad entry; startup stops before any listener binds
//! - Order and duplicates are preserved

use crate::config::loader::ConfigError;
use crate::config::ports::PortSpec;

/// Validate every entry of `spec` as a TCP port in `1..=65535`.
pub fn validate_ports(spec: &PortSpec) -> Result<Vec<u16>, ConfigError> {
    if spec.is_empty() {
        return Err(ConfigError::NoPorts);
    }

    spec.iter()
        .enumerate()
        .map(|(position, raw)| match raw.parse::<u16>() {
            Ok(port) if port > 0 => Ok(port),
            _ => Err(ConfigError::InvalidPort {
                position,
                value: raw.clone(),
            }),
        })
        .collect()
}
