//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! argv (--ports, --message, --quiet, ...)      environment (CF_INSTANCE_PORTS, PORT, APP_NAME)
//!     → cli.rs (clap parse)                         → env.rs (EnvSource lookup)
//!                 \                                 /
//!                  → loader.rs (assemble AppConfig)
//!                  → ports.rs (layered port resolution)
//!                  → validation.rs (bindable port check)
//!                  → AppConfig (validated, immutable)
//!                  → shared by reference with every subsystem
//! ```
//!
//! # Design Decisions
//! - Config is built once at startup and never mutated
//! - Environment access goes through `EnvSource` so resolution stays testable
//! - Port resolution never fails; validation is a separate, fallible step

pub mod cli;
pub mod env;
pub mod loader;
pub mod ports;
pub mod schema;
pub mod validation;

pub use cli::Args;
pub use env::{EnvSource, ProcessEnv};
pub use loader::{load_config, ConfigError};
pub use ports::{resolve_ports, PortMapping, PortSpec};
pub use schema::AppConfig;
pub use validation::validate_ports;
