//! Lattice demo app library.
//!
//! Resolves a set of ports from layered configuration, serves the same routed
//! HTTP API on each of them, and prints a status line once per second.

pub mod config;
pub mod http;
pub mod index;
pub mod lifecycle;
pub mod observability;

pub use config::{AppConfig, Args};
pub use http::HttpServer;
pub use lifecycle::{ListenerSupervisor, Shutdown};
