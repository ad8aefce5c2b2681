//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (leveled, structured tracing events)
//!     → metrics.rs (request counters, listener lifecycle)
//!
//! Consumers:
//!     → stdout (fmt subscriber)
//!     → Prometheus scrape endpoint (only with --metrics-address)
//! ```
//!
//! # Design Decisions
//! - Two thresholds: debug by default, info with `--quiet`
//! - `RUST_LOG` overrides both
//! - Metric updates are no-ops until an exporter is installed

pub mod logging;
pub mod metrics;
