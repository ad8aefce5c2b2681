//! Instance index subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     source.rs (fetch index once)
//!     → Result<u32, IndexError> captured for the process lifetime
//!
//! Every second (poller.rs):
//!     captured result + app name + message
//!     → StatusLine
//!     → StatusSink (stdout / stderr)
//! ```
//!
//! # Design Decisions
//! - The index is fetched exactly once; ticks only format and print
//! - A failed fetch is not fatal; it is reported on every tick instead
//! - The poller stops on the shutdown signal

pub mod poller;
pub mod source;

pub use poller::{ConsoleSink, IndexPoller, StatusLine, StatusSink};
pub use source::{EnvIndexSource, IndexError, IndexSource};
