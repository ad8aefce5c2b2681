//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Build router → Fetch index → Spawn poller → Start listeners
//!
//! Supervision (supervisor.rs):
//!     One task per port → each binds, serves, reports its terminal result
//!     → join every task → final shutdown log
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger shutdown
//! ```
//!
//! # Design Decisions
//! - A listener failing never cancels its siblings
//! - The join is unconditional; exit waits for every listener
//! - Listeners are never restarted
//! - Shutdown stops accepting immediately; no drain

pub mod shutdown;
pub mod signals;
pub mod startup;
pub mod supervisor;

pub use shutdown::{Shutdown, ShutdownSignal};
pub use startup::{run, StartupError};
pub use supervisor::{ListenerError, ListenerOutcome, ListenerSupervisor};
