//! Lattice demo app.
//!
//! # Architecture Overview
//!
//! ```text
//!     CF_INSTANCE_PORTS ─┐
//!     --ports ───────────┼─▶ port resolver ─▶ [p1, p2, ...]
//!     PORT ──────────────┤                        │
//!     8080 ──────────────┘                        ▼
//!                                        ┌─────────────────┐
//!                                        │   supervisor    │
//!                                        └──┬──────────┬───┘
//!                                           ▼          ▼
//!                                      listener p1  listener p2   (shared router)
//!
//!     instance index (fetched once) ─▶ poller ─▶ "<name>. Says <msg>. on index: <n>" every 1s
//! ```

use std::process::ExitCode;

use clap::Parser;

use lattice_app::config::{Args, ProcessEnv};
use lattice_app::index::ConsoleSink;
use lattice_app::lifecycle::{self, signals, Shutdown};
use lattice_app::observability::logging;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_logging(args.quiet);

    let shutdown = Shutdown::new();
    tokio::spawn(signals::trigger_on_signal(shutdown.clone()));

    match lifecycle::run(args, ProcessEnv, ConsoleSink, shutdown).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "lattice-app failed to start");
            ExitCode::FAILURE
        }
    }
}
