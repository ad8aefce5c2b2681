//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Build the routed handler set
//! - Fetch the instance index once and start the poller
//! - Hand the ports to the supervisor and wait for it
//!
//! # Design Decisions
//! - Fail fast: invalid ports or a bad route table stop startup
//! - An index fetch failure is not fatal
//! - Listeners start last
//! - The poller is stopped once every listener has joined

use thiserror::Error;

use crate::config::{load_config, Args, ConfigError, EnvSource};
use crate::http::{AppInfo, AppState, HttpServer, RouterError};
use crate::index::{EnvIndexSource, IndexPoller, IndexSource, StatusSink};
use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::supervisor::ListenerSupervisor;
use crate::observability::metrics;

/// Fatal startup failures.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("router creation failed: {0}")]
    Router(#[from] RouterError),
}

/// Run the app until every listener has stopped.
///
/// `env` supplies every environment lookup, `sink` receives the poller's
/// status lines and `shutdown` stops the listeners when triggered.
pub async fn run<E, S>(args: Args, env: E, sink: S, shutdown: Shutdown) -> Result<(), StartupError>
where
    E: EnvSource,
    S: StatusSink + Send + 'static,
{
    let config = load_config(args, &env)?;

    tracing::info!(
        app_name = %config.app_name,
        ports = ?config.ports,
        bind_host = %config.bind_host,
        "lattice-app starting"
    );

    if let Some(addr) = config.metrics_address {
        if let Err(e) = metrics::init_metrics(addr) {
            tracing::error!(metrics_address = %addr, error = %e, "Failed to start metrics exporter");
        }
    }

    let index = EnvIndexSource::new(&env).fetch_index();
    match &index {
        Ok(index) => tracing::debug!(index, "Instance index fetched"),
        Err(e) => tracing::warn!(error = %e, "Instance index unavailable"),
    }

    let server = HttpServer::new(AppState::new(AppInfo {
        name: config.app_name.clone(),
        message: config.message.clone(),
        index: index.clone(),
    }))?;

    let poller = IndexPoller::from_config(&config, index);
    let poller_task = tokio::spawn(poller.run(sink, shutdown.subscribe()));

    let supervisor = ListenerSupervisor::new(server, config.bind_host);
    let outcomes = supervisor.run(&config.ports, &shutdown).await;

    shutdown.trigger();
    if let Err(e) = poller_task.await {
        tracing::error!(error = %e, "Index poller task failed");
    }

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    tracing::info!(listeners = outcomes.len(), failed, "Shutting down lattice-app");
    Ok(())
}
