//! Listener supervision.
//!
//! # Responsibilities
//! - Start one independent listener task per resolved port
//! - Log each listener's terminal result against its port
//! - Block until every listener has stopped
//!
//! # Design Decisions
//! - Fork-join with unconditional join: no task is cancelled because a sibling failed
//! - Bind failures stay scoped to their port and are never escalated
//! - A panicked task is reported as a failure for its port

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;
use tokio::net::TcpListener;

use crate::http::HttpServer;
use crate::lifecycle::shutdown::{Shutdown, ShutdownSignal};
use crate::observability::metrics;

/// Error type for a single listener.
#[derive(Debug, Error)]
pub enum ListenerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),

    #[error("listener task aborted: {0}")]
    Task(String),
}

/// Terminal result of the listener on one port.
#[derive(Debug)]
pub struct ListenerOutcome {
    pub port: u16,
    pub result: Result<(), ListenerError>,
}

impl ListenerOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Runs the shared HTTP server on every port.
pub struct ListenerSupervisor {
    server: HttpServer,
    bind_host: IpAddr,
}

impl ListenerSupervisor {
    pub fn new(server: HttpServer, bind_host: IpAddr) -> Self {
        Self { server, bind_host }
    }

    /// Serve every port until each listener has terminated.
    ///
    /// Outcomes are returned in port order, one per entry of `ports`.
    pub async fn run(&self, ports: &[u16], shutdown: &Shutdown) -> Vec<ListenerOutcome> {
        let mut handles = Vec::with_capacity(ports.len());
        for &port in ports {
            let addr = SocketAddr::new(self.bind_host, port);
            let server = self.server.clone();
            let shutdown_rx = shutdown.subscribe();
            handles.push((port, tokio::spawn(run_listener(addr, server, shutdown_rx))));
        }

        tracing::debug!(listeners = handles.len(), "Waiting for listeners");

        let mut outcomes = Vec::with_capacity(handles.len());
        for (port, handle) in handles {
            let result = match handle.await {
                Ok(result) => result,
                Err(e) => {
                    let error = ListenerError::Task(e.to_string());
                    tracing::error!(port, error = %error, "Shutting down server");
                    metrics::record_listener_exit(port, false);
                    Err(error)
                }
            };
            outcomes.push(ListenerOutcome { port, result });
        }
        outcomes
    }
}

async fn run_listener(
    addr: SocketAddr,
    server: HttpServer,
    shutdown: ShutdownSignal,
) -> Result<(), ListenerError> {
    let port = addr.port();

    let result = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!(port, address = %addr, "Listener up");
            metrics::record_listener_up(port);
            server.run(listener, shutdown).await.map_err(ListenerError::Serve)
        }
        Err(source) => Err(ListenerError::Bind { addr, source }),
    };

    match &result {
        Ok(()) => tracing::info!(port, "Shutting down server"),
        Err(e) => tracing::error!(port, error = %e, "Shutting down server"),
    }
    metrics::record_listener_exit(port, result.is_ok());

    result
}
