//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build the routed handler set from the static route table
//! - Wire up middleware (request ID, tracing, metrics)
//! - Serve one bound listener until it fails or shutdown is signalled

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Body,
    extract::Request,
    http,
    middleware::{self, Next},
    response::Response,
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::http::request::{propagate_request_id_layer, request_id, set_request_id_layer};
use crate::http::routes::{build_router, Route, RouterError, ROUTES};
use crate::index::IndexError;
use crate::lifecycle::shutdown::ShutdownSignal;
use crate::observability::metrics;

/// Identity reported by the handlers. Set once at startup.
#[derive(Debug)]
pub struct AppInfo {
    pub name: String,
    pub message: String,
    pub index: Result<u32, IndexError>,
}

/// Application state injected into handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub info: Arc<AppInfo>,
}

impl AppState {
    pub fn new(info: AppInfo) -> Self {
        Self {
            info: Arc::new(info),
        }
    }
}

/// HTTP server shared by every listener.
///
/// Cloning is cheap; all clones dispatch through the same routes and state.
#[derive(Clone)]
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a server for the default route table.
    pub fn new(state: AppState) -> Result<Self, RouterError> {
        Self::with_routes(&ROUTES, state)
    }

    /// Create a server for a custom route table.
    pub fn with_routes(routes: &[Route], state: AppState) -> Result<Self, RouterError> {
        let router = build_router(routes, state)?;
        Ok(Self {
            router: Self::with_middleware(router),
        })
    }

    fn with_middleware(router: Router) -> Router {
        router.layer(
            ServiceBuilder::new()
                .layer(set_request_id_layer())
                .layer(TraceLayer::new_for_http().make_span_with(|request: &http::Request<Body>| {
                    tracing::debug_span!(
                        "request",
                        method = %request.method(),
                        path = %request.uri().path(),
                        request_id = %request_id(request),
                    )
                }))
                .layer(propagate_request_id_layer())
                .layer(middleware::from_fn(track_metrics)),
        )
    }

    /// Serve `listener` until the server fails or `shutdown` fires.
    ///
    /// In-flight connections are not drained on shutdown.
    pub async fn run(self, listener: TcpListener, mut shutdown: ShutdownSignal) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::debug!(address = %addr, "HTTP server starting");

        tokio::select! {
            result = axum::serve(listener, self.router).into_future() => result?,
            _ = shutdown.recv() => {
                tracing::debug!(address = %addr, "HTTP server received shutdown signal");
            }
        }

        tracing::debug!(address = %addr, "HTTP server stopped");
        Ok(())
    }
}

async fn track_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();

    let response = next.run(request).await;

    metrics::record_request(&method, response.status().as_u16(), start);
    response
}
