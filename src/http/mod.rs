//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! Bound listener (one per port)
//!     → server.rs (axum serve, middleware)
//!     → request.rs (assign / propagate x-request-id)
//!     → routes.rs (static route table)
//!     → handlers.rs (identity, env, index, health)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod routes;
pub mod server;

pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use routes::{build_router, Route, RouterError, ROUTES};
pub use server::{AppInfo, AppState, HttpServer};
