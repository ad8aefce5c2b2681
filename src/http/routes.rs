//! Static route table and router construction.
//!
//! # Responsibilities
//! - Declare every route the app serves (name, method, path)
//! - Validate the table before handing it to axum
//! - Bind each route name to its handler
//!
//! # Design Decisions
//! - Construction is fallible so a bad table stops startup instead of panicking
//! - Paths must be unique; one handler per path

use std::collections::HashSet;

use axum::{
    http::Method,
    routing::{on, MethodFilter, MethodRouter},
    Router,
};
use thiserror::Error;

use crate::http::handlers;
use crate::http::server::AppState;

pub const HELLO: &str = "hello";
pub const ENV: &str = "env";
pub const INDEX: &str = "index";
pub const HEALTH: &str = "health";

/// One entry of the route table.
#[derive(Debug, Clone)]
pub struct Route {
    pub name: &'static str,
    pub method: Method,
    pub path: &'static str,
}

/// Routes served on every port.
pub static ROUTES: [Route; 4] = [
    Route { name: HELLO, method: Method::GET, path: "/" },
    Route { name: ENV, method: Method::GET, path: "/env" },
    Route { name: INDEX, method: Method::GET, path: "/index" },
    Route { name: HEALTH, method: Method::GET, path: "/health" },
];

/// Error type for router construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    #[error("route {name:?}: path {path:?} must start with '/'")]
    InvalidPath { name: String, path: String },

    #[error("route {name:?} is declared more than once")]
    DuplicateName { name: String },

    #[error("path {path:?} is declared more than once")]
    DuplicatePath { path: String },

    #[error("route {name:?} has unsupported method {method}")]
    UnsupportedMethod { name: String, method: Method },

    #[error("no handler for route {name:?}")]
    UnknownHandler { name: String },
}

/// Build the axum router for `routes`.
pub fn build_router(routes: &[Route], state: AppState) -> Result<Router, RouterError> {
    let mut names = HashSet::new();
    let mut paths = HashSet::new();
    let mut router = Router::new();

    for route in routes {
        if !route.path.starts_with('/') {
            return Err(RouterError::InvalidPath {
                name: route.name.to_string(),
                path: route.path.to_string(),
            });
        }
        if !names.insert(route.name) {
            return Err(RouterError::DuplicateName {
                name: route.name.to_string(),
            });
        }
        if !paths.insert(route.path) {
            return Err(RouterError::DuplicatePath {
                path: route.path.to_string(),
            });
        }

        let filter = MethodFilter::try_from(route.method.clone()).map_err(|_| {
            RouterError::UnsupportedMethod {
                name: route.name.to_string(),
                method: route.method.clone(),
            }
        })?;
        let method_router = handler_for(route.name, filter).ok_or_else(|| RouterError::UnknownHandler {
            name: route.name.to_string(),
        })?;

        tracing::debug!(name = route.name, method = %route.method, path = route.path, "Route registered");
        router = router.route(route.path, method_router);
    }

    Ok(router.with_state(state))
}

fn handler_for(name: &str, filter: MethodFilter) -> Option<MethodRouter<AppState>> {
    let method_router = match name {
        HELLO => on(filter, handlers::hello),
        ENV => on(filter, handlers::env),
        INDEX => on(filter, handlers::index),
        HEALTH => on(filter, handlers::health),
        _ => return None,
    };
    Some(method_router)
}
