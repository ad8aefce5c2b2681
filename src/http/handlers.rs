//! Route handlers reporting app identity and health.

use std::collections::BTreeMap;
use std::ffi::OsString;

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::http::server::AppState;

#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub name: String,
    pub message: String,
    pub index: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn hello(State(state): State<AppState>) -> Json<HelloResponse> {
    let info = &state.info;
    Json(HelloResponse {
        name: info.name.clone(),
        message: info.message.clone(),
        index: info.index.as_ref().ok().copied(),
    })
}

/// Environment as seen by this instance, keys sorted.
pub async fn env() -> Json<BTreeMap<String, String>> {
    Json(env_map(std::env::vars_os()))
}

/// Non-unicode keys and values are rendered lossily rather than dropped.
pub fn env_map(vars: impl IntoIterator<Item = (OsString, OsString)>) -> BTreeMap<String, String> {
    vars.into_iter()
        .map(|(key, value)| {
            (
                key.to_string_lossy().into_owned(),
                value.to_string_lossy().into_owned(),
            )
        })
        .collect()
}

pub async fn index(State(state): State<AppState>) -> Result<String, (StatusCode, String)> {
    match &state.info.index {
        Ok(index) => Ok(index.to_string()),
        Err(e) => {
            tracing::warn!(error = %e, "Index requested but unavailable");
            Err((StatusCode::SERVICE_UNAVAILABLE, e.to_string()))
        }
    }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
