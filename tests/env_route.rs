//! `/env` against a process environment holding non-unicode data.

#![cfg(unix)]

use std::ffi::OsString;
use std::net::Ipv4Addr;
use std::os::unix::ffi::OsStringExt;

use axum::http::StatusCode;
use lattice_app::lifecycle::Shutdown;
use tokio::net::TcpListener;

mod common;

#[tokio::test]
async fn test_env_route_survives_non_unicode_variable() {
    std::env::set_var("LATTICE_NON_UNICODE", OsString::from_vec(b"f\xffo".to_vec()));

    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let handle = tokio::spawn(common::test_server(Ok(0)).run(listener, shutdown.subscribe()));

    let res = common::client().get(format!("http://{}/env", addr)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let env: serde_json::Value = res.json().await.unwrap();
    assert_eq!(env["LATTICE_NON_UNICODE"], "f\u{fffd}o");

    shutdown.trigger();
    handle.await.unwrap().unwrap();
}
