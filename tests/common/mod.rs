//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::io;
use std::net::{Ipv4Addr, SocketAddr, TcpListener as StdTcpListener};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use lattice_app::http::{AppInfo, AppState, HttpServer};
use lattice_app::index::IndexError;

/// Pick a currently unused localhost port.
pub fn free_port() -> u16 {
    StdTcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

/// Server for app "Foo" saying "Hi" with the given index.
pub fn test_server(index: Result<u32, IndexError>) -> HttpServer {
    HttpServer::new(AppState::new(AppInfo {
        name: "Foo".to_string(),
        message: "Hi".to_string(),
        index,
    }))
    .unwrap()
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

/// Poll `/health` on `addr` until it answers, panicking after ~5s.
pub async fn wait_until_serving(addr: SocketAddr) {
    let client = client();
    for _ in 0..100 {
        if let Ok(res) = client.get(format!("http://{}/health", addr)).send().await {
            if res.status().is_success() {
                return;
            }
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    panic!("listener on {} never became ready", addr);
}

/// Log output captured from a thread-scoped subscriber.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Capture every event on the current thread until the guard drops.
///
/// Pair with a current-thread runtime so spawned tasks log on the same thread.
pub fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    (logs, tracing::subscriber::set_default(subscriber))
}
