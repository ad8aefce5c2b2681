//! End-to-end startup and shutdown of the whole app.

use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr, TcpListener as StdTcpListener};
use std::time::Duration;

use lattice_app::config::{Args, ConfigError};
use lattice_app::index::StatusLine;
use lattice_app::lifecycle::{self, Shutdown, StartupError};
use tokio::sync::mpsc;

mod common;

const LOCALHOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

fn has_port_field(line: &str, port: u16) -> bool {
    let field = format!("port={}", port);
    line.ends_with(&field) || line.contains(&format!("{} ", field))
}

#[tokio::test]
async fn test_one_failed_port_still_reaches_final_shutdown() {
    let (logs, _guard) = common::capture_logs();

    let occupied = StdTcpListener::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
    let busy_port = occupied.local_addr().unwrap().port();
    let free_port = common::free_port();

    let env: HashMap<&str, &str> = [("APP_NAME", "Foo"), ("CF_INSTANCE_INDEX", "3")]
        .into_iter()
        .collect();
    let args = Args {
        ports: format!("{}, {}", busy_port, free_port),
        message: "Hi".to_string(),
        bind_host: LOCALHOST,
        ..Args::default()
    };

    let shutdown = Shutdown::new();
    let (tx, mut rx) = mpsc::unbounded_channel::<StatusLine>();
    let handle = tokio::spawn(lifecycle::run(args, env, tx, shutdown.clone()));

    common::wait_until_serving(SocketAddr::new(LOCALHOST, free_port)).await;
    assert!(!handle.is_finished(), "run must wait for the healthy listener");

    shutdown.trigger();
    let result = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("run did not return after shutdown")
        .unwrap();
    assert!(result.is_ok());

    // The poller owns the sender; a closed channel means it stopped.
    tokio::time::timeout(Duration::from_secs(1), async {
        while let Some(line) = rx.recv().await {
            assert_eq!(line, StatusLine::Report("Foo. Says Hi. on index: 3".to_string()));
        }
    })
    .await
    .expect("poller kept running after the join");

    let logs = logs.contents();
    let exits: Vec<&str> = logs
        .lines()
        .filter(|line| line.contains("Shutting down server"))
        .collect();
    assert!(
        exits.iter().any(|l| has_port_field(l, busy_port) && l.contains("ERROR")),
        "missing bind failure for {}: {}",
        busy_port,
        logs
    );
    assert!(
        exits.iter().any(|l| has_port_field(l, free_port) && l.contains("INFO")),
        "missing clean exit for {}: {}",
        free_port,
        logs
    );
    assert!(logs.lines().any(|l| l.contains("Listener up") && has_port_field(l, free_port)));

    let final_line = logs
        .lines()
        .collect::<Vec<_>>()
        .iter()
        .rposition(|l| l.contains("Shutting down lattice-app"))
        .expect("final shutdown line");
    let last_exit = logs
        .lines()
        .collect::<Vec<_>>()
        .iter()
        .rposition(|l| l.contains("Shutting down server"))
        .unwrap();
    assert!(final_line > last_exit);

    drop(occupied);
}

#[tokio::test]
async fn test_invalid_port_fails_before_binding() {
    let env: HashMap<&str, &str> = [("PORT", "abc")].into_iter().collect();
    let shutdown = Shutdown::new();
    let (tx, _rx) = mpsc::unbounded_channel::<StatusLine>();

    let result = lifecycle::run(Args::default(), env, tx, shutdown.clone()).await;

    match result {
        Err(StartupError::Config(ConfigError::InvalidPort { position, value })) => {
            assert_eq!(position, 0);
            assert_eq!(value, "abc");
        }
        other => panic!("expected invalid port, got {:?}", other),
    }
    assert_eq!(shutdown.receiver_count(), 0, "no listener or poller may subscribe");
}

#[tokio::test]
async fn test_shutdown_requested_before_start_is_honoured() {
    let free_port = common::free_port();
    let args = Args {
        ports: free_port.to_string(),
        bind_host: LOCALHOST,
        ..Args::default()
    };
    let env: HashMap<&str, &str> = HashMap::new();

    let shutdown = Shutdown::new();
    shutdown.trigger();

    let (tx, _rx) = mpsc::unbounded_channel::<StatusLine>();
    let result = tokio::time::timeout(
        Duration::from_secs(5),
        lifecycle::run(args, env, tx, shutdown),
    )
    .await
    .expect("an earlier shutdown request must stop the listeners");
    assert!(result.is_ok());
}
