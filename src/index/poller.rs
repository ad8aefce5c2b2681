//! Periodic status reporting.
//!
//! # Responsibilities
//! - Render the status line from identity, message and the startup index
//! - Emit it once per second until shutdown

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{self, Instant};

use crate::config::AppConfig;
use crate::index::source::IndexError;
use crate::lifecycle::shutdown::ShutdownSignal;

/// Fixed tick period.
pub const TICK: Duration = Duration::from_secs(1);

/// One rendered tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    /// Normal status, written to stdout.
    Report(String),
    /// Startup fetch failed, written to stderr.
    Failure(String),
}

/// Destination for status lines.
pub trait StatusSink {
    fn emit(&mut self, line: StatusLine);
}

/// Writes reports to stdout and failures to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl StatusSink for ConsoleSink {
    fn emit(&mut self, line: StatusLine) {
        match line {
            StatusLine::Report(text) => println!("{}", text),
            StatusLine::Failure(text) => eprintln!("{}", text),
        }
    }
}

impl StatusSink for mpsc::UnboundedSender<StatusLine> {
    fn emit(&mut self, line: StatusLine) {
        let _ = self.send(line);
    }
}

/// Background ticker reporting the instance index.
pub struct IndexPoller {
    app_name: String,
    message: String,
    index: Result<u32, IndexError>,
}

impl IndexPoller {
    pub fn new(app_name: String, message: String, index: Result<u32, IndexError>) -> Self {
        Self {
            app_name,
            message,
            index,
        }
    }

    pub fn from_config(config: &AppConfig, index: Result<u32, IndexError>) -> Self {
        Self::new(config.app_name.clone(), config.message.clone(), index)
    }

    /// The line emitted on every tick.
    pub fn status(&self) -> StatusLine {
        match &self.index {
            Ok(index) => StatusLine::Report(format!(
                "{}. Says {}. on index: {}",
                self.app_name, self.message, index
            )),
            Err(e) => StatusLine::Failure(format!("Failed to fetch index: {}", e)),
        }
    }

    /// Tick until `shutdown` fires. The first line is emitted one period after start.
    pub async fn run<S: StatusSink>(self, mut sink: S, mut shutdown: ShutdownSignal) {
        tracing::debug!(period = ?TICK, "Index poller starting");

        let mut ticker = time::interval_at(Instant::now() + TICK, TICK);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    sink.emit(self.status());
                }
                _ = shutdown.recv() => {
                    tracing::debug!("Index poller received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::Shutdown;

    fn poller(index: Result<u32, IndexError>) -> IndexPoller {
        IndexPoller::new("Foo".to_string(), "Hi".to_string(), index)
    }

    #[test]
    fn test_status_line() {
        assert_eq!(
            poller(Ok(3)).status(),
            StatusLine::Report("Foo. Says Hi. on index: 3".to_string())
        );
        assert_eq!(
            poller(Err(IndexError::Missing)).status(),
            StatusLine::Failure(format!("Failed to fetch index: {}", IndexError::Missing))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_emits_report_every_second() {
        let shutdown = Shutdown::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let started = Instant::now();
        let handle = tokio::spawn(poller(Ok(3)).run(tx, shutdown.subscribe()));

        for tick in 1..=3u64 {
            let line = rx.recv().await.unwrap();
            assert_eq!(line, StatusLine::Report("Foo. Says Hi. on index: 3".to_string()));
            assert_eq!(started.elapsed().as_secs(), tick);
        }

        shutdown.trigger();
        handle.await.unwrap();
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_reported_every_tick() {
        let shutdown = Shutdown::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(poller(Err(IndexError::Missing)).run(tx, shutdown.subscribe()));

        for _ in 0..3 {
            match rx.recv().await.unwrap() {
                StatusLine::Failure(text) => assert!(text.starts_with("Failed to fetch index: ")),
                StatusLine::Report(text) => panic!("unexpected report {:?}", text),
            }
        }

        shutdown.trigger();
        handle.await.unwrap();
    }
}
